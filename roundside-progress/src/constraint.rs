//! # Measurement constraints
//!
//! The host's layout pass hands the bar one [`MeasureSpec`] per axis. Each
//! spec pairs a size with a [`MeasureMode`] telling the bar how binding that
//! size is:
//!
//! - [`MeasureMode::Exact`]: the parent already decided the size.
//! - [`MeasureMode::AtMost`]: the bar may pick its preferred size, capped by
//!   the given size.
//! - [`MeasureMode::Unspecified`]: the bar picks its preferred size freely.
//!
//! ```
//! use roundside_progress::{Constraint, MeasureSpec, Px};
//!
//! let constraint = Constraint::new(MeasureSpec::exact(Px(300)), MeasureSpec::at_most(Px(80)));
//! assert_eq!(constraint.width.size, Px(300));
//! ```

use crate::px::Px;

/// How binding a [`MeasureSpec`] size is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureMode {
    /// The size is fixed by the parent.
    Exact,
    /// The size is an upper bound.
    AtMost,
    /// No constraint; the size is ignored.
    Unspecified,
}

/// A size constraint for a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeasureSpec {
    /// How to interpret `size`.
    pub mode: MeasureMode,
    /// Size in physical pixels.
    pub size: Px,
}

impl MeasureSpec {
    /// An exact size.
    pub const fn exact(size: Px) -> Self {
        Self {
            mode: MeasureMode::Exact,
            size,
        }
    }

    /// An upper bound.
    pub const fn at_most(size: Px) -> Self {
        Self {
            mode: MeasureMode::AtMost,
            size,
        }
    }

    /// No constraint.
    pub const fn unspecified() -> Self {
        Self {
            mode: MeasureMode::Unspecified,
            size: Px::ZERO,
        }
    }
}

/// Width and height constraints for one measurement pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constraint {
    /// Constraint on the horizontal axis.
    pub width: MeasureSpec,
    /// Constraint on the vertical axis.
    pub height: MeasureSpec,
}

impl Constraint {
    /// Both axes unconstrained.
    pub const NONE: Self = Self {
        width: MeasureSpec::unspecified(),
        height: MeasureSpec::unspecified(),
    };

    /// Creates a new constraint.
    pub const fn new(width: MeasureSpec, height: MeasureSpec) -> Self {
        Self { width, height }
    }

    /// Both axes fixed to the given size.
    pub const fn exact(width: Px, height: Px) -> Self {
        Self::new(MeasureSpec::exact(width), MeasureSpec::exact(height))
    }
}

impl Default for Constraint {
    fn default() -> Self {
        Self::NONE
    }
}
