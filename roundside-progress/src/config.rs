//! Flat configuration for a progress bar.
//!
//! ## Usage
//!
//! Build a [`BarConfig`] from defaults and the generated setters, then hand
//! it to [`ProgressBar::new`](crate::ProgressBar::new).
//!
//! ```
//! use roundside_progress::{BarConfig, Color, DividerConfig, Dp, Orientation};
//!
//! let config = BarConfig::default()
//!     .orientation(Orientation::Vertical)
//!     .outline_width(Dp(2.0))
//!     .progress_color(Color::from_argb(0xFF2196F3))
//!     .divider(Some(DividerConfig::default().count(4)));
//! assert!(config.validate().is_ok());
//! ```

use std::time::Duration;

use derive_setters::Setters;

use crate::{
    Color,
    dp::Dp,
    error::{ProgressBarError, Result},
};

/// Default preferred length of the bar's long axis.
pub const DEFAULT_WIDTH: Dp = Dp(250.0);
/// Default preferred thickness of the bar.
pub const DEFAULT_HEIGHT: Dp = Dp(50.0);
/// Time a full `0 -> max_progress` transition takes.
pub const DEFAULT_ANIMATION_SPEED: Duration = Duration::from_millis(1500);

/// Default fill color (`0xFF4CAF50`).
pub const DEFAULT_PROGRESS_COLOR: Color = Color::new(0.298_039_2, 0.686_274_5, 0.313_725_5, 1.0);
/// Default outline color (`0xFF212121`).
pub const DEFAULT_OUTLINE_COLOR: Color = Color::new(0.129_411_77, 0.129_411_77, 0.129_411_77, 1.0);
/// Default track color (`0xFFE0E0E0`).
pub const DEFAULT_TRACK_COLOR: Color = Color::new(0.878_431_4, 0.878_431_4, 0.878_431_4, 1.0);
/// Default divider color (opaque white).
pub const DEFAULT_DIVIDER_COLOR: Color = Color::WHITE;

/// The bar's long axis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i32", into = "i32")
)]
pub enum Orientation {
    /// Fills left to right.
    #[default]
    Horizontal,
    /// Fills bottom to top.
    Vertical,
}

impl Orientation {
    /// Code used by declarative attribute sets for a horizontal bar.
    pub const HORIZONTAL_CODE: i32 = 0;
    /// Code used by declarative attribute sets for a vertical bar.
    pub const VERTICAL_CODE: i32 = 1;
}

impl TryFrom<i32> for Orientation {
    type Error = ProgressBarError;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            Self::HORIZONTAL_CODE => Ok(Self::Horizontal),
            Self::VERTICAL_CODE => Ok(Self::Vertical),
            other => Err(ProgressBarError::invalid(
                "orientation",
                other,
                "must be horizontal (0) or vertical (1)",
            )),
        }
    }
}

impl From<Orientation> for i32 {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => Orientation::HORIZONTAL_CODE,
            Orientation::Vertical => Orientation::VERTICAL_CODE,
        }
    }
}

/// Space between the measured bounds and the outline, per side.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    /// Left padding.
    pub left: Dp,
    /// Top padding.
    pub top: Dp,
    /// Right padding.
    pub right: Dp,
    /// Bottom padding.
    pub bottom: Dp,
}

impl Padding {
    /// No padding.
    pub const ZERO: Self = Self::uniform(Dp::ZERO);

    /// Creates a padding from the four sides.
    pub const fn new(left: Dp, top: Dp, right: Dp, bottom: Dp) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The same padding on every side.
    pub const fn uniform(value: Dp) -> Self {
        Self::new(value, value, value, value)
    }

    /// `left + right` in physical pixels.
    pub fn horizontal_px(&self) -> f32 {
        self.left.to_pixels_f32() + self.right.to_pixels_f32()
    }

    /// `top + bottom` in physical pixels.
    pub fn vertical_px(&self) -> f32 {
        self.top.to_pixels_f32() + self.bottom.to_pixels_f32()
    }
}

/// Configuration of the divided variant.
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DividerConfig {
    /// Number of gaps cut into the bar. Zero or negative draws none.
    pub count: i32,
    /// Width of each gap along the progress axis.
    pub width: Dp,
    /// Color painted into the gaps, usually the background behind the bar.
    pub color: Color,
}

impl Default for DividerConfig {
    fn default() -> Self {
        Self {
            count: 3,
            width: Dp(4.0),
            color: DEFAULT_DIVIDER_COLOR,
        }
    }
}

/// Everything about a bar except its progress values.
///
/// Resolved once by the host and passed by value; later changes go through
/// the setters on [`ProgressBar`](crate::ProgressBar) so the bar can report
/// what needs to be redone.
#[derive(Debug, Clone, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BarConfig {
    /// Long axis of the bar.
    pub orientation: Orientation,
    /// Preferred long-axis length when the parent does not fix it.
    pub default_width: Dp,
    /// Preferred thickness when the parent does not fix it.
    pub default_height: Dp,
    /// Padding around the outline.
    pub padding: Padding,
    /// Outline stroke width; zero disables the outline.
    pub outline_width: Dp,
    /// Outline stroke color.
    pub outline_color: Color,
    /// Color of the filled portion.
    pub progress_color: Color,
    /// Color of the unfilled track.
    pub track_color: Color,
    /// Duration of a full `0 -> max_progress` animation.
    pub animation_speed: Duration,
    /// Divided variant, when enabled.
    pub divider: Option<DividerConfig>,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            default_width: DEFAULT_WIDTH,
            default_height: DEFAULT_HEIGHT,
            padding: Padding::ZERO,
            outline_width: Dp::ZERO,
            outline_color: DEFAULT_OUTLINE_COLOR,
            progress_color: DEFAULT_PROGRESS_COLOR,
            track_color: DEFAULT_TRACK_COLOR,
            animation_speed: DEFAULT_ANIMATION_SPEED,
            divider: None,
        }
    }
}

impl BarConfig {
    /// Checks the values a bar cannot be created with.
    pub fn validate(&self) -> Result<()> {
        validate_outline_width(self.outline_width)
    }

    /// Outline width in physical pixels.
    pub(crate) fn outline_px(&self) -> f32 {
        self.outline_width.to_pixels_f32()
    }
}

pub(crate) fn validate_outline_width(width: Dp) -> Result<()> {
    if width.0.is_nan() || width.0 < 0.0 {
        return Err(ProgressBarError::invalid(
            "outline_width",
            width.0,
            "must not be negative",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_codes_round_trip() {
        assert_eq!(Orientation::try_from(0).ok(), Some(Orientation::Horizontal));
        assert_eq!(Orientation::try_from(1).ok(), Some(Orientation::Vertical));
        assert_eq!(i32::from(Orientation::Vertical), 1);
    }

    #[test]
    fn unknown_orientation_code_is_rejected() {
        let err = Orientation::try_from(2).unwrap_err();
        assert_eq!(err.field(), Some("orientation"));
    }

    #[test]
    fn negative_outline_width_is_rejected() {
        let config = BarConfig::default().outline_width(Dp(-1.0));
        let err = config.validate().unwrap_err();
        assert_eq!(err.field(), Some("outline_width"));
    }

    #[test]
    fn nan_outline_width_is_rejected() {
        let config = BarConfig::default().outline_width(Dp(f64::NAN));
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_colors_match_packed_values() {
        assert_eq!(DEFAULT_PROGRESS_COLOR.to_argb(), 0xFF4CAF50);
        assert_eq!(DEFAULT_OUTLINE_COLOR.to_argb(), 0xFF212121);
        assert_eq!(DEFAULT_TRACK_COLOR.to_argb(), 0xFFE0E0E0);
    }

    #[test]
    fn padding_sums_per_axis() {
        let padding = Padding::new(Dp(1.0), Dp(2.0), Dp(3.0), Dp(4.0));
        assert_eq!(padding.horizontal_px(), 4.0);
        assert_eq!(padding.vertical_px(), 6.0);
    }
}
