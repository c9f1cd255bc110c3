//! # Density-Independent Pixels (Dp)
//!
//! Bar dimensions (default sizes, paddings, outline and divider widths) are
//! authored in [`Dp`] and converted to physical pixels when the bar is
//! measured. The conversion goes through the process-wide [`SCALE_FACTOR`],
//! which hosts set once from the display density.
//!
//! ```
//! use roundside_progress::Dp;
//!
//! let outline = Dp(2.0);
//! // With no scale factor installed, 1 dp == 1 px.
//! assert_eq!(outline.to_pixels_f32(), 2.0);
//! ```

use std::sync::OnceLock;

use parking_lot::RwLock;

/// Global scale factor for converting between density-independent pixels and
/// physical pixels.
///
/// A value of `2.0` means one dp covers two physical pixels. When the factor
/// was never set, conversions use `1.0`.
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

/// Returns the current scale factor, or `1.0` when none was installed.
pub fn scale_factor() -> f64 {
    SCALE_FACTOR.get().map(|lock| *lock.read()).unwrap_or(1.0)
}

/// Installs (or replaces) the global scale factor.
pub fn set_scale_factor(factor: f64) {
    let lock = SCALE_FACTOR.get_or_init(|| RwLock::new(factor));
    *lock.write() = factor;
}

/// Density-independent pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dp(pub f64);

impl Dp {
    /// Zero dp.
    pub const ZERO: Self = Self(0.0);

    /// Converts to physical pixels as `f64`.
    pub fn to_pixels_f64(&self) -> f64 {
        self.0 * scale_factor()
    }

    /// Converts to physical pixels as `f32`.
    ///
    /// Layout and drawing work in `f32`, so this is the conversion used by
    /// the measurement pass.
    pub fn to_pixels_f32(&self) -> f32 {
        self.to_pixels_f64() as f32
    }
}
