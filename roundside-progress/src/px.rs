//! Physical pixel values used by the measurement protocol.
//!
//! Measured sizes are whole pixels ([`Px`]); everything drawn inside the bar
//! is positioned with `f32` coordinates.

/// A whole number of physical pixels. Negative values are allowed.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// Returns the raw value.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Converts to `f32`.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Converts from `f32`, truncating toward zero and saturating at the
    /// `i32` bounds.
    ///
    /// ```
    /// use roundside_progress::Px;
    ///
    /// assert_eq!(Px::saturating_from_f32(42.7), Px(42));
    /// assert_eq!(Px::saturating_from_f32(f32::MAX), Px(i32::MAX));
    /// ```
    pub fn saturating_from_f32(value: f32) -> Self {
        let clamped_value = value.clamp(i32::MIN as f32, i32::MAX as f32);
        Px(clamped_value as i32)
    }
}

/// A width/height pair in physical pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxSize {
    /// Width in pixels.
    pub width: Px,
    /// Height in pixels.
    pub height: Px,
}

impl PxSize {
    /// Creates a new size.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }
}
