//! Colors.

use bytemuck::{Pod, Zeroable};

/// A color in the sRGB color space with an alpha component.
///
/// Values are stored as `f32`s in the range `[0.0, 1.0]`. Declarative
/// configuration usually carries colors as packed `0xAARRGGBB` integers; see
/// [`Color::from_argb`].
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component.
    pub a: f32,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a new `Color` from four `f32` values (red, green, blue, alpha).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new `Color` from four `u8` values (red, green, blue, alpha).
    #[inline]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Creates a `Color` from a packed `0xAARRGGBB` value.
    ///
    /// ```
    /// use roundside_progress::Color;
    ///
    /// let green = Color::from_argb(0xFF4CAF50);
    /// assert_eq!(green.to_rgba_u8(), [0x4C, 0xAF, 0x50, 0xFF]);
    /// ```
    #[inline]
    pub fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::from_rgba_u8(r, g, b, a)
    }

    /// Packs the color into `0xAARRGGBB`.
    pub fn to_argb(self) -> u32 {
        let [r, g, b, a] = self.to_rgba_u8();
        u32::from_be_bytes([a, r, g, b])
    }

    /// Converts the color to `[r, g, b, a]` bytes, rounding each channel.
    pub fn to_rgba_u8(self) -> [u8; 4] {
        fn channel(value: f32) -> u8 {
            (value.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [self.r, self.g, self.b, self.a].map(channel)
    }

    /// Returns the same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// The default color is fully transparent.
impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl From<u32> for Color {
    #[inline]
    fn from(argb: u32) -> Self {
        Self::from_argb(argb)
    }
}
