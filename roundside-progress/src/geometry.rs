//! Measurement and layout rectangles.
//!
//! [`measure`] resolves the host's [`Constraint`] into the bar's full size
//! and the size of its interior, and [`BarLayout::resolve`] turns that into
//! the two rectangles everything else draws against: the interior (track and
//! fill) and the outline stroke's centerline.

use crate::{
    config::{BarConfig, Orientation},
    constraint::{Constraint, MeasureMode, MeasureSpec},
    px::{Px, PxSize},
};

/// An axis-aligned rectangle in `f32` pixel coordinates.
///
/// Unlike a size-based rectangle this may be inverted (`right < left`),
/// which is how conflicting padding/outline settings show up; see
/// [`RectF::has_negative_extent`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RectF {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Right edge.
    pub right: f32,
    /// Bottom edge.
    pub bottom: f32,
}

impl RectF {
    /// Creates a rectangle from its four edges.
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// `right - left`, negative when inverted.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// `bottom - top`, negative when inverted.
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Extent along the progress axis of `orientation`.
    pub fn extent_along(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.width(),
            Orientation::Vertical => self.height(),
        }
    }

    /// True when either axis is inverted. Zero-sized rectangles are valid.
    pub fn has_negative_extent(&self) -> bool {
        self.width() < 0.0 || self.height() < 0.0
    }

    /// True when the rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// The overlap of two rectangles. The result is empty (possibly
    /// inverted) when they do not overlap.
    pub fn intersect(&self, other: &RectF) -> RectF {
        RectF::new(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        )
    }

    /// Splits the rectangle at `length` along the progress axis.
    ///
    /// Returns `(filled, remainder)`. Horizontal bars fill from the left
    /// edge, vertical bars from the bottom edge.
    pub fn split_along(&self, orientation: Orientation, length: f32) -> (RectF, RectF) {
        match orientation {
            Orientation::Horizontal => {
                let split = self.left + length;
                (
                    RectF::new(self.left, self.top, split, self.bottom),
                    RectF::new(split, self.top, self.right, self.bottom),
                )
            }
            Orientation::Vertical => {
                let split = self.bottom - length;
                (
                    RectF::new(self.left, split, self.right, self.bottom),
                    RectF::new(self.left, self.top, self.right, split),
                )
            }
        }
    }
}

/// Result of one measurement pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Measured width reported back to the host.
    pub full_width: Px,
    /// Measured height reported back to the host.
    pub full_height: Px,
    /// Interior width: the full width minus padding and twice the outline.
    pub view_width: f32,
    /// Interior height: the full height minus padding and twice the outline.
    pub view_height: f32,
}

impl Measurement {
    /// The measured size to hand back to the host.
    pub fn full_size(&self) -> PxSize {
        PxSize::new(self.full_width, self.full_height)
    }
}

/// Measures the bar for the given constraints.
///
/// Each axis is resolved independently. Under [`MeasureMode::AtMost`] the
/// preferred size depends on orientation: a horizontal bar prefers
/// `default_width x default_height`, a vertical bar prefers
/// `default_height x default_width`. Without any constraint the bar always
/// reports `default_width x default_height`, whatever its orientation.
///
/// Padding and `2 x outline_width` are added on top of the preferred
/// interior size and subtracted from imposed sizes, so the outline straddles
/// the interior boundary.
pub fn measure(constraint: Constraint, config: &BarConfig) -> Measurement {
    let outline = config.outline_px();
    let default_width = config.default_width.to_pixels_f32();
    let default_height = config.default_height.to_pixels_f32();

    let (width_cap, height_cap) = match config.orientation {
        Orientation::Horizontal => (default_width, default_height),
        Orientation::Vertical => (default_height, default_width),
    };

    let (full_width, view_width) = measure_axis(
        constraint.width,
        width_cap,
        default_width,
        config.padding.horizontal_px() + outline * 2.0,
    );
    let (full_height, view_height) = measure_axis(
        constraint.height,
        height_cap,
        default_height,
        config.padding.vertical_px() + outline * 2.0,
    );

    Measurement {
        full_width,
        full_height,
        view_width,
        view_height,
    }
}

fn measure_axis(spec: MeasureSpec, preferred: f32, unconstrained: f32, insets: f32) -> (Px, f32) {
    match spec.mode {
        MeasureMode::Exact => (spec.size, spec.size.to_f32() - insets),
        MeasureMode::AtMost => {
            let full = Px::saturating_from_f32((preferred + insets).min(spec.size.to_f32()));
            (full, full.to_f32() - insets)
        }
        MeasureMode::Unspecified => (
            Px::saturating_from_f32(unconstrained + insets),
            unconstrained,
        ),
    }
}

/// Pixel rectangles derived from a [`Measurement`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    /// Region holding the track and the fill.
    pub interior: RectF,
    /// Centerline rectangle of the outline stroke.
    pub outline: RectF,
}

impl BarLayout {
    /// Offsets the measured interior by padding and outline width.
    ///
    /// The outline rectangle sits `0.55 x outline` inside the padded bounds
    /// on the leading edges and `1.45 x outline` past the interior size on
    /// the trailing edges, leaving a slight overlap with the fill so no seam
    /// shows through anti-aliasing.
    pub fn resolve(measurement: &Measurement, config: &BarConfig) -> Self {
        let outline = config.outline_px();
        let left = config.padding.left.to_pixels_f32();
        let top = config.padding.top.to_pixels_f32();

        let interior = RectF::new(
            left + outline,
            top + outline,
            measurement.view_width + left + outline,
            measurement.view_height + top + outline,
        );
        let outline = RectF::new(
            left + outline * 0.55,
            top + outline * 0.55,
            measurement.view_width + left + outline * 1.45,
            measurement.view_height + top + outline * 1.45,
        );

        Self { interior, outline }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Padding, dp::Dp};

    fn vertical() -> BarConfig {
        BarConfig::default().orientation(Orientation::Vertical)
    }

    #[test]
    fn exact_width_is_taken_verbatim() {
        for config in [BarConfig::default(), vertical()] {
            let constraint =
                Constraint::new(MeasureSpec::exact(Px(300)), MeasureSpec::unspecified());
            let measurement = measure(constraint, &config);
            assert_eq!(measurement.full_width, Px(300));
            assert_eq!(measurement.view_width, 300.0);
        }
    }

    #[test]
    fn unconstrained_uses_defaults_for_both_orientations() {
        for config in [BarConfig::default(), vertical()] {
            let measurement = measure(Constraint::NONE, &config);
            assert_eq!(measurement.full_size(), PxSize::new(Px(250), Px(50)));
            assert_eq!(measurement.view_width, 250.0);
            assert_eq!(measurement.view_height, 50.0);
        }
    }

    #[test]
    fn at_most_swaps_preferred_sizes_for_vertical_bars() {
        let constraint = Constraint::new(
            MeasureSpec::at_most(Px(1000)),
            MeasureSpec::at_most(Px(1000)),
        );

        let horizontal = measure(constraint, &BarConfig::default());
        assert_eq!(horizontal.full_size(), PxSize::new(Px(250), Px(50)));

        let vertical = measure(constraint, &vertical());
        assert_eq!(vertical.full_size(), PxSize::new(Px(50), Px(250)));
    }

    #[test]
    fn at_most_caps_the_preferred_size() {
        let config = BarConfig::default().outline_width(Dp(2.0));
        let constraint =
            Constraint::new(MeasureSpec::at_most(Px(100)), MeasureSpec::at_most(Px(100)));
        let measurement = measure(constraint, &config);
        assert_eq!(measurement.full_width, Px(100));
        assert_eq!(measurement.view_width, 96.0);
        assert_eq!(measurement.full_height, Px(54));
        assert_eq!(measurement.view_height, 50.0);
    }

    #[test]
    fn padding_and_outline_are_subtracted_from_exact_sizes() {
        let config = BarConfig::default()
            .padding(Padding::new(Dp(5.0), Dp(3.0), Dp(7.0), Dp(1.0)))
            .outline_width(Dp(4.0));
        let measurement = measure(Constraint::exact(Px(200), Px(40)), &config);
        assert_eq!(measurement.view_width, 200.0 - 12.0 - 8.0);
        assert_eq!(measurement.view_height, 40.0 - 4.0 - 8.0);
    }

    #[test]
    fn measure_is_idempotent() {
        let config = BarConfig::default()
            .padding(Padding::uniform(Dp(3.0)))
            .outline_width(Dp(1.5));
        let constraint = Constraint::new(MeasureSpec::at_most(Px(180)), MeasureSpec::unspecified());
        assert_eq!(measure(constraint, &config), measure(constraint, &config));
    }

    #[test]
    fn layout_offsets_interior_and_outline() {
        let config = BarConfig::default()
            .padding(Padding::uniform(Dp(10.0)))
            .outline_width(Dp(4.0));
        let measurement = measure(Constraint::NONE, &config);
        let layout = BarLayout::resolve(&measurement, &config);

        assert_eq!(layout.interior, RectF::new(14.0, 14.0, 264.0, 64.0));
        assert!((layout.outline.left - 12.2).abs() < 1e-4);
        assert!((layout.outline.right - 265.8).abs() < 1e-4);
        assert_eq!(layout.interior.width(), measurement.view_width);
    }

    #[test]
    fn oversized_padding_inverts_the_interior() {
        let config = BarConfig::default().padding(Padding::uniform(Dp(40.0)));
        let measurement = measure(Constraint::exact(Px(300), Px(50)), &config);
        let layout = BarLayout::resolve(&measurement, &config);
        assert!(layout.interior.has_negative_extent());
    }

    #[test]
    fn split_fills_from_the_start_edge() {
        let rect = RectF::new(0.0, 0.0, 100.0, 20.0);
        let (filled, rest) = rect.split_along(Orientation::Horizontal, 30.0);
        assert_eq!(filled, RectF::new(0.0, 0.0, 30.0, 20.0));
        assert_eq!(rest, RectF::new(30.0, 0.0, 100.0, 20.0));

        let rect = RectF::new(0.0, 0.0, 20.0, 100.0);
        let (filled, rest) = rect.split_along(Orientation::Vertical, 30.0);
        assert_eq!(filled, RectF::new(0.0, 70.0, 20.0, 100.0));
        assert_eq!(rest, RectF::new(0.0, 0.0, 20.0, 70.0));
    }

    #[test]
    fn disjoint_rectangles_intersect_to_empty() {
        let a = RectF::new(0.0, 0.0, 10.0, 10.0);
        let b = RectF::new(20.0, 0.0, 30.0, 10.0);
        assert!(a.intersect(&b).is_empty());
        assert_eq!(a.intersect(&a), a);
    }
}
