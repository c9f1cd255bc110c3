//! Evenly spaced gaps cut into the bar.
//!
//! The overlay runs after the track and fill. For every gap it clips to a
//! thin slice across the bar and fills the interior stadium with the divider
//! color, so the gaps follow the rounded silhouette at the caps.

use tracing::trace;

use crate::{
    Color,
    canvas::{Canvas, Paint, with_clip},
    config::{DividerConfig, Orientation},
    dp::Dp,
    geometry::RectF,
    shape::StadiumPath,
};

/// Divided-variant overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerOverlay {
    config: DividerConfig,
}

impl DividerOverlay {
    /// Creates an overlay from its configuration.
    pub fn new(config: DividerConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &DividerConfig {
        &self.config
    }

    /// Number of gaps.
    pub fn count(&self) -> i32 {
        self.config.count
    }

    /// Gap width.
    pub fn width(&self) -> Dp {
        self.config.width
    }

    /// Gap color.
    pub fn color(&self) -> Color {
        self.config.color
    }

    /// Sets the gap count. Returns whether it changed.
    pub fn set_count(&mut self, count: i32) -> bool {
        replace_if_changed(&mut self.config.count, count)
    }

    /// Sets the gap width. Returns whether it changed.
    pub fn set_width(&mut self, width: Dp) -> bool {
        replace_if_changed(&mut self.config.width, width)
    }

    /// Sets the gap color. Returns whether it changed.
    pub fn set_color(&mut self, color: Color) -> bool {
        replace_if_changed(&mut self.config.color, color)
    }

    /// Distance between neighbouring gaps and between the outer gaps and the
    /// ends, for an interior `total_extent` long.
    ///
    /// Negative when the gaps do not fit; positions then overlap but stay
    /// finite.
    pub fn spacing(&self, total_extent: f32) -> f32 {
        let count = self.config.count.max(0) as f32;
        (total_extent - self.config.width.to_pixels_f32() * count) / (count + 1.0)
    }

    /// Start offset of every gap, measured from the interior's left (or top)
    /// edge. Empty when the count is zero or negative.
    ///
    /// Offsets are produced on demand, so huge counts cost nothing until
    /// iterated.
    pub fn gap_offsets(&self, total_extent: f32) -> impl Iterator<Item = f32> {
        let spacing = self.spacing(total_extent);
        let width = self.config.width.to_pixels_f32();
        (1..=self.config.count.max(0)).map(move |i| {
            let i = i as f32;
            spacing * i + width * (i - 1.0)
        })
    }

    /// Clip rectangles of the gaps within `interior`, spanning its full
    /// cross-axis extent. Gaps that cover none of the interior are skipped.
    pub fn gap_rects(
        &self,
        interior: RectF,
        orientation: Orientation,
    ) -> impl Iterator<Item = RectF> {
        let width = self.config.width.to_pixels_f32();
        self.gap_offsets(interior.extent_along(orientation))
            .map(move |offset| match orientation {
                Orientation::Horizontal => RectF::new(
                    interior.left + offset,
                    interior.top,
                    interior.left + offset + width,
                    interior.bottom,
                ),
                Orientation::Vertical => RectF::new(
                    interior.left,
                    interior.top + offset,
                    interior.right,
                    interior.top + offset + width,
                ),
            })
            .filter(move |gap| !gap.intersect(&interior).is_empty())
    }

    /// Paints the gaps over an already drawn bar.
    pub fn draw<C>(&self, canvas: &mut C, path: &StadiumPath, orientation: Orientation)
    where
        C: Canvas + ?Sized,
    {
        let paint = Paint::fill(self.config.color);
        let mut drawn = 0usize;
        for gap in self.gap_rects(path.bounds(), orientation) {
            with_clip(canvas, gap, |canvas| canvas.draw_path(path, &paint));
            drawn += 1;
        }
        trace!(drawn, "drew divider gaps");
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
