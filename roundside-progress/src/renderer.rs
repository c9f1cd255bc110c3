//! The draw sequence: outline, track, fill.

use tracing::{debug, trace};

use crate::{
    canvas::{Canvas, Paint, with_clip},
    config::BarConfig,
    geometry::BarLayout,
    shape::{StadiumPath, compose_rounded_rect},
};

/// Outline widths at or below this are treated as no outline.
pub const MIN_OUTLINE_WIDTH: f32 = 0.01;

/// The stroke is drawn slightly wider than the configured outline so it
/// covers the anti-aliased edge of the fill underneath.
pub const OUTLINE_STROKE_FACTOR: f32 = 1.05;

/// Draws a bar for a resolved layout and a progress fraction.
///
/// Stateless; everything it needs is passed per call so the same renderer
/// can draw any number of bars.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProgressRenderer;

impl ProgressRenderer {
    /// Issues the outline, track and fill draws.
    ///
    /// Returns the interior stadium so overlays can reuse it, or `None` when
    /// the interior rectangle is inverted and nothing was drawn inside it.
    #[tracing::instrument(level = "trace", skip(self, canvas, config))]
    pub fn draw<C>(
        &self,
        canvas: &mut C,
        layout: &BarLayout,
        config: &BarConfig,
        fraction: f32,
    ) -> Option<StadiumPath>
    where
        C: Canvas + ?Sized,
    {
        self.draw_outline(canvas, layout, config);
        self.draw_interior(canvas, layout, config, fraction)
    }

    fn draw_outline<C>(&self, canvas: &mut C, layout: &BarLayout, config: &BarConfig)
    where
        C: Canvas + ?Sized,
    {
        let outline = config.outline_px();
        if outline <= MIN_OUTLINE_WIDTH {
            return;
        }
        if layout.outline.has_negative_extent() {
            debug!(rect = ?layout.outline, "outline rectangle is inverted; skipping outline");
            return;
        }
        let path = compose_rounded_rect(layout.outline, config.orientation);
        canvas.draw_path(
            &path,
            &Paint::stroke(config.outline_color, outline * OUTLINE_STROKE_FACTOR),
        );
    }

    fn draw_interior<C>(
        &self,
        canvas: &mut C,
        layout: &BarLayout,
        config: &BarConfig,
        fraction: f32,
    ) -> Option<StadiumPath>
    where
        C: Canvas + ?Sized,
    {
        let interior = layout.interior;
        if interior.has_negative_extent() {
            debug!(rect = ?interior, "interior rectangle is inverted; skipping track and fill");
            return None;
        }

        let orientation = config.orientation;
        let path = compose_rounded_rect(interior, orientation);
        let bar_length = fraction * interior.extent_along(orientation);
        let (filled, remainder) = interior.split_along(orientation, bar_length);
        trace!(fraction, bar_length, "drawing track and fill");

        if fraction < 1.0 {
            with_clip(canvas, remainder, |canvas| {
                canvas.draw_path(&path, &Paint::fill(config.track_color));
            });
        }
        if fraction > 0.0 {
            with_clip(canvas, filled, |canvas| {
                canvas.draw_path(&path, &Paint::fill(config.progress_color));
            });
        }
        Some(path)
    }
}
