//! CPU raster backend built on `tiny-skia`.

use tiny_skia::{FillRule, Mask, PathBuilder, Pixmap, Stroke, Transform};

use crate::{
    Color,
    canvas::{Canvas, Paint, PaintStyle},
    error::{ProgressBarError, Result},
    geometry::RectF,
    shape::StadiumPath,
};

/// A [`Canvas`] that rasterizes into an RGBA [`Pixmap`].
///
/// Clips are rectangles; nested clips are intersected and applied to each
/// draw call through a mask.
pub struct PixmapCanvas {
    pixmap: Pixmap,
    clip: Option<RectF>,
    saved: Vec<Option<RectF>>,
}

impl PixmapCanvas {
    /// Allocates a transparent surface.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let Some(pixmap) = Pixmap::new(width, height) else {
            return Err(ProgressBarError::Surface { width, height });
        };
        Ok(Self {
            pixmap,
            clip: None,
            saved: Vec::new(),
        })
    }

    /// Fills the whole surface with `color`, ignoring the clip.
    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(to_skia_color(color));
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// The color at `(x, y)` with alpha un-premultiplied, or `None` when out
    /// of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let pixel = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::from_rgba_u8(
            pixel.red(),
            pixel.green(),
            pixel.blue(),
            pixel.alpha(),
        ))
    }

    /// Consumes the canvas, returning the pixmap.
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    fn clip_mask(&self, clip: RectF) -> Option<Mask> {
        let rect = tiny_skia::Rect::from_ltrb(clip.left, clip.top, clip.right, clip.bottom)?;
        let mut mask = Mask::new(self.pixmap.width(), self.pixmap.height())?;
        mask.fill_path(
            &PathBuilder::from_rect(rect),
            FillRule::Winding,
            false,
            Transform::identity(),
        );
        Some(mask)
    }
}

impl Canvas for PixmapCanvas {
    fn save(&mut self) {
        self.saved.push(self.clip);
    }

    fn restore(&mut self) {
        match self.saved.pop() {
            Some(clip) => self.clip = clip,
            None => tracing::warn!("restore without a matching save"),
        }
    }

    fn clip_rect(&mut self, rect: RectF) {
        self.clip = Some(match self.clip {
            Some(current) => current.intersect(&rect),
            None => rect,
        });
    }

    fn draw_path(&mut self, path: &StadiumPath, paint: &Paint) {
        let mask = match self.clip {
            Some(clip) if clip.is_empty() => return,
            Some(clip) => match self.clip_mask(clip) {
                Some(mask) => Some(mask),
                None => return,
            },
            None => None,
        };
        let Some(skia_path) = path.to_skia_path() else {
            tracing::trace!("skipping path without drawable extent");
            return;
        };

        let mut skia_paint = tiny_skia::Paint::default();
        skia_paint.set_color(to_skia_color(paint.color));
        skia_paint.anti_alias = paint.anti_alias;

        match paint.style {
            PaintStyle::Fill => self.pixmap.fill_path(
                &skia_path,
                &skia_paint,
                FillRule::Winding,
                Transform::identity(),
                mask.as_ref(),
            ),
            PaintStyle::Stroke { width } => {
                let stroke = Stroke {
                    width,
                    ..Stroke::default()
                };
                self.pixmap.stroke_path(
                    &skia_path,
                    &skia_paint,
                    &stroke,
                    Transform::identity(),
                    mask.as_ref(),
                );
            }
        }
    }
}

fn to_skia_color(color: Color) -> tiny_skia::Color {
    let [r, g, b, a] = color.to_rgba_u8();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}
