//! The drawing surface the bar renders onto.
//!
//! [`Canvas`] is the small slice of a host canvas the bar needs: scoped
//! clipping and drawing a [`StadiumPath`] with a [`Paint`]. Clips must nest;
//! [`with_clip`] pairs every save with a restore.
//!
//! [`RecordingCanvas`] implements the trait by recording operations, which is
//! useful for hosts that replay draw lists and for inspecting a draw pass.

use crate::{Color, geometry::RectF, shape::StadiumPath};

/// How a path is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintStyle {
    /// Fill the interior.
    Fill,
    /// Stroke the outline with the given width, centered on the path.
    Stroke {
        /// Stroke width in pixels.
        width: f32,
    },
}

/// Color and style for one draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    /// Paint color.
    pub color: Color,
    /// Fill or stroke.
    pub style: PaintStyle,
    /// Whether edges are anti-aliased.
    pub anti_alias: bool,
}

impl Paint {
    /// An anti-aliased fill.
    pub const fn fill(color: Color) -> Self {
        Self {
            color,
            style: PaintStyle::Fill,
            anti_alias: true,
        }
    }

    /// An anti-aliased stroke.
    pub const fn stroke(color: Color, width: f32) -> Self {
        Self {
            color,
            style: PaintStyle::Stroke { width },
            anti_alias: true,
        }
    }
}

/// Drawing surface consumed by the renderer.
pub trait Canvas {
    /// Pushes the current clip state.
    fn save(&mut self);

    /// Pops the clip state pushed by the matching [`save`](Canvas::save).
    fn restore(&mut self);

    /// Intersects the current clip with `rect`.
    fn clip_rect(&mut self, rect: RectF);

    /// Draws `path` with `paint`, honouring the current clip.
    fn draw_path(&mut self, path: &StadiumPath, paint: &Paint);
}

/// Runs `draw` with the canvas clipped to `rect`, restoring the previous
/// clip afterwards.
pub fn with_clip<C, R>(canvas: &mut C, rect: RectF, draw: impl FnOnce(&mut C) -> R) -> R
where
    C: Canvas + ?Sized,
{
    canvas.save();
    canvas.clip_rect(rect);
    let result = draw(canvas);
    canvas.restore();
    result
}

/// One recorded canvas operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// [`Canvas::save`].
    Save,
    /// [`Canvas::restore`].
    Restore,
    /// [`Canvas::clip_rect`].
    ClipRect(RectF),
    /// [`Canvas::draw_path`], with the clip in effect at the time.
    DrawPath {
        /// The path drawn.
        path: StadiumPath,
        /// Paint used.
        paint: Paint,
        /// Effective clip, `None` when unclipped.
        clip: Option<RectF>,
    },
}

/// A [`Canvas`] that records every operation.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    ops: Vec<DrawOp>,
    clip: Option<RectF>,
    saved: Vec<Option<RectF>>,
}

impl RecordingCanvas {
    /// Creates an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// All operations, in call order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of saves not yet restored.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Iterates the recorded draw calls as `(path, paint, clip)`.
    pub fn draws(&self) -> impl Iterator<Item = (&StadiumPath, &Paint, Option<RectF>)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::DrawPath { path, paint, clip } => Some((path, paint, *clip)),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn save(&mut self) {
        self.saved.push(self.clip);
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        if let Some(clip) = self.saved.pop() {
            self.clip = clip;
        } else {
            tracing::warn!("restore without a matching save");
        }
        self.ops.push(DrawOp::Restore);
    }

    fn clip_rect(&mut self, rect: RectF) {
        self.clip = Some(match self.clip {
            Some(current) => current.intersect(&rect),
            None => rect,
        });
        self.ops.push(DrawOp::ClipRect(rect));
    }

    fn draw_path(&mut self, path: &StadiumPath, paint: &Paint) {
        self.ops.push(DrawOp::DrawPath {
            path: path.clone(),
            paint: *paint,
            clip: self.clip,
        });
    }
}
