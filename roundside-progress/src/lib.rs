//! A rounded-side ("stadium") progress bar widget core.
//!
//! The crate holds everything about the bar that does not depend on a
//! particular GUI toolkit: measuring it under layout constraints, building
//! its stadium outline, interpolating the progress value over time and
//! issuing the draw sequence (outline, track, fill, divider gaps) against a
//! small [`Canvas`] trait.
//!
//! # Hosting
//!
//! A host owns a [`ProgressBar`] and drives it:
//!
//! - call [`ProgressBar::measure`] from its layout pass,
//! - call [`ProgressBar::draw`] from its paint pass,
//! - call [`ProgressBar::tick`] every frame while
//!   [`ProgressBar::is_animating`] is true,
//! - drain [`ProgressBar::take_invalidation`] after mutating the bar to
//!   decide whether to redraw or relayout.
//!
//! Two canvases ship with the crate: [`RecordingCanvas`], which records draw
//! operations for replay, and [`PixmapCanvas`], a CPU rasterizer. GPU hosts
//! can tessellate the outline with [`mesh::tessellate_fill`] instead.
//!
//! ```
//! use roundside_progress::{
//!     BarConfig, Constraint, DividerConfig, Dp, PixmapCanvas, ProgressBar, ProgressState,
//! };
//!
//! let config = BarConfig::default()
//!     .outline_width(Dp(2.0))
//!     .divider(Some(DividerConfig::default()));
//! let mut bar = ProgressBar::new(config, ProgressState::new(30.0, 100.0)?)?;
//!
//! let size = bar.measure(Constraint::NONE);
//! let mut canvas = PixmapCanvas::new(size.width.raw() as u32, size.height.raw() as u32)?;
//! bar.draw(&mut canvas);
//! # Ok::<(), roundside_progress::ProgressBarError>(())
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod animation;
pub mod canvas;
pub mod color;
pub mod config;
pub mod constraint;
pub mod divider;
pub mod dp;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod progress_bar;
pub mod px;
pub mod raster;
pub mod renderer;
pub mod shape;
pub mod state;

pub use crate::{
    animation::{AnimationRun, AnimationState},
    canvas::{Canvas, DrawOp, Paint, PaintStyle, RecordingCanvas},
    color::Color,
    config::{BarConfig, DividerConfig, Orientation, Padding},
    constraint::{Constraint, MeasureMode, MeasureSpec},
    divider::DividerOverlay,
    dp::Dp,
    error::{ProgressBarError, Result},
    geometry::{BarLayout, Measurement, RectF},
    progress_bar::{Invalidation, ProgressBar},
    px::{Px, PxSize},
    raster::PixmapCanvas,
    renderer::ProgressRenderer,
    shape::{StadiumPath, compose_rounded_rect},
    state::ProgressState,
};
