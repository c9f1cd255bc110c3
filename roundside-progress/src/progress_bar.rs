//! The widget core hosts talk to.
//!
//! ## Usage
//!
//! Create a [`ProgressBar`], measure it when the host lays it out, draw it
//! onto any [`Canvas`], and forward frame ticks while it animates.
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use roundside_progress::{BarConfig, Constraint, ProgressBar, ProgressState, RecordingCanvas};
//!
//! let mut bar = ProgressBar::new(BarConfig::default(), ProgressState::default())?;
//! bar.measure(Constraint::NONE);
//!
//! let start = Instant::now();
//! assert!(bar.animate_to(50.0, start));
//! while bar.tick(start + Duration::from_millis(800)) {}
//! assert_eq!(bar.progress(), 50.0);
//!
//! let mut canvas = RecordingCanvas::new();
//! bar.draw(&mut canvas);
//! # Ok::<(), roundside_progress::ProgressBarError>(())
//! ```

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::{
    Color,
    animation::{AnimationRun, AnimationState, transition_duration},
    canvas::Canvas,
    config::{
        BarConfig, DEFAULT_ANIMATION_SPEED, DividerConfig, Orientation, Padding,
        validate_outline_width,
    },
    constraint::Constraint,
    divider::DividerOverlay,
    dp::Dp,
    error::Result,
    geometry::{BarLayout, Measurement, measure},
    px::PxSize,
    renderer::ProgressRenderer,
    state::ProgressState,
};

/// What the host has to redo after a change.
///
/// Ordered by cost, so accumulating flags keeps the strongest.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Invalidation {
    /// Nothing changed.
    #[default]
    None,
    /// The bar must be drawn again.
    Redraw,
    /// The bar must be measured and drawn again.
    Relayout,
}

impl Invalidation {
    /// Combines two flags, keeping the stronger one.
    pub fn merge(self, other: Invalidation) -> Invalidation {
        self.max(other)
    }

    /// Whether a draw pass is needed.
    pub fn needs_redraw(self) -> bool {
        self != Invalidation::None
    }

    /// Whether a measurement pass is needed.
    pub fn needs_layout(self) -> bool {
        self == Invalidation::Relayout
    }
}

/// A rounded-side progress bar, optionally divided into segments.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    config: BarConfig,
    state: ProgressState,
    animation: AnimationState,
    measurement: Option<Measurement>,
    invalidation: Invalidation,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self {
            config: BarConfig::default(),
            state: ProgressState::default(),
            animation: AnimationState::Idle,
            measurement: None,
            invalidation: Invalidation::Relayout,
        }
    }
}

impl ProgressBar {
    /// Creates a bar, rejecting invalid configuration.
    ///
    /// A new bar starts out needing a layout pass.
    pub fn new(config: BarConfig, state: ProgressState) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state,
            ..Self::default()
        })
    }

    /// Current configuration.
    pub fn config(&self) -> &BarConfig {
        &self.config
    }

    /// Current progress values.
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    // Invalidation

    /// Pending invalidation, without clearing it.
    pub fn invalidation(&self) -> Invalidation {
        self.invalidation
    }

    /// Returns and clears the pending invalidation.
    pub fn take_invalidation(&mut self) -> Invalidation {
        std::mem::take(&mut self.invalidation)
    }

    fn invalidate(&mut self, invalidation: Invalidation) {
        self.invalidation = self.invalidation.merge(invalidation);
    }

    // Progress

    /// Current progress value, including mid-animation values.
    pub fn progress(&self) -> f32 {
        self.state.progress()
    }

    /// Upper bound of the progress value.
    pub fn max_progress(&self) -> f32 {
        self.state.max_progress()
    }

    /// Drawn share of the bar in `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        self.state.fraction()
    }

    /// Sets the progress immediately.
    ///
    /// No range check is made; values above the maximum draw as a full bar.
    /// An in-flight animation is not cancelled and overwrites the value on
    /// its next tick.
    pub fn set_progress(&mut self, progress: f32) {
        if self.state.progress() != progress {
            self.state.set_progress(progress);
            self.invalidate(Invalidation::Redraw);
        }
    }

    /// Sets the progress, animating from the current value when `animate`
    /// is set. Animated requests start now; see [`animate_to`](Self::animate_to).
    pub fn set_progress_with(&mut self, progress: f32, animate: bool) {
        if animate {
            self.animate_to(progress, Instant::now());
        } else {
            self.set_progress(progress);
        }
    }

    /// Starts a transition to `target` at `now`, replacing any in-flight one.
    ///
    /// Targets outside `[0, max_progress]` and targets equal to the current
    /// value are ignored. Returns whether a transition was started.
    pub fn animate_to(&mut self, target: f32, now: Instant) -> bool {
        let current = self.state.progress();
        if !self.state.accepts_target(target) {
            debug!(
                requested = target,
                max = self.state.max_progress(),
                "ignoring out-of-range animation target"
            );
            return false;
        }
        if target == current {
            debug!(requested = target, "animation target equals the current value");
            return false;
        }

        let duration = transition_duration(
            current,
            target,
            self.state.max_progress(),
            self.config.animation_speed,
        );
        if self.animation.is_animating() {
            trace!("cancelling in-flight animation");
        }
        debug!(from = current, to = target, ?duration, "starting progress animation");
        let run = AnimationRun::new(current, target, duration, now);
        self.animation = AnimationState::Animating(run);
        self.invalidate(Invalidation::Redraw);
        true
    }

    /// Advances the in-flight transition to `now`.
    ///
    /// Returns `true` when the progress changed and a frame should be drawn.
    /// The last tick lands exactly on the target and returns the bar to
    /// idle.
    pub fn tick(&mut self, now: Instant) -> bool {
        let AnimationState::Animating(run) = self.animation else {
            return false;
        };
        let value = run.value_at(now);
        self.state.set_progress(value);
        if run.is_finished(now) {
            debug!(progress = value, "progress animation finished");
            self.animation = AnimationState::Idle;
        } else {
            trace!(progress = value, "progress animation tick");
        }
        self.invalidate(Invalidation::Redraw);
        true
    }

    /// Whether a transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Target of the in-flight transition.
    pub fn animation_target(&self) -> Option<f32> {
        self.animation.run().map(AnimationRun::to)
    }

    /// The in-flight transition, if any.
    pub fn animation(&self) -> Option<&AnimationRun> {
        self.animation.run()
    }

    /// Sets the upper bound. Rejects zero, negative and NaN values.
    pub fn set_max_progress(&mut self, max_progress: f32) -> Result<()> {
        if self.state.max_progress() != max_progress {
            self.state.set_max_progress(max_progress)?;
            self.invalidate(Invalidation::Redraw);
        }
        Ok(())
    }

    // Appearance

    /// Outline width; zero disables the outline.
    pub fn outline_width(&self) -> Dp {
        self.config.outline_width
    }

    /// Sets the outline width. Rejects negative and NaN widths.
    pub fn set_outline_width(&mut self, width: Dp) -> Result<()> {
        validate_outline_width(width)?;
        if self.config.outline_width != width {
            self.config.outline_width = width;
            self.invalidate(Invalidation::Relayout);
        }
        Ok(())
    }

    /// Outline color.
    pub fn outline_color(&self) -> Color {
        self.config.outline_color
    }

    /// Sets the outline color.
    pub fn set_outline_color(&mut self, color: Color) {
        if self.config.outline_color != color {
            self.config.outline_color = color;
            self.invalidate(Invalidation::Redraw);
        }
    }

    /// Fill color.
    pub fn progress_color(&self) -> Color {
        self.config.progress_color
    }

    /// Sets the fill color.
    pub fn set_progress_color(&mut self, color: Color) {
        if self.config.progress_color != color {
            self.config.progress_color = color;
            self.invalidate(Invalidation::Redraw);
        }
    }

    /// Track color.
    pub fn track_color(&self) -> Color {
        self.config.track_color
    }

    /// Sets the track color.
    pub fn set_track_color(&mut self, color: Color) {
        if self.config.track_color != color {
            self.config.track_color = color;
            self.invalidate(Invalidation::Redraw);
        }
    }

    /// Long axis of the bar.
    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    /// Switches the long axis.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.config.orientation != orientation {
            self.config.orientation = orientation;
            self.invalidate(Invalidation::Relayout);
        }
    }

    /// Padding around the outline.
    pub fn padding(&self) -> Padding {
        self.config.padding
    }

    /// Sets the padding.
    pub fn set_padding(&mut self, padding: Padding) {
        if self.config.padding != padding {
            self.config.padding = padding;
            self.invalidate(Invalidation::Relayout);
        }
    }

    // Animation speed

    /// Duration of a full-scale transition.
    pub fn animation_speed(&self) -> Duration {
        self.config.animation_speed
    }

    /// Sets the duration of a full-scale transition. Applies to transitions
    /// started afterwards.
    pub fn set_animation_speed(&mut self, speed: Duration) {
        self.config.animation_speed = speed;
    }

    /// Resets the full-scale duration to the default.
    pub fn restore_animation_speed(&mut self) {
        self.config.animation_speed = DEFAULT_ANIMATION_SPEED;
    }

    // Dividers

    /// The divided-variant overlay, when enabled.
    pub fn divider(&self) -> Option<DividerOverlay> {
        self.config.divider.map(DividerOverlay::new)
    }

    /// Turns the divided variant on with `config`.
    pub fn enable_dividers(&mut self, config: DividerConfig) {
        if self.config.divider != Some(config) {
            self.config.divider = Some(config);
            self.invalidate(Invalidation::Redraw);
        }
    }

    /// Turns the divided variant off.
    pub fn disable_dividers(&mut self) {
        if self.config.divider.take().is_some() {
            self.invalidate(Invalidation::Redraw);
        }
    }

    /// Number of gaps, zero when the divided variant is off.
    pub fn divider_count(&self) -> i32 {
        self.config.divider.map_or(0, |divider| divider.count)
    }

    /// Sets the number of gaps, enabling the divided variant if needed.
    pub fn set_dividers(&mut self, count: i32) {
        self.update_divider(|overlay| overlay.set_count(count));
    }

    /// Gap width, if the divided variant is on.
    pub fn divider_width(&self) -> Option<Dp> {
        self.config.divider.map(|divider| divider.width)
    }

    /// Sets the gap width, enabling the divided variant if needed.
    pub fn set_divider_width(&mut self, width: Dp) {
        self.update_divider(|overlay| overlay.set_width(width));
    }

    /// Gap color, if the divided variant is on.
    pub fn divider_color(&self) -> Option<Color> {
        self.config.divider.map(|divider| divider.color)
    }

    /// Sets the gap color, enabling the divided variant if needed.
    pub fn set_divider_color(&mut self, color: Color) {
        self.update_divider(|overlay| overlay.set_color(color));
    }

    fn update_divider(&mut self, update: impl FnOnce(&mut DividerOverlay) -> bool) {
        let enabled = self.config.divider.is_some();
        let mut overlay = DividerOverlay::new(self.config.divider.unwrap_or_default());
        let changed = update(&mut overlay);
        if changed || !enabled {
            self.config.divider = Some(*overlay.config());
            self.invalidate(Invalidation::Redraw);
        }
    }

    // Layout and drawing

    /// Measures the bar under `constraint` and keeps the result for drawing.
    pub fn measure(&mut self, constraint: Constraint) -> PxSize {
        let measurement = measure(constraint, &self.config);
        debug!(
            ?constraint,
            full_width = measurement.full_width.raw(),
            full_height = measurement.full_height.raw(),
            view_width = measurement.view_width,
            view_height = measurement.view_height,
            "measured progress bar"
        );
        self.measurement = Some(measurement);
        measurement.full_size()
    }

    /// The last measurement, if any.
    pub fn measurement(&self) -> Option<Measurement> {
        self.measurement
    }

    /// Rectangles of the last measurement, if any.
    pub fn layout(&self) -> Option<BarLayout> {
        self.measurement
            .map(|measurement| BarLayout::resolve(&measurement, &self.config))
    }

    /// Draws the bar onto `canvas`.
    ///
    /// Uses the last measurement, or the unconstrained size when the bar has
    /// not been measured yet.
    pub fn draw<C>(&self, canvas: &mut C)
    where
        C: Canvas + ?Sized,
    {
        let measurement = self
            .measurement
            .unwrap_or_else(|| measure(Constraint::NONE, &self.config));
        let layout = BarLayout::resolve(&measurement, &self.config);
        let fraction = self.fraction();
        let Some(path) = ProgressRenderer.draw(canvas, &layout, &self.config, fraction) else {
            return;
        };
        if let Some(divider) = self.divider() {
            divider.draw(canvas, &path, self.config.orientation);
        }
    }
}
