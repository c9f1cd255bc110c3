//! The bars rendered by the example and the script that animates them.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use roundside_progress::{
    BarConfig, Color, Constraint, DividerConfig, Dp, MeasureSpec, Orientation, PixmapCanvas,
    ProgressBar, ProgressState, Px,
};

const BACKGROUND: Color = Color::WHITE;

/// One bar, its layout constraint and where it is heading.
pub struct Showcase {
    pub name: &'static str,
    pub bar: ProgressBar,
    pub constraint: Constraint,
    pub target: f32,
}

impl Showcase {
    fn new(
        name: &'static str,
        config: BarConfig,
        constraint: Constraint,
        target: f32,
    ) -> Result<Self> {
        let bar = ProgressBar::new(config, ProgressState::default())
            .with_context(|| format!("invalid configuration for the {name} bar"))?;
        Ok(Self {
            name,
            bar,
            constraint,
            target,
        })
    }

    /// Measures and rasterizes the bar at its current progress.
    pub fn render(&mut self) -> Result<PixmapCanvas> {
        let size = self.bar.measure(self.constraint);
        let width = size.width.raw().max(1) as u32;
        let height = size.height.raw().max(1) as u32;
        let mut canvas = PixmapCanvas::new(width, height)
            .with_context(|| format!("allocating the {} surface", self.name))?;
        canvas.clear(BACKGROUND);
        self.bar.draw(&mut canvas);
        Ok(canvas)
    }
}

/// A horizontal bar with an outline, a vertical bar and a divided bar.
pub fn showcases(speed: Duration) -> Result<Vec<Showcase>> {
    let horizontal = BarConfig::default()
        .outline_width(Dp(2.0))
        .animation_speed(speed);
    let vertical = BarConfig::default()
        .orientation(Orientation::Vertical)
        .progress_color(Color::from_argb(0xFF2196F3))
        .animation_speed(speed);
    let divided = BarConfig::default()
        .default_height(Dp(30.0))
        .progress_color(Color::from_argb(0xFFFF9800))
        .divider(Some(DividerConfig::default().count(4).color(BACKGROUND)))
        .animation_speed(speed);

    Ok(vec![
        Showcase::new("horizontal", horizontal, Constraint::NONE, 80.0)?,
        Showcase::new(
            "vertical",
            vertical,
            Constraint::new(MeasureSpec::at_most(Px(400)), MeasureSpec::at_most(Px(400))),
            60.0,
        )?,
        Showcase::new(
            "divided",
            divided,
            Constraint::new(MeasureSpec::exact(Px(320)), MeasureSpec::unspecified()),
            100.0,
        )?,
    ])
}

/// Starts every showcase's animation at `start`.
pub fn start_all(showcases: &mut [Showcase], start: Instant) {
    for showcase in showcases {
        if !showcase.bar.animate_to(showcase.target, start) {
            tracing::warn!(name = showcase.name, "animation did not start");
        }
    }
}
