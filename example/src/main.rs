use std::{
    fs,
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

mod scene;

const DEFAULT_FILTER: &str = "error,roundside_progress=info,example=info";

/// Render animated rounded-side progress bars to PNG frames
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory the frames are written to
    #[arg(short, long, default_value = "frames")]
    out_dir: PathBuf,
    /// Number of frames per bar
    #[arg(short, long, default_value_t = 30)]
    frames: u32,
    /// Duration of a full-scale animation, in milliseconds
    #[arg(short, long, default_value_t = 1500)]
    speed_ms: u64,
    /// Simulated time between frames, in milliseconds
    #[arg(long, default_value_t = 50)]
    frame_interval_ms: u64,
    /// Physical pixels per dp
    #[arg(long, default_value_t = 1.0)]
    scale: f64,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    roundside_progress::dp::set_scale_factor(cli.scale);

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating {}", cli.out_dir.display()))?;

    let mut showcases = scene::showcases(Duration::from_millis(cli.speed_ms))?;
    let start = Instant::now();
    scene::start_all(&mut showcases, start);

    let interval = Duration::from_millis(cli.frame_interval_ms);
    for frame in 0..cli.frames {
        let now = start + interval * frame;
        for showcase in &mut showcases {
            showcase.bar.tick(now);
            let pixmap = showcase.render()?.into_pixmap();
            let path = cli.out_dir.join(format!("{}_{frame:03}.png", showcase.name));
            pixmap
                .save_png(&path)
                .with_context(|| format!("writing {}", path.display()))?;
        }
    }

    for showcase in &showcases {
        info!(
            name = showcase.name,
            progress = showcase.bar.progress(),
            animating = showcase.bar.is_animating(),
            "finished rendering"
        );
    }
    info!(frames = cli.frames, dir = %cli.out_dir.display(), "frames written");
    Ok(())
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(DEFAULT_FILTER) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}
