use roundside_progress::{
    BarConfig, Color, Constraint, DividerConfig, Dp, MeasureSpec, Orientation, PixmapCanvas,
    ProgressBar, ProgressState, Px,
};

fn render(bar: &mut ProgressBar, constraint: Constraint) -> PixmapCanvas {
    let size = bar.measure(constraint);
    let mut canvas = PixmapCanvas::new(size.width.raw() as u32, size.height.raw() as u32).unwrap();
    bar.draw(&mut canvas);
    canvas
}

fn argb(canvas: &PixmapCanvas, x: u32, y: u32) -> u32 {
    canvas.pixel(x, y).unwrap().to_argb()
}

#[test]
fn half_full_horizontal_bar() {
    let state = ProgressState::new(50.0, 100.0).unwrap();
    let mut bar = ProgressBar::new(BarConfig::default(), state).unwrap();
    let canvas = render(&mut bar, Constraint::NONE);

    assert_eq!((canvas.width(), canvas.height()), (250, 50));
    assert_eq!(argb(&canvas, 60, 25), bar.progress_color().to_argb());
    assert_eq!(argb(&canvas, 190, 25), bar.track_color().to_argb());
    // Outside the rounded caps.
    assert_eq!(canvas.pixel(0, 0).unwrap().a, 0.0);
    assert_eq!(canvas.pixel(249, 49).unwrap().a, 0.0);
}

#[test]
fn vertical_bar_fills_from_the_bottom() {
    let config = BarConfig::default().orientation(Orientation::Vertical);
    let mut bar = ProgressBar::new(config, ProgressState::new(25.0, 100.0).unwrap()).unwrap();
    let constraint = Constraint::new(
        MeasureSpec::at_most(Px(1000)),
        MeasureSpec::at_most(Px(1000)),
    );
    let canvas = render(&mut bar, constraint);

    assert_eq!((canvas.width(), canvas.height()), (50, 250));
    assert_eq!(argb(&canvas, 25, 230), bar.progress_color().to_argb());
    assert_eq!(argb(&canvas, 25, 100), bar.track_color().to_argb());
}

#[test]
fn outline_surrounds_the_interior() {
    let config = BarConfig::default()
        .outline_width(Dp(4.0))
        .outline_color(Color::BLACK);
    let mut bar = ProgressBar::new(config, ProgressState::default()).unwrap();
    let canvas = render(&mut bar, Constraint::NONE);

    assert_eq!((canvas.width(), canvas.height()), (258, 58));
    assert_eq!(argb(&canvas, 129, 2), Color::BLACK.to_argb());
    assert_eq!(argb(&canvas, 129, 29), bar.track_color().to_argb());
}

#[test]
fn divider_gaps_cut_through_the_fill() {
    let config = BarConfig::default().divider(Some(
        DividerConfig::default()
            .count(3)
            .width(Dp(10.0))
            .color(Color::WHITE),
    ));
    let mut bar = ProgressBar::new(config, ProgressState::new(100.0, 100.0).unwrap()).unwrap();
    let canvas = render(&mut bar, Constraint::NONE);

    for x in [60, 125, 190] {
        assert_eq!(argb(&canvas, x, 25), Color::WHITE.to_argb());
    }
    for x in [30, 90, 155, 220] {
        assert_eq!(argb(&canvas, x, 25), bar.progress_color().to_argb());
    }
}

#[test]
fn animation_frames_converge_on_the_target() {
    use std::time::{Duration, Instant};

    let mut bar = ProgressBar::default();
    let start = Instant::now();
    assert!(bar.animate_to(100.0, start));

    let mut last = 0.0;
    for frame in 1..=10 {
        bar.tick(start + Duration::from_millis(150 * frame));
        assert!(bar.progress() >= last);
        last = bar.progress();
    }
    assert!(!bar.is_animating());

    let canvas = render(&mut bar, Constraint::NONE);
    assert_eq!(argb(&canvas, 240, 25), bar.progress_color().to_argb());
}
