//! The stadium ("discorectangle") outline shared by every draw step.
//!
//! A [`StadiumPath`] is built once per rectangle and reused unchanged for the
//! outline stroke, the track, the fill and the divider gaps. Only the clip
//! rectangle differs between those steps, so the rounded silhouette stays the
//! same at every fill fraction.
//!
//! The path is stored as a short list of [`PathVerb`]s with arcs in their
//! exact (oval, start, sweep) form. Backends convert it with
//! [`StadiumPath::to_lyon_path`] or [`StadiumPath::to_skia_path`], which
//! approximate the arcs with quadratic béziers.

use lyon_geom::{Angle, Arc, QuadraticBezierSegment, point, vector};
use lyon_path::math::Point;
use smallvec::SmallVec;

use crate::{config::Orientation, geometry::RectF};

/// A single path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathVerb {
    /// Starts the contour at a point.
    MoveTo(Point),
    /// Straight line from the current point.
    LineTo(Point),
    /// Elliptical arc inscribed in `oval`.
    ///
    /// Angles are in degrees, `0` pointing along `+x` and positive sweeps
    /// turning clockwise on screen (y grows downward).
    ArcTo {
        /// Bounds of the ellipse the arc lies on.
        oval: RectF,
        /// Angle of the arc's first point.
        start_angle: f32,
        /// Signed angular length of the arc.
        sweep_angle: f32,
    },
    /// Closes the contour back to its first point.
    Close,
}

/// Closed stadium outline for a rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct StadiumPath {
    verbs: SmallVec<[PathVerb; 6]>,
    bounds: RectF,
    radius: f32,
}

/// Builds the stadium outline for `rect`.
///
/// The cap radius is half the extent across the progress axis. A horizontal
/// outline runs along the top edge, around the right cap, back along the
/// bottom edge and around the left cap; a vertical one goes around the top
/// cap, down the right edge, around the bottom cap and up the left edge.
///
/// When the long axis is shorter than the short axis the straight edges run
/// backwards and the caps overlap; the shape degenerates gracefully into a
/// circle-like blob instead of failing.
pub fn compose_rounded_rect(rect: RectF, orientation: Orientation) -> StadiumPath {
    let mut verbs = SmallVec::new();
    let radius;
    match orientation {
        Orientation::Horizontal => {
            radius = ((rect.bottom - rect.top) / 2.0).abs();
            verbs.push(PathVerb::MoveTo(point(rect.left + radius, rect.top)));
            verbs.push(PathVerb::LineTo(point(rect.right - radius, rect.top)));
            verbs.push(PathVerb::ArcTo {
                oval: RectF::new(rect.right - radius * 2.0, rect.top, rect.right, rect.bottom),
                start_angle: -90.0,
                sweep_angle: 180.0,
            });
            verbs.push(PathVerb::LineTo(point(rect.left + radius, rect.bottom)));
            verbs.push(PathVerb::ArcTo {
                oval: RectF::new(rect.left, rect.top, rect.left + radius * 2.0, rect.bottom),
                start_angle: 90.0,
                sweep_angle: 180.0,
            });
        }
        Orientation::Vertical => {
            radius = ((rect.right - rect.left) / 2.0).abs();
            verbs.push(PathVerb::MoveTo(point(rect.left, rect.top + radius)));
            verbs.push(PathVerb::ArcTo {
                oval: RectF::new(rect.left, rect.top, rect.right, rect.top + radius * 2.0),
                start_angle: 180.0,
                sweep_angle: 180.0,
            });
            verbs.push(PathVerb::LineTo(point(rect.right, rect.bottom - radius)));
            verbs.push(PathVerb::ArcTo {
                oval: RectF::new(
                    rect.left,
                    rect.bottom - radius * 2.0,
                    rect.right,
                    rect.bottom,
                ),
                start_angle: 0.0,
                sweep_angle: 180.0,
            });
            verbs.push(PathVerb::LineTo(point(rect.left, rect.top + radius)));
        }
    }
    verbs.push(PathVerb::Close);

    StadiumPath {
        verbs,
        bounds: rect,
        radius,
    }
}

impl StadiumPath {
    /// The path commands, in order.
    pub fn verbs(&self) -> &[PathVerb] {
        &self.verbs
    }

    /// The rectangle the path was built from.
    pub fn bounds(&self) -> RectF {
        self.bounds
    }

    /// Radius of the two caps.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Visits the outline as move/line/quadratic segments.
    ///
    /// Each arc is preceded by a line to its first point when the current
    /// point is elsewhere, matching how canvas APIs append arcs to an open
    /// contour.
    pub fn for_each_segment(&self, mut visit: impl FnMut(Segment)) {
        let mut current = None;
        for verb in &self.verbs {
            match *verb {
                PathVerb::MoveTo(to) => {
                    visit(Segment::MoveTo(to));
                    current = Some(to);
                }
                PathVerb::LineTo(to) => {
                    visit(Segment::LineTo(to));
                    current = Some(to);
                }
                PathVerb::ArcTo {
                    oval,
                    start_angle,
                    sweep_angle,
                } => {
                    let arc = oval_arc(oval, start_angle, sweep_angle);
                    let from = arc.from();
                    match current {
                        None => visit(Segment::MoveTo(from)),
                        Some(at) if (at - from).square_length() > f32::EPSILON => {
                            visit(Segment::LineTo(from))
                        }
                        Some(_) => {}
                    }
                    arc.for_each_quadratic_bezier(&mut |curve: &QuadraticBezierSegment<f32>| {
                        visit(Segment::QuadTo(curve.ctrl, curve.to));
                    });
                    current = Some(arc.to());
                }
                PathVerb::Close => visit(Segment::Close),
            }
        }
    }

    /// Converts to a [`lyon_path::Path`] for tessellation.
    pub fn to_lyon_path(&self) -> lyon_path::Path {
        let mut builder = lyon_path::Path::builder();
        let mut open = false;
        self.for_each_segment(|segment| match segment {
            Segment::MoveTo(to) => {
                if open {
                    builder.end(false);
                }
                builder.begin(to);
                open = true;
            }
            Segment::LineTo(to) => {
                builder.line_to(to);
            }
            Segment::QuadTo(ctrl, to) => {
                builder.quadratic_bezier_to(ctrl, to);
            }
            Segment::Close => {
                if open {
                    builder.end(true);
                    open = false;
                }
            }
        });
        if open {
            builder.end(false);
        }
        builder.build()
    }

    /// Converts to a [`tiny_skia::Path`], or `None` when the outline has no
    /// drawable extent.
    pub fn to_skia_path(&self) -> Option<tiny_skia::Path> {
        let mut builder = tiny_skia::PathBuilder::new();
        self.for_each_segment(|segment| match segment {
            Segment::MoveTo(to) => builder.move_to(to.x, to.y),
            Segment::LineTo(to) => builder.line_to(to.x, to.y),
            Segment::QuadTo(ctrl, to) => builder.quad_to(ctrl.x, ctrl.y, to.x, to.y),
            Segment::Close => builder.close(),
        });
        builder.finish()
    }
}

/// A flattened path segment produced by [`StadiumPath::for_each_segment`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Starts a contour.
    MoveTo(Point),
    /// Straight line.
    LineTo(Point),
    /// Quadratic bézier with a control point and an end point.
    QuadTo(Point, Point),
    /// Closes the contour.
    Close,
}

fn oval_arc(oval: RectF, start_angle: f32, sweep_angle: f32) -> Arc<f32> {
    Arc {
        center: point(
            (oval.left + oval.right) / 2.0,
            (oval.top + oval.bottom) / 2.0,
        ),
        radii: vector(oval.width().abs() / 2.0, oval.height().abs() / 2.0),
        start_angle: Angle::degrees(start_angle),
        sweep_angle: Angle::degrees(sweep_angle),
        x_rotation: Angle::zero(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close_to(a: Point, b: Point) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn horizontal_stadium_matches_the_construction() {
        let rect = RectF::new(0.0, 0.0, 200.0, 40.0);
        let path = compose_rounded_rect(rect, Orientation::Horizontal);

        assert_eq!(path.radius(), 20.0);
        assert_eq!(
            path.verbs(),
            &[
                PathVerb::MoveTo(point(20.0, 0.0)),
                PathVerb::LineTo(point(180.0, 0.0)),
                PathVerb::ArcTo {
                    oval: RectF::new(160.0, 0.0, 200.0, 40.0),
                    start_angle: -90.0,
                    sweep_angle: 180.0,
                },
                PathVerb::LineTo(point(20.0, 40.0)),
                PathVerb::ArcTo {
                    oval: RectF::new(0.0, 0.0, 40.0, 40.0),
                    start_angle: 90.0,
                    sweep_angle: 180.0,
                },
                PathVerb::Close,
            ]
        );
    }

    #[test]
    fn vertical_stadium_uses_half_the_width() {
        let rect = RectF::new(10.0, 0.0, 40.0, 300.0);
        let path = compose_rounded_rect(rect, Orientation::Vertical);

        assert_eq!(path.radius(), 15.0);
        assert_eq!(path.verbs()[0], PathVerb::MoveTo(point(10.0, 15.0)));
        assert_eq!(
            path.verbs()[1],
            PathVerb::ArcTo {
                oval: RectF::new(10.0, 0.0, 40.0, 30.0),
                start_angle: 180.0,
                sweep_angle: 180.0,
            }
        );
        assert_eq!(path.verbs()[2], PathVerb::LineTo(point(40.0, 285.0)));
        assert_eq!(path.verbs().last(), Some(&PathVerb::Close));
    }

    #[test]
    fn arcs_join_the_straight_edges() {
        let rect = RectF::new(0.0, 0.0, 200.0, 40.0);
        let path = compose_rounded_rect(rect, Orientation::Horizontal);

        let mut segments = Vec::new();
        path.for_each_segment(|segment| segments.push(segment));

        // No connecting lines are inserted: every arc starts where the
        // previous edge ended.
        let lines = segments
            .iter()
            .filter(|segment| matches!(segment, Segment::LineTo(_)))
            .count();
        assert_eq!(lines, 2);

        let last_quad_end = segments
            .iter()
            .rev()
            .find_map(|segment| match segment {
                Segment::QuadTo(_, to) => Some(*to),
                _ => None,
            })
            .unwrap();
        assert!(close_to(last_quad_end, point(20.0, 0.0)));
    }

    #[test]
    fn right_cap_bulges_past_the_straight_edge() {
        let rect = RectF::new(0.0, 0.0, 200.0, 40.0);
        let path = compose_rounded_rect(rect, Orientation::Horizontal);
        let mut max_x = f32::MIN;
        path.for_each_segment(|segment| {
            if let Segment::QuadTo(_, to) = segment {
                max_x = max_x.max(to.x);
            }
        });
        assert!((max_x - 200.0).abs() < 1e-3);
    }

    #[test]
    fn square_rect_degenerates_to_a_circle() {
        let rect = RectF::new(0.0, 0.0, 40.0, 40.0);
        let path = compose_rounded_rect(rect, Orientation::Horizontal);
        assert_eq!(path.verbs()[0], PathVerb::MoveTo(point(20.0, 0.0)));
        assert_eq!(path.verbs()[1], PathVerb::LineTo(point(20.0, 0.0)));
        assert!(path.to_skia_path().is_some());
    }

    #[test]
    fn lyon_path_is_a_single_closed_contour() {
        let rect = RectF::new(0.0, 0.0, 100.0, 20.0);
        let path = compose_rounded_rect(rect, Orientation::Horizontal).to_lyon_path();
        let begins = path
            .iter()
            .filter(|event| matches!(event, lyon_path::Event::Begin { .. }))
            .count();
        let closed = path
            .iter()
            .any(|event| matches!(event, lyon_path::Event::End { close: true, .. }));
        assert_eq!(begins, 1);
        assert!(closed);
    }

    #[test]
    fn skia_bounds_match_the_rectangle() {
        let rect = RectF::new(5.0, 5.0, 105.0, 25.0);
        let path = compose_rounded_rect(rect, Orientation::Horizontal)
            .to_skia_path()
            .unwrap();
        let bounds = path.bounds();
        assert!((bounds.left() - 5.0).abs() < 0.01);
        assert!((bounds.right() - 105.0).abs() < 0.01);
        assert!((bounds.top() - 5.0).abs() < 0.01);
        assert!((bounds.bottom() - 25.0).abs() < 0.01);
    }
}
