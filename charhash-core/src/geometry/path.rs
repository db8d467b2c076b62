use std::fmt;

use crate::foundation::core::{BezPath, Point, Rect, Vec2};
use crate::foundation::math::{clamp, write_num};

/// Tolerance used when flattening arcs into cubic segments for [`StrokePath::to_bez_path`].
const ARC_TOLERANCE: f64 = 0.1;

/// One drawing command of a stroke.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum PathCmd {
    /// Start a new subpath.
    MoveTo(Point),
    /// Straight segment.
    LineTo(Point),
    /// Control point, end point.
    QuadTo(Point, Point),
    /// Elliptical arc in SVG endpoint parameterization. `x_rotation` is in degrees.
    ArcTo {
        /// Ellipse radii.
        radii: Vec2,
        /// Ellipse rotation.
        x_rotation: f64,
        /// Take the longer of the two candidate arcs.
        large_arc: bool,
        /// Draw in the positive-angle direction.
        sweep: bool,
        /// End point.
        to: Point,
    },
}

/// One continuous pen stroke (never filled).
///
/// `Display` yields the SVG path data string, e.g. `M 10 20 L 30.5 20`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(into = "String")]
pub struct StrokePath {
    cmds: Vec<PathCmd>,
}

impl StrokePath {
    /// Empty stroke.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a [`PathCmd::MoveTo`].
    pub fn move_to(&mut self, p: Point) {
        self.cmds.push(PathCmd::MoveTo(p));
    }

    /// Append a [`PathCmd::LineTo`].
    pub fn line_to(&mut self, p: Point) {
        self.cmds.push(PathCmd::LineTo(p));
    }

    /// Append a [`PathCmd::QuadTo`].
    pub fn quad_to(&mut self, ctrl: Point, p: Point) {
        self.cmds.push(PathCmd::QuadTo(ctrl, p));
    }

    /// Circular arc of radius `r` to `to`.
    pub fn arc_to(&mut self, r: f64, large_arc: bool, sweep: bool, to: Point) {
        self.cmds.push(PathCmd::ArcTo {
            radii: Vec2::new(r, r),
            x_rotation: 0.0,
            large_arc,
            sweep,
            to,
        });
    }

    /// Open polyline through `points`.
    pub fn polyline(points: &[Point]) -> Self {
        let mut path = Self::new();
        for (i, &p) in points.iter().enumerate() {
            if i == 0 {
                path.move_to(p);
            } else {
                path.line_to(p);
            }
        }
        path
    }

    /// Commands in order.
    pub fn cmds(&self) -> &[PathCmd] {
        &self.cmds
    }

    /// `true` when no command has been added.
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Every anchor and control coordinate, in command order. Arc radii are not positions
    /// and are skipped.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.cmds.iter().flat_map(|cmd| {
            let (a, b) = match *cmd {
                PathCmd::MoveTo(p) | PathCmd::LineTo(p) => (p, None),
                PathCmd::QuadTo(c, p) => (c, Some(p)),
                PathCmd::ArcTo { to, .. } => (to, None),
            };
            std::iter::once(a).chain(b)
        })
    }

    /// Pull every anchor and control coordinate into `rect`. Coordinates already inside are
    /// left bit-identical.
    pub fn clamp_to(&mut self, rect: Rect) {
        let fit = |p: &mut Point| {
            p.x = clamp(p.x, rect.x0, rect.x1);
            p.y = clamp(p.y, rect.y0, rect.y1);
        };
        for cmd in &mut self.cmds {
            match cmd {
                PathCmd::MoveTo(p) | PathCmd::LineTo(p) => fit(p),
                PathCmd::QuadTo(c, p) => {
                    fit(c);
                    fit(p);
                }
                PathCmd::ArcTo { to, .. } => fit(to),
            }
        }
    }

    /// Convert to a `kurbo` path; arcs are approximated by cubic segments.
    pub fn to_bez_path(&self) -> BezPath {
        let mut bez = BezPath::new();
        let mut current = Point::ZERO;
        for cmd in &self.cmds {
            match *cmd {
                PathCmd::MoveTo(p) => {
                    bez.move_to(p);
                    current = p;
                }
                PathCmd::LineTo(p) => {
                    bez.line_to(p);
                    current = p;
                }
                PathCmd::QuadTo(c, p) => {
                    bez.quad_to(c, p);
                    current = p;
                }
                PathCmd::ArcTo {
                    radii,
                    x_rotation,
                    large_arc,
                    sweep,
                    to,
                } => {
                    let svg_arc = kurbo::SvgArc {
                        from: current,
                        to,
                        radii,
                        x_rotation: x_rotation.to_radians(),
                        large_arc,
                        sweep,
                    };
                    match kurbo::Arc::from_svg_arc(&svg_arc) {
                        Some(arc) => bez.extend(arc.append_iter(ARC_TOLERANCE)),
                        None => bez.line_to(to),
                    }
                    current = to;
                }
            }
        }
        bez
    }
}

fn write_point(out: &mut String, p: Point) {
    write_num(out, p.x);
    out.push(' ');
    write_num(out, p.y);
}

fn write_flag(out: &mut String, flag: bool) {
    out.push(if flag { '1' } else { '0' });
}

impl PathCmd {
    fn write_to(&self, out: &mut String) {
        match *self {
            PathCmd::MoveTo(p) => {
                out.push_str("M ");
                write_point(out, p);
            }
            PathCmd::LineTo(p) => {
                out.push_str("L ");
                write_point(out, p);
            }
            PathCmd::QuadTo(c, p) => {
                out.push_str("Q ");
                write_point(out, c);
                out.push(' ');
                write_point(out, p);
            }
            PathCmd::ArcTo {
                radii,
                x_rotation,
                large_arc,
                sweep,
                to,
            } => {
                out.push_str("A ");
                write_num(out, radii.x);
                out.push(' ');
                write_num(out, radii.y);
                out.push(' ');
                write_num(out, x_rotation);
                out.push(' ');
                write_flag(out, large_arc);
                out.push(' ');
                write_flag(out, sweep);
                out.push(' ');
                write_point(out, to);
            }
        }
    }
}

impl fmt::Display for StrokePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(self.cmds.len() * 16);
        for (i, cmd) in self.cmds.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            cmd.write_to(&mut out);
        }
        f.write_str(&out)
    }
}

impl From<StrokePath> for String {
    fn from(path: StrokePath) -> Self {
        path.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/path.rs"]
mod tests;
