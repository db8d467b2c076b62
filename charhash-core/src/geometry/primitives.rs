//! Stateless stroke builders. Only [`dot`] and [`wave_h`] draw from the random stream.

use std::f64::consts::PI;

use crate::foundation::core::Point;
use crate::foundation::math::{lerp, polar};
use crate::geometry::path::StrokePath;
use crate::random::stream::RandomStream;

pub(crate) fn line(a: Point, b: Point) -> StrokePath {
    StrokePath::polyline(&[a, b])
}

/// Downward vertical at `x` that stays straight for 82% of its run, then flicks sideways.
///
/// `hook_dir` is `-1.0` (left) or `1.0` (right).
pub(crate) fn hook_down(x: f64, y1: f64, y2: f64, hook_dir: f64, hook_size: f64) -> StrokePath {
    let mid_y = lerp(y1, y2, 0.82);
    let tip = Point::new(x + hook_dir * hook_size, y2 - hook_size * 0.25);
    let ctrl = Point::new(x + hook_dir * hook_size * 0.15, lerp(mid_y, y2, 0.7));

    let mut path = StrokePath::new();
    path.move_to(Point::new(x, y1));
    path.line_to(Point::new(x, mid_y));
    path.quad_to(ctrl, tip);
    path
}

/// Quadratic sweep from `a` to `b`, bowed perpendicular to the chord by `bow`.
pub(crate) fn sweep(a: Point, b: Point, bow: f64) -> StrokePath {
    let ctrl = Point::new(
        lerp(a.x, b.x, 0.55) + bow * (b.y - a.y) * 0.12,
        lerp(a.y, b.y, 0.45) - bow * (b.x - a.x) * 0.12,
    );
    let mut path = StrokePath::new();
    path.move_to(a);
    path.quad_to(ctrl, b);
    path
}

/// Tiny curved tick below `at`; a stroke, never a filled disc.
pub(crate) fn dot(rng: &mut RandomStream, at: Point, r: f64) -> StrokePath {
    let x2 = at.x + rng.next_signed() * r;
    let y2 = at.y + r * (0.9 + rng.next_f64() * 0.3);
    let mut path = StrokePath::new();
    path.move_to(at);
    path.quad_to(
        Point::new((at.x + x2) / 2.0, (at.y + y2) / 2.0),
        Point::new(x2, y2),
    );
    path
}

/// Full circle as two half-circle arcs (0 -> pi -> 0).
pub(crate) fn circle(c: Point, r: f64) -> StrokePath {
    let a0 = polar(c, r, 0.0);
    let a1 = polar(c, r, PI);
    let mut path = StrokePath::new();
    path.move_to(a0);
    path.arc_to(r, false, true, a1);
    path.arc_to(r, false, true, a0);
    path
}

/// Arc of the circle `(c, r)` between two angles; large-arc iff the span exceeds pi.
pub(crate) fn arc(c: Point, r: f64, a_start: f64, a_end: f64, sweep: bool) -> StrokePath {
    let s = polar(c, r, a_start);
    let e = polar(c, r, a_end);
    let large = (a_end - a_start).abs() > PI;
    let mut path = StrokePath::new();
    path.move_to(s);
    path.arc_to(r, large, sweep, e);
    path
}

/// Horizontal wave of `cycles` periods (at least one), alternating up/down half-waves.
/// Each half-wave's amplitude is jittered to 85-115% of `amp`.
pub(crate) fn wave_h(
    rng: &mut RandomStream,
    x1: f64,
    x2: f64,
    y: f64,
    amp: f64,
    cycles: u32,
) -> StrokePath {
    let segments = cycles.max(1) * 2;
    let dx = (x2 - x1) / f64::from(segments);
    let mut path = StrokePath::new();
    path.move_to(Point::new(x1, y));
    for i in 0..segments {
        let i = f64::from(i);
        let x_mid = x1 + dx * (i + 0.5);
        let x_end = x1 + dx * (i + 1.0);
        let dir = if i % 2.0 == 0.0 { -1.0 } else { 1.0 };
        let a = amp * (0.85 + rng.next_f64() * 0.3);
        path.quad_to(Point::new(x_mid, y + dir * a), Point::new(x_end, y));
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/primitives.rs"]
mod tests;
