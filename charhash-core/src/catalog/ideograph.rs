//! Box/grid ideographs, radical-like stroke clusters and the enclosure frame.

use crate::catalog::OpenSide;
use crate::foundation::core::{Point, Region};
use crate::foundation::math::lerp;
use crate::geometry::path::StrokePath;
use crate::geometry::primitives::{dot, hook_down, line, sweep};
use crate::random::stream::RandomStream;

/// Corner coordinates of a region, `(x1, y1, x2, y2)`.
fn corners(b: Region) -> (f64, f64, f64, f64) {
    (b.x, b.y, b.right(), b.bottom())
}

fn closed_box(x1: f64, y1: f64, x2: f64, y2: f64) -> StrokePath {
    StrokePath::polyline(&[
        Point::new(x1, y1),
        Point::new(x2, y1),
        Point::new(x2, y2),
        Point::new(x1, y2),
        Point::new(x1, y1),
    ])
}

/// Horizontal bar spanning 12%..88% of `[x1, x2]`.
fn inner_bar(x1: f64, x2: f64, y: f64) -> StrokePath {
    line(
        Point::new(lerp(x1, x2, 0.12), y),
        Point::new(lerp(x1, x2, 0.88), y),
    )
}

pub(crate) fn mouth(rng: &mut RandomStream, b: Region, paths: &mut Vec<StrokePath>) {
    let (x1, y1, x2, y2) = corners(b.inset(b.min_side() * 0.12));
    paths.push(StrokePath::polyline(&[
        Point::new(x1, y1),
        Point::new(x2, y1),
        Point::new(x2, y2),
        Point::new(x1, y2),
    ]));
    if rng.chance(0.55) {
        paths.push(inner_bar(x1, x2, lerp(y1, y2, 0.55)));
    } else if rng.chance(0.25) {
        paths.push(line(Point::new(x1, y1), Point::new(x1, y2)));
    }
}

pub(crate) fn sun(b: Region, paths: &mut Vec<StrokePath>) {
    let (x1, y1, x2, y2) = corners(b.inset(b.min_side() * 0.10));
    paths.push(closed_box(x1, y1, x2, y2));
    paths.push(inner_bar(x1, x2, lerp(y1, y2, 0.38)));
    paths.push(inner_bar(x1, x2, lerp(y1, y2, 0.68)));
}

pub(crate) fn field(b: Region, paths: &mut Vec<StrokePath>) {
    let (x1, y1, x2, y2) = corners(b.inset(b.min_side() * 0.10));
    paths.push(closed_box(x1, y1, x2, y2));
    let xm = lerp(x1, x2, 0.50);
    let ym = lerp(y1, y2, 0.52);
    paths.push(line(Point::new(xm, y1), Point::new(xm, y2)));
    paths.push(line(Point::new(x1, ym), Point::new(x2, ym)));
}

pub(crate) fn tree(b: Region, paths: &mut Vec<StrokePath>) {
    let cx = b.x + b.w * 0.50;
    paths.push(line(
        Point::new(cx, b.y + b.h * 0.12),
        Point::new(cx, b.y + b.h * 0.92),
    ));
    let y = b.y + b.h * 0.42;
    paths.push(line(
        Point::new(b.x + b.w * 0.18, y),
        Point::new(b.x + b.w * 0.82, y),
    ));
    let fork = Point::new(cx, y);
    paths.push(sweep(fork, b.at(0.22, 0.80), -1.0));
    paths.push(sweep(fork, b.at(0.78, 0.80), 1.0));
}

pub(crate) fn cross(rng: &mut RandomStream, b: Region, paths: &mut Vec<StrokePath>) {
    let cx = b.x + b.w * 0.52;
    paths.push(line(
        Point::new(cx, b.y + b.h * 0.14),
        Point::new(cx, b.y + b.h * 0.88),
    ));
    let y = b.y + b.h * (0.38 + rng.next_f64() * 0.18);
    paths.push(line(
        Point::new(b.x + b.w * 0.18, y),
        Point::new(b.x + b.w * 0.84, y),
    ));
}

pub(crate) fn eight(b: Region, paths: &mut Vec<StrokePath>) {
    let apex = b.at(0.50, 0.26);
    paths.push(sweep(apex, b.at(0.26, 0.86), -1.0));
    paths.push(sweep(apex, b.at(0.76, 0.86), 1.0));
}

pub(crate) fn water_left(rng: &mut RandomStream, b: Region, paths: &mut Vec<StrokePath>) {
    let x = b.x + b.w * 0.58;
    let y1 = b.y + b.h * 0.18;
    let y2 = b.y + b.h * 0.46;
    let y3 = b.y + b.h * 0.76;
    paths.push(dot(rng, Point::new(x, y1), b.w * 0.10));
    paths.push(dot(rng, Point::new(x - b.w * 0.08, y2), b.w * 0.12));
    paths.push(dot(rng, Point::new(x + b.w * 0.02, y3), b.w * 0.14));
}

pub(crate) fn person_left(b: Region, paths: &mut Vec<StrokePath>) {
    let x = b.x + b.w * 0.58;
    paths.push(line(
        Point::new(x, b.y + b.h * 0.10),
        Point::new(x, b.y + b.h * 0.92),
    ));
    paths.push(sweep(
        Point::new(x, b.y + b.h * 0.40),
        b.at(0.78, 0.86),
        1.0,
    ));
}

pub(crate) fn hand_left(b: Region, paths: &mut Vec<StrokePath>) {
    let x = b.x + b.w * 0.56;
    paths.push(hook_down(
        x,
        b.y + b.h * 0.10,
        b.y + b.h * 0.92,
        -1.0,
        b.w * 0.12,
    ));
    let ya = b.y + b.h * 0.34;
    let yb = b.y + b.h * 0.54;
    paths.push(line(
        Point::new(b.x + b.w * 0.28, ya),
        Point::new(b.x + b.w * 0.88, ya),
    ));
    paths.push(line(
        Point::new(b.x + b.w * 0.22, yb),
        Point::new(b.x + b.w * 0.78, yb),
    ));
}

pub(crate) fn grass_top(b: Region, paths: &mut Vec<StrokePath>) {
    let y = b.y + b.h * 0.36;
    paths.push(line(
        Point::new(b.x + b.w * 0.12, y),
        Point::new(b.x + b.w * 0.46, y),
    ));
    paths.push(line(
        Point::new(b.x + b.w * 0.54, y),
        Point::new(b.x + b.w * 0.88, y),
    ));
    paths.push(line(b.at(0.50, 0.16), b.at(0.50, 0.62)));
}

/// Two pen runs leaving the same corner.
fn frame_path(corner: Point, first: &[Point], second: &[Point]) -> StrokePath {
    let mut path = StrokePath::new();
    for run in [first, second] {
        path.move_to(corner);
        for &pt in run {
            path.line_to(pt);
        }
    }
    path
}

/// Three-sided frame around `b` leaving `open` uncovered, plus an optional inner gate post.
pub(crate) fn enclosure_frame(
    rng: &mut RandomStream,
    b: Region,
    open: OpenSide,
    paths: &mut Vec<StrokePath>,
) {
    let bb = b.inset(b.min_side() * 0.08);
    let (x1, y1, x2, y2) = corners(bb);
    let gap = bb.min_side() * 0.26;

    let p = Point::new;
    let frame = match open {
        OpenSide::Bottom => frame_path(p(x1, y1), &[p(x2, y1), p(x2, y2)], &[p(x1, y2)]),
        OpenSide::Top => frame_path(p(x1, y2), &[p(x2, y2), p(x2, y1)], &[p(x1, y1)]),
        OpenSide::Right => frame_path(p(x1, y1), &[p(x2, y1)], &[p(x1, y2), p(x2, y2)]),
        OpenSide::Left => frame_path(p(x2, y1), &[p(x1, y1)], &[p(x2, y2), p(x1, y2)]),
    };
    paths.push(frame);

    if rng.chance(0.35) {
        let x = if open == OpenSide::Left {
            lerp(x1, x2, 0.72)
        } else {
            lerp(x1, x2, 0.28)
        };
        paths.push(line(
            Point::new(x, y1 + gap * 0.55),
            Point::new(x, y2 - gap * 0.40),
        ));
    }
}
