//! Trigram/hexagram bar stacks and zodiac- or alchemy-like symbols.
//!
//! Recipes are fixed; only the marked optional strokes, bar breaks and dot/wave jitter come
//! from the stream.

use std::f64::consts::PI;

use crate::foundation::core::{Point, Region};
use crate::foundation::math::lerp;
use crate::geometry::path::StrokePath;
use crate::geometry::primitives::{arc, circle, dot, line, sweep, wave_h};
use crate::random::stream::RandomStream;

/// `n` stacked bars, each independently broken in the middle with probability 0.45, with
/// optional side rails.
pub(crate) fn bar_stack(rng: &mut RandomStream, b: Region, paths: &mut Vec<StrokePath>, n: u32) {
    let x1 = b.x + b.w * 0.14;
    let x2 = b.x + b.w * 0.86;
    let gap = b.h / f64::from(n + 1);
    let half_break = b.w * 0.06;
    for i in 0..n {
        let y = b.y + gap * f64::from(i + 1);
        if rng.chance(0.45) {
            let xm = (x1 + x2) / 2.0;
            paths.push(line(Point::new(x1, y), Point::new(xm - half_break, y)));
            paths.push(line(Point::new(xm + half_break, y), Point::new(x2, y)));
        } else {
            paths.push(line(Point::new(x1, y), Point::new(x2, y)));
        }
    }
    if rng.chance(0.25) {
        let top = b.y + gap * 0.8;
        let bottom = b.y + b.h - gap * 0.8;
        for fx in [0.10, 0.90] {
            let x = b.x + b.w * fx;
            paths.push(line(Point::new(x, top), Point::new(x, bottom)));
        }
    }
}

/// Two horn arcs, optionally split by a vertical.
pub(crate) fn aries(rng: &mut RandomStream, b: Region, paths: &mut Vec<StrokePath>) {
    let cx = b.x + b.w * 0.50;
    let y0 = b.y + b.h * 0.74;
    let r = b.min_side() * 0.30;
    paths.push(arc(
        Point::new(cx - r * 0.55, y0),
        r * 0.78,
        PI * 1.15,
        PI * 1.95,
        true,
    ));
    paths.push(arc(
        Point::new(cx + r * 0.55, y0),
        r * 0.78,
        PI * 1.05,
        PI * 0.25,
        false,
    ));
    if rng.chance(0.35) {
        paths.push(line(
            Point::new(cx, b.y + b.h * 0.32),
            Point::new(cx, b.y + b.h * 0.86),
        ));
    }
}

/// Circle crowned by a horn arc.
pub(crate) fn taurus(b: Region, paths: &mut Vec<StrokePath>) {
    let cx = b.x + b.w * 0.50;
    let cy = b.y + b.h * 0.62;
    let r = b.min_side() * 0.22;
    paths.push(circle(Point::new(cx, cy), r));
    let horn_r = b.min_side() * 0.32;
    paths.push(arc(
        Point::new(cx, cy - r * 0.55),
        horn_r,
        PI * 1.10,
        PI * 1.90,
        true,
    ));
}

/// Twin pillars with arched caps.
pub(crate) fn gemini(b: Region, paths: &mut Vec<StrokePath>) {
    let xl = b.x + b.w * 0.34;
    let xr = b.x + b.w * 0.66;
    let y1 = b.y + b.h * 0.18;
    let y2 = b.y + b.h * 0.88;
    paths.push(line(Point::new(xl, y1), Point::new(xl, y2)));
    paths.push(line(Point::new(xr, y1), Point::new(xr, y2)));
    let xc = (xl + xr) / 2.0;
    let cap_r = (xr - xl) * 0.60;
    paths.push(arc(Point::new(xc, y1), cap_r, PI, 0.0, true));
    paths.push(arc(Point::new(xc, y2), cap_r, 0.0, PI, true));
}

/// Two stacked three-cycle waves.
pub(crate) fn aquarius(rng: &mut RandomStream, b: Region, paths: &mut Vec<StrokePath>) {
    let x1 = b.x + b.w * 0.12;
    let x2 = b.x + b.w * 0.88;
    for fy in [0.40, 0.66] {
        let y = b.y + b.h * fy;
        paths.push(wave_h(rng, x1, x2, y, b.h * 0.06, 3));
    }
}

/// Arrow with a two-stroke head and an optional crossbar.
pub(crate) fn sagittarius(rng: &mut RandomStream, b: Region, paths: &mut Vec<StrokePath>) {
    let tail = b.at(0.22, 0.78);
    let tip = b.at(0.82, 0.22);
    paths.push(sweep(tail, tip, 1.0));
    paths.push(line(tip, Point::new(tip.x - b.w * 0.10, tip.y)));
    paths.push(line(tip, Point::new(tip.x, tip.y + b.h * 0.10)));
    if rng.chance(0.35) {
        let xm = lerp(tail.x, tip.x, 0.45);
        let ym = lerp(tail.y, tip.y, 0.45);
        paths.push(line(
            Point::new(xm - b.w * 0.14, ym),
            Point::new(xm + b.w * 0.14, ym),
        ));
    }
}

/// Circle with a center dot.
pub(crate) fn alchemy_sun(rng: &mut RandomStream, b: Region, paths: &mut Vec<StrokePath>) {
    let c = b.at(0.50, 0.52);
    let r = b.min_side() * 0.30;
    paths.push(circle(c, r));
    paths.push(dot(rng, c, r * 0.06));
}

/// Crescent over circle over cross.
pub(crate) fn alchemy_mercury(b: Region, paths: &mut Vec<StrokePath>) {
    let c = b.at(0.50, 0.52);
    let r = b.min_side() * 0.22;
    paths.push(circle(c, r));
    paths.push(arc(
        Point::new(c.x, c.y - r * 1.05),
        r * 0.90,
        PI * 1.10,
        PI * 1.90,
        true,
    ));
    let y_cross = c.y + r * 1.25;
    paths.push(line(
        Point::new(c.x, c.y + r * 0.85),
        Point::new(c.x, y_cross + r * 0.40),
    ));
    paths.push(line(
        Point::new(c.x - r * 0.55, y_cross),
        Point::new(c.x + r * 0.55, y_cross),
    ));
}

/// Closed triangle with apex at `apex_y` and base at `base_y`.
fn triangle(cx: f64, apex_y: f64, base_y: f64, width: f64) -> StrokePath {
    StrokePath::polyline(&[
        Point::new(cx, apex_y),
        Point::new(cx - width / 2.0, base_y),
        Point::new(cx + width / 2.0, base_y),
        Point::new(cx, apex_y),
    ])
}

/// Triangle standing on a cross.
pub(crate) fn alchemy_sulfur(b: Region, paths: &mut Vec<StrokePath>) {
    let cx = b.x + b.w * 0.50;
    let y_top = b.y + b.h * 0.18;
    let y_base = b.y + b.h * 0.62;
    let width = b.w * 0.46;
    paths.push(triangle(cx, y_top, y_base, width));
    let y_cross = b.y + b.h * 0.76;
    paths.push(line(
        Point::new(cx, y_base),
        Point::new(cx, b.y + b.h * 0.92),
    ));
    paths.push(line(
        Point::new(cx - width * 0.22, y_cross),
        Point::new(cx + width * 0.22, y_cross),
    ));
}

/// Upward triangle with a bar through its lower part.
pub(crate) fn alchemy_air(b: Region, paths: &mut Vec<StrokePath>) {
    let cx = b.x + b.w * 0.50;
    let y_top = b.y + b.h * 0.18;
    let y_bot = b.y + b.h * 0.86;
    let width = b.w * 0.56;
    paths.push(triangle(cx, y_top, y_bot, width));
    let y_bar = lerp(y_top, y_bot, 0.62);
    paths.push(line(
        Point::new(cx - width * 0.30, y_bar),
        Point::new(cx + width * 0.30, y_bar),
    ));
}

/// Downward triangle with a bar through its upper part.
pub(crate) fn alchemy_earth(b: Region, paths: &mut Vec<StrokePath>) {
    let cx = b.x + b.w * 0.50;
    let y_top = b.y + b.h * 0.18;
    let y_bot = b.y + b.h * 0.86;
    let width = b.w * 0.56;
    paths.push(triangle(cx, y_bot, y_top, width));
    let y_bar = lerp(y_top, y_bot, 0.38);
    paths.push(line(
        Point::new(cx - width * 0.30, y_bar),
        Point::new(cx + width * 0.30, y_bar),
    ));
}
