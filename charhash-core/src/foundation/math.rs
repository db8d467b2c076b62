use std::fmt::Write as _;

use kurbo::Point;

/// Round to the nearest integer, ties toward positive infinity.
///
/// Region splits and path formatting depend on this exact rule; `f64::round` ties away from
/// zero and would change the seed-to-glyph mapping for negative halves.
pub(crate) fn round_half_up(v: f64) -> f64 {
    let r = v.floor();
    if v - r >= 0.5 { r + 1.0 } else { r }
}

/// Clamp without panicking on inverted bounds (`lo` wins).
pub(crate) fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    lo.max(hi.min(v))
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub(crate) fn polar(c: Point, r: f64, ang_rad: f64) -> Point {
    Point::new(c.x + r * ang_rad.cos(), c.y + r * ang_rad.sin())
}

/// Append a compact, stable rendering of `v`: integers without a decimal point, everything
/// else rounded to one decimal place.
pub(crate) fn write_num(out: &mut String, v: f64) {
    let v = if v.fract() == 0.0 {
        v
    } else {
        round_half_up(v * 10.0) / 10.0
    };
    // -0.0 + 0.0 == +0.0
    let _ = write!(out, "{}", v + 0.0);
}

pub(crate) fn fmt_num(v: f64) -> String {
    let mut s = String::new();
    write_num(&mut s, v);
    s
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
