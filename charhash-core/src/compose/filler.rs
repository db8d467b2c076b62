use crate::foundation::core::{Point, Region};
use crate::foundation::math::clamp;
use crate::geometry::path::StrokePath;
use crate::geometry::primitives::{circle, dot, hook_down, line, sweep, wave_h};
use crate::random::stream::RandomStream;

/// Lines per axis of the snapping grid.
const GRID_N: i64 = 5;

/// Attempts allowed per target stroke before giving up.
const ATTEMPTS_PER_TARGET: usize = 10;

/// Outcome of one filling pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FillStats {
    /// Desired total path count.
    pub target: usize,
    /// Loop iterations used (`<= target * 10`).
    pub attempts: usize,
    /// Strokes actually appended.
    pub added: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StrokeKind {
    Horizontal,
    Vertical,
    /// `/`
    RisingSweep,
    /// `\`
    FallingSweep,
    Hook,
    Dot,
    Wave,
    Circle,
}

impl StrokeKind {
    const ALL: [StrokeKind; 8] = [
        StrokeKind::Horizontal,
        StrokeKind::Vertical,
        StrokeKind::RisingSweep,
        StrokeKind::FallingSweep,
        StrokeKind::Hook,
        StrokeKind::Dot,
        StrokeKind::Wave,
        StrokeKind::Circle,
    ];
}

/// Grid intersection `(gx, gy)` jittered by up to `j` per axis, clamped into `b`.
fn grid_point(rng: &mut RandomStream, b: Region, j: f64) -> Point {
    let gx = rng.int_in(0, GRID_N - 1) as f64;
    let gy = rng.int_in(0, GRID_N - 1) as f64;
    let x = b.x + (b.w * gx) / (GRID_N - 1) as f64;
    let y = b.y + (b.h * gy) / (GRID_N - 1) as f64;
    let x = clamp(x + rng.next_signed() * j, b.x, b.right());
    let y = clamp(y + rng.next_signed() * j, b.y, b.bottom());
    Point::new(x, y)
}

/// Draw one candidate stroke of `kind`; `None` when the candidate is too short to keep.
fn candidate(
    rng: &mut RandomStream,
    b: Region,
    kind: StrokeKind,
    a: Point,
    c: Point,
) -> Option<StrokePath> {
    let stroke = match kind {
        StrokeKind::Horizontal => {
            let (x1, x2) = (a.x.min(c.x), a.x.max(c.x));
            if x2 - x1 < b.w * 0.30 {
                return None;
            }
            line(Point::new(x1, a.y), Point::new(x2, a.y))
        }
        StrokeKind::Vertical => {
            let (y1, y2) = (a.y.min(c.y), a.y.max(c.y));
            if y2 - y1 < b.h * 0.30 {
                return None;
            }
            line(Point::new(a.x, y1), Point::new(a.x, y2))
        }
        StrokeKind::RisingSweep => {
            let x1 = b.x + b.w * (0.20 + rng.next_f64() * 0.20);
            let y1 = b.y + b.h * (0.70 + rng.next_f64() * 0.18);
            let x2 = b.x + b.w * (0.70 + rng.next_f64() * 0.20);
            let y2 = b.y + b.h * (0.18 + rng.next_f64() * 0.20);
            sweep(Point::new(x1, y1), Point::new(x2, y2), -1.0)
        }
        StrokeKind::FallingSweep => {
            let x1 = b.x + b.w * (0.22 + rng.next_f64() * 0.20);
            let y1 = b.y + b.h * (0.20 + rng.next_f64() * 0.20);
            let x2 = b.x + b.w * (0.72 + rng.next_f64() * 0.20);
            let y2 = b.y + b.h * (0.74 + rng.next_f64() * 0.18);
            sweep(Point::new(x1, y1), Point::new(x2, y2), 1.0)
        }
        StrokeKind::Hook => {
            let x = b.x + b.w * (0.35 + rng.next_f64() * 0.40);
            let dir = if rng.chance(0.5) { -1.0 } else { 1.0 };
            let size = b.w * (0.10 + rng.next_f64() * 0.06);
            hook_down(x, b.y + b.h * 0.12, b.y + b.h * 0.90, dir, size)
        }
        StrokeKind::Dot => {
            let x = b.x + b.w * (0.20 + rng.next_f64() * 0.60);
            let y = b.y + b.h * (0.15 + rng.next_f64() * 0.70);
            let r = b.w * (0.10 + rng.next_f64() * 0.05);
            dot(rng, Point::new(x, y), r)
        }
        StrokeKind::Wave => {
            let y = b.y + b.h * (0.20 + rng.next_f64() * 0.60);
            let amp = b.h * (0.03 + rng.next_f64() * 0.03);
            let cycles = 2 + rng.int_in(0, 2) as u32;
            wave_h(rng, b.x + b.w * 0.18, b.x + b.w * 0.82, y, amp, cycles)
        }
        StrokeKind::Circle => {
            let cx = b.x + b.w * (0.30 + rng.next_f64() * 0.40);
            let cy = b.y + b.h * (0.30 + rng.next_f64() * 0.40);
            let r = b.min_side() * (0.10 + rng.next_f64() * 0.10);
            circle(Point::new(cx, cy), r)
        }
    };
    Some(stroke)
}

/// Append random grid-snapped strokes until `paths` holds `target` entries or
/// `target * 10` attempts have been spent.
///
/// Accepted strokes are clamped into `b`; dots drawn near the bottom edge would otherwise
/// hang below it.
pub(crate) fn fill_strokes(
    rng: &mut RandomStream,
    b: Region,
    paths: &mut Vec<StrokePath>,
    target: usize,
) -> FillStats {
    let rect = b.to_rect();
    let jitter = b.min_side() * 0.035;
    let max_attempts = target * ATTEMPTS_PER_TARGET;
    let start = paths.len();
    let mut attempts = 0usize;

    while paths.len() < target && attempts < max_attempts {
        attempts += 1;
        let kind = rng.pick(&StrokeKind::ALL);
        let a = grid_point(rng, b, jitter);
        let c = grid_point(rng, b, jitter);
        if let Some(mut stroke) = candidate(rng, b, kind, a, c) {
            stroke.clamp_to(rect);
            paths.push(stroke);
        }
    }

    let stats = FillStats {
        target,
        attempts,
        added: paths.len() - start,
    };
    tracing::debug!(?stats, "filled strokes");
    stats
}

#[cfg(test)]
#[path = "../../tests/unit/compose/filler.rs"]
mod tests;
