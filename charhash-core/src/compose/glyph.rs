use rayon::prelude::*;

use crate::compose::filler::{FillStats, fill_strokes};
use crate::compose::layout::{LayoutPlan, compose};
use crate::foundation::core::{BezPath, Point, Region, Seed, VIEWBOX};
use crate::foundation::math::clamp;
use crate::geometry::path::StrokePath;
use crate::geometry::primitives::line;
use crate::random::stream::RandomStream;

/// Largest padding (viewBox units) the generator honors; larger requests are clamped.
pub const MAX_PAD: f64 = 220.0;

/// Smallest filler target path count.
pub const FILL_TARGET_MIN: i64 = 10;
/// Largest filler target path count.
pub const FILL_TARGET_MAX: i64 = 22;

/// One generated glyph: the ordered stroke list plus a record of how it was built.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Glyph {
    /// Key the glyph was generated from.
    pub seed: Seed,
    /// Effective padding in viewBox units.
    pub pad: f64,
    /// Layout and components chosen by the compositor.
    pub plan: LayoutPlan,
    /// Filler bookkeeping.
    pub fill: FillStats,
    /// Whether the closing vertical centerline was appended.
    pub centerline: bool,
    /// Strokes in draw order.
    pub paths: Vec<StrokePath>,
}

impl Glyph {
    /// Side length of the logical canvas.
    pub const CANVAS: f64 = VIEWBOX;

    /// Padded drawing bounds every coordinate lies within.
    pub fn bounds(&self) -> Region {
        Region::canvas(self.pad)
    }

    /// Path data strings in draw order.
    pub fn path_data(&self) -> Vec<String> {
        self.paths.iter().map(ToString::to_string).collect()
    }

    /// Strokes as `kurbo` paths, for consumers that rasterize or measure them.
    pub fn to_bez_paths(&self) -> Vec<BezPath> {
        self.paths.iter().map(StrokePath::to_bez_path).collect()
    }

    /// Pretty-printed JSON record of the glyph.
    pub fn to_json(&self) -> crate::CharhashResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Clamp a requested padding into `[0, MAX_PAD]`; non-finite values become 0.
pub fn effective_pad(pad: f64) -> f64 {
    if pad.is_finite() {
        clamp(pad, 0.0, MAX_PAD)
    } else {
        0.0
    }
}

/// Generate the glyph for `seed` with `pad` viewBox units of padding.
///
/// Pure: the result depends only on the arguments.
#[tracing::instrument(level = "debug", skip_all, fields(seed = %seed, pad = pad))]
pub fn generate_glyph(seed: Seed, pad: f64) -> Glyph {
    let pad = effective_pad(pad);
    let mut rng = RandomStream::new(seed);
    let bounds = Region::canvas(pad);
    let mut paths = Vec::with_capacity(FILL_TARGET_MAX as usize + 1);

    let plan = compose(&mut rng, bounds, &mut paths);

    let target = rng.int_in(FILL_TARGET_MIN, FILL_TARGET_MAX) as usize;
    let fill = fill_strokes(&mut rng, bounds, &mut paths, target);

    let centerline = rng.chance(0.25);
    if centerline {
        let cx = bounds.x + bounds.w * 0.50;
        paths.push(line(
            Point::new(cx, bounds.y + bounds.h * 0.10),
            Point::new(cx, bounds.y + bounds.h * 0.92),
        ));
    }

    tracing::debug!(
        paths = paths.len(),
        draws = rng.draws(),
        centerline,
        "generated glyph"
    );

    Glyph {
        seed,
        pad,
        plan,
        fill,
        centerline,
        paths,
    }
}

/// Path data strings for `seed`; see [`generate_glyph`].
pub fn generate_glyph_paths(seed: Seed, pad: f64) -> Vec<String> {
    generate_glyph(seed, pad).path_data()
}

/// Generate many glyphs in parallel. Output order matches `seeds`.
#[tracing::instrument(level = "debug", skip(seeds), fields(count = seeds.len()))]
pub fn generate_glyphs(seeds: &[Seed], pad: f64) -> Vec<Glyph> {
    seeds
        .par_iter()
        .map(|&seed| generate_glyph(seed, pad))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/compose/glyph.rs"]
mod tests;
