//! Fixed catalog of motif generators.
//!
//! Each [`Component`] draws a small cluster of strokes confined to the region it is given,
//! appending to the caller's path list. Selection happens by uniform pick over one of the
//! explicit lists below; the lists are disjoint by convention.

pub(crate) mod ideograph;
pub(crate) mod symbol;

use crate::foundation::core::Region;
use crate::geometry::path::StrokePath;
use crate::random::stream::RandomStream;

/// Named motif generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    /// Box with two inner bars.
    Sun,
    /// Box quartered by a cross.
    Field,
    /// Three-sided box, sometimes closed or barred.
    Mouth,
    /// Trunk, branch bar and two roots.
    Tree,
    /// Vertical plus a stream-placed horizontal.
    Cross,
    /// Two diverging sweeps.
    Eight,
    /// Six stacked solid/broken bars.
    Hexagram,
    /// Three stacked solid/broken bars.
    Trigram,
    /// Two horn arcs, sometimes split by a vertical.
    Aries,
    /// Circle crowned by a horn arc.
    Taurus,
    /// Twin pillars with arched caps.
    Gemini,
    /// Two stacked waves.
    Aquarius,
    /// Arrow with a two-stroke head.
    Sagittarius,
    /// Circle with a center dot.
    AlchemySun,
    /// Crescent over circle over cross.
    AlchemyMercury,
    /// Triangle over cross.
    AlchemySulfur,
    /// Upward triangle with a bar.
    AlchemyAir,
    /// Downward triangle with a bar.
    AlchemyEarth,
    /// Three dots down the left column.
    WaterLeft,
    /// Upright with a short sweep.
    PersonLeft,
    /// Hooked upright crossed by two bars.
    HandLeft,
    /// Two short bars and a center post.
    GrassTop,
}

impl Component {
    /// Candidates for main slots, in pick order.
    pub const MAIN: [Component; 18] = [
        Component::Sun,
        Component::Field,
        Component::Mouth,
        Component::Tree,
        Component::Cross,
        Component::Eight,
        Component::Hexagram,
        Component::Trigram,
        Component::Aries,
        Component::Taurus,
        Component::Gemini,
        Component::Aquarius,
        Component::Sagittarius,
        Component::AlchemySun,
        Component::AlchemyMercury,
        Component::AlchemySulfur,
        Component::AlchemyAir,
        Component::AlchemyEarth,
    ];

    /// Candidates for the narrow left slot of a left-right layout, in pick order.
    pub const LEFT_RADICALS: [Component; 3] = [
        Component::WaterLeft,
        Component::PersonLeft,
        Component::HandLeft,
    ];

    /// Append this motif's strokes, confined to `region`.
    pub fn draw(self, rng: &mut RandomStream, region: Region, paths: &mut Vec<StrokePath>) {
        tracing::trace!(component = ?self, ?region, "draw component");
        match self {
            Component::Sun => ideograph::sun(region, paths),
            Component::Field => ideograph::field(region, paths),
            Component::Mouth => ideograph::mouth(rng, region, paths),
            Component::Tree => ideograph::tree(region, paths),
            Component::Cross => ideograph::cross(rng, region, paths),
            Component::Eight => ideograph::eight(region, paths),
            Component::Hexagram => symbol::bar_stack(rng, region, paths, 6),
            Component::Trigram => symbol::bar_stack(rng, region, paths, 3),
            Component::Aries => symbol::aries(rng, region, paths),
            Component::Taurus => symbol::taurus(region, paths),
            Component::Gemini => symbol::gemini(region, paths),
            Component::Aquarius => symbol::aquarius(rng, region, paths),
            Component::Sagittarius => symbol::sagittarius(rng, region, paths),
            Component::AlchemySun => symbol::alchemy_sun(rng, region, paths),
            Component::AlchemyMercury => symbol::alchemy_mercury(region, paths),
            Component::AlchemySulfur => symbol::alchemy_sulfur(region, paths),
            Component::AlchemyAir => symbol::alchemy_air(region, paths),
            Component::AlchemyEarth => symbol::alchemy_earth(region, paths),
            Component::WaterLeft => ideograph::water_left(rng, region, paths),
            Component::PersonLeft => ideograph::person_left(region, paths),
            Component::HandLeft => ideograph::hand_left(region, paths),
            Component::GrassTop => ideograph::grass_top(region, paths),
        }
    }
}

/// Side left open by an enclosure frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenSide {
    /// Frame opens downward.
    Bottom,
    /// Frame opens to the left.
    Left,
    /// Frame opens to the right.
    Right,
    /// Frame opens upward.
    Top,
}

impl OpenSide {
    /// Pick order.
    pub const ALL: [OpenSide; 4] = [
        OpenSide::Bottom,
        OpenSide::Left,
        OpenSide::Right,
        OpenSide::Top,
    ];
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/component.rs"]
mod tests;
