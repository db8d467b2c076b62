use crate::catalog::{Component, OpenSide, ideograph};
use crate::foundation::core::Region;
use crate::geometry::path::StrokePath;
use crate::random::stream::RandomStream;

/// Top-level subdivision of the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// One main component, sometimes under a grass-like top radical.
    Single,
    /// Narrow left radical beside a main component.
    LeftRight,
    /// Grass or cross motif above a main component.
    TopBottom,
    /// Open frame around an inset main component.
    Enclosure,
}

impl Layout {
    /// Pick order.
    pub const ALL: [Layout; 4] = [
        Layout::Single,
        Layout::LeftRight,
        Layout::TopBottom,
        Layout::Enclosure,
    ];
}

/// What the compositor chose for one glyph.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutPlan {
    /// Chosen subdivision.
    pub layout: Layout,
    /// Components in draw order.
    pub components: Vec<Component>,
    /// Set only for [`Layout::Enclosure`].
    pub open_side: Option<OpenSide>,
}

impl LayoutPlan {
    fn place(
        &mut self,
        component: Component,
        rng: &mut RandomStream,
        region: Region,
        paths: &mut Vec<StrokePath>,
    ) {
        component.draw(rng, region, paths);
        self.components.push(component);
    }

    /// Pick a main component, then draw it.
    fn place_main(&mut self, rng: &mut RandomStream, region: Region, paths: &mut Vec<StrokePath>) {
        let main = rng.pick(&Component::MAIN);
        self.place(main, rng, region, paths);
    }
}

/// Choose a layout and populate its slots, appending strokes to `paths`.
pub(crate) fn compose(
    rng: &mut RandomStream,
    bounds: Region,
    paths: &mut Vec<StrokePath>,
) -> LayoutPlan {
    let layout = rng.pick(&Layout::ALL);
    let mut plan = LayoutPlan {
        layout,
        components: Vec::with_capacity(3),
        open_side: None,
    };

    match layout {
        Layout::Single => {
            if rng.chance(0.38) {
                let ratio = 0.26 + rng.next_f64() * 0.08;
                let (top, rest) = bounds.split_tb(ratio);
                plan.place(Component::GrassTop, rng, top, paths);
                plan.place_main(rng, rest.inset(rest.w * 0.03), paths);
            } else {
                plan.place_main(rng, bounds.inset(bounds.w * 0.04), paths);
            }
        }
        Layout::LeftRight => {
            let ratio = 0.30 + rng.next_f64() * 0.10;
            let (left, right) = bounds.split_lr(ratio);
            let radical = rng.pick(&Component::LEFT_RADICALS);
            plan.place(radical, rng, left.inset(left.w * 0.10), paths);

            let slot = right.inset(right.w * 0.06);
            if rng.chance(0.30) {
                let ratio = 0.22 + rng.next_f64() * 0.10;
                let (top, rest) = slot.split_tb(ratio);
                plan.place(Component::Cross, rng, top, paths);
                plan.place_main(rng, rest, paths);
            } else {
                plan.place_main(rng, slot, paths);
            }
        }
        Layout::TopBottom => {
            let ratio = 0.36 + rng.next_f64() * 0.10;
            let (top, bottom) = bounds.split_tb(ratio);
            if rng.chance(0.55) {
                plan.place(Component::GrassTop, rng, top.inset(top.h * 0.10), paths);
            } else {
                plan.place(Component::Cross, rng, top.inset(top.h * 0.12), paths);
            }
            plan.place_main(rng, bottom.inset(bottom.w * 0.06), paths);
        }
        Layout::Enclosure => {
            let open = rng.pick(&OpenSide::ALL);
            plan.open_side = Some(open);
            ideograph::enclosure_frame(rng, bounds, open, paths);
            let inner = bounds.inset(bounds.w * (0.18 + rng.next_f64() * 0.05));
            plan.place_main(rng, inner, paths);
        }
    }

    tracing::debug!(
        layout = ?plan.layout,
        components = ?plan.components,
        open_side = ?plan.open_side,
        paths = paths.len(),
        "composed layout"
    );
    plan
}

#[cfg(test)]
#[path = "../../tests/unit/compose/layout.rs"]
mod tests;
