//! charhash deterministically maps a 64-bit key to a procedurally generated glyph that
//! resembles an ideographic or occult symbol, drawn as a list of stroke paths.
//!
//! # Pipeline overview
//!
//! 1. **Seed**: `"0x0123456789ABCDEF"` -> [`Seed`] (canonical 16 lowercase hex digits)
//! 2. **Stream**: [`Seed`] -> [`RandomStream`] (xorshift32 over an avalanche-mixed state)
//! 3. **Compose**: pick a [`Layout`] and fill its slots from the [`Component`] catalog
//! 4. **Fill**: add grid-snapped strokes until a drawn target count is reached
//! 5. **Render** (optional): [`Glyph`] -> SVG via [`render_svg`]
//!
//! The same seed and padding always yield the same path list, byte for byte. Every
//! coordinate lies within `[pad, 1000 - pad]` on both axes of the 1000x1000 canvas.
//!
//! ```
//! let seed: charhash::Seed = "deadbeefcafebabe".parse()?;
//! let glyph = charhash::generate_glyph(seed, 14.0);
//! assert!(glyph.paths.len() >= 10);
//! # Ok::<(), charhash::CharhashError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod catalog;
mod compose;
mod foundation;
mod geometry;
mod random;
mod render;

pub use catalog::{Component, OpenSide};
pub use compose::filler::FillStats;
pub use compose::glyph::{
    FILL_TARGET_MAX, FILL_TARGET_MIN, Glyph, MAX_PAD, effective_pad, generate_glyph,
    generate_glyph_paths, generate_glyphs,
};
pub use compose::layout::{Layout, LayoutPlan};
pub use foundation::core::{BezPath, Point, Rect, Region, Seed, VIEWBOX, Vec2};
pub use foundation::error::{CharhashError, CharhashResult};
pub use geometry::path::{PathCmd, StrokePath};
pub use random::stream::RandomStream;
pub use render::svg::{SvgOptions, escape_attr, render_glyph_svg, render_svg};
