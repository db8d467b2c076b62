//! SVG serialization of generated glyphs.

pub(crate) mod svg;
