//! Glyph composition: layout selection, stroke filling and the top-level generator.

pub(crate) mod filler;
pub(crate) mod glyph;
pub(crate) mod layout;
