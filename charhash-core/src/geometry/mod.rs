//! Stroke-path representation and the primitive stroke builders.

pub(crate) mod path;
pub(crate) mod primitives;
