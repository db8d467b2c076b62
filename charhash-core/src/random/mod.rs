//! Seeded random stream driving every generation decision.

pub(crate) mod stream;
