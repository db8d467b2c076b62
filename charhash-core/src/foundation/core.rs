use std::{fmt, str::FromStr};

use crate::foundation::error::{CharhashError, CharhashResult};
use crate::foundation::math::round_half_up;

pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Side length of the square logical canvas (viewBox units).
pub const VIEWBOX: f64 = 1000.0;

/// A 64-bit glyph key.
///
/// Canonical text form is 16 lowercase hex digits.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Seed(pub u64);

impl Seed {
    /// Parse a key, accepting an optional `0x`/`0X` prefix and either letter case.
    ///
    /// Surrounding whitespace is ignored. Anything other than exactly 16 hex digits after
    /// prefix removal is rejected with [`CharhashError::InvalidSeed`].
    pub fn parse(input: &str) -> CharhashResult<Self> {
        let s = input.trim();
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.len() != 16 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CharhashError::invalid_seed(format!(
                "expected a 16-hex-character string (64-bit), e.g. \"0123456789abcdef\" or \
                 \"0xDEADBEEFCAFEBABE\", got {input:?}"
            )));
        }
        let v = u64::from_str_radix(digits, 16)
            .map_err(|e| CharhashError::invalid_seed(e.to_string()))?;
        Ok(Self(v))
    }

    /// `(low, high)` 32-bit halves.
    pub fn halves(self) -> (u32, u32) {
        (self.0 as u32, (self.0 >> 32) as u32)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl FromStr for Seed {
    type Err = CharhashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Seed {
    type Error = CharhashError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Seed> for String {
    fn from(seed: Seed) -> Self {
        seed.to_string()
    }
}

/// Axis-aligned rectangle in canvas units, stored as origin + extent.
///
/// Regions are values: splitting or insetting always returns new regions.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Region {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl Region {
    /// Region with origin `(x, y)` and extent `(w, h)`.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// The full canvas shrunk by `pad` on every side.
    pub fn canvas(pad: f64) -> Self {
        Self::new(pad, pad, VIEWBOX - pad * 2.0, VIEWBOX - pad * 2.0)
    }

    /// Right edge.
    pub fn right(self) -> f64 {
        self.x + self.w
    }

    /// Bottom edge.
    pub fn bottom(self) -> f64 {
        self.y + self.h
    }

    /// Shorter of width and height.
    pub fn min_side(self) -> f64 {
        self.w.min(self.h)
    }

    /// Point at fractional position `(fx, fy)` inside the region.
    pub fn at(self, fx: f64, fy: f64) -> Point {
        Point::new(self.x + self.w * fx, self.y + self.h * fy)
    }

    /// Shrink by `m` on every side.
    pub fn inset(self, m: f64) -> Self {
        Self::new(self.x + m, self.y + m, self.w - 2.0 * m, self.h - 2.0 * m)
    }

    /// Split into left/right. The left width is `round(w * ratio)`; the right child takes
    /// the remainder so siblings tile the parent exactly.
    pub fn split_lr(self, ratio: f64) -> (Self, Self) {
        let w_left = round_half_up(self.w * ratio);
        (
            Self::new(self.x, self.y, w_left, self.h),
            Self::new(self.x + w_left, self.y, self.w - w_left, self.h),
        )
    }

    /// Split into top/bottom with the same rounding rule as [`Region::split_lr`].
    pub fn split_tb(self, ratio: f64) -> (Self, Self) {
        let h_top = round_half_up(self.h * ratio);
        (
            Self::new(self.x, self.y, self.w, h_top),
            Self::new(self.x, self.y + h_top, self.w, self.h - h_top),
        )
    }

    /// Same area as a `kurbo` rectangle.
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.right(), self.bottom())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
