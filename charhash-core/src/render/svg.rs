use std::fmt::Write as _;

use crate::compose::glyph::{Glyph, generate_glyph};
use crate::foundation::core::{Seed, VIEWBOX};
use crate::foundation::error::{CharhashError, CharhashResult};
use crate::foundation::math::{clamp, fmt_num, round_half_up};

/// Output-pixel padding is clamped to this before conversion to viewBox units.
const MAX_PAD_PX: f64 = 400.0;

/// Output formatting options.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SvgOptions {
    /// Output width and height in px.
    pub size: f64,
    /// Stroke width in px (constant under viewBox scaling).
    pub stroke: f64,
    /// Padding in output px.
    pub pad: f64,
    /// Stroke color.
    pub fg: String,
    /// Background fill; the literal `none` omits the background rectangle.
    pub bg: String,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            size: 256.0,
            stroke: 16.0,
            pad: 14.0,
            fg: "black".to_string(),
            bg: "none".to_string(),
        }
    }
}

impl SvgOptions {
    /// Reject non-finite or out-of-range numeric options.
    pub fn validate(&self) -> CharhashResult<()> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(CharhashError::invalid_option(
                "--size must be a positive number",
            ));
        }
        if !self.stroke.is_finite() || self.stroke <= 0.0 {
            return Err(CharhashError::invalid_option(
                "--stroke must be a positive number",
            ));
        }
        if !self.pad.is_finite() || self.pad < 0.0 {
            return Err(CharhashError::invalid_option("--pad must be >= 0"));
        }
        Ok(())
    }

    /// Output size rounded to whole pixels; sizes rounding to zero fall back to the default.
    pub fn size_px(&self) -> f64 {
        let size = round_half_up(self.size);
        if size > 0.0 {
            size
        } else {
            Self::default().size
        }
    }

    /// Padding converted to viewBox units so visual padding is stable across output sizes.
    pub fn pad_viewbox(&self) -> f64 {
        let pad_px = if self.pad.is_finite() {
            clamp(self.pad, 0.0, MAX_PAD_PX)
        } else {
            0.0
        };
        clamp(
            pad_px * VIEWBOX / self.size_px().max(1.0),
            0.0,
            crate::compose::glyph::MAX_PAD,
        )
    }
}

/// Escape `& " < >` for use inside a double-quoted attribute.
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Validate `opts`, generate the glyph for `seed` and serialize it.
#[tracing::instrument(level = "debug", skip_all, fields(seed = %seed))]
pub fn render_svg(seed: Seed, opts: &SvgOptions) -> CharhashResult<String> {
    opts.validate()?;
    let glyph = generate_glyph(seed, opts.pad_viewbox());
    Ok(render_glyph_svg(&glyph, opts))
}

/// Serialize an already generated glyph as a single-line SVG document.
pub fn render_glyph_svg(glyph: &Glyph, opts: &SvgOptions) -> String {
    let size = escape_attr(&fmt_num(opts.size_px()));
    let vb = fmt_num(VIEWBOX);
    let mut out = String::with_capacity(512 + glyph.paths.len() * 96);

    out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {vb} {vb}" fill="none">"#
    );
    if opts.bg != "none" && !opts.bg.is_empty() {
        let _ = write!(
            out,
            r#"<rect x="0" y="0" width="{vb}" height="{vb}" fill="{}"/>"#,
            escape_attr(&opts.bg)
        );
    }
    let _ = write!(
        out,
        r#"<g stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round" vector-effect="non-scaling-stroke">"#,
        escape_attr(&opts.fg),
        escape_attr(&opts.stroke.to_string()),
    );
    for path in &glyph.paths {
        let _ = write!(out, r#"<path d="{path}" />"#);
    }
    out.push_str("</g></svg>");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
