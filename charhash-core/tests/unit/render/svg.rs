use super::*;

fn seed() -> Seed {
    Seed::parse("0123456789abcdef").unwrap()
}

#[test]
fn defaults_match_cli_defaults() {
    let o = SvgOptions::default();
    assert_eq!(o.size, 256.0);
    assert_eq!(o.stroke, 16.0);
    assert_eq!(o.pad, 14.0);
    assert_eq!(o.fg, "black");
    assert_eq!(o.bg, "none");
    assert!(o.validate().is_ok());
}

#[test]
fn options_deserialize_with_defaults() {
    let o: SvgOptions = serde_json::from_str(r#"{"size": 512, "bg": "white"}"#).unwrap();
    assert_eq!(o.size, 512.0);
    assert_eq!(o.bg, "white");
    assert_eq!(o.stroke, 16.0);
}

#[test]
fn validate_rejects_out_of_range_numbers() {
    let cases = [
        SvgOptions {
            size: -5.0,
            ..SvgOptions::default()
        },
        SvgOptions {
            size: 0.0,
            ..SvgOptions::default()
        },
        SvgOptions {
            size: f64::INFINITY,
            ..SvgOptions::default()
        },
        SvgOptions {
            stroke: 0.0,
            ..SvgOptions::default()
        },
        SvgOptions {
            stroke: f64::NAN,
            ..SvgOptions::default()
        },
        SvgOptions {
            pad: -1.0,
            ..SvgOptions::default()
        },
    ];
    for o in cases {
        let err = o.validate().unwrap_err();
        assert!(matches!(err, CharhashError::InvalidOption(_)), "{o:?}");
    }
    assert!(
        SvgOptions {
            pad: 0.0,
            ..SvgOptions::default()
        }
        .validate()
        .is_ok()
    );
}

#[test]
fn render_rejects_invalid_options_before_generating() {
    let opts = SvgOptions {
        pad: -1.0,
        ..SvgOptions::default()
    };
    assert!(matches!(
        render_svg(seed(), &opts),
        Err(CharhashError::InvalidOption(_))
    ));
}

#[test]
fn padding_converts_to_viewbox_units() {
    assert_eq!(SvgOptions::default().pad_viewbox(), 54.6875);
    let big = SvgOptions {
        size: 10.0,
        pad: 1000.0,
        ..SvgOptions::default()
    };
    assert_eq!(big.pad_viewbox(), 220.0);
    let tiny = SvgOptions {
        size: 0.3,
        ..SvgOptions::default()
    };
    assert_eq!(tiny.size_px(), 256.0);
    assert_eq!(
        SvgOptions {
            size: 100.5,
            ..SvgOptions::default()
        }
        .size_px(),
        101.0
    );
}

#[test]
fn escapes_attribute_specials() {
    assert_eq!(escape_attr(r#"a&b"<c>"#), "a&amp;b&quot;&lt;c&gt;");
    assert_eq!(escape_attr("#111"), "#111");
}

#[test]
fn default_document_shape() {
    let svg = render_svg(seed(), &SvgOptions::default()).unwrap();
    assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?><svg "#));
    assert!(svg.contains(r#"viewBox="0 0 1000 1000""#));
    assert!(svg.contains(r#"width="256" height="256""#));
    assert!(!svg.contains("<rect"));
    assert!(svg.contains(r#"<g stroke="black" stroke-width="16" stroke-linecap="round" stroke-linejoin="round" vector-effect="non-scaling-stroke">"#));
    assert!(svg.ends_with("</g></svg>"));
    assert!(!svg.contains('\n'));

    let glyph = generate_glyph(seed(), SvgOptions::default().pad_viewbox());
    assert_eq!(svg.matches("<path ").count(), glyph.paths.len());
    assert_eq!(svg, render_glyph_svg(&glyph, &SvgOptions::default()));
}

#[test]
fn background_and_colors_are_escaped() {
    let opts = SvgOptions {
        size: 512.0,
        stroke: 18.5,
        fg: "#111".to_string(),
        bg: "a\"b".to_string(),
        ..SvgOptions::default()
    };
    let svg = render_svg(seed(), &opts).unwrap();
    assert!(svg.contains(r#"<rect x="0" y="0" width="1000" height="1000" fill="a&quot;b"/>"#));
    assert!(svg.contains(r##"stroke="#111" stroke-width="18.5""##));
    assert!(svg.contains(r#"width="512" height="512""#));
}
