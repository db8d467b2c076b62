use super::*;

fn seed(hex: &str) -> Seed {
    Seed::parse(hex).unwrap()
}

#[test]
fn same_seed_same_glyph() {
    let a = generate_glyph(seed("0123456789abcdef"), 54.6875);
    let b = generate_glyph(seed("0123456789abcdef"), 54.6875);
    assert_eq!(a, b);
    assert_eq!(a.path_data(), b.path_data());
}

#[test]
fn padding_is_clamped() {
    assert_eq!(effective_pad(-5.0), 0.0);
    assert_eq!(effective_pad(1e9), MAX_PAD);
    assert_eq!(effective_pad(f64::NAN), 0.0);
    assert_eq!(effective_pad(14.0), 14.0);
    let g = generate_glyph(Seed(9), 10_000.0);
    assert_eq!(g.pad, MAX_PAD);
    assert_eq!(g.bounds(), Region::canvas(MAX_PAD));
}

#[test]
fn fill_stats_are_consistent() {
    for s in 0..200u64 {
        let g = generate_glyph(Seed(s << 7 | s), 14.0);
        let t = g.fill.target;
        assert!((10..=22).contains(&t));
        assert!(g.fill.attempts <= t * 10);
        let base = g.paths.len() - usize::from(g.centerline) - g.fill.added;
        assert!(base >= 1);
        assert!(g.paths.len() >= 10);
    }
}

#[test]
fn batch_matches_sequential() {
    let seeds: Vec<Seed> = (0..32u64).map(|s| Seed(s.wrapping_mul(0xdead_beef))).collect();
    let batch = generate_glyphs(&seeds, 14.0);
    assert_eq!(batch.len(), seeds.len());
    for (g, &s) in batch.iter().zip(&seeds) {
        assert_eq!(g, &generate_glyph(s, 14.0));
    }
}

#[test]
fn json_lists_seed_and_path_strings() {
    let g = generate_glyph(seed("deadbeefcafebabe"), 14.0);
    let v: serde_json::Value = serde_json::from_str(&g.to_json().unwrap()).unwrap();
    assert_eq!(v["seed"], "deadbeefcafebabe");
    assert_eq!(v["paths"].as_array().unwrap().len(), g.paths.len());
    assert_eq!(v["paths"][0], g.paths[0].to_string());
}

#[test]
fn bez_paths_cover_every_stroke() {
    let g = generate_glyph(seed("ffffffffffffffff"), 14.0);
    let bez = g.to_bez_paths();
    assert_eq!(bez.len(), g.paths.len());
    assert!(bez.iter().all(|b| !b.elements().is_empty()));
}
