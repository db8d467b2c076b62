use super::*;

#[test]
fn seed_accepts_prefix_and_case() {
    let a = Seed::parse("DEADBEEFCAFEBABE").unwrap();
    let b = Seed::parse("0xdeadbeefcafebabe").unwrap();
    let c = Seed::parse("0XDeadBeefCafeBabe").unwrap();
    let d = Seed::parse("  deadbeefcafebabe\n").unwrap();
    assert_eq!(a, b);
    assert_eq!(a, c);
    assert_eq!(a, d);
    assert_eq!(a.to_string(), "deadbeefcafebabe");
}

#[test]
fn seed_rejects_malformed_keys() {
    for bad in [
        "",
        "xyz",
        "abc",
        "0x",
        "0123456789abcde",
        "0123456789abcdef0",
        "0x0x0123456789abcd",
        "+123456789abcdef",
        "0123456789abcdeg",
    ] {
        let err = Seed::parse(bad).unwrap_err();
        assert!(matches!(err, CharhashError::InvalidSeed(_)), "{bad:?}");
    }
}

#[test]
fn seed_halves_split_low_high() {
    let s = Seed::parse("0123456789abcdef").unwrap();
    assert_eq!(s.halves(), (0x89ab_cdef, 0x0123_4567));
    assert_eq!(Seed(0).to_string(), "0000000000000000");
}

#[test]
fn seed_serde_uses_canonical_string() {
    let s: Seed = serde_json::from_str("\"0XFFFFFFFFFFFFFFFF\"").unwrap();
    assert_eq!(s, Seed(u64::MAX));
    assert_eq!(serde_json::to_string(&s).unwrap(), "\"ffffffffffffffff\"");
    assert!(serde_json::from_str::<Seed>("\"abc\"").is_err());
}

#[test]
fn splits_tile_parent_without_gaps() {
    let r = Region::new(14.0, 14.0, 972.0, 972.0);
    let (l, rr) = r.split_lr(0.35);
    assert_eq!(l.w, 340.0);
    assert_eq!(l.w + rr.w, r.w);
    assert_eq!(rr.x, l.right());

    let (t, b) = r.split_tb(0.26);
    assert_eq!(t.h, 253.0);
    assert_eq!(b.y, t.bottom());
    assert_eq!(t.h + b.h, r.h);
}

#[test]
fn split_rounds_half_up() {
    let r = Region::new(0.0, 0.0, 5.0, 5.0);
    let (l, _) = r.split_lr(0.5);
    assert_eq!(l.w, 3.0);
}

#[test]
fn inset_and_canvas() {
    let c = Region::canvas(20.0);
    assert_eq!(c, Region::new(20.0, 20.0, 960.0, 960.0));
    assert_eq!(c.inset(10.0), Region::new(30.0, 30.0, 940.0, 940.0));
    assert_eq!(c.to_rect(), Rect::new(20.0, 20.0, 980.0, 980.0));
    assert_eq!(c.at(0.5, 0.5), Point::new(500.0, 500.0));
}
