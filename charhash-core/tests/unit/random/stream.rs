use super::*;

fn stream(hex: &str) -> RandomStream {
    RandomStream::new(Seed::parse(hex).unwrap())
}

#[test]
fn stream_is_deterministic() {
    let mut a = stream("0123456789abcdef");
    let mut b = stream("0123456789abcdef");
    for _ in 0..64 {
        assert_eq!(a.next_u32(), b.next_u32());
    }
    assert_eq!(a.draws(), 64);
}

#[test]
fn zero_and_one_keys_diverge() {
    let mut zeros = stream("0000000000000000");
    let mut ones = stream("ffffffffffffffff");
    let a: Vec<u32> = (0..8).map(|_| zeros.next_u32()).collect();
    let b: Vec<u32> = (0..8).map(|_| ones.next_u32()).collect();
    assert_ne!(a, b);
}

#[test]
fn swapped_halves_diverge() {
    let mut a = stream("0000000100000002");
    let mut b = stream("0000000200000001");
    assert_ne!(a.next_u32(), b.next_u32());
}

#[test]
fn single_bit_flip_avalanches() {
    let mut total = 0u32;
    for bit in 0..64 {
        let mut a = RandomStream::new(Seed(0));
        let mut b = RandomStream::new(Seed(1u64 << bit));
        total += (a.next_u32() ^ b.next_u32()).count_ones();
    }
    // Average flipped output bits per flipped input bit should sit well away from 0 and 32.
    let avg = f64::from(total) / 64.0;
    assert!(avg > 8.0 && avg < 24.0, "avg flipped bits {avg}");
}

#[test]
fn state_never_reaches_zero() {
    let mut s = stream("deadbeefcafebabe");
    for _ in 0..10_000 {
        assert_ne!(s.next_u32(), 0);
    }
}

#[test]
fn floats_are_unit_interval() {
    let mut s = stream("ffffffffffffffff");
    for _ in 0..10_000 {
        let v = s.next_f64();
        assert!((0.0..1.0).contains(&v));
        let w = s.next_signed();
        assert!((-1.0..1.0).contains(&w));
    }
}

#[test]
fn int_in_covers_inclusive_range() {
    let mut s = stream("0123456789abcdef");
    let mut seen = [false; 13];
    for _ in 0..5_000 {
        let v = s.int_in(10, 22);
        assert!((10..=22).contains(&v));
        seen[(v - 10) as usize] = true;
    }
    assert!(seen.iter().all(|&b| b));
}

#[test]
fn pick_and_chance_consume_one_draw_each() {
    let mut s = stream("0123456789abcdef");
    let _ = s.pick(&['a', 'b', 'c']);
    let _ = s.chance(0.5);
    assert_eq!(s.draws(), 2);
    assert!(!s.chance(0.0));
}
