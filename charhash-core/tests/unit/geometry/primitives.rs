use super::*;
use crate::foundation::core::Seed;
use crate::geometry::path::PathCmd;

fn rng() -> RandomStream {
    RandomStream::new(Seed(0x0123_4567_89ab_cdef))
}

#[test]
fn line_is_move_plus_line() {
    let p = line(Point::new(0.0, 0.0), Point::new(100.0, 50.0));
    assert_eq!(p.to_string(), "M 0 0 L 100 50");
}

#[test]
fn hook_is_straight_then_curved() {
    let p = hook_down(100.0, 0.0, 100.0, -1.0, 20.0);
    assert_eq!(p.to_string(), "M 100 0 L 100 82 Q 97 94.6 80 95");
}

#[test]
fn sweep_bows_perpendicular_to_chord() {
    let p = sweep(Point::new(0.0, 0.0), Point::new(100.0, 100.0), 1.0);
    assert_eq!(p.to_string(), "M 0 0 Q 67 33 100 100");
    let q = sweep(Point::new(0.0, 0.0), Point::new(100.0, 100.0), -1.0);
    assert_eq!(q.to_string(), "M 0 0 Q 43 57 100 100");
}

#[test]
fn dot_is_short_stroke_below_anchor() {
    let mut r = rng();
    let p = dot(&mut r, Point::new(500.0, 500.0), 10.0);
    assert_eq!(r.draws(), 2);
    let cmds = p.cmds();
    assert_eq!(cmds.len(), 2);
    let PathCmd::QuadTo(_, end) = cmds[1] else {
        panic!("dot should end in a quadratic segment");
    };
    assert!((end.x - 500.0).abs() <= 10.0);
    assert!(end.y >= 509.0 && end.y <= 512.0);
}

#[test]
fn circle_is_two_half_arcs() {
    let p = circle(Point::new(500.0, 500.0), 100.0);
    assert_eq!(
        p.to_string(),
        "M 600 500 A 100 100 0 0 1 400 500 A 100 100 0 0 1 600 500"
    );
}

#[test]
fn arc_large_flag_tracks_span() {
    let c = Point::new(0.0, 0.0);
    let small = arc(c, 10.0, 0.0, PI * 0.5, true);
    let large = arc(c, 10.0, PI * 1.95, PI * 0.25, false);
    let flags = |p: &StrokePath| match p.cmds()[1] {
        PathCmd::ArcTo {
            large_arc, sweep, ..
        } => (large_arc, sweep),
        _ => panic!("expected arc"),
    };
    assert_eq!(flags(&small), (false, true));
    assert_eq!(flags(&large), (true, false));
}

#[test]
fn wave_alternates_and_jitters_amplitude() {
    let mut r = rng();
    let p = wave_h(&mut r, 0.0, 400.0, 100.0, 20.0, 2);
    assert_eq!(r.draws(), 4);
    let cmds = p.cmds();
    assert_eq!(cmds.len(), 5);
    for (i, cmd) in cmds[1..].iter().enumerate() {
        let PathCmd::QuadTo(ctrl, end) = *cmd else {
            panic!("expected quadratic segment");
        };
        assert_eq!(end.y, 100.0);
        assert_eq!(end.x, 100.0 * (i as f64 + 1.0));
        let offset = ctrl.y - 100.0;
        if i % 2 == 0 {
            assert!((-23.0..=-17.0).contains(&offset));
        } else {
            assert!((17.0..=23.0).contains(&offset));
        }
    }
}

#[test]
fn wave_clamps_cycles_to_one() {
    let mut r = rng();
    let p = wave_h(&mut r, 0.0, 100.0, 0.0, 5.0, 0);
    assert_eq!(p.cmds().len(), 3);
}
