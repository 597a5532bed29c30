use super::*;

#[test]
fn test_lane_arithmetic() {
    let a = Score::new(100, -40);
    let b = Score::new(7, 9);
    assert_eq!(a + b, Score::new(107, -31));
    assert_eq!(a - b, Score::new(93, -49));
    assert_eq!(-a, Score::new(-100, 40));
    assert_eq!(b * 3, Score::new(21, 27));

    let mut c = a;
    c += b;
    c -= b * 2;
    assert_eq!(c, Score::new(93, -49));
}

#[test]
fn test_interpolation_boundaries() {
    let s = Score::new(1234, -5678);
    assert_eq!(s.interpolate(0), 1234);
    assert_eq!(s.interpolate(GAME_PHASE_MAX), -5678);
    assert_eq!(s.interpolate(GAME_PHASE_MAX / 2), (1234 - 5678) / 2);
}

#[test]
fn test_interpolation_is_odd() {
    for phase in [0, 1, 777, 32_768, 65_535, GAME_PHASE_MAX] {
        let s = Score::new(12_345, -3);
        assert_eq!((-s).interpolate(phase), -s.interpolate(phase));
    }
}

#[test]
fn test_interpolation_does_not_overflow() {
    let s = Score::new(i32::MAX / 2, i32::MAX / 2);
    assert_eq!(s.interpolate(30_000), i32::MAX / 2);
}

#[test]
fn test_serializes_as_pair() {
    let s = Score::new(1540, 421);
    assert_eq!(serde_json::to_string(&s).unwrap(), "[1540,421]");
    let back: Score = serde_json::from_str("[-3, 8]").unwrap();
    assert_eq!(back, Score::new(-3, 8));
}
