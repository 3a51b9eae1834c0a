use evgen_core::FourMomentum;

#[test]
fn at_rest_is_on_shell() {
    let p4 = FourMomentum::at_rest(0.938_272);
    assert_eq!(p4.momentum(), 0.0);
    assert!((p4.mass() - 0.938_272).abs() < 1e-12);
}

#[test]
fn zero_momentum_is_null() {
    let p4 = FourMomentum::zero();
    assert_eq!(p4.energy(), 0.0);
    assert_eq!(p4.mass2(), 0.0);
}

#[test]
fn invariant_mass_of_boosted_state() {
    let p4 = FourMomentum::new(3.0, 4.0, 0.0, 10.0);
    assert!((p4.momentum() - 5.0).abs() < 1e-12);
    assert!((p4.mass2() - 75.0).abs() < 1e-12);
}

#[test]
fn small_negative_mass2_clamps_to_zero() {
    let p4 = FourMomentum::new(1.0, 0.0, 0.0, 1.0 - 1e-12);
    assert_eq!(p4.mass(), 0.0);
}

#[test]
fn serde_roundtrip() {
    let p4 = FourMomentum::new(0.1, -0.2, 0.3, 1.5);
    let json = serde_json::to_string(&p4).unwrap();
    let back: FourMomentum = serde_json::from_str(&json).unwrap();
    assert_eq!(p4, back);
}
