use evgen_core::FourMomentum;
use evgen_interaction::Target;
use evgen_pdg::codes;
use evgen_pdg::PdgTable;

#[test]
fn setting_a_valid_struck_nucleon_resets_its_momentum() {
    let table = PdgTable::with_defaults();
    let mut tgt = Target::from_za(6, 12, &table);

    tgt.set_struck_nucleon_code(codes::NEUTRON, &table);
    assert!(tgt.struck_nucleon_is_set());
    assert_eq!(tgt.struck_nucleon_pdg(), codes::NEUTRON);
    assert_eq!(tgt.struck_nucleon_p4().momentum(), 0.0);
    assert!((tgt.struck_nucleon_mass(&table) - table.mass_of(codes::NEUTRON)).abs() < 1e-12);
}

#[test]
fn struck_nucleon_assignment_is_idempotent() {
    let table = PdgTable::with_defaults();
    let mut once = Target::from_za(6, 12, &table);
    let mut twice = Target::from_za(6, 12, &table);

    once.set_struck_nucleon_code(codes::PROTON, &table);
    twice.set_struck_nucleon_code(codes::PROTON, &table);
    twice.set_struck_nucleon_code(codes::PROTON, &table);

    assert_eq!(once.struck_nucleon_p4(), twice.struck_nucleon_p4());
    assert_eq!(once.struck_nucleon_pdg(), twice.struck_nucleon_pdg());
}

#[test]
fn invalid_struck_nucleon_clears_the_substate() {
    let table = PdgTable::with_defaults();
    let mut tgt = Target::from_za(6, 12, &table);

    tgt.set_struck_nucleon_code(codes::PI_PLUS, &table);
    assert!(!tgt.struck_nucleon_is_set());
    assert_eq!(tgt.struck_nucleon_pdg(), 0);
    assert_eq!(tgt.struck_nucleon_mass(&table), 0.0);
}

#[test]
fn boosted_struck_nucleon_survives_until_recoded() {
    let table = PdgTable::with_defaults();
    let mut tgt = Target::from_za(6, 12, &table);
    tgt.set_struck_nucleon_code(codes::PROTON, &table);

    let boosted = FourMomentum::new(0.0, 0.0, 0.2, 1.0);
    tgt.set_struck_nucleon_p4(boosted);
    assert_eq!(*tgt.struck_nucleon_p4(), boosted);

    // Re-coding couples identity and kinematics: back to at-rest on-shell.
    tgt.set_struck_nucleon_code(codes::PROTON, &table);
    assert_eq!(tgt.struck_nucleon_p4().momentum(), 0.0);
}

#[test]
fn non_quark_struck_quark_code_is_a_noop() {
    let table = PdgTable::with_defaults();
    let mut tgt = Target::from_za(6, 12, &table);

    tgt.set_struck_quark_code(codes::PROTON);
    assert!(!tgt.struck_quark_is_set());
    assert_eq!(tgt.struck_quark_pdg(), 0);

    tgt.set_struck_quark_code(codes::QUARK_U);
    assert!(tgt.struck_quark_is_set());
    assert_eq!(tgt.struck_quark_pdg(), codes::QUARK_U);

    // Invalid code after a valid one leaves the earlier assignment alone.
    tgt.set_struck_quark_code(0);
    assert_eq!(tgt.struck_quark_pdg(), codes::QUARK_U);
}

#[test]
fn as_string_carries_both_annotations() {
    let table = PdgTable::with_defaults();
    let mut tgt = Target::from_za(6, 12, &table);
    tgt.set_struck_nucleon_code(codes::PROTON, &table);
    tgt.set_struck_quark_code(codes::QUARK_D);

    let s = tgt.as_string();
    assert!(s.starts_with("1000060120"));
    assert!(s.contains("[N=2212]"));
    assert!(s.contains("[q=1(v)]"));

    tgt.set_struck_sea_quark(true);
    assert!(tgt.struck_quark_is_from_sea());
    assert!(tgt.as_string().contains("[q=1(s)]"));
}

#[test]
fn copies_do_not_alias_the_struck_momentum() {
    let table = PdgTable::with_defaults();
    let mut original = Target::from_za(6, 12, &table);
    original.set_struck_nucleon_code(codes::PROTON, &table);

    let copy = original.clone();
    original.set_struck_nucleon_p4(FourMomentum::new(0.0, 0.0, 0.5, 1.2));

    assert_eq!(copy.struck_nucleon_p4().momentum(), 0.0);
    assert_ne!(copy.struck_nucleon_p4(), original.struck_nucleon_p4());
}
