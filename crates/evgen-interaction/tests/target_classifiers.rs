use evgen_interaction::Target;
use evgen_pdg::PdgTable;

#[test]
fn even_even_nucleus() {
    let table = PdgTable::with_defaults();
    let c12 = Target::from_za(6, 12, &table);
    assert!(c12.is_even_even());
    assert!(!c12.is_odd_odd());
    assert!(!c12.is_even_odd());
}

#[test]
fn odd_odd_nucleus() {
    let table = PdgTable::with_defaults();
    let h2 = Target::from_za(1, 2, &table);
    assert!(h2.is_odd_odd());
    assert!(!h2.is_even_even());
    assert!(!h2.is_even_odd());
}

#[test]
fn even_odd_nucleus() {
    let table = PdgTable::with_defaults();
    let he3 = Target::from_za(2, 3, &table);
    assert!(he3.is_even_odd());
    assert!(!he3.is_even_even());
    assert!(!he3.is_odd_odd());
}

#[test]
fn parity_classes_do_not_apply_to_free_nucleons() {
    let table = PdgTable::with_defaults();
    let p = Target::from_za(1, 1, &table);
    assert!(!p.is_even_even());
    assert!(!p.is_odd_odd());
    assert!(!p.is_even_odd());
}

#[test]
fn display_shows_nuclear_identity() {
    let table = PdgTable::with_defaults();
    let fe56 = Target::from_za(26, 56, &table);
    let rendered = fe56.to_string();
    assert!(rendered.contains("Z = 26"));
    assert!(rendered.contains("A = 56"));
}
