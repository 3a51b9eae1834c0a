use evgen_pdg::codes;
use evgen_pdg::{ParticleDef, PdgTable};

#[test]
fn default_table_knows_the_nucleons() {
    let table = PdgTable::with_defaults();

    let proton = table.find(codes::PROTON).unwrap();
    assert_eq!(proton.name, "proton");
    assert!((proton.mass - 0.938_272).abs() < 1e-9);
    assert_eq!(proton.charge, 1.0);

    let neutron = table.find(codes::NEUTRON).unwrap();
    assert_eq!(neutron.charge, 0.0);
    assert!(neutron.mass > proton.mass);
}

#[test]
fn unknown_codes_degrade_to_zero() {
    let table = PdgTable::with_defaults();
    assert!(table.find(999_999).is_none());
    assert_eq!(table.mass_of(999_999), 0.0);
    assert_eq!(table.charge_of(999_999), 0.0);
}

#[test]
fn isotope_membership() {
    let table = PdgTable::with_defaults();
    assert!(table.is_known_isotope(6, 12));
    assert!(table.is_known_isotope(82, 208));
    assert!(!table.is_known_isotope(6, 11));
    assert!(!table.is_known_isotope(200, 400));
}

#[test]
fn nucleus_mass_lookup_through_ion_code() {
    let table = PdgTable::with_defaults();
    let c12 = codes::ion_pdg_code(12, 6);
    assert!((table.mass_of(c12) - 11.174_862).abs() < 1e-6);
    assert_eq!(table.charge_of(c12), 6.0);
}

#[test]
fn from_entries_rejects_duplicates() {
    let entries = vec![
        (codes::PROTON, ParticleDef::new("proton", 0.938, 1.0)),
        (codes::PROTON, ParticleDef::new("proton-again", 0.938, 1.0)),
    ];
    let err = PdgTable::from_entries(entries).unwrap_err();
    assert_eq!(err.info().code, "duplicate-code");
    assert_eq!(err.info().context.get("code").unwrap(), "2212");
}

#[test]
fn from_entries_builds_a_usable_table() {
    let entries = vec![
        (codes::PROTON, ParticleDef::new("proton", 0.938, 1.0)),
        (codes::NEUTRON, ParticleDef::new("neutron", 0.94, 0.0)),
    ];
    let table = PdgTable::from_entries(entries).unwrap();
    assert_eq!(table.len(), 2);
    assert!(!table.is_empty());
    assert_eq!(table.mass_of(codes::PROTON), 0.938);
}
