use evgen_core::FourMomentum;
use evgen_interaction::{
    ExclusiveTag, InitialState, Interaction, InteractionList, InteractionType, ProcessInfo,
    ScatteringType, Target,
};
use evgen_pdg::codes;
use evgen_pdg::PdgTable;

fn sample_interaction(table: &PdgTable) -> Interaction {
    let tgt = Target::from_za(6, 12, table);
    let init_state = InitialState::new(codes::NU_MU, tgt);
    let proc_info = ProcessInfo::new(ScatteringType::Resonant, InteractionType::WeakCC);
    Interaction::new(init_state, proc_info)
}

#[test]
fn process_info_classifiers() {
    let cc = ProcessInfo::new(ScatteringType::Resonant, InteractionType::WeakCC);
    assert!(cc.is_cc());
    assert!(!cc.is_nc());
    assert!(cc.is_resonant());
    assert_eq!(cc.as_string(), "RES;Weak[CC]");

    let nc = ProcessInfo::new(ScatteringType::Diffractive, InteractionType::WeakNC);
    assert!(nc.is_nc());
    assert!(nc.is_diffractive());
    assert_eq!(nc.as_string(), "DFR;Weak[NC]");
}

#[test]
fn exclusive_tag_counts() {
    let mut tag = ExclusiveTag::new();
    tag.set_n_nucleons(1, 0);
    tag.set_n_pions(0, 1, 0);

    assert_eq!(tag.n_nucleons(), 1);
    assert_eq!(tag.n_pions(), 1);
    assert_eq!(tag.as_string(), "p:1,n:0,pi+:0,pi0:1,pi-:0");
}

#[test]
fn exclusive_tag_is_assigned_once() {
    let table = PdgTable::with_defaults();
    let mut interaction = sample_interaction(&table);
    assert!(interaction.excl_tag().is_none());

    let mut tag = ExclusiveTag::new();
    tag.set_n_nucleons(0, 1);
    tag.set_n_pions(1, 0, 0);
    interaction.set_excl_tag(tag);

    let assigned = interaction.excl_tag().unwrap();
    assert_eq!(assigned.n_neutrons, 1);
    assert_eq!(assigned.n_pi_plus, 1);
}

#[test]
fn struck_nucleon_is_assigned_post_construction() {
    let table = PdgTable::with_defaults();
    let mut interaction = sample_interaction(&table);
    assert!(!interaction.init_state().tgt().struck_nucleon_is_set());

    interaction
        .init_state_mut()
        .tgt_mut()
        .set_struck_nucleon_code(codes::NEUTRON, &table);
    assert_eq!(
        interaction.init_state().tgt().struck_nucleon_pdg(),
        codes::NEUTRON
    );
}

#[test]
fn initial_state_carries_the_probe_momentum() {
    let table = PdgTable::with_defaults();
    let mut init_state = InitialState::new(codes::NU_MU, Target::from_za(1, 1, &table));
    assert_eq!(*init_state.probe_p4(), FourMomentum::zero());

    let p4 = FourMomentum::new(0.0, 0.0, 1.0, 1.0);
    init_state.set_probe_p4(p4);
    assert_eq!(*init_state.probe_p4(), p4);
    assert!(init_state.as_string().starts_with("probe:14;tgt:"));
}

#[test]
fn list_preserves_insertion_order() {
    let table = PdgTable::with_defaults();
    let mut list = InteractionList::new();
    assert!(list.is_empty());

    for current in [InteractionType::WeakCC, InteractionType::WeakNC] {
        let tgt = Target::from_za(6, 12, &table);
        let init_state = InitialState::new(codes::NU_MU, tgt);
        list.push(Interaction::new(
            init_state,
            ProcessInfo::new(ScatteringType::Resonant, current),
        ));
    }

    assert_eq!(list.len(), 2);
    assert!(list[0].proc_info().is_cc());
    assert!(list[1].proc_info().is_nc());
    assert!(list.get(2).is_none());

    let currents: Vec<bool> = list.iter().map(|i| i.proc_info().is_cc()).collect();
    assert_eq!(currents, vec![true, false]);
}

#[test]
fn interaction_serde_roundtrip() {
    let table = PdgTable::with_defaults();
    let mut interaction = sample_interaction(&table);
    interaction
        .init_state_mut()
        .tgt_mut()
        .set_struck_nucleon_code(codes::PROTON, &table);
    let mut tag = ExclusiveTag::new();
    tag.set_n_nucleons(1, 0);
    tag.set_n_pions(1, 0, 0);
    interaction.set_excl_tag(tag);

    let json = serde_json::to_string(&interaction).unwrap();
    let back: Interaction = serde_json::from_str(&json).unwrap();
    assert_eq!(interaction, back);
}
