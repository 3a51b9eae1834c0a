//! PDG particle-identity constants and classification helpers.
//!
//! Nuclei use the 10-digit PDG nuclear code `100ZZZAAA0`, i.e.
//! `1_000_000_000 + 10_000*Z + 10*A`.

/// Electron.
pub const ELECTRON: i32 = 11;
/// Electron neutrino.
pub const NU_E: i32 = 12;
/// Muon.
pub const MUON: i32 = 13;
/// Muon neutrino.
pub const NU_MU: i32 = 14;
/// Tau lepton.
pub const TAU: i32 = 15;
/// Tau neutrino.
pub const NU_TAU: i32 = 16;

/// Proton.
pub const PROTON: i32 = 2212;
/// Neutron.
pub const NEUTRON: i32 = 2112;

/// Positively charged pion.
pub const PI_PLUS: i32 = 211;
/// Neutral pion.
pub const PI_0: i32 = 111;
/// Negatively charged pion.
pub const PI_MINUS: i32 = -211;

/// Down quark.
pub const QUARK_D: i32 = 1;
/// Up quark.
pub const QUARK_U: i32 = 2;
/// Strange quark.
pub const QUARK_S: i32 = 3;
/// Charm quark.
pub const QUARK_C: i32 = 4;
/// Bottom quark.
pub const QUARK_B: i32 = 5;
/// Top quark.
pub const QUARK_T: i32 = 6;

/// Average nucleon mass in GeV, used for default struck-nucleon kinematics.
pub const NUCLEON_MASS: f64 = 0.938_918_7;

/// Returns true if the code is one of the three neutrino flavours.
pub fn is_neutrino(pdgc: i32) -> bool {
    matches!(pdgc, NU_E | NU_MU | NU_TAU)
}

/// Returns true if the code is one of the three antineutrino flavours.
pub fn is_anti_neutrino(pdgc: i32) -> bool {
    matches!(-pdgc, NU_E | NU_MU | NU_TAU)
}

/// Returns true if the code is a charged lepton or neutrino of any flavour.
pub fn is_lepton(pdgc: i32) -> bool {
    (11..=16).contains(&pdgc.abs())
}

/// Returns true if the code is a proton.
pub fn is_proton(pdgc: i32) -> bool {
    pdgc == PROTON
}

/// Returns true if the code is a neutron.
pub fn is_neutron(pdgc: i32) -> bool {
    pdgc == NEUTRON
}

/// Returns true if the code is a proton or a neutron.
pub fn is_neutron_or_proton(pdgc: i32) -> bool {
    is_proton(pdgc) || is_neutron(pdgc)
}

/// Returns true if the code is a charged or neutral pion.
pub fn is_pion(pdgc: i32) -> bool {
    matches!(pdgc, PI_PLUS | PI_0 | PI_MINUS)
}

/// Returns true if the code is one of the six quarks.
pub fn is_quark(pdgc: i32) -> bool {
    (QUARK_D..=QUARK_T).contains(&pdgc)
}

/// Returns true if the code is one of the six antiquarks.
pub fn is_anti_quark(pdgc: i32) -> bool {
    (QUARK_D..=QUARK_T).contains(&-pdgc)
}

/// Returns true if the code is a PDG nuclear (ion) code.
pub fn is_ion(pdgc: i32) -> bool {
    (1_000_000_000..2_000_000_000).contains(&pdgc)
}

/// Encodes `(A, Z)` as a PDG nuclear code.
pub fn ion_pdg_code(a: i32, z: i32) -> i32 {
    1_000_000_000 + 10_000 * z + 10 * a
}

/// Extracts the proton count from a PDG nuclear code.
pub fn ion_pdg_code_to_z(ion_pdgc: i32) -> i32 {
    (ion_pdgc / 10_000) % 1_000
}

/// Extracts the mass number from a PDG nuclear code.
pub fn ion_pdg_code_to_a(ion_pdgc: i32) -> i32 {
    (ion_pdgc / 10) % 1_000
}
