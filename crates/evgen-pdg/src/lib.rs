#![deny(missing_docs)]
#![doc = "Particle-identity codes, classification helpers and the particle-property table injected into the interaction model."]

/// PDG code constants and classification helpers.
pub mod codes;
/// Particle-property table and isotope membership.
pub mod table;

pub use codes::{
    ion_pdg_code, ion_pdg_code_to_a, ion_pdg_code_to_z, is_anti_neutrino, is_anti_quark, is_ion,
    is_lepton, is_neutrino, is_neutron, is_neutron_or_proton, is_pion, is_proton, is_quark,
};
pub use table::{ParticleDef, PdgTable};
