//! Particle-property table keyed by PDG code.
//!
//! The table is a process-wide collaborator: constructed once at startup and
//! passed by reference to everything that performs identity lookups. Absence
//! of a code is not an error; callers degrade to a defined zero value.

use std::collections::BTreeMap;

use evgen_core::{ErrorInfo, EvgError};
use serde::{Deserialize, Serialize};

use crate::codes::{self, ion_pdg_code};

/// Static properties of a single particle or nucleus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleDef {
    /// Human readable particle name.
    pub name: String,
    /// Mass in GeV.
    pub mass: f64,
    /// Electric charge in units of +e.
    pub charge: f64,
}

impl ParticleDef {
    /// Creates a particle definition.
    pub fn new(name: impl Into<String>, mass: f64, charge: f64) -> Self {
        Self {
            name: name.into(),
            mass,
            charge,
        }
    }
}

/// Particle-property table keyed by PDG code.
///
/// Ion entries double as the isotope-validity chart: a nucleus `(Z, A)` is a
/// known isotope iff its nuclear code has an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PdgTable {
    entries: BTreeMap<i32, ParticleDef>,
}

impl PdgTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from explicit entries, rejecting duplicate codes.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (i32, ParticleDef)>,
    ) -> Result<Self, EvgError> {
        let mut table = Self::new();
        for (code, def) in entries {
            if table.entries.insert(code, def).is_some() {
                return Err(EvgError::Pdg(
                    ErrorInfo::new("duplicate-code", "duplicate particle code in table")
                        .with_context("code", code.to_string()),
                ));
            }
        }
        Ok(table)
    }

    /// Builds the default table: nucleons, charged leptons, neutrinos,
    /// pions, quarks and a fixed set of common isotopes.
    pub fn with_defaults() -> Self {
        let mut table = Self::new();

        table.insert(codes::PROTON, ParticleDef::new("proton", 0.938_272, 1.0));
        table.insert(codes::NEUTRON, ParticleDef::new("neutron", 0.939_565, 0.0));

        table.insert(codes::ELECTRON, ParticleDef::new("e-", 0.000_511, -1.0));
        table.insert(codes::MUON, ParticleDef::new("mu-", 0.105_658, -1.0));
        table.insert(codes::TAU, ParticleDef::new("tau-", 1.776_86, -1.0));
        table.insert(-codes::ELECTRON, ParticleDef::new("e+", 0.000_511, 1.0));
        table.insert(-codes::MUON, ParticleDef::new("mu+", 0.105_658, 1.0));
        table.insert(-codes::TAU, ParticleDef::new("tau+", 1.776_86, 1.0));

        table.insert(codes::NU_E, ParticleDef::new("nu_e", 0.0, 0.0));
        table.insert(codes::NU_MU, ParticleDef::new("nu_mu", 0.0, 0.0));
        table.insert(codes::NU_TAU, ParticleDef::new("nu_tau", 0.0, 0.0));
        table.insert(-codes::NU_E, ParticleDef::new("nu_e_bar", 0.0, 0.0));
        table.insert(-codes::NU_MU, ParticleDef::new("nu_mu_bar", 0.0, 0.0));
        table.insert(-codes::NU_TAU, ParticleDef::new("nu_tau_bar", 0.0, 0.0));

        table.insert(codes::PI_PLUS, ParticleDef::new("pi+", 0.139_570, 1.0));
        table.insert(codes::PI_0, ParticleDef::new("pi0", 0.134_977, 0.0));
        table.insert(codes::PI_MINUS, ParticleDef::new("pi-", 0.139_570, -1.0));

        table.insert(codes::QUARK_D, ParticleDef::new("d", 0.004_67, -1.0 / 3.0));
        table.insert(codes::QUARK_U, ParticleDef::new("u", 0.002_16, 2.0 / 3.0));
        table.insert(codes::QUARK_S, ParticleDef::new("s", 0.093_4, -1.0 / 3.0));
        table.insert(codes::QUARK_C, ParticleDef::new("c", 1.27, 2.0 / 3.0));
        table.insert(codes::QUARK_B, ParticleDef::new("b", 4.18, -1.0 / 3.0));
        table.insert(codes::QUARK_T, ParticleDef::new("t", 172.69, 2.0 / 3.0));
        for q in codes::QUARK_D..=codes::QUARK_T {
            if let Some(def) = table.entries.get(&q).cloned() {
                table.insert(
                    -q,
                    ParticleDef::new(format!("{}_bar", def.name), def.mass, -def.charge),
                );
            }
        }

        table.insert_isotope(1, 2, "H2", 1.875_613);
        table.insert_isotope(2, 3, "He3", 2.808_391);
        table.insert_isotope(2, 4, "He4", 3.727_379);
        table.insert_isotope(6, 12, "C12", 11.174_862);
        table.insert_isotope(8, 16, "O16", 14.895_079);
        table.insert_isotope(18, 40, "Ar40", 37.224_724);
        table.insert_isotope(26, 56, "Fe56", 52.089_773);
        table.insert_isotope(82, 208, "Pb208", 193.687_688);

        table
    }

    /// Inserts or replaces an entry.
    pub fn insert(&mut self, code: i32, def: ParticleDef) {
        self.entries.insert(code, def);
    }

    fn insert_isotope(&mut self, z: i32, a: i32, name: &str, mass: f64) {
        self.insert(
            ion_pdg_code(a, z),
            ParticleDef::new(name, mass, f64::from(z)),
        );
    }

    /// Looks up a particle definition by PDG code.
    pub fn find(&self, code: i32) -> Option<&ParticleDef> {
        self.entries.get(&code)
    }

    /// Returns the mass of the given code, or 0.0 if it is unknown.
    pub fn mass_of(&self, code: i32) -> f64 {
        self.find(code).map(|def| def.mass).unwrap_or(0.0)
    }

    /// Returns the charge of the given code in +e, or 0.0 if it is unknown.
    pub fn charge_of(&self, code: i32) -> f64 {
        self.find(code).map(|def| def.charge).unwrap_or(0.0)
    }

    /// Membership test of the isotope chart for a `(Z, A)` pair.
    pub fn is_known_isotope(&self, z: i32, a: i32) -> bool {
        self.entries.contains_key(&ion_pdg_code(a, z))
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
