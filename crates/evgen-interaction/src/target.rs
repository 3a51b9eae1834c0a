//! The struck object in a simulated interaction: a free particle, a free
//! nucleon or a bound nucleus, with an optional sub-state identifying which
//! nucleon (and quark inside it) is struck.
//!
//! Invalid input never raises here. An unknown `(Z, A)` resets the identity
//! to `(0, 0)`, a non-nucleon struck code clears the sub-state, a non-quark
//! struck-quark code is ignored; each path emits a diagnostic and leaves the
//! target in a well-defined state that callers are expected to check with
//! [`Target::is_valid_nucleus`] / [`Target::struck_nucleon_is_set`].

use std::fmt::{self, Display};

use evgen_core::FourMomentum;
use evgen_pdg::codes::{self, ion_pdg_code, ion_pdg_code_to_a, ion_pdg_code_to_z};
use evgen_pdg::PdgTable;
use serde::{Deserialize, Serialize};

/// Nuclear/particle target identity plus optional struck-nucleon and
/// struck-quark sub-state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    tgt_pdg: i32,
    z: i32,
    a: i32,
    struck_nuc_pdg: i32,
    struck_quark_pdg: i32,
    struck_sea_quark: bool,
    struck_nuc_p4: FourMomentum,
}

impl Default for Target {
    fn default() -> Self {
        Self::new()
    }
}

impl Target {
    /// Creates an empty target with no identity set.
    pub fn new() -> Self {
        Self {
            tgt_pdg: 0,
            z: 0,
            a: 0,
            struck_nuc_pdg: 0,
            struck_quark_pdg: 0,
            struck_sea_quark: false,
            struck_nuc_p4: FourMomentum::at_rest(codes::NUCLEON_MASS),
        }
    }

    /// Creates a target from a PDG code. Nuclear codes are decoded into
    /// `(Z, A)` and validated; any other code is kept as a plain particle
    /// identity.
    pub fn from_code(pdgc: i32, table: &PdgTable) -> Self {
        let mut tgt = Self::new();
        tgt.tgt_pdg = pdgc;
        if codes::is_ion(pdgc) {
            let z = ion_pdg_code_to_z(pdgc);
            let a = ion_pdg_code_to_a(pdgc);
            tgt.set_za(z, a, table);
        }
        tgt
    }

    /// Creates a target from a `(Z, A)` pair. A free-nucleon pair also
    /// populates the struck-nucleon sub-state.
    pub fn from_za(z: i32, a: i32, table: &PdgTable) -> Self {
        let mut tgt = Self::new();
        tgt.tgt_pdg = ion_pdg_code(a, z);
        tgt.set_za(z, a, table);
        tgt
    }

    /// Creates a target from a `(Z, A)` pair with an explicit struck nucleon.
    pub fn from_za_with_struck(z: i32, a: i32, struck_nuc_pdg: i32, table: &PdgTable) -> Self {
        let mut tgt = Self::new();
        tgt.z = z;
        tgt.a = a;
        tgt.tgt_pdg = ion_pdg_code(a, z);
        tgt.force_nucleus_validity(table);
        tgt.set_struck_nucleon_code(struck_nuc_pdg, table);
        tgt
    }

    /// Proton count.
    pub fn z(&self) -> i32 {
        self.z
    }

    /// Neutron count.
    pub fn n(&self) -> i32 {
        self.a - self.z
    }

    /// Mass number.
    pub fn a(&self) -> i32 {
        self.a
    }

    /// Target PDG code.
    pub fn pdg_code(&self) -> i32 {
        self.tgt_pdg
    }

    /// PDG code of the struck nucleon, 0 if unset.
    pub fn struck_nucleon_pdg(&self) -> i32 {
        self.struck_nuc_pdg
    }

    /// PDG code of the struck quark, 0 if unset.
    pub fn struck_quark_pdg(&self) -> i32 {
        self.struck_quark_pdg
    }

    /// Four-momentum of the struck nucleon.
    pub fn struck_nucleon_p4(&self) -> &FourMomentum {
        &self.struck_nuc_p4
    }

    /// Target mass in GeV; 0.0 if the identity is unknown to the table.
    pub fn mass(&self, table: &PdgTable) -> f64 {
        table.mass_of(self.tgt_pdg)
    }

    /// Target charge in +e; 0.0 if the identity is unknown to the table.
    pub fn charge(&self, table: &PdgTable) -> f64 {
        table.charge_of(self.tgt_pdg)
    }

    /// Mass of the struck nucleon in GeV; 0.0 with a diagnostic if unset.
    pub fn struck_nucleon_mass(&self, table: &PdgTable) -> f64 {
        if self.struck_nuc_pdg == 0 {
            tracing::warn!(target: "Target", "returning struck nucleon mass = 0");
            return 0.0;
        }
        table.mass_of(self.struck_nuc_pdg)
    }

    /// Sets `(Z, A)`, validating against the isotope chart. A free-nucleon
    /// pair auto-populates the struck-nucleon sub-state.
    pub fn set_za(&mut self, z: i32, a: i32, table: &PdgTable) {
        self.z = z;
        self.a = a;
        self.force_nucleus_validity(table);
        if self.is_free_nucleon() {
            let nuc = if self.is_proton() {
                codes::PROTON
            } else {
                codes::NEUTRON
            };
            self.set_struck_nucleon_code(nuc, table);
        }
    }

    /// Sets the struck-nucleon code. A valid (proton/neutron) code also
    /// resets the struck-nucleon four-momentum to the at-rest on-shell value
    /// from the table; any other code clears the sub-state.
    pub fn set_struck_nucleon_code(&mut self, nucl_pdgc: i32, table: &PdgTable) {
        self.struck_nuc_pdg = nucl_pdgc;
        let is_valid = self.force_struck_nucleon_validity();
        if is_valid {
            self.struck_nuc_p4 = FourMomentum::at_rest(table.mass_of(nucl_pdgc));
        }
    }

    /// Sets the struck-quark code. Non-quark/antiquark codes are ignored.
    pub fn set_struck_quark_code(&mut self, pdgc: i32) {
        if codes::is_quark(pdgc) || codes::is_anti_quark(pdgc) {
            self.struck_quark_pdg = pdgc;
        }
    }

    /// Replaces the struck-nucleon four-momentum.
    pub fn set_struck_nucleon_p4(&mut self, p4: FourMomentum) {
        self.struck_nuc_p4 = p4;
    }

    /// Marks the struck quark as a sea (true) or valence (false) quark.
    pub fn set_struck_sea_quark(&mut self, sea: bool) {
        self.struck_sea_quark = sea;
    }

    /// Returns true for a free proton or neutron target.
    pub fn is_free_nucleon(&self) -> bool {
        self.a == 1 && (self.z == 0 || self.z == 1)
    }

    /// Returns true for a free proton target.
    pub fn is_proton(&self) -> bool {
        self.a == 1 && self.z == 1
    }

    /// Returns true for a free neutron target.
    pub fn is_neutron(&self) -> bool {
        self.a == 1 && self.z == 0
    }

    /// Returns true for a bound nucleus (A > 1). Validity was enforced when
    /// `(Z, A)` were set.
    pub fn is_nucleus(&self) -> bool {
        self.a > 1
    }

    /// Returns true for a free non-nucleon particle target known to the
    /// table.
    pub fn is_particle(&self, table: &PdgTable) -> bool {
        self.a == 0 && self.z == 0 && table.find(self.tgt_pdg).is_some()
    }

    /// Returns true if the target is a free nucleon or a nucleus present in
    /// the isotope chart.
    pub fn is_valid_nucleus(&self, table: &PdgTable) -> bool {
        if self.is_free_nucleon() {
            return true;
        }
        table.is_known_isotope(self.z, self.a)
    }

    /// Returns true if the struck-nucleon sub-state is set.
    pub fn struck_nucleon_is_set(&self) -> bool {
        codes::is_neutron_or_proton(self.struck_nuc_pdg)
    }

    /// Returns true if the struck-quark sub-state is set.
    pub fn struck_quark_is_set(&self) -> bool {
        codes::is_quark(self.struck_quark_pdg) || codes::is_anti_quark(self.struck_quark_pdg)
    }

    /// Returns true if the struck quark was marked as a sea quark.
    pub fn struck_quark_is_from_sea(&self) -> bool {
        self.struck_sea_quark
    }

    /// Even-Z, even-N nucleus.
    pub fn is_even_even(&self) -> bool {
        self.is_nucleus() && self.n() % 2 == 0 && self.z % 2 == 0
    }

    /// Odd-Z, odd-N nucleus.
    pub fn is_odd_odd(&self) -> bool {
        self.is_nucleus() && self.n() % 2 == 1 && self.z % 2 == 1
    }

    /// Nucleus with mixed parity (one of Z, N even and the other odd).
    pub fn is_even_odd(&self) -> bool {
        self.is_nucleus() && !self.is_even_even() && !self.is_odd_odd()
    }

    /// Canonical textual form: the base identity, annotated with the struck
    /// nucleon code and the struck quark code + valence/sea marker when set.
    pub fn as_string(&self) -> String {
        let mut s = self.tgt_pdg.to_string();
        if self.struck_nucleon_is_set() {
            s.push_str(&format!("[N={}]", self.struck_nuc_pdg));
        }
        if self.struck_quark_is_set() {
            let marker = if self.struck_quark_is_from_sea() {
                "(s)"
            } else {
                "(v)"
            };
            s.push_str(&format!("[q={}{}]", self.struck_quark_pdg, marker));
        }
        s
    }

    fn force_struck_nucleon_validity(&mut self) -> bool {
        let valid = codes::is_neutron_or_proton(self.struck_nuc_pdg);
        if !valid {
            tracing::debug!(
                target: "Target",
                code = self.struck_nuc_pdg,
                "resetting struck nucleon to unset"
            );
            self.struck_nuc_pdg = 0;
        }
        valid
    }

    fn force_nucleus_validity(&mut self, table: &PdgTable) {
        if !self.is_valid_nucleus(table) {
            tracing::warn!(
                target: "Target",
                z = self.z,
                a = self.a,
                "invalid target, resetting to Z = 0, A = 0"
            );
            self.z = 0;
            self.a = 0;
        }
    }
}

impl Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "target pdg = {}", self.tgt_pdg)?;
        if self.is_nucleus() || self.is_free_nucleon() {
            write!(f, ", Z = {}, A = {}", self.z, self.a)?;
        }
        if self.struck_nucleon_is_set() {
            write!(
                f,
                ", struck nucleon = {}, p4 = {}",
                self.struck_nuc_pdg, self.struck_nuc_p4
            )?;
        }
        Ok(())
    }
}
