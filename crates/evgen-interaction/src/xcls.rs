//! Final-state particle-multiplicity signature.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Exclusive final-state tag: nucleon and pion multiplicities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExclusiveTag {
    /// Number of final-state protons.
    pub n_protons: u32,
    /// Number of final-state neutrons.
    pub n_neutrons: u32,
    /// Number of final-state positive pions.
    pub n_pi_plus: u32,
    /// Number of final-state neutral pions.
    pub n_pi_0: u32,
    /// Number of final-state negative pions.
    pub n_pi_minus: u32,
}

impl ExclusiveTag {
    /// Creates an empty tag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the final-state nucleon multiplicities.
    pub fn set_n_nucleons(&mut self, n_protons: u32, n_neutrons: u32) {
        self.n_protons = n_protons;
        self.n_neutrons = n_neutrons;
    }

    /// Sets the final-state pion multiplicities.
    pub fn set_n_pions(&mut self, n_pi_plus: u32, n_pi_0: u32, n_pi_minus: u32) {
        self.n_pi_plus = n_pi_plus;
        self.n_pi_0 = n_pi_0;
        self.n_pi_minus = n_pi_minus;
    }

    /// Total number of final-state nucleons.
    pub fn n_nucleons(&self) -> u32 {
        self.n_protons + self.n_neutrons
    }

    /// Total number of final-state pions.
    pub fn n_pions(&self) -> u32 {
        self.n_pi_plus + self.n_pi_0 + self.n_pi_minus
    }

    /// Canonical textual form listing the five multiplicities in order.
    pub fn as_string(&self) -> String {
        format!(
            "p:{},n:{},pi+:{},pi0:{},pi-:{}",
            self.n_protons, self.n_neutrons, self.n_pi_plus, self.n_pi_0, self.n_pi_minus
        )
    }
}

impl Display for ExclusiveTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
