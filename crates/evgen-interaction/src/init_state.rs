//! Probe identity paired with a target: the input contract to every
//! interaction-list generator.

use std::fmt::{self, Display};

use evgen_core::FourMomentum;
use serde::{Deserialize, Serialize};

use crate::target::Target;

/// Probe + target initial state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialState {
    probe_pdg: i32,
    tgt: Target,
    probe_p4: FourMomentum,
}

impl InitialState {
    /// Creates an initial state with a zero probe four-momentum.
    pub fn new(probe_pdg: i32, tgt: Target) -> Self {
        Self {
            probe_pdg,
            tgt,
            probe_p4: FourMomentum::zero(),
        }
    }

    /// Probe PDG code.
    pub fn probe_pdg(&self) -> i32 {
        self.probe_pdg
    }

    /// The target.
    pub fn tgt(&self) -> &Target {
        &self.tgt
    }

    /// Mutable access to the target, used to assign the struck nucleon after
    /// construction.
    pub fn tgt_mut(&mut self) -> &mut Target {
        &mut self.tgt
    }

    /// Probe four-momentum.
    pub fn probe_p4(&self) -> &FourMomentum {
        &self.probe_p4
    }

    /// Replaces the probe four-momentum.
    pub fn set_probe_p4(&mut self, p4: FourMomentum) {
        self.probe_p4 = p4;
    }

    /// Canonical textual form.
    pub fn as_string(&self) -> String {
        format!("probe:{};tgt:{}", self.probe_pdg, self.tgt.as_string())
    }
}

impl Display for InitialState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
