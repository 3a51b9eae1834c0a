//! Scattering-mechanism and current-type tags.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Scattering mechanism of an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScatteringType {
    /// Resonance production.
    Resonant,
    /// Diffractive scattering.
    Diffractive,
}

impl ScatteringType {
    /// Short tag used in textual forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScatteringType::Resonant => "RES",
            ScatteringType::Diffractive => "DFR",
        }
    }
}

/// Current type of a weak interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionType {
    /// Charged current.
    WeakCC,
    /// Neutral current.
    WeakNC,
}

impl InteractionType {
    /// Short tag used in textual forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionType::WeakCC => "Weak[CC]",
            InteractionType::WeakNC => "Weak[NC]",
        }
    }
}

/// Scattering category tag carried by every interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInfo {
    /// Scattering mechanism.
    pub scattering: ScatteringType,
    /// Current type.
    pub current: InteractionType,
}

impl ProcessInfo {
    /// Creates a process tag.
    pub fn new(scattering: ScatteringType, current: InteractionType) -> Self {
        Self {
            scattering,
            current,
        }
    }

    /// Returns true for a charged-current process.
    pub fn is_cc(&self) -> bool {
        self.current == InteractionType::WeakCC
    }

    /// Returns true for a neutral-current process.
    pub fn is_nc(&self) -> bool {
        self.current == InteractionType::WeakNC
    }

    /// Returns true for resonance production.
    pub fn is_resonant(&self) -> bool {
        self.scattering == ScatteringType::Resonant
    }

    /// Returns true for diffractive scattering.
    pub fn is_diffractive(&self) -> bool {
        self.scattering == ScatteringType::Diffractive
    }

    /// Canonical textual form.
    pub fn as_string(&self) -> String {
        format!("{};{}", self.scattering.as_str(), self.current.as_str())
    }
}

impl Display for ProcessInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
