//! Fixed catalogue of single-pion-production channels.
//!
//! Each channel names a fully specified initial → final nucleon/meson
//! combination. The catalogue is read-only process-wide data; the per-sign,
//! per-current tables below preserve the canonical enumeration order, which
//! downstream weighting depends on.

use evgen_interaction::InteractionType;
use evgen_pdg::codes::{NEUTRON, PI_0, PI_MINUS, PI_PLUS, PROTON};
use serde::{Deserialize, Serialize};

/// Sign of the probe species, used to key the channel tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeSign {
    /// Neutrino probe.
    Neutrino,
    /// Antineutrino probe.
    AntiNeutrino,
}

/// A named single-pion-production channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SppChannel {
    /// ν p → l⁻ p π⁺ (CC).
    NuPToPPiPlus,
    /// ν n → l⁻ p π⁰ (CC).
    NuNToPPiZero,
    /// ν n → l⁻ n π⁺ (CC).
    NuNToNPiPlus,
    /// ν p → ν p π⁰ (NC).
    NuPToPPiZero,
    /// ν p → ν n π⁺ (NC).
    NuPToNPiPlus,
    /// ν n → ν n π⁰ (NC).
    NuNToNPiZero,
    /// ν n → ν p π⁻ (NC).
    NuNToPPiMinus,
    /// ν̄ n → l⁺ n π⁻ (CC).
    NubNToNPiMinus,
    /// ν̄ p → l⁺ n π⁰ (CC).
    NubPToNPiZero,
    /// ν̄ p → l⁺ p π⁻ (CC).
    NubPToPPiMinus,
    /// ν̄ p → ν̄ p π⁰ (NC).
    NubPToPPiZero,
    /// ν̄ p → ν̄ n π⁺ (NC).
    NubPToNPiPlus,
    /// ν̄ n → ν̄ n π⁰ (NC).
    NubNToNPiZero,
    /// ν̄ n → ν̄ p π⁻ (NC).
    NubNToPPiMinus,
}

impl SppChannel {
    /// PDG code of the nucleon the channel requires in the initial state.
    pub fn init_state_nucleon(&self) -> i32 {
        use SppChannel::*;
        match self {
            NuPToPPiPlus | NuPToPPiZero | NuPToNPiPlus | NubPToNPiZero | NubPToPPiMinus
            | NubPToPPiZero | NubPToNPiPlus => PROTON,
            NuNToPPiZero | NuNToNPiPlus | NuNToNPiZero | NuNToPPiMinus | NubNToNPiMinus
            | NubNToNPiZero | NubNToPPiMinus => NEUTRON,
        }
    }

    /// PDG code of the channel's final-state nucleon.
    pub fn fin_state_nucleon(&self) -> i32 {
        use SppChannel::*;
        match self {
            NuPToPPiPlus | NuNToPPiZero | NuPToPPiZero | NuNToPPiMinus | NubPToPPiMinus
            | NubPToPPiZero | NubNToPPiMinus => PROTON,
            NuNToNPiPlus | NuPToNPiPlus | NuNToNPiZero | NubNToNPiMinus | NubPToNPiZero
            | NubPToNPiPlus | NubNToNPiZero => NEUTRON,
        }
    }

    /// PDG code of the channel's final-state pion.
    pub fn fin_state_pion(&self) -> i32 {
        use SppChannel::*;
        match self {
            NuPToPPiPlus | NuNToNPiPlus | NuPToNPiPlus | NubPToNPiPlus => PI_PLUS,
            NuNToPPiZero | NuPToPPiZero | NuNToNPiZero | NubPToNPiZero | NubPToPPiZero
            | NubNToNPiZero => PI_0,
            NuNToPPiMinus | NubNToNPiMinus | NubPToPPiMinus | NubNToPPiMinus => PI_MINUS,
        }
    }

    /// Human readable reaction string.
    pub fn as_string(&self) -> &'static str {
        use SppChannel::*;
        match self {
            NuPToPPiPlus => "v p -> l- p pi+",
            NuNToPPiZero => "v n -> l- p pi0",
            NuNToNPiPlus => "v n -> l- n pi+",
            NuPToPPiZero => "v p -> v p pi0",
            NuPToNPiPlus => "v p -> v n pi+",
            NuNToNPiZero => "v n -> v n pi0",
            NuNToPPiMinus => "v n -> v p pi-",
            NubNToNPiMinus => "vb n -> l+ n pi-",
            NubPToNPiZero => "vb p -> l+ n pi0",
            NubPToPPiMinus => "vb p -> l+ p pi-",
            NubPToPPiZero => "vb p -> vb p pi0",
            NubPToNPiPlus => "vb p -> vb n pi+",
            NubNToNPiZero => "vb n -> vb n pi0",
            NubNToPPiMinus => "vb n -> vb p pi-",
        }
    }
}

const NU_CC_CHANNELS: [SppChannel; 3] = [
    SppChannel::NuPToPPiPlus,
    SppChannel::NuNToPPiZero,
    SppChannel::NuNToNPiPlus,
];

const NU_NC_CHANNELS: [SppChannel; 4] = [
    SppChannel::NuPToPPiZero,
    SppChannel::NuPToNPiPlus,
    SppChannel::NuNToNPiZero,
    SppChannel::NuNToPPiMinus,
];

const NUB_CC_CHANNELS: [SppChannel; 3] = [
    SppChannel::NubNToNPiMinus,
    SppChannel::NubPToNPiZero,
    SppChannel::NubPToPPiMinus,
];

const NUB_NC_CHANNELS: [SppChannel; 4] = [
    SppChannel::NubPToPPiZero,
    SppChannel::NubPToNPiPlus,
    SppChannel::NubNToNPiZero,
    SppChannel::NubNToPPiMinus,
];

/// Returns the channel subset for the given probe sign and current type, in
/// canonical enumeration order.
pub fn spp_channels(sign: ProbeSign, current: InteractionType) -> &'static [SppChannel] {
    match (sign, current) {
        (ProbeSign::Neutrino, InteractionType::WeakCC) => &NU_CC_CHANNELS,
        (ProbeSign::Neutrino, InteractionType::WeakNC) => &NU_NC_CHANNELS,
        (ProbeSign::AntiNeutrino, InteractionType::WeakCC) => &NUB_CC_CHANNELS,
        (ProbeSign::AntiNeutrino, InteractionType::WeakNC) => &NUB_NC_CHANNELS,
    }
}
