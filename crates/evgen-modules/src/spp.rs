//! Single-pion-production channel enumeration.

use std::sync::Arc;

use evgen_core::{ErrorInfo, EvgError};
use evgen_interaction::{
    ExclusiveTag, InitialState, Interaction, InteractionList, InteractionType, ProcessInfo,
    ScatteringType,
};
use evgen_pdg::codes::{
    is_anti_neutrino, is_neutrino, NEUTRON, PI_0, PI_MINUS, PI_PLUS, PROTON,
};
use evgen_pdg::PdgTable;
use serde::{Deserialize, Serialize};

use crate::channels::{spp_channels, ProbeSign, SppChannel};
use crate::traits::{InteractionListGenerator, ListOutcome};

/// Current-type configuration for channel-enumeration generators.
///
/// The two flags are mutually exclusive. Leaving both unset admits no
/// channels, which enumeration reports as no viable channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GeneratorConfig {
    /// Enumerate charged-current channels only.
    #[serde(default)]
    pub is_cc: bool,
    /// Enumerate neutral-current channels only.
    #[serde(default)]
    pub is_nc: bool,
}

impl GeneratorConfig {
    /// Charged-current configuration.
    pub fn cc() -> Self {
        Self {
            is_cc: true,
            is_nc: false,
        }
    }

    /// Neutral-current configuration.
    pub fn nc() -> Self {
        Self {
            is_cc: false,
            is_nc: true,
        }
    }
}

/// Generator expanding an initial state into every single-pion-production
/// channel consistent with the probe sign, the configured current type and
/// the target's nucleon content.
#[derive(Debug)]
pub struct SppInteractionListGenerator {
    table: Arc<PdgTable>,
    config: GeneratorConfig,
}

impl SppInteractionListGenerator {
    /// Creates a generator, rejecting a configuration that sets both
    /// current-type flags.
    pub fn new(table: Arc<PdgTable>, config: GeneratorConfig) -> Result<Self, EvgError> {
        if config.is_cc && config.is_nc {
            return Err(EvgError::Config(
                ErrorInfo::new("cc-nc-conflict", "is-CC and is-NC are mutually exclusive")
                    .with_hint("configure two generator instances instead"),
            ));
        }
        Ok(Self { table, config })
    }

    fn admitted_current(&self) -> Option<InteractionType> {
        if self.config.is_cc {
            Some(InteractionType::WeakCC)
        } else if self.config.is_nc {
            Some(InteractionType::WeakNC)
        } else {
            None
        }
    }

    fn add_final_state_info(&self, interaction: &mut Interaction, channel: SppChannel) {
        let mut n_proton = 0;
        let mut n_neutron = 0;
        let mut n_pi_plus = 0;
        let mut n_pi_0 = 0;
        let mut n_pi_minus = 0;

        let nuc_pdg = channel.fin_state_nucleon();
        let pi_pdg = channel.fin_state_pion();

        match nuc_pdg {
            PROTON => n_proton = 1,
            NEUTRON => n_neutron = 1,
            other => {
                tracing::error!(
                    target: "IntLst",
                    pdg = other,
                    "final state nucleon not a proton or a neutron"
                );
            }
        }

        match pi_pdg {
            PI_PLUS => n_pi_plus = 1,
            PI_0 => n_pi_0 = 1,
            PI_MINUS => n_pi_minus = 1,
            other => {
                tracing::error!(
                    target: "IntLst",
                    pdg = other,
                    "final state pion not a pi+/pi0/pi-"
                );
            }
        }

        let mut tag = ExclusiveTag::new();
        tag.set_n_nucleons(n_proton, n_neutron);
        tag.set_n_pions(n_pi_plus, n_pi_0, n_pi_minus);
        interaction.set_excl_tag(tag);
    }
}

impl InteractionListGenerator for SppInteractionListGenerator {
    fn create_interaction_list(&self, init_state: &InitialState) -> ListOutcome {
        tracing::debug!(target: "IntLst", init_state = %init_state, "enumerating SPP channels");

        let probe_pdg = init_state.probe_pdg();
        let sign = if is_neutrino(probe_pdg) {
            ProbeSign::Neutrino
        } else if is_anti_neutrino(probe_pdg) {
            ProbeSign::AntiNeutrino
        } else {
            tracing::warn!(
                target: "IntLst",
                probe = probe_pdg,
                init_state = %init_state,
                "cannot handle probe, no interaction list"
            );
            return ListOutcome::Unsupported;
        };

        let Some(current) = self.admitted_current() else {
            tracing::error!(
                target: "IntLst",
                init_state = %init_state,
                "no current type configured, no viable channels"
            );
            return ListOutcome::NoneViable;
        };

        let tgt = init_state.tgt();
        let has_p = tgt.z() > 0;
        let has_n = tgt.n() > 0;

        let mut list = InteractionList::new();

        for channel in spp_channels(sign, current) {
            let struck_nucleon = channel.init_state_nucleon();
            let available = (struck_nucleon == PROTON && has_p)
                || (struck_nucleon == NEUTRON && has_n);
            if !available {
                continue;
            }

            let proc_info = ProcessInfo::new(ScatteringType::Resonant, current);
            let mut interaction = Interaction::new(init_state.clone(), proc_info);
            interaction
                .init_state_mut()
                .tgt_mut()
                .set_struck_nucleon_code(struck_nucleon, &self.table);
            self.add_final_state_info(&mut interaction, *channel);

            list.push(interaction);
        }

        if list.is_empty() {
            tracing::error!(
                target: "IntLst",
                init_state = %init_state,
                "no viable channel for init-state"
            );
            return ListOutcome::NoneViable;
        }

        ListOutcome::Channels(list)
    }
}
