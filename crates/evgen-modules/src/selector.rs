//! Uniform interaction selection.

use evgen_core::{FourMomentum, RngHandle};
use evgen_interaction::InteractionList;
use rand::Rng;

use crate::record::EventRecord;
use crate::traits::InteractionSelector;

/// Selector drawing one candidate uniformly from the list.
///
/// Weighted variants replace only the draw; the validate → draw →
/// deep-copy + inject → wrap protocol is shared by the whole family.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformInteractionSelector;

impl UniformInteractionSelector {
    /// Creates the selector.
    pub fn new() -> Self {
        Self
    }
}

impl InteractionSelector for UniformInteractionSelector {
    fn select_interaction(
        &self,
        list: Option<&InteractionList>,
        probe_p4: &FourMomentum,
        rng: &mut RngHandle,
    ) -> Option<EventRecord> {
        let Some(list) = list else {
            tracing::error!(target: "IntSel", "no interaction list, cannot select interaction");
            return None;
        };
        if list.is_empty() {
            tracing::error!(target: "IntSel", "empty interaction list, cannot select interaction");
            return None;
        }

        let idx = rng.gen_range(0..list.len());

        // The list keeps ownership of its elements; the record gets its own
        // deep copy with the concrete probe four-momentum injected.
        let mut selected = list[idx].clone();
        selected.init_state_mut().set_probe_p4(*probe_p4);
        tracing::debug!(target: "IntSel", interaction = %selected, "interaction to generate");

        let mut record = EventRecord::new();
        record.attach_summary(selected);
        Some(record)
    }
}
