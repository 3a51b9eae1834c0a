//! Diffractive-family generator.
//!
//! The diffractive channel expansion is not modeled yet. The generator
//! still honors the family contract: it returns an empty-but-valid list,
//! which callers skip without treating it as an enumeration failure.

use evgen_interaction::{InitialState, InteractionList};

use crate::traits::{InteractionListGenerator, ListOutcome};

/// Degenerate generator for the diffractive interaction family.
#[derive(Debug, Clone, Copy, Default)]
pub struct DfrcInteractionListGenerator;

impl DfrcInteractionListGenerator {
    /// Creates the generator.
    pub fn new() -> Self {
        Self
    }
}

impl InteractionListGenerator for DfrcInteractionListGenerator {
    fn create_interaction_list(&self, init_state: &InitialState) -> ListOutcome {
        tracing::debug!(
            target: "IntLst",
            init_state = %init_state,
            "diffractive family not modeled, returning empty list"
        );
        ListOutcome::Channels(InteractionList::new())
    }
}
