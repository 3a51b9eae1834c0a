//! Contracts for the two polymorphic algorithm families.

use evgen_core::{FourMomentum, RngHandle};
use evgen_interaction::{InitialState, InteractionList};
use serde::{Deserialize, Serialize};

use crate::record::EventRecord;

/// Outcome of a channel-enumeration pass.
///
/// `Channels` may legitimately carry an empty list: a generator whose family
/// is not modeled yet returns an empty-but-valid list, and callers skip it
/// without logging an error. `NoneViable` and `Unsupported` are the failure
/// outcomes; callers skip those too, but the generator has already
/// error-logged the former.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ListOutcome {
    /// Enumerated candidate channels, in canonical order.
    Channels(InteractionList),
    /// The probe species is not handled by this generator.
    Unsupported,
    /// No channel survived the availability filter (or the admitted channel
    /// subset was empty).
    NoneViable,
}

impl ListOutcome {
    /// Returns the enumerated list, if any.
    pub fn channels(&self) -> Option<&InteractionList> {
        match self {
            ListOutcome::Channels(list) => Some(list),
            _ => None,
        }
    }

    /// Consumes the outcome, returning the enumerated list if any.
    pub fn into_channels(self) -> Option<InteractionList> {
        match self {
            ListOutcome::Channels(list) => Some(list),
            _ => None,
        }
    }

    /// Returns true if the probe species was not handled.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, ListOutcome::Unsupported)
    }

    /// Returns true if no channel survived the filter.
    pub fn is_none_viable(&self) -> bool {
        matches!(self, ListOutcome::NoneViable)
    }
}

/// Channel-enumeration algorithm family: one implementation per interaction
/// family.
///
/// Implementations are stateless mappings from `(initial state,
/// configuration)` to an outcome; identical inputs produce identical
/// outputs, and concurrent invocation is safe.
pub trait InteractionListGenerator: Send + Sync {
    /// Expands the initial state into every consistent candidate
    /// interaction for this family.
    fn create_interaction_list(&self, init_state: &InitialState) -> ListOutcome;
}

/// Interaction-selection algorithm family.
///
/// The surrounding protocol is fixed (validate, draw, deep-copy + inject
/// the probe four-momentum, wrap into a fresh event record); only the draw
/// policy differs between implementations.
pub trait InteractionSelector: Send + Sync {
    /// Picks one candidate from the list and assembles the event record.
    ///
    /// Returns `None` (after error-logging) when the list handle is absent
    /// or the list is empty.
    fn select_interaction(
        &self,
        list: Option<&InteractionList>,
        probe_p4: &FourMomentum,
        rng: &mut RngHandle,
    ) -> Option<EventRecord>;
}
