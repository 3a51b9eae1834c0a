//! Event record: the container seeding downstream event generation.

use evgen_interaction::Interaction;
use serde::{Deserialize, Serialize};

/// Holds the one selected interaction as the event summary.
///
/// Generated particles and other event attributes live outside this core;
/// the record here is only the attachment point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EventRecord {
    summary: Option<Interaction>,
}

impl EventRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the interaction summary, transferring ownership to the
    /// record. Meant to be called once; a repeated attach replaces the
    /// summary with a diagnostic.
    pub fn attach_summary(&mut self, interaction: Interaction) {
        if self.summary.is_some() {
            tracing::warn!(target: "EventRecord", "replacing an already attached summary");
        }
        self.summary = Some(interaction);
    }

    /// The attached summary, if any.
    pub fn summary(&self) -> Option<&Interaction> {
        self.summary.as_ref()
    }

    /// Returns true once a summary has been attached.
    pub fn has_summary(&self) -> bool {
        self.summary.is_some()
    }
}
