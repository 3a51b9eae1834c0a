//! Ordered, appendable list of owned candidate interactions.
//!
//! Enumeration order is stable and deterministic; downstream weighting
//! relies on it. An empty list by itself carries no failure meaning here —
//! generators distinguish "not modeled" from "no viable channel" through
//! their outcome type, not through the container.

use std::ops::Index;
use std::slice::Iter;

use serde::{Deserialize, Serialize};

use crate::interaction::Interaction;

/// Ordered collection of candidate interactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InteractionList {
    entries: Vec<Interaction>,
}

impl InteractionList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a candidate, transferring ownership to the list.
    pub fn push(&mut self, interaction: Interaction) {
        self.entries.push(interaction);
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the list holds no candidates.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the candidate at `idx`, if any.
    pub fn get(&self, idx: usize) -> Option<&Interaction> {
        self.entries.get(idx)
    }

    /// Iterates over the candidates in enumeration order.
    pub fn iter(&self) -> Iter<'_, Interaction> {
        self.entries.iter()
    }
}

impl Index<usize> for InteractionList {
    type Output = Interaction;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.entries[idx]
    }
}

impl<'a> IntoIterator for &'a InteractionList {
    type Item = &'a Interaction;
    type IntoIter = Iter<'a, Interaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for InteractionList {
    type Item = Interaction;
    type IntoIter = std::vec::IntoIter<Interaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<Interaction> for InteractionList {
    fn from_iter<T: IntoIterator<Item = Interaction>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
