//! Name-keyed registries for the generator and selector families.
//!
//! Configuration refers to algorithms by name; the registries replace the
//! original dynamic-dispatch-by-inheritance lookup with an explicit map of
//! boxed trait objects, built once at startup.

use std::collections::BTreeMap;
use std::sync::Arc;

use evgen_core::{ErrorInfo, EvgError};
use evgen_pdg::PdgTable;

use crate::dfrc::DfrcInteractionListGenerator;
use crate::selector::UniformInteractionSelector;
use crate::spp::{GeneratorConfig, SppInteractionListGenerator};
use crate::traits::{InteractionListGenerator, InteractionSelector};

/// Registry of channel-enumeration generators keyed by configuration name.
#[derive(Default)]
pub struct GeneratorRegistry {
    entries: BTreeMap<String, Box<dyn InteractionListGenerator>>,
}

impl GeneratorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the default registry: `spp-cc`, `spp-nc` and `dfrc`.
    pub fn with_defaults(table: Arc<PdgTable>) -> Result<Self, EvgError> {
        let mut registry = Self::new();
        registry.register(
            "spp-cc",
            Box::new(SppInteractionListGenerator::new(
                Arc::clone(&table),
                GeneratorConfig::cc(),
            )?),
        );
        registry.register(
            "spp-nc",
            Box::new(SppInteractionListGenerator::new(
                Arc::clone(&table),
                GeneratorConfig::nc(),
            )?),
        );
        registry.register("dfrc", Box::new(DfrcInteractionListGenerator::new()));
        Ok(registry)
    }

    /// Registers a generator under the given name, replacing any previous
    /// entry.
    pub fn register(&mut self, name: impl Into<String>, generator: Box<dyn InteractionListGenerator>) {
        self.entries.insert(name.into(), generator);
    }

    /// Looks up a generator by name.
    pub fn get(&self, name: &str) -> Result<&dyn InteractionListGenerator, EvgError> {
        self.entries.get(name).map(|g| g.as_ref()).ok_or_else(|| {
            EvgError::Registry(
                ErrorInfo::new("unknown-generator", "no generator registered under this name")
                    .with_context("name", name),
            )
        })
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }
}

/// Registry of interaction selectors keyed by configuration name.
#[derive(Default)]
pub struct SelectorRegistry {
    entries: BTreeMap<String, Box<dyn InteractionSelector>>,
}

impl SelectorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the default registry: `uniform`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("uniform", Box::new(UniformInteractionSelector::new()));
        registry
    }

    /// Registers a selector under the given name, replacing any previous
    /// entry.
    pub fn register(&mut self, name: impl Into<String>, selector: Box<dyn InteractionSelector>) {
        self.entries.insert(name.into(), selector);
    }

    /// Looks up a selector by name.
    pub fn get(&self, name: &str) -> Result<&dyn InteractionSelector, EvgError> {
        self.entries.get(name).map(|s| s.as_ref()).ok_or_else(|| {
            EvgError::Registry(
                ErrorInfo::new("unknown-selector", "no selector registered under this name")
                    .with_context("name", name),
            )
        })
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }
}
