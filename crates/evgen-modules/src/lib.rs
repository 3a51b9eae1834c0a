#![deny(missing_docs)]
#![doc = "Channel enumeration and interaction selection: the fixed single-pion channel catalogue, the generator and selector algorithm families, the event record and the name-keyed algorithm registries."]

/// Fixed single-pion-production channel catalogue.
pub mod channels;
/// Degenerate diffractive-family generator.
pub mod dfrc;
/// Event record holding one selected interaction.
pub mod record;
/// Name-keyed registries for the two algorithm families.
pub mod registry;
/// Uniform interaction selector.
pub mod selector;
/// Single-pion-production interaction-list generator.
pub mod spp;
/// Algorithm-family contracts and the enumeration outcome.
pub mod traits;

pub use channels::{spp_channels, ProbeSign, SppChannel};
pub use dfrc::DfrcInteractionListGenerator;
pub use record::EventRecord;
pub use registry::{GeneratorRegistry, SelectorRegistry};
pub use selector::UniformInteractionSelector;
pub use spp::{GeneratorConfig, SppInteractionListGenerator};
pub use traits::{InteractionListGenerator, InteractionSelector, ListOutcome};
