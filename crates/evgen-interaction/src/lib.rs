#![deny(missing_docs)]
#![doc = "Interaction data model for the evgen core: the nuclear/particle target, the probe + target initial state, process and exclusive-final-state tags, and the interaction aggregate and list."]

/// Probe + target initial state.
pub mod init_state;
/// Interaction aggregate.
pub mod interaction;
/// Ordered list of candidate interactions.
pub mod list;
/// Scattering mechanism and current-type tags.
pub mod process;
/// Nuclear/particle target with optional struck-nucleon/quark sub-state.
pub mod target;
/// Final-state particle-multiplicity signature.
pub mod xcls;

pub use init_state::InitialState;
pub use interaction::Interaction;
pub use list::InteractionList;
pub use process::{InteractionType, ProcessInfo, ScatteringType};
pub use target::Target;
pub use xcls::ExclusiveTag;
