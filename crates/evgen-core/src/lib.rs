#![deny(missing_docs)]
#![doc = "Shared primitives for the evgen event-generator core: structured errors, the deterministic RNG handle and the four-momentum value type."]

pub mod errors;
pub mod p4;
pub mod rng;

pub use errors::{ErrorInfo, EvgError};
pub use p4::FourMomentum;
pub use rng::{derive_substream_seed, RngHandle};
