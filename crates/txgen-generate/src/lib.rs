//! Synthetic transaction generation for txgen.
//!
//! Records are sampled from the embedded reference catalog with an injected
//! random source, so a run is reproducible from its seed.

pub mod catalog;
pub mod engine;
pub mod errors;
pub mod window;

pub use catalog::Catalog;
pub use engine::{MAX_COST, MIN_COST, TransactionGenerator, random_seed, seeded_rng};
pub use errors::GenerationError;
pub use window::TimeWindow;
