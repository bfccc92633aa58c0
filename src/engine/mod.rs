//! Simulation engine primitives.
//!
//! Only the deterministic random source lives here; sampling and
//! aggregation are in [`crate::estimator`].

pub mod rng;

pub use rng::SimRng;
