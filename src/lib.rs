//! # montepi
//!
//! Monte Carlo estimation of π.
//!
//! Uniform integer points are drawn inside a square region and classified
//! against the inscribed circle. The fraction that lands inside or on the
//! circle approximates π/4:
//! - Exact integer classification (no floating-point boundary error)
//! - Deterministic PCG random source with explicit seeds
//! - Append-only history of estimates across runs
//!
//! ## Example
//!
//! ```rust
//! use montepi::prelude::*;
//!
//! let config = PiConfig::builder()
//!     .seed(42)
//!     .build();
//! let mut sim = Simulation::from_config(&config).unwrap();
//! let estimate = sim.run(1000).unwrap().estimate;
//! assert_eq!(sim.history().last().map(|e| e.estimate), Some(estimate));
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
)]

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod estimator;
#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{PiConfig, PiConfigBuilder};
    pub use crate::engine::rng::SimRng;
    pub use crate::error::{PiError, PiResult};
    pub use crate::estimator::{
        run_batch, BatchResult, BatchSize, History, Region, Sample, SharedSimulation, Simulation,
    };
}

/// Re-export for public API
pub use error::{PiError, PiResult};
