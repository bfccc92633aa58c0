//! Monte Carlo π estimator.
//!
//! Integer points are drawn uniformly inside a square [`Region`],
//! classified against the inscribed [`Circle`], and counted:
//!
//! ```text
//! π̂ = 4 · inside / n
//! ```
//!
//! # Example
//!
//! ```rust
//! use montepi::engine::rng::SimRng;
//! use montepi::estimator::{run_batch, Region};
//!
//! let region = Region::square(20, 280, 20, 280).unwrap();
//! let mut rng = SimRng::new(42);
//! let result = run_batch(&region, 1000, &mut rng).unwrap();
//! assert_eq!(result.inside_count + result.outside_count, 1000);
//! assert!((0.0..=4.0).contains(&result.estimate));
//! ```

pub mod batch;
pub mod history;
pub mod region;
pub mod sampler;
pub mod session;

pub use batch::{
    run_batch, run_batch_observed, BatchResult, BatchSize, SampleObserver, MAX_BATCH_SIZE,
};
pub use history::{History, HistoryEntry};
pub use region::{Circle, Region, MAX_COORDINATE};
pub use sampler::{classify, generate_point, Sample, Sampler};
pub use session::{SharedSimulation, Simulation};
