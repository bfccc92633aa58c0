//! Batch aggregation and the π estimate.
//!
//! # Governing Equation
//!
//! ```text
//! π̂ = 4 · inside / n,   0 ≤ π̂ ≤ 4,   n > 0
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::region::Region;
use super::sampler::{Sample, Sampler};
use crate::engine::rng::SimRng;
use crate::error::{PiError, PiResult};

/// Receives each sample in generation order.
///
/// Drawing surfaces implement this to plot points as they are produced.
/// Any `FnMut(&Sample)` closure is an observer.
pub trait SampleObserver {
    /// Called once per generated sample.
    fn on_sample(&mut self, sample: &Sample);
}

impl<F> SampleObserver for F
where
    F: FnMut(&Sample),
{
    fn on_sample(&mut self, sample: &Sample) {
        self(sample);
    }
}

/// Largest number of samples in one batch.
///
/// Every sample is retained in the result, so this bounds memory use.
pub const MAX_BATCH_SIZE: u64 = 10_000_000;

/// Validated number of samples per batch, in `1..=MAX_BATCH_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct BatchSize(u64);

impl BatchSize {
    /// Create a batch size.
    ///
    /// # Errors
    ///
    /// Returns [`PiError::InvalidBatchSize`] for `n <= 0` or
    /// `n > MAX_BATCH_SIZE`.
    pub fn new(n: i64) -> PiResult<Self> {
        if n <= 0 || n.unsigned_abs() > MAX_BATCH_SIZE {
            return Err(PiError::InvalidBatchSize { value: n });
        }
        Ok(Self(n.unsigned_abs()))
    }

    /// Parse user-supplied text.
    ///
    /// Surrounding whitespace is ignored. Anything that is not a decimal
    /// integer, including fractions and exponents, is rejected rather
    /// than truncated.
    ///
    /// # Errors
    ///
    /// Returns [`PiError::NonNumericInput`] for non-integer text and
    /// [`PiError::InvalidBatchSize`] for integers outside
    /// `1..=MAX_BATCH_SIZE`.
    pub fn parse(input: &str) -> PiResult<Self> {
        let trimmed = input.trim();
        let n: i64 = trimmed.parse().map_err(|_| PiError::NonNumericInput {
            input: input.to_string(),
        })?;
        Self::new(n)
    }

    /// The count as `u64`.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for BatchSize {
    type Error = PiError;

    fn try_from(n: i64) -> PiResult<Self> {
        Self::new(n)
    }
}

impl From<BatchSize> for u64 {
    fn from(size: BatchSize) -> Self {
        size.0
    }
}

impl FromStr for BatchSize {
    type Err = PiError;

    fn from_str(s: &str) -> PiResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for BatchSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of one batch.
///
/// Built only by aggregation, so the counts always match the samples.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResult {
    /// Points inside or on the circle.
    pub inside_count: u64,
    /// Points outside the circle.
    pub outside_count: u64,
    /// π estimate `4 · inside / n`.
    pub estimate: f64,
    /// Every sample, in generation order.
    pub samples: Vec<Sample>,
}

impl BatchResult {
    /// Aggregate an already-generated batch.
    ///
    /// # Errors
    ///
    /// Returns [`PiError::InvalidBatchSize`] for an empty batch.
    pub fn from_samples(samples: Vec<Sample>) -> PiResult<Self> {
        if samples.is_empty() {
            return Err(PiError::InvalidBatchSize { value: 0 });
        }
        let inside_count = samples.iter().filter(|s| s.inside).count() as u64;
        let total = samples.len() as u64;
        let outside_count = total - inside_count;
        Ok(Self {
            inside_count,
            outside_count,
            estimate: 4.0 * inside_count as f64 / total as f64,
            samples,
        })
    }

    /// Total number of samples.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.inside_count + self.outside_count
    }

    /// Fraction of samples inside the circle.
    #[must_use]
    pub fn inside_fraction(&self) -> f64 {
        self.inside_count as f64 / self.total() as f64
    }

    /// Get error |π̂ - π|.
    #[must_use]
    pub fn absolute_error(&self) -> f64 {
        (self.estimate - std::f64::consts::PI).abs()
    }
}

/// Run one batch of `n` samples with no observer.
///
/// # Errors
///
/// Returns [`PiError::InvalidBatchSize`] for `n == 0` or
/// `n > MAX_BATCH_SIZE`, and
/// [`PiError::InvalidRegion`] for a non-square region. Nothing is sampled
/// in either case.
pub fn run_batch(region: &Region, n: u64, rng: &mut SimRng) -> PiResult<BatchResult> {
    run_batch_observed(region, n, rng, &mut |_: &Sample| {})
}

/// Run one batch of `n` samples, notifying `observer` for each sample.
///
/// # Errors
///
/// See [`run_batch`].
pub fn run_batch_observed(
    region: &Region,
    n: u64,
    rng: &mut SimRng,
    observer: &mut dyn SampleObserver,
) -> PiResult<BatchResult> {
    if n == 0 || n > MAX_BATCH_SIZE {
        return Err(PiError::InvalidBatchSize {
            value: i64::try_from(n).unwrap_or(i64::MAX),
        });
    }
    let sampler = Sampler::new(*region)?;

    let mut samples = Vec::with_capacity(usize::try_from(n).unwrap_or_default());
    for _ in 0..n {
        let sample = sampler.sample(rng);
        observer.on_sample(&sample);
        samples.push(sample);
    }

    BatchResult::from_samples(samples)
}
