//! Simulation session: one complete run at a time.
//!
//! A run samples the full batch, aggregates it and appends the estimate
//! to the history before returning. A failed run appends nothing.

use std::sync::{Arc, Mutex, MutexGuard, TryLockError};

use tracing::{debug, info};

use super::batch::{run_batch_observed, BatchResult, SampleObserver};
use super::history::History;
use super::region::Region;
use super::sampler::Sample;
use crate::config::PiConfig;
use crate::engine::rng::SimRng;
use crate::error::{PiError, PiResult};

/// Owns the region, RNG and history for a sequence of runs.
#[derive(Debug, Clone)]
pub struct Simulation {
    region: Region,
    rng: SimRng,
    history: History,
    last_result: Option<BatchResult>,
}

impl Simulation {
    /// Create a session over a square region.
    ///
    /// # Errors
    ///
    /// Returns [`PiError::InvalidRegion`] if the region is not square.
    pub fn new(region: Region, rng: SimRng) -> PiResult<Self> {
        region.ensure_square()?;
        Ok(Self {
            region,
            rng,
            history: History::new(),
            last_result: None,
        })
    }

    /// Create a session from a validated configuration.
    ///
    /// Uses the configured seed, or an entropy seed when none is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured region is invalid.
    pub fn from_config(config: &PiConfig) -> PiResult<Self> {
        let rng = config
            .reproducibility
            .seed
            .map_or_else(SimRng::from_entropy, SimRng::new);
        Self::new(config.region()?, rng)
    }

    /// Run one batch and record its estimate.
    ///
    /// # Errors
    ///
    /// Returns [`PiError::InvalidBatchSize`] for `n == 0`; history is left
    /// untouched.
    pub fn run(&mut self, n: u64) -> PiResult<&BatchResult> {
        self.run_observed(n, &mut |_: &Sample| {})
    }

    /// Run one batch, notifying `observer` for each sample.
    ///
    /// # Errors
    ///
    /// See [`Simulation::run`].
    pub fn run_observed(
        &mut self,
        n: u64,
        observer: &mut dyn SampleObserver,
    ) -> PiResult<&BatchResult> {
        let result = run_batch_observed(&self.region, n, &mut self.rng, observer)?;
        let index = self.history.append(result.estimate, result.total());
        debug!(
            run = index,
            n,
            inside = result.inside_count,
            outside = result.outside_count,
            estimate = result.estimate,
            "batch complete"
        );
        Ok(self.last_result.insert(result))
    }

    /// Replace the region between runs.
    ///
    /// # Errors
    ///
    /// Returns [`PiError::InvalidRegion`] if the region is not square; the
    /// previous region stays in effect.
    pub fn set_region(&mut self, region: Region) -> PiResult<()> {
        region.ensure_square()?;
        info!(
            left = region.left(),
            right = region.right(),
            top = region.top(),
            bottom = region.bottom(),
            "region reconfigured"
        );
        self.region = region;
        Ok(())
    }

    /// Current region.
    #[must_use]
    pub const fn region(&self) -> &Region {
        &self.region
    }

    /// Estimates recorded so far.
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Result of the most recent successful run.
    #[must_use]
    pub const fn last_result(&self) -> Option<&BatchResult> {
        self.last_result.as_ref()
    }

    /// Drop the retained samples of the last run.
    ///
    /// History is unaffected.
    pub fn clear_last_result(&mut self) {
        self.last_result = None;
    }

    /// Seed of the session RNG, for replay.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.rng.master_seed()
    }
}

/// Thread-safe handle that serializes runs on one [`Simulation`].
///
/// [`SharedSimulation::run`] waits for an in-flight run to finish;
/// [`SharedSimulation::try_run`] rejects the trigger instead.
#[derive(Debug, Clone)]
pub struct SharedSimulation {
    inner: Arc<Mutex<Simulation>>,
}

impl SharedSimulation {
    /// Wrap a session.
    #[must_use]
    pub fn new(simulation: Simulation) -> Self {
        Self {
            inner: Arc::new(Mutex::new(simulation)),
        }
    }

    /// Run a batch, waiting for any in-flight run first.
    ///
    /// # Errors
    ///
    /// See [`Simulation::run`].
    pub fn run(&self, n: u64) -> PiResult<BatchResult> {
        let mut guard = self.lock();
        guard.run(n).cloned()
    }

    /// Run a batch only if no other run is in flight.
    ///
    /// # Errors
    ///
    /// Returns [`PiError::RunInProgress`] when the session is busy, or
    /// any error from [`Simulation::run`].
    pub fn try_run(&self, n: u64) -> PiResult<BatchResult> {
        let mut guard = match self.inner.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::WouldBlock) => return Err(PiError::RunInProgress),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
        };
        guard.run(n).cloned()
    }

    /// Snapshot of the history taken between runs.
    #[must_use]
    pub fn history(&self) -> History {
        self.lock().history().clone()
    }

    /// Replace the region between runs.
    ///
    /// # Errors
    ///
    /// See [`Simulation::set_region`].
    pub fn set_region(&self, region: Region) -> PiResult<()> {
        self.lock().set_region(region)
    }

    /// Exclusive access for the duration of the guard.
    ///
    /// Holding the guard blocks every other trigger.
    #[must_use]
    pub fn lock(&self) -> MutexGuard<'_, Simulation> {
        // A panic mid-run cannot leave a partial append: the append is the
        // last step of a run.
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
