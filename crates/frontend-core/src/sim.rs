//! Simulated backend work: how long `/` waits and whether it fails.
//!
//! Handlers only see the [`Simulator`] trait. Production uses
//! [`RandomSimulator`] (uniform delay, Bernoulli failure); tests inject a seed
//! or a [`FixedSimulator`] to make both draws deterministic.

use std::sync::Mutex;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{FrontendError, Result};

/// Source of the per-request delay and failure decision.
pub trait Simulator: Send + Sync {
    /// Delay to wait before answering.
    fn delay(&self) -> Duration;
    /// Whether this request should be answered with a 500.
    fn should_fail(&self) -> bool;
}

/// Parameters for [`RandomSimulator`].
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSettings {
    pub min_delay: Duration,
    pub max_delay: Duration,
    /// Probability in `[0, 1]` that a request fails.
    pub failure_rate: f64,
    /// Fixed seed for reproducible draws; OS entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            min_delay: Duration::from_millis(50),
            max_delay: Duration::from_millis(800),
            failure_rate: 0.1,
            seed: None,
        }
    }
}

impl SimulationSettings {
    pub fn validate(&self) -> Result<()> {
        if self.min_delay > self.max_delay {
            return Err(FrontendError::BadRequest(
                "simulation min delay must not exceed max delay".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.failure_rate) {
            return Err(FrontendError::BadRequest(
                "simulation failure_rate must be between 0 and 1".into(),
            ));
        }
        Ok(())
    }
}

/// Uniform delay in `[min_delay, max_delay]`, failure when a uniform draw in
/// `[0, 1)` falls below `failure_rate`.
pub struct RandomSimulator {
    min_nanos: u64,
    max_nanos: u64,
    failure_rate: f64,
    rng: Mutex<StdRng>,
}

impl RandomSimulator {
    pub fn new(settings: &SimulationSettings) -> Result<Self> {
        settings.validate()?;

        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        tracing::debug!(seeded = settings.seed.is_some(), "random simulator ready");

        Ok(Self {
            min_nanos: duration_nanos(settings.min_delay),
            max_nanos: duration_nanos(settings.max_delay),
            failure_rate: settings.failure_rate,
            rng: Mutex::new(rng),
        })
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // A poisoned RNG is still a valid RNG.
        let mut rng = self.rng.lock().unwrap_or_else(|p| p.into_inner());
        f(&mut rng)
    }
}

impl Simulator for RandomSimulator {
    fn delay(&self) -> Duration {
        let nanos = self.with_rng(|rng| rng.random_range(self.min_nanos..=self.max_nanos));
        Duration::from_nanos(nanos)
    }

    fn should_fail(&self) -> bool {
        let draw: f64 = self.with_rng(|rng| rng.random());
        draw < self.failure_rate
    }
}

fn duration_nanos(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}

/// Constant delay and constant outcome.
#[derive(Debug, Clone, Copy)]
pub struct FixedSimulator {
    pub delay: Duration,
    pub fail: bool,
}

impl FixedSimulator {
    pub fn new(delay: Duration, fail: bool) -> Self {
        Self { delay, fail }
    }
}

impl Simulator for FixedSimulator {
    fn delay(&self) -> Duration {
        self.delay
    }

    fn should_fail(&self) -> bool {
        self.fail
    }
}
