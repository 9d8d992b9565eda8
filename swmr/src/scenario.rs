//! Declarative description of one comparative experiment.

use crate::role::Mix;
use crate::strategy::StrategyKind;
use crate::workload::ReadProfile;
use thiserror::Error;

/// The largest thread count in a default sweep.
pub const MAX_THREADS: usize = 8;

/// How the elapsed time of a multi-threaded sample is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timing {
    /// From the moment the threads are released to the moment the last one finishes.
    /// Counts the time threads spend blocked on the lock, which is the point of the
    /// exercise.
    WallClock,

    /// The mean of the per-thread elapsed times.
    ThreadMean,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioError {
    #[error("scenario {scenario} declares no thread counts")]
    NoThreadCounts { scenario: String },

    #[error("scenario {scenario} declares {threads} thread(s), but the {mix} mix needs at least {min}")]
    TooFewThreads {
        scenario: String,
        mix: Mix,
        threads: usize,
        min: usize,
    },

    #[error("scenario {scenario} thread counts must be strictly ascending, but {next} follows {prev}")]
    NotAscending {
        scenario: String,
        prev: usize,
        next: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub strategy: StrategyKind,
    pub profile: ReadProfile,
    pub mix: Mix,
    pub thread_counts: Vec<usize>,
    pub timing: Timing,
}

impl Scenario {
    /// A wall-clock scenario sweeping thread counts by doubling, from the least the mix
    /// allows up to [`MAX_THREADS`].
    pub fn new(strategy: StrategyKind, profile: ReadProfile, mix: Mix) -> Self {
        Self {
            strategy,
            profile,
            mix,
            thread_counts: doubling(mix.min_threads(), MAX_THREADS),
            timing: Timing::WallClock,
        }
    }

    /// One scenario per strategy, identical in every other respect.
    pub fn generate(profile: ReadProfile, mix: Mix) -> [Scenario; 2] {
        StrategyKind::VARIANTS.map(|strategy| Self::new(strategy, profile, mix))
    }

    /// Every combination of strategy, read profile and mix.
    pub fn matrix() -> Vec<Scenario> {
        Mix::VARIANTS
            .into_iter()
            .flat_map(|mix| {
                ReadProfile::VARIANTS
                    .into_iter()
                    .flat_map(move |profile| Self::generate(profile, mix))
            })
            .collect()
    }

    pub fn with_thread_counts(mut self, thread_counts: Vec<usize>) -> Self {
        self.thread_counts = thread_counts;
        self
    }

    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// E.g., `shared_or_exclusive/heavy_read/single_writer`.
    pub fn name(&self) -> String {
        format!("{}/{}/{}", self.strategy, self.profile, self.mix)
    }

    /// Checks that a single configuration of `threads` is meaningful for this scenario.
    pub fn check_threads(&self, threads: usize) -> Result<(), ScenarioError> {
        let min = self.mix.min_threads();
        if threads < min {
            return Err(ScenarioError::TooFewThreads {
                scenario: self.name(),
                mix: self.mix,
                threads,
                min,
            });
        }
        Ok(())
    }

    /// Checks the whole sweep: non-empty, strictly ascending, and every count meaningful.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.thread_counts.is_empty() {
            return Err(ScenarioError::NoThreadCounts { scenario: self.name() });
        }
        for pair in self.thread_counts.windows(2) {
            if pair[1] <= pair[0] {
                return Err(ScenarioError::NotAscending {
                    scenario: self.name(),
                    prev: pair[0],
                    next: pair[1],
                });
            }
        }
        self.thread_counts
            .iter()
            .try_for_each(|&threads| self.check_threads(threads))
    }
}

/// `from, 2 * from, 4 * from, ...` up to and including `to`.
pub fn doubling(from: usize, to: usize) -> Vec<usize> {
    let mut counts = vec![];
    let mut threads = from.max(1);
    while threads <= to {
        counts.push(threads);
        threads *= 2;
    }
    counts
}
