//! Drives a [`Scenario`] over a configured number of threads against one [`Arena`].
//!
//! Two drivers share one spawning path: [`run_iterations`] repeats the body a fixed
//! number of times per thread (what criterion's `iter_custom` wants), while [`run_for`]
//! keeps every thread going until a duration elapses.

use crate::rate::Rate;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};
use swmr::arena::Arena;
use swmr::harness::{drive, iterate, ThreadContext};
use swmr::occupancy::Occupancy;
use swmr::role::{Mix, Role};
use swmr::scenario::{Scenario, ScenarioError, Timing};
use swmr::shared_state::SharedState;
use swmr::strategy::{LockStrategy, StrategyKind};
use swmr::workload::ReadProfile;

pub mod print;

#[derive(Debug, Clone)]
pub struct Options {
    pub threads: usize,
    pub duration: Duration,
}

#[derive(Debug, Clone)]
pub struct ExtendedOptions {
    pub time_check_interval: u32,
    pub debug_locks: bool,
    pub debug_exits: bool,
    pub asserts_enabled: bool,
}

impl Default for ExtendedOptions {
    fn default() -> Self {
        Self {
            time_check_interval: 100,
            debug_locks: false,
            debug_exits: false,
            asserts_enabled: true,
        }
    }
}

#[derive(Debug)]
pub struct BenchmarkResult {
    pub threads: usize,
    pub reads: Option<u64>,
    pub writes: Option<u64>,
    /// Only tracked when asserts are enabled.
    pub peak_readers: Option<u32>,
    pub elapsed: Duration,
}

impl BenchmarkResult {
    pub fn total(&self) -> u64 {
        self.reads.unwrap_or_default() + self.writes.unwrap_or_default()
    }

    pub fn rate(&self, ops: u64) -> Rate {
        Rate::rate(self.elapsed, ops)
    }

    pub fn maybe_rate(&self, ops: Option<u64>) -> Option<Rate> {
        Rate::maybe_rate(self.elapsed, ops)
    }
}

/// Runs `iterations` bodies on each of `threads` threads.
pub fn run_iterations<X, S>(
    arena: &Arc<Arena<X, S>>,
    scenario: &Scenario,
    threads: usize,
    iterations: u64,
    ext_opts: &ExtendedOptions,
) -> Result<BenchmarkResult, ScenarioError>
where
    X: for<'a> LockStrategy<'a, T = SharedState> + 'static,
    S: for<'a> LockStrategy<'a, T = SharedState> + 'static,
{
    execute(arena, scenario, threads, Repeat::Iterations(iterations), ext_opts)
}

/// Runs `opts.threads` threads until `opts.duration` elapses.
pub fn run_for<X, S>(
    arena: &Arc<Arena<X, S>>,
    scenario: &Scenario,
    opts: &Options,
    ext_opts: &ExtendedOptions,
) -> Result<BenchmarkResult, ScenarioError>
where
    X: for<'a> LockStrategy<'a, T = SharedState> + 'static,
    S: for<'a> LockStrategy<'a, T = SharedState> + 'static,
{
    execute(arena, scenario, opts.threads, Repeat::For(opts.duration), ext_opts)
}

#[derive(Debug, Clone, Copy)]
enum Repeat {
    Iterations(u64),
    For(Duration),
}

#[derive(Debug)]
struct Outcome {
    role: Role,
    iterations: u64,
    elapsed: Duration,
}

fn execute<X, S>(
    arena: &Arc<Arena<X, S>>,
    scenario: &Scenario,
    threads: usize,
    repeat: Repeat,
    ext_opts: &ExtendedOptions,
) -> Result<BenchmarkResult, ScenarioError>
where
    X: for<'a> LockStrategy<'a, T = SharedState> + 'static,
    S: for<'a> LockStrategy<'a, T = SharedState> + 'static,
{
    scenario.check_threads(threads)?;
    arena.prepare();

    let Scenario {
        strategy,
        profile,
        mix,
        timing,
        ..
    } = *scenario;
    let occupancy = ext_opts
        .asserts_enabled
        .then(|| Arc::new(Occupancy::new(strategy)));
    let running = Arc::new(AtomicBool::new(true));

    // the extra party is this thread, which starts the clock
    let start_barrier = Arc::new(Barrier::new(threads + 1));

    let workers = (0..threads)
        .map(|ordinal| {
            let arena = arena.clone();
            let occupancy = occupancy.clone();
            let running = running.clone();
            let start_barrier = start_barrier.clone();
            let ext_opts = ext_opts.clone();
            thread::spawn(move || {
                let worker = Worker {
                    ordinal,
                    threads,
                    mix,
                    profile,
                    repeat,
                    occupancy: occupancy.as_deref(),
                    running: &running,
                    ext_opts: &ext_opts,
                };
                start_barrier.wait();
                let started = Instant::now();
                let iterations = match strategy {
                    StrategyKind::Exclusive => worker.work(arena.exclusive()),
                    StrategyKind::SharedOrExclusive => worker.work(arena.shared()),
                };
                let role = mix.role(ordinal);
                if ext_opts.debug_exits {
                    println!("{role} {ordinal} exited after {iterations} iterations");
                }
                Outcome {
                    role,
                    iterations,
                    elapsed: started.elapsed(),
                }
            })
        })
        .collect::<Vec<_>>();

    start_barrier.wait();
    let start_time = Instant::now();

    if let Repeat::For(duration) = repeat {
        let running = running.clone();
        let debug_exits = ext_opts.debug_exits;
        thread::spawn(move || {
            thread::sleep(duration);
            if debug_exits {
                println!("terminating threads");
            }
            running.store(false, Ordering::Relaxed);
        })
        .join()
        .unwrap();
    }

    let outcomes = workers
        .into_iter()
        .map(JoinHandle::join)
        .map(Result::unwrap)
        .collect::<Vec<_>>();
    let wall_clock = Instant::now() - start_time;

    let sum_for = |role: Role| {
        outcomes
            .iter()
            .filter(|outcome| outcome.role == role)
            .map(|outcome| outcome.iterations)
            .sum::<u64>()
    };
    let elapsed = match timing {
        Timing::WallClock => wall_clock,
        Timing::ThreadMean => {
            outcomes.iter().map(|outcome| outcome.elapsed).sum::<Duration>() / threads as u32
        }
    };

    Ok(BenchmarkResult {
        threads,
        reads: (mix.readers(threads) > 0).then(|| sum_for(Role::Reader)),
        writes: (mix.writers(threads) > 0).then(|| sum_for(Role::Writer)),
        peak_readers: occupancy.map(|occupancy| occupancy.peak_readers()),
        elapsed,
    })
}

struct Worker<'w> {
    ordinal: usize,
    threads: usize,
    mix: Mix,
    profile: ReadProfile,
    repeat: Repeat,
    occupancy: Option<&'w Occupancy>,
    running: &'w AtomicBool,
    ext_opts: &'w ExtendedOptions,
}

impl Worker<'_> {
    #[inline]
    fn work<'a, L: LockStrategy<'a, T = SharedState>>(&self, lock: &'a L) -> u64 {
        match self.repeat {
            Repeat::Iterations(iterations) => {
                let ctx = ThreadContext::new(self.ordinal, self.threads, iterations);
                drive(lock, &ctx, self.mix, self.profile, self.occupancy)
            }
            Repeat::For(_) => self.work_until_stopped(lock),
        }
    }

    fn work_until_stopped<'a, L: LockStrategy<'a, T = SharedState>>(&self, lock: &'a L) -> u64 {
        let role = self.mix.role(self.ordinal);
        let ordinal = self.ordinal;
        let time_check_interval = u64::from(self.ext_opts.time_check_interval.max(1));
        let mut iterations = 0u64;
        while iterations % time_check_interval != 0 || self.running.load(Ordering::Relaxed) {
            iterate(lock, role, self.profile, self.occupancy);
            if self.ext_opts.debug_locks {
                println!("{role} {ordinal} unlocked");
            }
            iterations += 1;
        }
        iterations
    }
}
