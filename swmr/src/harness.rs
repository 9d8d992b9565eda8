//! The per-iteration body of the scaling experiment, and the per-thread context through
//! which a benchmark runner drives it.

use crate::occupancy::Occupancy;
use crate::role::{Mix, Role};
use crate::shared_state::SharedState;
use crate::strategy::LockStrategy;
use crate::workload;
use crate::workload::ReadProfile;
use std::ops::Range;

/// What a runner tells each of its threads: who it is, how many threads are contending,
/// and how many times to repeat the body for the current sample.
#[derive(Debug, Clone)]
pub struct ThreadContext {
    ordinal: usize,
    threads: usize,
    iterations: u64,
}

impl ThreadContext {
    pub fn new(ordinal: usize, threads: usize, iterations: u64) -> Self {
        debug_assert!(ordinal < threads, "ordinal {ordinal} out of range for {threads} threads");
        Self {
            ordinal,
            threads,
            iterations,
        }
    }

    #[inline]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    #[inline]
    pub fn threads(&self) -> usize {
        self.threads
    }

    #[inline]
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// The repeat loop. The body must be run once per item, to completion.
    #[inline]
    pub fn iter(&self) -> Range<u64> {
        0..self.iterations
    }
}

/// Runs one critical section in the given role: writers acquire exclusively and
/// [`write`](workload::write); readers take the strategy's read path and apply `profile`.
///
/// When an [`Occupancy`] is supplied, the critical section is registered with it.
#[inline]
pub fn iterate<'a, L: LockStrategy<'a, T = SharedState>>(
    lock: &'a L,
    role: Role,
    profile: ReadProfile,
    occupancy: Option<&Occupancy>,
) -> f64 {
    match role {
        Role::Writer => {
            let mut state = lock.acquire_exclusive();
            let _ticket = occupancy.map(|occupancy| occupancy.enter(Role::Writer));
            workload::write(&mut state)
        }
        Role::Reader => {
            let state = lock.acquire_read();
            let _ticket = occupancy.map(|occupancy| occupancy.enter(Role::Reader));
            profile.read(&state)
        }
    }
}

/// Drives the body through every iteration of `ctx`, in the role `mix` assigns to the
/// context's ordinal. Returns the number of completed iterations.
pub fn drive<'a, L: LockStrategy<'a, T = SharedState>>(
    lock: &'a L,
    ctx: &ThreadContext,
    mix: Mix,
    profile: ReadProfile,
    occupancy: Option<&Occupancy>,
) -> u64 {
    let role = mix.role(ctx.ordinal());
    let mut completed = 0;
    for _ in ctx.iter() {
        iterate(lock, role, profile, occupancy);
        completed += 1;
    }
    completed
}
