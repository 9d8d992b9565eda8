//! Long-lived home of the locks under test.
//!
//! An [`Arena`] is built once, before any worker thread starts, and handed to every
//! worker by reference (typically through an [`Arc`](std::sync::Arc)). It outlives the
//! workers and is dropped only after they have all been joined. Each strategy owns its
//! own [`SharedState`], populated by the same formula, so the two are mechanically
//! comparable and no data is reachable through both locks.

use crate::shared_state::SharedState;
use crate::strategy::{LockStrategy, StrategyKind};
use crossbeam_utils::CachePadded;
use std::sync::{Mutex, RwLock};

pub type StdArena = Arena<Mutex<SharedState>, RwLock<SharedState>>;

pub type ParkingLotArena =
    Arena<parking_lot::Mutex<SharedState>, parking_lot::RwLock<SharedState>>;

/// An [`StrategyKind::Exclusive`] lock and a [`StrategyKind::SharedOrExclusive`] lock,
/// each padded out to its own cache line so that hammering one does not disturb the
/// other.
pub struct Arena<X, S> {
    exclusive: CachePadded<X>,
    shared: CachePadded<S>,
}

impl<X, S> Arena<X, S>
where
    X: for<'a> LockStrategy<'a, T = SharedState>,
    S: for<'a> LockStrategy<'a, T = SharedState>,
{
    /// Creates an arena with both states unpopulated.
    ///
    /// # Panics
    /// If `X` is not an exclusive lock or `S` is not a shared-or-exclusive lock.
    pub fn new() -> Self {
        assert_eq!(StrategyKind::Exclusive, X::kind(), "exclusive slot holds the wrong kind of lock");
        assert_eq!(StrategyKind::SharedOrExclusive, S::kind(), "shared slot holds the wrong kind of lock");
        Self {
            exclusive: CachePadded::new(X::new(SharedState::new())),
            shared: CachePadded::new(S::new(SharedState::new())),
        }
    }

    /// Populates both states if they haven't been already. Safe to call any number of
    /// times, from any number of threads.
    pub fn prepare(&self) {
        self.exclusive.acquire_exclusive().initialize();
        self.shared.acquire_exclusive().initialize();
    }
}

impl<X, S> Arena<X, S> {
    #[inline(always)]
    pub fn exclusive(&self) -> &X {
        &self.exclusive
    }

    #[inline(always)]
    pub fn shared(&self) -> &S {
        &self.shared
    }
}

impl<X, S> Default for Arena<X, S>
where
    X: for<'a> LockStrategy<'a, T = SharedState>,
    S: for<'a> LockStrategy<'a, T = SharedState>,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
