//! The two mutual-exclusion strategies under test, each backed by `std::sync` and by
//! `parking_lot`.
//!
//! | Backend                  | [`StrategyKind::Exclusive`] | [`StrategyKind::SharedOrExclusive`] |
//! |--------------------------|-----------------------------|-------------------------------------|
//! | [`Backend::Std`]         | [`std::sync::Mutex`]        | [`std::sync::RwLock`]               |
//! | [`Backend::ParkingLot`]  | [`parking_lot::Mutex`]      | [`parking_lot::RwLock`]             |
//!
//! Neither strategy offers upgrades or downgrades; every critical section acquires afresh.
//! Fairness is whatever the backing lock provides.

use crate::remedy::Remedy;
use std::fmt::{Display, Formatter};
use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// One holder at a time, reader or writer.
    Exclusive,

    /// Any number of concurrent readers, or a sole writer.
    SharedOrExclusive,
}

impl StrategyKind {
    pub const VARIANTS: [StrategyKind; 2] = [StrategyKind::Exclusive, StrategyKind::SharedOrExclusive];

    /// Whether readers may hold the lock alongside one another.
    #[inline(always)]
    pub fn concurrent_readers(self) -> bool {
        matches!(self, StrategyKind::SharedOrExclusive)
    }

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Exclusive => "exclusive",
            StrategyKind::SharedOrExclusive => "shared_or_exclusive",
        }
    }
}

impl Display for StrategyKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    Std,
    ParkingLot,
}

impl Backend {
    pub const VARIANTS: [Backend; 2] = [Backend::Std, Backend::ParkingLot];

    pub fn name(self) -> &'static str {
        match self {
            Backend::Std => "std",
            Backend::ParkingLot => "parking_lot",
        }
    }
}

impl Display for Backend {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A lock that guards a value of type [`T`](Self::T) and hands out scope-bound guards.
///
/// [`acquire_read`](Self::acquire_read) is the path taken by readers: an exclusive
/// acquisition for [`StrategyKind::Exclusive`], a shared one for
/// [`StrategyKind::SharedOrExclusive`]. Writers always take
/// [`acquire_exclusive`](Self::acquire_exclusive). Both block until the lock is granted.
pub trait LockStrategy<'a>: Sync + Send {
    type T: 'a;
    type R: Deref<Target = Self::T>;
    type W: DerefMut<Target = Self::T>;

    fn new(t: Self::T) -> Self;

    fn kind() -> StrategyKind;

    fn backend() -> Backend;

    fn acquire_read(&'a self) -> Self::R;

    fn acquire_exclusive(&'a self) -> Self::W;
}

impl<'a, T: Sync + Send + 'a> LockStrategy<'a> for Mutex<T> {
    type T = T;
    type R = MutexGuard<'a, T>;
    type W = MutexGuard<'a, T>;

    fn new(t: Self::T) -> Self {
        Self::new(t)
    }

    fn kind() -> StrategyKind {
        StrategyKind::Exclusive
    }

    fn backend() -> Backend {
        Backend::Std
    }

    #[inline]
    fn acquire_read(&'a self) -> Self::R {
        self.lock().remedy()
    }

    #[inline]
    fn acquire_exclusive(&'a self) -> Self::W {
        self.lock().remedy()
    }
}

impl<'a, T: Sync + Send + 'a> LockStrategy<'a> for RwLock<T> {
    type T = T;
    type R = RwLockReadGuard<'a, T>;
    type W = RwLockWriteGuard<'a, T>;

    fn new(t: Self::T) -> Self {
        Self::new(t)
    }

    fn kind() -> StrategyKind {
        StrategyKind::SharedOrExclusive
    }

    fn backend() -> Backend {
        Backend::Std
    }

    #[inline]
    fn acquire_read(&'a self) -> Self::R {
        self.read().remedy()
    }

    #[inline]
    fn acquire_exclusive(&'a self) -> Self::W {
        self.write().remedy()
    }
}

impl<'a, T: Sync + Send + 'a> LockStrategy<'a> for parking_lot::Mutex<T> {
    type T = T;
    type R = parking_lot::MutexGuard<'a, T>;
    type W = parking_lot::MutexGuard<'a, T>;

    fn new(t: Self::T) -> Self {
        Self::new(t)
    }

    fn kind() -> StrategyKind {
        StrategyKind::Exclusive
    }

    fn backend() -> Backend {
        Backend::ParkingLot
    }

    #[inline]
    fn acquire_read(&'a self) -> Self::R {
        self.lock()
    }

    #[inline]
    fn acquire_exclusive(&'a self) -> Self::W {
        self.lock()
    }
}

impl<'a, T: Sync + Send + 'a> LockStrategy<'a> for parking_lot::RwLock<T> {
    type T = T;
    type R = parking_lot::RwLockReadGuard<'a, T>;
    type W = parking_lot::RwLockWriteGuard<'a, T>;

    fn new(t: Self::T) -> Self {
        Self::new(t)
    }

    fn kind() -> StrategyKind {
        StrategyKind::SharedOrExclusive
    }

    fn backend() -> Backend {
        Backend::ParkingLot
    }

    #[inline]
    fn acquire_read(&'a self) -> Self::R {
        self.read()
    }

    #[inline]
    fn acquire_exclusive(&'a self) -> Self::W {
        self.write()
    }
}
