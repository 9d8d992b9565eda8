//! Instrumentation of critical sections.
//!
//! An [`Occupancy`] counts the readers and writers currently inside the critical
//! sections of one lock. A thread enters right after acquiring the lock and leaves
//! (by dropping its [`Ticket`]) right before releasing it, so the counts are a faithful
//! census of the holders. Entering in a way the lock's [`StrategyKind`] forbids panics.

use crate::role::Role;
use crate::strategy::StrategyKind;
use std::sync::atomic::{AtomicU32, Ordering};

#[derive(Debug)]
pub struct Occupancy {
    kind: StrategyKind,
    readers: AtomicU32,
    writers: AtomicU32,
    peak_readers: AtomicU32,
}

impl Occupancy {
    pub fn new(kind: StrategyKind) -> Self {
        Self {
            kind,
            readers: AtomicU32::default(),
            writers: AtomicU32::default(),
            peak_readers: AtomicU32::default(),
        }
    }

    #[inline]
    pub fn kind(&self) -> StrategyKind {
        self.kind
    }

    /// Records entry into a critical section in the given role.
    ///
    /// # Panics
    /// If the entry would place a writer alongside any other holder, or (for
    /// [`StrategyKind::Exclusive`]) two readers alongside one another.
    #[inline]
    pub fn enter(&self, role: Role) -> Ticket<'_> {
        match role {
            Role::Writer => {
                let writers = self.writers.fetch_add(1, Ordering::SeqCst);
                let readers = self.readers.load(Ordering::SeqCst);
                if writers != 0 || readers != 0 {
                    panic!(
                        "{} lock admitted a writer alongside {writers} writer(s) and {readers} reader(s)",
                        self.kind
                    );
                }
            }
            Role::Reader => {
                let readers = self.readers.fetch_add(1, Ordering::SeqCst) + 1;
                let writers = self.writers.load(Ordering::SeqCst);
                if writers != 0 {
                    panic!(
                        "{} lock admitted a reader alongside {writers} writer(s)",
                        self.kind
                    );
                }
                if readers > 1 && !self.kind.concurrent_readers() {
                    panic!(
                        "{} lock admitted {readers} concurrent readers",
                        self.kind
                    );
                }
                self.peak_readers.fetch_max(readers, Ordering::Relaxed);
            }
        }
        Ticket { occupancy: self, role }
    }

    #[inline]
    fn leave(&self, role: Role) {
        match role {
            Role::Writer => self.writers.fetch_sub(1, Ordering::SeqCst),
            Role::Reader => self.readers.fetch_sub(1, Ordering::SeqCst),
        };
    }

    pub fn readers(&self) -> u32 {
        self.readers.load(Ordering::SeqCst)
    }

    pub fn writers(&self) -> u32 {
        self.writers.load(Ordering::SeqCst)
    }

    /// The most readers ever observed inside the critical section at once.
    pub fn peak_readers(&self) -> u32 {
        self.peak_readers.load(Ordering::Relaxed)
    }
}

/// Proof of presence in a critical section. Leaves on drop.
#[must_use]
#[derive(Debug)]
pub struct Ticket<'a> {
    occupancy: &'a Occupancy,
    role: Role,
}

impl Drop for Ticket<'_> {
    #[inline]
    fn drop(&mut self) {
        self.occupancy.leave(self.role);
    }
}
