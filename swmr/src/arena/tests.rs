use crate::arena::{Arena, ParkingLotArena, StdArena};
use crate::shared_state::{SharedState, KEYS};
use crate::strategy::LockStrategy;
use std::mem;
use std::sync::{Arc, Barrier, Mutex};
use std::thread;

#[test]
fn strategies_sit_on_separate_cache_lines() {
    fn __check<X, S>(arena: &Arena<X, S>) {
        let exclusive = arena.exclusive() as *const X as usize;
        let shared = arena.shared() as *const S as usize;
        assert!(mem::align_of::<Arena<X, S>>() >= 64);
        assert!(exclusive.abs_diff(shared) >= 64, "{exclusive:#x} vs {shared:#x}");
        assert_eq!(0, exclusive % 64);
        assert_eq!(0, shared % 64);
    }
    __check(&StdArena::new());
    __check(&ParkingLotArena::new());
}

#[test]
fn new_is_unpopulated() {
    let arena = StdArena::new();
    assert!(arena.exclusive().acquire_read().is_empty());
    assert!(arena.shared().acquire_read().is_empty());
}

#[test]
fn prepare_populates_both() {
    let arena = ParkingLotArena::default();
    arena.prepare();
    assert!(arena.exclusive().acquire_read().is_pristine());
    assert!(arena.shared().acquire_read().is_pristine());

    arena.prepare();
    assert_eq!(KEYS as usize, arena.exclusive().acquire_read().len());
}

#[test]
fn racing_prepares() {
    __racing_prepares(Arc::new(StdArena::new()));
    __racing_prepares(Arc::new(ParkingLotArena::new()));
}

fn __racing_prepares<X, S>(arena: Arc<Arena<X, S>>)
where
    X: for<'a> LockStrategy<'a, T = SharedState> + 'static,
    S: for<'a> LockStrategy<'a, T = SharedState> + 'static,
{
    const RACERS: usize = 8;
    let start = Arc::new(Barrier::new(RACERS));
    let threads = (0..RACERS)
        .map(|_| {
            let arena = arena.clone();
            let start = start.clone();
            thread::spawn(move || {
                start.wait();
                arena.prepare();
            })
        })
        .collect::<Vec<_>>();
    for thread in threads {
        thread.join().unwrap();
    }

    let exclusive = arena.exclusive().acquire_read();
    assert!(exclusive.is_pristine());
    assert!(exclusive.keys().eq(0..KEYS));
    drop(exclusive);

    let shared = arena.shared().acquire_read();
    assert!(shared.is_pristine());
    assert!(shared.keys().eq(0..KEYS));
}

#[test]
#[should_panic(expected = "shared slot holds the wrong kind of lock")]
fn mismatched_slots() {
    Arena::<Mutex<SharedState>, Mutex<SharedState>>::new();
}
