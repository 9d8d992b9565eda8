use std::sync::Arc;
use swmr::arena::{Arena, ParkingLotArena, StdArena};
use swmr::role::Mix;
use swmr::scenario::Scenario;
use swmr::shared_state::SharedState;
use swmr::strategy::{LockStrategy, StrategyKind};
use swmr::workload::{ReadProfile, WRITE_INCREMENT, WRITE_KEY};
use swmr_bench::scaling_harness;
use swmr_bench::scaling_harness::ExtendedOptions;

const THREADS: usize = 4;
const WRITES: u64 = 1_000;

#[test]
fn no_lost_updates_std() {
    for profile in ReadProfile::VARIANTS {
        __no_lost_updates(Arc::new(StdArena::new()), profile);
    }
}

#[test]
fn no_lost_updates_parking_lot() {
    for profile in ReadProfile::VARIANTS {
        __no_lost_updates(Arc::new(ParkingLotArena::new()), profile);
    }
}

/// One writer and three readers; once the writer has completed its writes, the key under
/// write holds its initial value plus every increment.
fn __no_lost_updates<X, S>(arena: Arc<Arena<X, S>>, profile: ReadProfile)
where
    X: for<'a> LockStrategy<'a, T = SharedState> + 'static,
    S: for<'a> LockStrategy<'a, T = SharedState> + 'static,
{
    let initial = SharedState::expected(WRITE_KEY);
    let expected = (0..WRITES).fold(initial, |acc, _| acc + WRITE_INCREMENT);
    assert!((initial + WRITES as f64 * WRITE_INCREMENT - expected).abs() < 1e-6);

    for scenario in Scenario::generate(profile, Mix::SingleWriter) {
        let result = scaling_harness::run_iterations(&arena, &scenario, THREADS, WRITES, &ExtendedOptions::default()).unwrap();
        assert_eq!(Some(WRITES), result.writes);
        assert_eq!(Some(WRITES * (THREADS as u64 - 1)), result.reads);

        let value = match scenario.strategy {
            StrategyKind::Exclusive => arena.exclusive().acquire_read().get(WRITE_KEY),
            StrategyKind::SharedOrExclusive => arena.shared().acquire_read().get(WRITE_KEY),
        };
        assert_eq!(Some(expected), value, "{}", scenario.name());
    }
}
