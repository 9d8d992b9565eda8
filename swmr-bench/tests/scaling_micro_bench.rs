use std::sync::Arc;
use std::time::Duration;
use swmr::arena::{Arena, ParkingLotArena, StdArena};
use swmr::role::Mix;
use swmr::scenario::Scenario;
use swmr::shared_state::SharedState;
use swmr::strategy::{LockStrategy, StrategyKind};
use swmr::workload::ReadProfile;
use swmr_bench::scaling_harness;
use swmr_bench::scaling_harness::{ExtendedOptions, Options};

#[test]
fn scaling_micro_bench_std_heavy() {
    __scaling_micro_bench(Arc::new(StdArena::new()), ReadProfile::Heavy, Mix::SingleWriter);
}

#[test]
fn scaling_micro_bench_std_light() {
    __scaling_micro_bench(Arc::new(StdArena::new()), ReadProfile::Light, Mix::SingleWriter);
}

#[test]
fn scaling_micro_bench_std_read_only() {
    __scaling_micro_bench(Arc::new(StdArena::new()), ReadProfile::Heavy, Mix::ReadOnly);
}

#[test]
fn scaling_micro_bench_parking_lot_heavy() {
    __scaling_micro_bench(Arc::new(ParkingLotArena::new()), ReadProfile::Heavy, Mix::SingleWriter);
}

#[test]
fn scaling_micro_bench_parking_lot_light() {
    __scaling_micro_bench(Arc::new(ParkingLotArena::new()), ReadProfile::Light, Mix::SingleWriter);
}

#[test]
fn scaling_micro_bench_parking_lot_read_only() {
    __scaling_micro_bench(Arc::new(ParkingLotArena::new()), ReadProfile::Light, Mix::ReadOnly);
}

/// Runs both strategies across the default sweep with occupancy checks enabled. Any
/// breach of mutual exclusion panics a worker, failing the test.
fn __scaling_micro_bench<X, S>(arena: Arc<Arena<X, S>>, profile: ReadProfile, mix: Mix)
where
    X: for<'a> LockStrategy<'a, T = SharedState> + 'static,
    S: for<'a> LockStrategy<'a, T = SharedState> + 'static,
{
    for scenario in Scenario::generate(profile, mix) {
        for &threads in &scenario.thread_counts {
            let opts = Options {
                threads,
                duration: Duration::from_millis(50),
            };
            let result = scaling_harness::run_for(&arena, &scenario, &opts, &ExtendedOptions::default()).unwrap();
            println!("|{:<55}|{}", scenario.name(), result);

            assert_eq!(mix.readers(threads) > 0, result.reads.is_some());
            assert_eq!(mix.writers(threads) > 0, result.writes.is_some());
            let peak_readers = result.peak_readers.unwrap();
            assert!(peak_readers as usize <= mix.readers(threads));
            assert_eq!(result.reads.unwrap_or_default() > 0, peak_readers >= 1, "{peak_readers}");
            if scenario.strategy == StrategyKind::Exclusive {
                assert!(peak_readers <= 1, "{peak_readers}");
            }
        }
    }
}
