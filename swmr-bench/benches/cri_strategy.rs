use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::{Mutex, RwLock};
use swmr::shared_state::SharedState;
use swmr::strategy::LockStrategy;
use swmr::workload;
use swmr::workload::ReadProfile;

fn criterion_benchmark(c: &mut Criterion) {
    cycle(c, "std/exclusive", Mutex::new(SharedState::populated()));
    cycle(c, "std/shared_or_exclusive", RwLock::new(SharedState::populated()));
    cycle(c, "parking_lot/exclusive", parking_lot::Mutex::new(SharedState::populated()));
    cycle(c, "parking_lot/shared_or_exclusive", parking_lot::RwLock::new(SharedState::populated()));

    /// Uncontended cost of each acquisition path, bare and wrapped around a workload.
    fn cycle<L: for<'a> LockStrategy<'a, T = SharedState>>(c: &mut Criterion, name: &str, lock: L) {
        c.bench_function(&format!("{name}/acquire_read"), |b| {
            b.iter(|| lock.acquire_read());
        });
        c.bench_function(&format!("{name}/acquire_exclusive"), |b| {
            b.iter(|| lock.acquire_exclusive());
        });
        for profile in ReadProfile::VARIANTS {
            c.bench_function(&format!("{name}/{profile}"), |b| {
                b.iter(|| profile.read(&lock.acquire_read()));
            });
        }
        c.bench_function(&format!("{name}/write"), |b| {
            b.iter(|| workload::write(&mut lock.acquire_exclusive()));
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
