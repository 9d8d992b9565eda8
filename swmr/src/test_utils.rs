use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use std::{hint, thread};

/// How long a test lets a thread sit on a lock before concluding it is blocked.
pub const CHECK_WAIT: Duration = Duration::from_millis(5);

/// Spawns a new thread and waits until its closure has _started_ executing.
///
/// Useful for _probabilistically_ testing code where a thread will start off by blocking
/// on something, and we want to verify that the thread is, indeed, blocked. This function
/// only guarantees that the closure has begun executing; it doesn't guarantee
/// that the thread has blocked. Pair it with a short sleep ([`CHECK_WAIT`]) before
/// asserting that the thread has not finished.
pub fn spawn_blocked<F, T>(f: F) -> JoinHandle<T>
where
    F: FnOnce() -> T,
    F: Send + 'static,
    T: Send + 'static,
{
    let started = Arc::new(AtomicBool::new(false));
    let thread = {
        let started = started.clone();
        thread::spawn(move || {
            started.store(true, Ordering::Relaxed);
            f()
        })
    };
    while !started.load(Ordering::Relaxed) {
        hint::spin_loop();
        thread::yield_now();
    }
    thread
}
