use std::sync::LockResult;

/// From _Poison_, by _The Prodigy_ (1994).
/// I got the poison,
/// I got the **remedy**...
///
/// Unpacks a lock result, extracting the guard whether or not the lock was poisoned.
/// A poisoned lock only means that some other benchmark thread panicked while holding
/// it; that thread has already failed the run, so the surviving threads carry on with
/// the data as they find it.
pub trait Remedy<T> {
    type Output;

    fn remedy(self) -> Self::Output;
}

impl<T> Remedy<T> for LockResult<T> {
    type Output = T;

    #[inline(always)]
    fn remedy(self) -> Self::Output {
        self.unwrap_or_else(|error| error.into_inner())
    }
}
