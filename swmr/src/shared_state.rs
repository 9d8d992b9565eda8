//! The data contended over by every benchmark thread.

use std::collections::BTreeMap;

/// Number of keys in a populated [`SharedState`]. Keys run from `0` to `KEYS - 1`.
pub const KEYS: u32 = 1_000;

/// An ordered map of small integer keys to floating-point values.
///
/// The map is populated once by [`initialize`](Self::initialize) and is never resized
/// afterward; workloads only read or overwrite the values of existing keys.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SharedState {
    data: BTreeMap<u32, f64>,
}

impl SharedState {
    /// Creates an empty (unpopulated) state.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state that has already been populated.
    pub fn populated() -> Self {
        let mut state = Self::new();
        state.initialize();
        state
    }

    /// The value that [`initialize`](Self::initialize) assigns to `key`.
    #[inline(always)]
    pub fn expected(key: u32) -> f64 {
        (key as f64).sqrt()
    }

    /// Populates every key in `0..KEYS` with [`expected`](Self::expected), provided the
    /// map is empty. Returns `true` if this call did the populating.
    ///
    /// Racing callers are harmless: whoever comes second finds a populated map, and in
    /// any case every caller would write identical values.
    pub fn initialize(&mut self) -> bool {
        if !self.data.is_empty() {
            return false;
        }
        self.data.extend((0..KEYS).map(|key| (key, Self::expected(key))));
        true
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn get(&self, key: u32) -> Option<f64> {
        self.data.get(&key).copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = u32> + '_ {
        self.data.keys().copied()
    }

    /// `true` if the map holds exactly the keys `0..KEYS`, each with its initial value.
    pub fn is_pristine(&self) -> bool {
        self.data.len() == KEYS as usize
            && self
                .data
                .iter()
                .enumerate()
                .all(|(index, (&key, &value))| key == index as u32 && value == Self::expected(key))
    }

    /// Value at `key`.
    ///
    /// # Panics
    /// If the state has not been populated.
    #[inline(always)]
    pub(crate) fn value(&self, key: u32) -> f64 {
        match self.data.get(&key) {
            Some(&value) => value,
            None => unpopulated(key),
        }
    }

    /// Mutable value at `key`. Never inserts, so the key set stays as
    /// [`initialize`](Self::initialize) left it.
    ///
    /// # Panics
    /// If the state has not been populated.
    #[inline(always)]
    pub(crate) fn value_mut(&mut self, key: u32) -> &mut f64 {
        match self.data.get_mut(&key) {
            Some(value) => value,
            None => unpopulated(key),
        }
    }
}

#[cold]
#[inline(never)]
fn unpopulated(key: u32) -> ! {
    panic!("key {key} accessed before the state was initialized")
}
