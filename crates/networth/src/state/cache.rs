//! Revision-keyed cache for data derived from the current snapshot
//!
//! The editor bumps its revision on every snapshot swap, so anything
//! computed from the problem can be reused until the revision moves on.

#[derive(Debug)]
pub struct CachedValue<T> {
    value: Option<T>,
    /// Revision the value was computed at
    revision: u64,
}

impl<T> Default for CachedValue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CachedValue<T> {
    pub const fn new() -> Self {
        Self {
            value: None,
            revision: 0,
        }
    }

    /// The cached value, if it was computed at `revision`
    pub fn get(&self, revision: u64) -> Option<&T> {
        self.value.as_ref().filter(|_| self.revision == revision)
    }

    pub fn set(&mut self, value: T, revision: u64) {
        self.value = Some(value);
        self.revision = revision;
    }

    pub fn is_valid(&self, revision: u64) -> bool {
        self.get(revision).is_some()
    }

    /// Drop the value, e.g. when inputs other than the snapshot changed
    pub fn invalidate(&mut self) {
        self.value = None;
    }

    /// Return the value for `revision`, recomputing it if stale or empty
    pub fn get_or_insert_with(&mut self, revision: u64, compute: impl FnOnce() -> T) -> &T {
        if self.revision != revision {
            self.value = None;
            self.revision = revision;
        }
        self.value.get_or_insert_with(compute)
    }
}
