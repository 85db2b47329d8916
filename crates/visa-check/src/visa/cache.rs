use std::collections::HashMap;
use std::sync::RwLock;

use super::domain::VisaRules;
use crate::code::CountryCode;

type PairKey = (CountryCode, CountryCode);

/// Process-lifetime memo of successful rules lookups, keyed by the
/// (passport, destination) pair.
///
/// Entries are never evicted or refreshed. Concurrent misses on the same pair
/// may both write; the last write wins.
#[derive(Debug, Default)]
pub struct MemoCache {
    entries: RwLock<HashMap<PairKey, VisaRules>>,
}

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("visa rules cache is unavailable after a panic while it was held")]
    Poisoned,
}

impl MemoCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// `PASSPORT_DESTINATION` label for log output. Not used for lookups.
    pub fn key(passport: &str, destination: &str) -> String {
        format!("{passport}_{destination}")
    }

    pub fn get(
        &self,
        passport: &CountryCode,
        destination: &CountryCode,
    ) -> Result<Option<VisaRules>, CacheError> {
        let guard = self.entries.read().map_err(|_| CacheError::Poisoned)?;
        Ok(guard
            .get(&(passport.clone(), destination.clone()))
            .cloned())
    }

    pub fn insert(
        &self,
        passport: &CountryCode,
        destination: &CountryCode,
        rules: VisaRules,
    ) -> Result<(), CacheError> {
        let mut guard = self.entries.write().map_err(|_| CacheError::Poisoned)?;
        guard.insert((passport.clone(), destination.clone()), rules);
        Ok(())
    }

    pub fn len(&self) -> Result<usize, CacheError> {
        let guard = self.entries.read().map_err(|_| CacheError::Poisoned)?;
        Ok(guard.len())
    }

    pub fn is_empty(&self) -> Result<bool, CacheError> {
        self.len().map(|len| len == 0)
    }

    #[cfg(test)]
    pub(crate) fn poison(&self) {
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = self.entries.write().expect("cache lock");
            panic!("poisoning visa rules cache for a test");
        }));
    }
}
