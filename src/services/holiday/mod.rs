use anyhow::{bail, Context, Result};

use crate::models::holiday::HolidaySet;
use crate::services::storage::{KeyValueStore, HOLIDAYS_KEY};
use crate::utils::date::parse_display_date;

/// Resolves and edits the holiday override held in a [`KeyValueStore`].
pub struct HolidayService<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> HolidayService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Current holiday set. Never fails: an unreadable store or a malformed
    /// override both resolve to the built-in list.
    pub fn load(&self) -> HolidaySet {
        match self.store.get(HOLIDAYS_KEY) {
            Ok(raw) => HolidaySet::from_override(raw.as_deref()),
            Err(e) => {
                log::warn!("Holiday store unavailable, using defaults: {:#}", e);
                HolidaySet::default()
            }
        }
    }

    /// Whether a stored override is currently in effect.
    pub fn has_override(&self) -> bool {
        matches!(self.store.get(HOLIDAYS_KEY), Ok(Some(_)))
    }

    /// Replace the holiday list. Every entry must be a real `dd/mm/yyyy` date.
    pub fn set_override(&self, dates: &[String]) -> Result<HolidaySet> {
        for date in dates {
            if parse_display_date(date).is_none() {
                bail!("Invalid holiday date '{}', expected dd/mm/yyyy", date);
            }
        }

        let set = HolidaySet::from_dates(dates.iter().cloned());
        self.store
            .set(HOLIDAYS_KEY, &set.to_json())
            .context("Failed to save holiday override")?;

        log::info!("Saved holiday override with {} dates", set.len());
        Ok(set)
    }

    /// Drop the override so the built-in list applies again.
    pub fn reset(&self) -> Result<()> {
        self.store
            .remove(HOLIDAYS_KEY)
            .context("Failed to remove holiday override")?;
        log::info!("Holiday override removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::{MemoryStore, MockKeyValueStore};

    #[test]
    fn test_load_without_override_is_default() {
        let store = MemoryStore::new();
        assert_eq!(HolidayService::new(&store).load(), HolidaySet::default());
    }

    #[test]
    fn test_load_malformed_override_is_default() {
        let store = MemoryStore::new();
        store.set(HOLIDAYS_KEY, "{oops").unwrap();
        assert_eq!(HolidayService::new(&store).load(), HolidaySet::default());
    }

    #[test]
    fn test_load_when_store_fails_is_default() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_get()
            .returning(|_| Err(anyhow::anyhow!("disk on fire")));
        let service = HolidayService::new(&store);
        assert_eq!(service.load(), HolidaySet::default());
        assert!(!service.has_override());
    }

    #[test]
    fn test_set_and_reset_override() {
        let store = MemoryStore::new();
        let service = HolidayService::new(&store);

        let saved = service
            .set_override(&["01/05/2026".to_string(), "25/12/2026".to_string()])
            .unwrap();
        assert_eq!(saved.len(), 2);
        assert!(service.has_override());
        assert_eq!(service.load(), saved);

        service.reset().unwrap();
        assert!(!service.has_override());
        assert_eq!(service.load(), HolidaySet::default());
    }

    #[test]
    fn test_set_rejects_bad_dates_without_writing() {
        let store = MemoryStore::new();
        let service = HolidayService::new(&store);
        let result = service.set_override(&["01/05/2026".to_string(), "31/04/2026".to_string()]);
        assert!(result.is_err());
        assert!(!service.has_override());
    }
}
