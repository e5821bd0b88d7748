use quotebook_types::{Quote, QuoteDraft, QuoteId};

use crate::{
    Clock, IdGenerator, KeyValueStore, RandomSource, Result, SystemClock, ThreadRandom,
    UuidGenerator, default_quotes, pick,
};

pub const DEFAULT_STORAGE_KEY: &str = "quotes_collection";

// NOTE: Failure Masking
//
// Every operation here is infallible from the caller's point of view.
// Read or parse failures fall back to the default collection (returned,
// not persisted); write failures drop the write. Both are reported on the
// tracing error channel only. The UI above never sees a storage error.

/// The quote collection persisted under a single key
pub struct QuoteStorage {
    store: Box<dyn KeyValueStore>,
    key: String,
    random: Box<dyn RandomSource>,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
}

impl QuoteStorage {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            key: DEFAULT_STORAGE_KEY.to_string(),
            random: Box::new(ThreadRandom),
            ids: Box::new(UuidGenerator),
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_random(mut self, random: impl RandomSource + 'static) -> Self {
        self.random = Box::new(random);
        self
    }

    pub fn with_ids(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Raw read. `Ok(None)` means nothing (or an empty string) is stored.
    fn load(&self) -> Result<Option<Vec<Quote>>> {
        match self.store.get_item(&self.key)? {
            Some(raw) if !raw.trim().is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
            _ => Ok(None),
        }
    }

    fn write(&self, quotes: &[Quote]) -> Result<()> {
        let raw = serde_json::to_string(quotes)?;
        self.store.set_item(&self.key, &raw)
    }

    /// Full collection in stored order, seeding the defaults on first access.
    pub fn get_all(&self) -> Vec<Quote> {
        match self.load() {
            Ok(Some(quotes)) => quotes,
            Ok(None) => {
                tracing::debug!(key = %self.key, "no stored collection, seeding defaults");
                let defaults = default_quotes();
                self.save_all(&defaults);
                defaults
            }
            Err(e) => {
                tracing::error!(err = %e, key = %self.key, "failed to read quote collection");
                default_quotes()
            }
        }
    }

    /// Overwrite the stored collection. Failures are logged and dropped.
    pub fn save_all(&self, quotes: &[Quote]) {
        if let Err(e) = self.write(quotes) {
            tracing::error!(err = %e, key = %self.key, "failed to save quote collection");
        }
    }

    pub fn add(&mut self, draft: QuoteDraft) -> Quote {
        let mut quotes = self.get_all();
        let quote = Quote::from_draft(self.ids.next_id(), self.clock.now_millis(), draft);

        quotes.push(quote.clone());
        self.save_all(&quotes);
        tracing::debug!(id = %quote.id, total = quotes.len(), "quote added");
        quote
    }

    /// `true` when a quote was removed, `false` when `id` was not present.
    pub fn delete(&self, id: &QuoteId) -> bool {
        let quotes = self.get_all();
        let before = quotes.len();
        let remaining: Vec<Quote> = quotes.into_iter().filter(|q| &q.id != id).collect();

        if remaining.len() < before {
            self.save_all(&remaining);
            tracing::debug!(id = %id, total = remaining.len(), "quote deleted");
            true
        } else {
            false
        }
    }

    pub fn get_random(&mut self) -> Option<Quote> {
        let quotes = self.get_all();
        pick(self.random.as_mut(), &quotes).cloned()
    }

    /// Drop the stored collection. The next `get_all` reseeds the defaults.
    pub fn clear(&self) {
        if let Err(e) = self.store.remove_item(&self.key) {
            tracing::error!(err = %e, key = %self.key, "failed to clear quote collection");
        }
    }

    pub fn len(&self) -> usize {
        self.get_all().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedClock, MemoryStore, ScriptedRandom, SequentialIds};

    fn storage() -> QuoteStorage {
        QuoteStorage::new(MemoryStore::new())
            .with_ids(SequentialIds::new("t"))
            .with_clock(FixedClock(1_700_000_000_000))
    }

    #[test]
    fn test_first_access_seeds_and_persists_defaults() {
        let storage = storage();
        assert_eq!(storage.store().get_item(DEFAULT_STORAGE_KEY).unwrap(), None);

        let quotes = storage.get_all();

        assert_eq!(quotes, default_quotes());
        let raw = storage.store().get_item(DEFAULT_STORAGE_KEY).unwrap().unwrap();
        let stored: Vec<Quote> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, quotes);
    }

    #[test]
    fn test_empty_string_counts_as_absent() {
        let storage = QuoteStorage::new(MemoryStore::with_item(DEFAULT_STORAGE_KEY, ""));
        assert_eq!(storage.get_all().len(), 7);
    }

    #[test]
    fn test_add_assigns_identity() {
        let mut storage = storage();
        let quote = storage.add(QuoteDraft::new("Текст", "Автор"));

        assert_eq!(quote.id.as_str(), "t1");
        assert_eq!(quote.added_at, 1_700_000_000_000);
        assert_eq!(storage.get_all().last(), Some(&quote));
    }

    #[test]
    fn test_custom_key() {
        let storage = QuoteStorage::new(MemoryStore::new()).with_key("other");
        storage.get_all();

        assert!(storage.store().get_item("other").unwrap().is_some());
        assert!(storage.store().get_item(DEFAULT_STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_get_random_uses_injected_source() {
        let mut storage = storage().with_random(ScriptedRandom::new(vec![3]));
        let quote = storage.get_random().unwrap();
        assert_eq!(quote.id.as_str(), "4");
    }

    #[test]
    fn test_get_random_on_empty_collection() {
        let mut storage = storage();
        storage.save_all(&[]);
        assert_eq!(storage.get_random(), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_clear_removes_key_until_next_read() {
        let storage = storage();
        storage.save_all(&[]);
        storage.clear();

        assert_eq!(storage.store().get_item(DEFAULT_STORAGE_KEY).unwrap(), None);
        assert_eq!(storage.get_all().len(), 7);
    }
}
