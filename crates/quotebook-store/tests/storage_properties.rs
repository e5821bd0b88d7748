//! Collection-level behavior of `QuoteStorage` over real and failing backends

use quotebook_store::{
    DEFAULT_STORAGE_KEY, Error, FileStore, KeyValueStore, MemoryStore, QuoteStorage, Result,
    SeededRandom, default_quotes,
};
use quotebook_types::{QuoteDraft, QuoteId};
use tempfile::TempDir;

/// Backend whose every operation fails, like a browser with storage disabled
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>> {
        Err(Error::Io(std::io::Error::other("storage disabled")))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
        Err(Error::Io(std::io::Error::other("quota exceeded")))
    }

    fn remove_item(&self, _key: &str) -> Result<()> {
        Err(Error::Io(std::io::Error::other("storage disabled")))
    }
}

#[test]
fn test_random_quote_is_member_of_collection() {
    let mut storage = QuoteStorage::new(MemoryStore::new()).with_random(SeededRandom::new(42));

    for _ in 0..50 {
        let quote = storage.get_random().expect("non-empty collection");
        assert!(storage.get_all().contains(&quote));
    }
}

#[test]
fn test_add_grows_collection_by_one() {
    let mut storage = QuoteStorage::new(MemoryStore::new());
    let before = storage.get_all().len();

    let quote = storage.add(QuoteDraft::new("Новая цитата", "Новый автор").with_tags(["мысль"]));

    assert_eq!(storage.get_all().len(), before + 1);
    assert_eq!(quote.text, "Новая цитата");
    assert_eq!(quote.author, "Новый автор");
    assert_eq!(quote.tags(), &["мысль".to_string()]);
}

#[test]
fn test_add_generates_unique_ids() {
    let mut storage = QuoteStorage::new(MemoryStore::new());
    let a = storage.add(QuoteDraft::new("a", "b"));
    let b = storage.add(QuoteDraft::new("a", "b"));
    assert_ne!(a.id, b.id);
}

#[test]
fn test_delete_existing_and_missing() {
    let storage = QuoteStorage::new(MemoryStore::new());
    let before = storage.get_all().len();

    assert!(storage.delete(&QuoteId::new("3")));
    assert_eq!(storage.get_all().len(), before - 1);
    assert!(storage.get_all().iter().all(|q| q.id.as_str() != "3"));

    assert!(!storage.delete(&QuoteId::new("3")));
    assert!(!storage.delete(&QuoteId::new("does-not-exist")));
    assert_eq!(storage.get_all().len(), before - 1);
}

#[test]
fn test_save_all_get_all_roundtrip() {
    let mut storage = QuoteStorage::new(MemoryStore::new());
    storage.add(QuoteDraft::new("x", "y").with_source("z"));

    let snapshot = storage.get_all();
    storage.save_all(&snapshot);

    assert_eq!(storage.get_all(), snapshot);
}

#[test]
fn test_corrupt_value_falls_back_without_overwrite() {
    let store = MemoryStore::with_item(DEFAULT_STORAGE_KEY, "{not json");
    let storage = QuoteStorage::new(store);

    assert_eq!(storage.get_all(), default_quotes());
    assert_eq!(
        storage.store().get_item(DEFAULT_STORAGE_KEY).unwrap(),
        Some("{not json".to_string())
    );
}

#[test]
fn test_broken_backend_degrades_to_defaults() {
    let mut storage = QuoteStorage::new(BrokenStore);

    assert_eq!(storage.get_all().len(), 7);
    assert!(storage.get_random().is_some());

    let added = storage.add(QuoteDraft::new("a", "b"));
    assert_eq!(added.text, "a");
    // The write was dropped, so the collection is still the defaults
    assert_eq!(storage.get_all().len(), 7);

    assert!(storage.delete(&QuoteId::new("1")));
    storage.clear();
}

#[test]
fn test_file_backend_persists_across_instances() {
    let dir = TempDir::new().unwrap();

    let id = {
        let mut storage = QuoteStorage::new(FileStore::new(dir.path()));
        storage.add(QuoteDraft::new("Сохранено", "Тест")).id
    };

    let storage = QuoteStorage::new(FileStore::new(dir.path()));
    let quotes = storage.get_all();
    assert_eq!(quotes.len(), 8);
    assert_eq!(quotes.last().map(|q| &q.id), Some(&id));
    assert!(dir.path().join("quotes_collection.json").exists());
}

#[test]
fn test_boxed_backend_is_accepted() {
    let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
    let storage = QuoteStorage::new(store);
    assert_eq!(storage.len(), 7);
}
