// Local key-value persistence for the quote collection
// The whole collection lives under one key as a JSON array and is rewritten on every change

mod clock;
mod defaults;
mod error;
mod file;
mod ids;
mod kv;
mod random;
mod storage;

// Public API
pub use clock::{Clock, FixedClock, SystemClock};
pub use defaults::default_quotes;
pub use error::{Error, Result};
pub use file::FileStore;
pub use ids::{IdGenerator, SequentialIds, UuidGenerator};
pub use kv::{KeyValueStore, MemoryStore};
pub use random::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom, pick};
pub use storage::{DEFAULT_STORAGE_KEY, QuoteStorage};
