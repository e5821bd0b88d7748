use std::path::{Path, PathBuf};

use quotebook_store::{FileStore, KeyValueStore, MemoryStore, QuoteStorage};

use crate::{Config, PageController, Result};

/// A data directory plus the configuration loaded from it
pub struct Quotebook {
    data_dir: PathBuf,
    config: Config,
    ephemeral: bool,
}

impl Quotebook {
    /// Open a data directory, reading `config.toml` when present.
    /// The directory itself is created lazily on the first write.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        let config = Config::load_from(&Config::path_in(&data_dir))?;
        tracing::debug!(data_dir = %data_dir.display(), key = %config.storage.key, "opened data directory");

        Ok(Self {
            data_dir,
            config,
            ephemeral: false,
        })
    }

    pub fn with_config(data_dir: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            data_dir: data_dir.into(),
            config,
            ephemeral: false,
        }
    }

    /// Keep the collection in memory only; nothing under the data dir is touched.
    pub fn ephemeral(mut self, ephemeral: bool) -> Self {
        self.ephemeral = ephemeral;
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("quotebook.log")
    }

    pub fn storage(&self) -> QuoteStorage {
        let store: Box<dyn KeyValueStore> = if self.ephemeral {
            Box::new(MemoryStore::new())
        } else {
            Box::new(FileStore::new(&self.data_dir))
        };
        QuoteStorage::new(store).with_key(self.config.storage.key.clone())
    }

    pub fn controller(&self) -> PageController {
        PageController::new(self.storage())
    }
}
