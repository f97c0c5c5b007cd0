//! Reader configuration, stored as JSON in the app's config directory

use crate::error::Result;
use crate::library::{Catalog, BOOK_EXTENSION};
use crate::progress::ProgressStore;
use crate::storage::{config_dir, read_json, write_json};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "slowverse";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Folder holding one file per book
    pub data_dir: PathBuf,
    pub book_extension: String,
    pub progress_file: PathBuf,
    pub verse_font_size: f32,
    /// tracing filter directive, e.g. `info` or `versecore=debug`
    pub log_level: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            book_extension: BOOK_EXTENSION.to_string(),
            progress_file: PathBuf::from("progress.txt"),
            verse_font_size: 40.0,
            log_level: "info".to_string(),
        }
    }
}

impl ReaderConfig {
    /// Default location of the config file
    pub fn default_path() -> PathBuf {
        config_dir(APP_NAME).join("config.json")
    }

    /// Load from the default location.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    /// Load from `path`, falling back to defaults when the file is missing
    /// or unreadable. A missing file is created with the defaults so there is
    /// something to edit.
    pub fn load_from(path: &Path) -> Self {
        match read_json(path) {
            Ok(config) => config,
            Err(e) if e.is_missing() => {
                let config = Self::default();
                match config.save_to(path) {
                    Ok(()) => tracing::info!(path = %path.display(), "wrote default config"),
                    Err(e) => tracing::warn!(path = %path.display(), error = %e, "could not write default config"),
                }
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using default config");
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        write_json(path, self)
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::new(&self.data_dir, &self.book_extension)
    }

    pub fn progress_store(&self) -> ProgressStore {
        ProgressStore::new(&self.progress_file)
    }
}
