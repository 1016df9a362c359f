//! On-disk persistence of the deck and the selected slide.
//!
//! Two files live in the store directory: the slide list as JSON and the
//! selected index as plain text. The undo history sits beside them so it
//! outlives a single run. Loading never fails; anything unreadable falls
//! back to the starter deck or an empty history.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::history::History;
use crate::model::{starter_deck, Deck};

pub const SLIDES_FILE: &str = "presentation_slides.json";
pub const INDEX_FILE: &str = "presentation_index";
pub const HISTORY_FILE: &str = "presentation_history.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to create store directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize deck: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// What `DeckStore::load` found.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDeck {
    pub deck: Deck,
    /// Clamped into the deck.
    pub current: usize,
    /// `false` when the starter deck was substituted.
    pub restored: bool,
}

#[derive(Debug, Clone)]
pub struct DeckStore {
    dir: PathBuf,
}

impl DeckStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn slides_path(&self) -> PathBuf {
        self.dir.join(SLIDES_FILE)
    }

    pub fn index_path(&self) -> PathBuf {
        self.dir.join(INDEX_FILE)
    }

    pub fn history_path(&self) -> PathBuf {
        self.dir.join(HISTORY_FILE)
    }

    /// Read the persisted deck, or the starter deck if there is none usable.
    pub fn load(&self) -> LoadedDeck {
        let (deck, restored) = match self.read_deck() {
            Some(deck) => (deck, true),
            None => (starter_deck(), false),
        };
        let current = deck.clamp_index(self.read_index());
        tracing::debug!(
            slides = deck.len(),
            current,
            restored,
            dir = %self.dir.display(),
            "Deck loaded"
        );
        LoadedDeck {
            deck,
            current,
            restored,
        }
    }

    fn read_deck(&self) -> Option<Deck> {
        let path = self.slides_path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Saved slides unreadable, using starter deck");
                return None;
            }
        };
        match serde_json::from_str::<Deck>(&content) {
            Ok(deck) => Some(deck),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Saved slides invalid, using starter deck");
                None
            }
        }
    }

    fn read_index(&self) -> usize {
        let path = self.index_path();
        let Ok(content) = fs::read_to_string(&path) else {
            return 0;
        };
        match content.trim().parse::<usize>() {
            Ok(index) => index,
            Err(_) => {
                tracing::warn!(path = %path.display(), "Saved index invalid, selecting first slide");
                0
            }
        }
    }

    /// Saved undo history, or an empty one if there is none usable.
    pub fn load_history(&self) -> History<Deck> {
        let path = self.history_path();
        let Ok(content) = fs::read_to_string(&path) else {
            return History::new();
        };
        match serde_json::from_str::<History<Deck>>(&content) {
            Ok(mut history) => {
                history.enforce_bound();
                history
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Saved history invalid, starting fresh");
                History::new()
            }
        }
    }

    pub fn save_history(&self, history: &History<Deck>) -> Result<(), StoreError> {
        let json = serde_json::to_string(history)?;
        write_atomic(&self.history_path(), json.as_bytes())
    }

    /// Persist the deck and index. Each file is written to a sibling temp
    /// file and renamed over the target.
    pub fn save(&self, deck: &Deck, current: usize) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(deck)?;
        write_atomic(&self.slides_path(), json.as_bytes())?;
        write_atomic(&self.index_path(), current.to_string().as_bytes())?;
        Ok(())
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let tmp = path.with_extension("tmp");
    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };
    fs::write(&tmp, bytes).map_err(write_err)?;
    fs::rename(&tmp, path).map_err(write_err)
}
