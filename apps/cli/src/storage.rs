//! Card set storage on disk.
//!
//! Sets are UTF-8 text files, one card per line. Loading parses the file
//! and skips malformed lines with a warning; the lines themselves stay on
//! disk untouched because score persistence rewrites from the raw content,
//! never from the parsed cards.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use flashdrill_core::{apply_score, parse, read_score, CardSet, ScoreStore};
use thiserror::Error;

/// Set storage error types
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("set not found: {0}")]
    NotFound(PathBuf),

    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("set \"{0}\" contains no cards")]
    Empty(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// A set loaded from disk plus its parse diagnostics.
#[derive(Debug)]
pub struct LoadedSet {
    pub set: CardSet,
    pub malformed: usize,
    pub last_score: Option<u8>,
}

/// Load and parse the set at `path`. A set that parses to zero cards is
/// refused with [`StorageError::Empty`].
pub fn load_set(path: &Path) -> Result<LoadedSet> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(StorageError::NotFound(path.to_path_buf()))
        }
        Err(err) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source: err,
            })
        }
    };

    let name = set_name(path);
    let parsed = parse(&content);
    for malformed in &parsed.malformed {
        tracing::warn!(
            "Skipping malformed card in \"{}\" (line {}): {:?}",
            name,
            malformed.line,
            malformed.text
        );
    }
    if parsed.cards.is_empty() {
        return Err(StorageError::Empty(name));
    }

    Ok(LoadedSet {
        malformed: parsed.malformed.len(),
        last_score: read_score(&content),
        set: CardSet::new(path.to_string_lossy(), name, parsed.cards),
    })
}

/// Display name for a set file, its stem.
pub fn set_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "set".to_string())
}

/// Persists score markers by rewriting the set's backing file.
///
/// Whole-file read-modify-rewrite with no atomicity guarantee against
/// crashes or concurrent writers. Everything below the marker line is
/// carried over verbatim, including comments and malformed lines.
#[derive(Debug, Default)]
pub struct FileScoreStore;

impl ScoreStore for FileScoreStore {
    fn persist_score(&mut self, set: &CardSet, score: u8) -> io::Result<()> {
        let content = fs::read_to_string(&set.source)?;
        fs::write(&set.source, apply_score(&content, score))?;
        tracing::debug!("Score marker for \"{}\" set to {}", set.name, score);
        Ok(())
    }
}
