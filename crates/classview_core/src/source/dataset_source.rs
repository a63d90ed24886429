//! Dataset source contracts and file/in-memory implementations.
//!
//! # Responsibility
//! - Read raw CSV text from a file or from caller-supplied content.
//! - Decode text into a full record snapshot.
//!
//! # Invariants
//! - A source either yields a complete snapshot or an error; never a partial one.

use crate::codec::csv::{decode_records, CsvDecodeError};
use crate::model::record::Record;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Result type for dataset loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors from reading or decoding a dataset.
#[derive(Debug)]
pub enum LoadError {
    /// File could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Content is not a usable classification table.
    Decode(CsvDecodeError),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read dataset `{}`: {source}", path.display())
            }
            Self::Decode(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode(err) => Some(err),
        }
    }
}

impl From<CsvDecodeError> for LoadError {
    fn from(value: CsvDecodeError) -> Self {
        Self::Decode(value)
    }
}

/// Anything that can produce CSV text for a full dataset reload.
pub trait DatasetSource {
    /// Short, non-sensitive description for logs.
    fn describe(&self) -> String;
    /// Reads the complete CSV text.
    fn read_text(&self) -> LoadResult<String>;

    /// Reads and decodes the complete dataset.
    fn load_records(&self) -> LoadResult<Vec<Record>> {
        let text = self.read_text()?;
        decode_records(&text).map_err(Into::into)
    }
}

/// CSV file on local disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for FileSource {
    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }

    fn read_text(&self) -> LoadResult<String> {
        std::fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Already-read content, e.g. a user-picked file handed over by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSource {
    name: String,
    text: String,
}

impl TextSource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl DatasetSource for TextSource {
    fn describe(&self) -> String {
        format!("text:{} bytes={}", self.name, self.text.len())
    }

    fn read_text(&self) -> LoadResult<String> {
        Ok(self.text.clone())
    }
}
