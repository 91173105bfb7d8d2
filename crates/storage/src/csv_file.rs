use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use sprich_core::model::VocabEntry;

use crate::repository::{StorageError, VocabSource};

/// CSV-backed vocabulary source.
///
/// The file must carry named `German` and `English` columns; rows are loaded
/// in file order with no content validation. A missing file yields the
/// single fallback entry instead of an error.
#[derive(Debug, Clone)]
pub struct CsvVocabFile {
    path: PathBuf,
}

/// One CSV row as stored on disk.
#[derive(Debug, Deserialize)]
struct VocabRow {
    #[serde(rename = "German")]
    german: String,
    #[serde(rename = "English")]
    english: String,
}

impl From<VocabRow> for VocabEntry {
    fn from(row: VocabRow) -> Self {
        Self::new(row.german, row.english)
    }
}

impl CsvVocabFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Vec<VocabEntry>, StorageError> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut entries = Vec::new();
        for row in reader.deserialize::<VocabRow>() {
            entries.push(row?.into());
        }
        Ok(entries)
    }
}

#[async_trait]
impl VocabSource for CsvVocabFile {
    async fn load(&self) -> Result<Vec<VocabEntry>, StorageError> {
        if !self.path.exists() {
            return Ok(vec![VocabEntry::fallback()]);
        }
        self.read_entries()
    }
}
