#![forbid(unsafe_code)]

pub mod csv_file;
pub mod repository;

pub use csv_file::CsvVocabFile;
pub use repository::{InMemoryVocab, StorageError, VocabSource};
