use std::io::Write;

use storage::{CsvVocabFile, StorageError, VocabSource};

fn write_deck(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create deck file");
    file.write_all(contents.as_bytes()).expect("write deck file");
    path
}

#[tokio::test]
async fn well_formed_file_loads_rows_in_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_deck(
        &dir,
        "deck.csv",
        "German,English\nHallo,Hello\nDanke,Thanks\nBitte,Please\n",
    );

    let entries = CsvVocabFile::new(path).load().await.expect("load deck");

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].source_word, "Hallo");
    assert_eq!(entries[1].source_word, "Danke");
    assert_eq!(entries[2].source_word, "Bitte");
    assert_eq!(entries[2].translation, "Please");
}

#[tokio::test]
async fn blank_and_duplicate_rows_pass_through() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_deck(
        &dir,
        "deck.csv",
        "German,English\nHallo,Hello\n,\nHallo,Hello\n",
    );

    let entries = CsvVocabFile::new(path).load().await.expect("load deck");

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1].source_word, "");
    assert_eq!(entries[0], entries[2]);
}

#[tokio::test]
async fn missing_file_falls_back_to_single_placeholder_entry() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("does-not-exist.csv");

    let entries = CsvVocabFile::new(path).load().await.expect("load deck");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].source_word, "Hallo");
    assert_eq!(entries[0].translation, "Hello");
}

#[tokio::test]
async fn missing_required_column_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_deck(&dir, "deck.csv", "Word,Meaning\nHallo,Hello\n");

    let err = CsvVocabFile::new(path).load().await.unwrap_err();
    assert!(matches!(err, StorageError::Malformed(_)), "got {err:?}");
}

#[tokio::test]
async fn ragged_row_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_deck(&dir, "deck.csv", "German,English\nHallo\n");

    let err = CsvVocabFile::new(path).load().await.unwrap_err();
    assert!(matches!(err, StorageError::Malformed(_)), "got {err:?}");
}
