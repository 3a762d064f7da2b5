mod common;

use std::io::Write;
use std::path::Path;

use common::words;
use tempfile::NamedTempFile;
use wordle_solver::dictionary::{parse_word_list, DictionaryError};
use wordle_solver::{load_word_list, Dictionary};

fn word_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_parse_word_list() {
    let parsed = parse_word_list("crane\n  Slate  \n\ncranes\nab-cd\nto\nTRACE\r\n");
    assert_eq!(parsed, words(&["CRANE", "SLATE", "TRACE"]));
}

#[test]
fn test_load_word_list() {
    let file = word_file("crane\nslate\nplane\n");
    let loaded = load_word_list(file.path()).unwrap();
    assert_eq!(loaded, words(&["CRANE", "SLATE", "PLANE"]));
}

#[test]
fn test_load_missing_file() {
    let err = load_word_list("/definitely/not/here.txt").unwrap_err();
    assert!(matches!(err, DictionaryError::NotFound { .. }));
    assert_eq!(err.to_string(), "File '/definitely/not/here.txt' not found");
}

#[test]
fn test_load_without_valid_words() {
    let file = word_file("a\nbb\ntoolong\n12345\n");
    assert!(matches!(
        load_word_list(file.path()),
        Err(DictionaryError::Empty { .. })
    ));
}

#[test]
fn test_allowed_defaults_to_answers() {
    let answers = word_file("crane\nslate\n");
    let dictionary = Dictionary::load(answers.path(), None::<&Path>).unwrap();
    assert_eq!(dictionary.answers, words(&["CRANE", "SLATE"]));
    assert_eq!(dictionary.allowed, dictionary.answers);
}

#[test]
fn test_separate_allowed_list() {
    let answers = word_file("crane\nslate\n");
    let allowed = word_file("aahed\ncrane\nslate\nzonal\n");
    let dictionary = Dictionary::load(answers.path(), Some(allowed.path())).unwrap();
    assert_eq!(dictionary.answers.len(), 2);
    assert_eq!(dictionary.allowed, words(&["AAHED", "CRANE", "SLATE", "ZONAL"]));
}

#[test]
fn test_bad_allowed_list_is_an_error() {
    let answers = word_file("crane\n");
    let allowed = word_file("\n");
    assert!(matches!(
        Dictionary::load(answers.path(), Some(allowed.path())),
        Err(DictionaryError::Empty { .. })
    ));
}
