#![allow(dead_code)]

use wordle_solver::Word;

pub fn w(s: &str) -> Word {
    s.parse().unwrap()
}

pub fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|s| w(s)).collect()
}

pub fn get_test_words() -> Vec<Word> {
    words(&[
        "CRANE", "SLATE", "TRACE", "CRATE", "RAISE", "ARISE", "STARE", "ROAST", "TOAST", "BEAST",
    ])
}

/// Words with repeated letters, for exercising the duplicate-letter rules.
pub fn get_tricky_words() -> Vec<Word> {
    let mut list = get_test_words();
    list.extend(words(&[
        "SPEED", "ERASE", "CREEP", "GEESE", "SORES", "THOSE", "ABIDE", "ABODE", "EERIE", "LLAMA",
        "ALLEY", "PLANE", "SHEER", "SERVE", "QUEUE",
    ]));
    list
}
