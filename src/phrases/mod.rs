//! Embedded practice content.
//!
//! Phrase sets are curated per language and compiled into the binary, so a
//! practice widget never depends on the filesystem at runtime.

pub mod selector;

use include_dir::{include_dir, Dir};
use serde::Deserialize;
use serde_json::from_str;
use std::error::Error;
use std::fmt;

static PHRASE_DIR: Dir = include_dir!("src/phrases");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhraseError {
    NotFound(String),
    Malformed(String),
}

impl fmt::Display for PhraseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhraseError::NotFound(name) => write!(f, "phrase set '{name}' not found"),
            PhraseError::Malformed(name) => write!(f, "phrase set '{name}' is not valid json"),
        }
    }
}

impl Error for PhraseError {}

/// One language's practice content: the alphabet used for letter drills
/// and a list of short sentences to trace.
#[derive(Deserialize, Clone, Debug)]
pub struct PhraseSet {
    pub name: String,
    pub letters: String,
    pub sentences: Vec<String>,
}

impl PhraseSet {
    pub fn load(name: &str) -> Result<Self, PhraseError> {
        let file = PHRASE_DIR
            .get_file(format!("{name}.json"))
            .ok_or_else(|| PhraseError::NotFound(name.to_string()))?;
        let contents = file
            .contents_utf8()
            .ok_or_else(|| PhraseError::Malformed(name.to_string()))?;
        from_str(contents).map_err(|_| PhraseError::Malformed(name.to_string()))
    }
}
