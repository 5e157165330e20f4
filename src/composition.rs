//! Sequencing of characters and words across practice modes.
//!
//! The engine realizes every mode over the same word decomposition: a
//! single letter is a one-word, one-character content; a dual-case pair
//! is one word of the uppercase then the lowercase glyph, each traced by
//! its own fresh tracker; a sentence is the general case. Exactly one
//! character is active at a time; everything else is either already
//! completed or not yet reached.

use crate::config::TraceConfig;
use crate::events::TraceEvent;
use crate::geometry::Point;
use crate::glyphs::GlyphLibrary;
use crate::tracker::CharacterTracker;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum PracticeMode {
    SingleLetter,
    DualCase,
    Sentence,
}

/// One whitespace-free run of the content: the global character indices it
/// covers plus its text. Whitespace is never a traceable unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub positions: Vec<usize>,
    pub text: String,
}

/// Decompose content into words, remembering each character's global index.
pub fn split_words(content: &str) -> Vec<Word> {
    let mut words = Vec::new();
    let mut current: Option<Word> = None;
    for (index, c) in content.chars().enumerate() {
        if c.is_whitespace() {
            if let Some(word) = current.take() {
                words.push(word);
            }
        } else {
            let word = current.get_or_insert_with(|| Word {
                positions: Vec::new(),
                text: String::new(),
            });
            word.positions.push(index);
            word.text.push(c);
        }
    }
    if let Some(word) = current {
        words.push(word);
    }
    words
}

/// Drives one practice exercise: owns the cursor, the completed set and
/// the single active tracker, and turns tracker completions into the
/// ordered character → word → session event cascade.
#[derive(Debug)]
pub struct CompositionEngine {
    mode: PracticeMode,
    content: String,
    chars: Vec<char>,
    words: Vec<Word>,
    cursor_word: usize,
    cursor_char: usize,
    completed: HashSet<usize>,
    active: CharacterTracker,
    library: Arc<GlyphLibrary>,
    config: TraceConfig,
    first_input_ms: Option<u64>,
    finished: bool,
}

impl CompositionEngine {
    /// Returns `None` when the content holds no traceable character.
    pub fn new(
        mode: PracticeMode,
        content: &str,
        library: Arc<GlyphLibrary>,
        config: TraceConfig,
    ) -> Option<Self> {
        let words = split_words(content);
        let first = words.first()?.positions[0];
        let chars: Vec<char> = content.chars().collect();
        let active = CharacterTracker::new(library.strokes(chars[first]), config.clone());
        Some(Self {
            mode,
            content: content.to_string(),
            chars,
            words,
            cursor_word: 0,
            cursor_char: 0,
            completed: HashSet::new(),
            active,
            library,
            config,
            first_input_ms: None,
            finished: false,
        })
    }

    pub fn mode(&self) -> PracticeMode {
        self.mode
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn active_tracker(&self) -> &CharacterTracker {
        &self.active
    }

    /// Global character index the cursor currently points at.
    pub fn active_index(&self) -> usize {
        self.words[self.cursor_word].positions[self.cursor_char]
    }

    pub fn completed_indices(&self) -> &HashSet<usize> {
        &self.completed
    }

    pub fn on_pointer_down(&mut self, pos: Point, now_ms: u64) -> bool {
        if self.finished {
            return false;
        }
        let armed = self.active.on_pointer_down(pos, now_ms);
        if armed && self.first_input_ms.is_none() {
            self.first_input_ms = Some(now_ms);
        }
        armed
    }

    pub fn on_pointer_up(&mut self) {
        self.active.on_pointer_up();
    }

    /// Feed a pointer position to the active character and cascade any
    /// resulting completions. For the last character of a word the order
    /// is fixed: `CharacterCompleted`, then `WordCompleted`, then either
    /// the next word's first character activates or `SessionCompleted`.
    pub fn on_pointer_move(&mut self, pos: Point, now_ms: u64) -> Vec<TraceEvent> {
        if self.finished {
            return Vec::new();
        }
        let Some(completion) = self.active.on_pointer_move(pos, now_ms) else {
            return Vec::new();
        };

        let global_index = self.active_index();
        self.completed.insert(global_index);
        // Report the content character, not the tracker's: for unknown
        // characters the tracker holds the fallback glyph.
        let mut events = vec![TraceEvent::CharacterCompleted {
            character: self.chars[global_index],
            sentence_index: global_index,
            duration_ms: completion.duration_ms,
        }];

        let word = &self.words[self.cursor_word];
        if self.cursor_char + 1 < word.positions.len() {
            self.cursor_char += 1;
            self.activate_cursor();
            return events;
        }

        events.push(TraceEvent::WordCompleted {
            word_index: self.cursor_word,
            text: word.text.clone(),
        });

        if self.cursor_word + 1 < self.words.len() {
            // Word boundary: jump straight to the next word's first
            // character, skipping the within-word advance.
            self.cursor_word += 1;
            self.cursor_char = 0;
            self.activate_cursor();
        } else {
            self.finished = true;
            let started = self.first_input_ms.unwrap_or(now_ms);
            events.push(TraceEvent::SessionCompleted {
                total_duration_ms: now_ms.saturating_sub(started),
                mode: self.mode,
            });
        }
        events
    }

    fn activate_cursor(&mut self) {
        let character = self.chars[self.active_index()];
        self.active = CharacterTracker::new(self.library.strokes(character), self.config.clone());
    }

    /// Back to the first character of the first word with zero progress;
    /// the content stays loaded. Nothing from the abandoned attempt can
    /// fire after this returns.
    pub fn reset(&mut self) {
        self.cursor_word = 0;
        self.cursor_char = 0;
        self.completed.clear();
        self.first_input_ms = None;
        self.finished = false;
        self.activate_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words_basic() {
        let words = split_words("Hej du");
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text, "Hej");
        assert_eq!(words[0].positions, vec![0, 1, 2]);
        assert_eq!(words[1].text, "du");
        assert_eq!(words[1].positions, vec![4, 5]);
    }

    #[test]
    fn test_split_words_ignores_extra_whitespace() {
        let words = split_words("  en\t\ntvå  ");
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text, "en");
        assert_eq!(words[0].positions, vec![2, 3]);
        assert_eq!(words[1].text, "två");
        assert_eq!(words[1].positions, vec![6, 7, 8]);
    }

    #[test]
    fn test_split_words_empty_and_blank() {
        assert!(split_words("").is_empty());
        assert!(split_words("   \n\t ").is_empty());
    }

    #[test]
    fn test_single_word_content() {
        let words = split_words("Aa");
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].positions, vec![0, 1]);
    }

    #[test]
    fn test_engine_rejects_blank_content() {
        let library = Arc::new(GlyphLibrary::new());
        let engine = CompositionEngine::new(
            PracticeMode::Sentence,
            "   ",
            library,
            TraceConfig::default(),
        );
        assert!(engine.is_none());
    }

    #[test]
    fn test_engine_activates_first_character() {
        let library = Arc::new(GlyphLibrary::new());
        let engine = CompositionEngine::new(
            PracticeMode::Sentence,
            " Hej",
            library,
            TraceConfig::default(),
        )
        .unwrap();
        assert_eq!(engine.active_index(), 1);
        assert_eq!(engine.active_tracker().character(), 'H');
        assert!(!engine.is_finished());
    }

    #[test]
    fn test_mode_display_for_logs() {
        assert_eq!(PracticeMode::SingleLetter.to_string(), "single-letter");
        assert_eq!(PracticeMode::DualCase.to_string(), "dual-case");
        assert_eq!(PracticeMode::Sentence.to_string(), "sentence");
    }
}
