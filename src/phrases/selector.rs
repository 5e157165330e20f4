use super::PhraseSet;
use crate::stats::TraceDifficulty;
use itertools::Itertools;
use rand::seq::SliceRandom;
use std::collections::HashMap;

/// Strategy for picking the next thing to practice.
pub trait PhraseSelector {
    fn pick_sentence(
        &self,
        set: &PhraseSet,
        difficulties: &HashMap<char, TraceDifficulty>,
    ) -> Option<String>;

    fn pick_letter(
        &self,
        set: &PhraseSet,
        difficulties: &HashMap<char, TraceDifficulty>,
    ) -> Option<char>;
}

/// Uniform random selection.
pub struct RandomSelector;

impl PhraseSelector for RandomSelector {
    fn pick_sentence(
        &self,
        set: &PhraseSet,
        _difficulties: &HashMap<char, TraceDifficulty>,
    ) -> Option<String> {
        let mut rng = rand::thread_rng();
        set.sentences.choose(&mut rng).cloned()
    }

    fn pick_letter(
        &self,
        set: &PhraseSet,
        _difficulties: &HashMap<char, TraceDifficulty>,
    ) -> Option<char> {
        let letters: Vec<char> = set.letters.chars().collect();
        let mut rng = rand::thread_rng();
        letters.choose(&mut rng).copied()
    }
}

/// Selection weighted toward the characters the child traces slowest.
///
/// Content is scored by the trace history of its characters, then a pick
/// is made from the top third so practice targets weak spots without
/// repeating the single hardest item forever. Falls back to random
/// selection when no history exists yet.
pub struct AdaptiveSelector;

impl PhraseSelector for AdaptiveSelector {
    fn pick_sentence(
        &self,
        set: &PhraseSet,
        difficulties: &HashMap<char, TraceDifficulty>,
    ) -> Option<String> {
        if difficulties.is_empty() {
            return RandomSelector.pick_sentence(set, difficulties);
        }

        let scored: Vec<(&String, f64)> = set
            .sentences
            .iter()
            .map(|sentence| (sentence, sentence_score(sentence, difficulties)))
            .sorted_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal))
            .collect();

        let pool_size = pool_size(scored.len());
        let mut rng = rand::thread_rng();
        scored[..pool_size]
            .choose(&mut rng)
            .map(|(sentence, _)| (*sentence).clone())
    }

    fn pick_letter(
        &self,
        set: &PhraseSet,
        difficulties: &HashMap<char, TraceDifficulty>,
    ) -> Option<char> {
        if difficulties.is_empty() {
            return RandomSelector.pick_letter(set, difficulties);
        }

        let scored: Vec<(char, f64)> = set
            .letters
            .chars()
            .map(|c| (c, char_score(c, difficulties)))
            .sorted_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal))
            .collect();

        let pool_size = pool_size(scored.len());
        let mut rng = rand::thread_rng();
        scored[..pool_size].choose(&mut rng).map(|(c, _)| *c)
    }
}

/// Top third of the ranked list, never empty.
fn pool_size(len: usize) -> usize {
    (len / 3).max(1).min(len)
}

fn sentence_score(sentence: &str, difficulties: &HashMap<char, TraceDifficulty>) -> f64 {
    let traceable: Vec<char> = sentence.chars().filter(|c| !c.is_whitespace()).collect();
    if traceable.is_empty() {
        return 0.0;
    }
    let total: f64 = traceable.iter().map(|&c| char_score(c, difficulties)).sum();
    total / traceable.len() as f64
}

fn char_score(c: char, difficulties: &HashMap<char, TraceDifficulty>) -> f64 {
    let base = c.to_lowercase().next().unwrap_or(c);
    match difficulties.get(&base) {
        // Slow traces score high; a long history dampens the urgency a bit
        Some(d) => d.avg_duration_ms / 1000.0 / (1.0 + (d.attempts as f64 / 20.0)),
        // Untraced letters deserve attention before mastered ones
        None if c.is_alphabetic() => 5.0,
        None => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_set() -> PhraseSet {
        PhraseSet {
            name: "test".to_string(),
            letters: "abc".to_string(),
            sentences: vec![
                "aaa aaa".to_string(),
                "bbb bbb".to_string(),
                "ccc ccc".to_string(),
            ],
        }
    }

    fn difficulty(avg_duration_ms: f64, attempts: i64) -> TraceDifficulty {
        TraceDifficulty {
            avg_duration_ms,
            attempts,
        }
    }

    #[test]
    fn test_random_selector_picks_from_set() {
        let set = test_set();
        let empty = HashMap::new();
        let sentence = RandomSelector.pick_sentence(&set, &empty).unwrap();
        assert!(set.sentences.contains(&sentence));
        let letter = RandomSelector.pick_letter(&set, &empty).unwrap();
        assert!(set.letters.contains(letter));
    }

    #[test]
    fn test_random_selector_empty_set() {
        let set = PhraseSet {
            name: "empty".to_string(),
            letters: String::new(),
            sentences: Vec::new(),
        };
        let empty = HashMap::new();
        assert!(RandomSelector.pick_sentence(&set, &empty).is_none());
        assert!(RandomSelector.pick_letter(&set, &empty).is_none());
    }

    #[test]
    fn test_adaptive_falls_back_to_random_without_history() {
        let set = test_set();
        let empty = HashMap::new();
        let sentence = AdaptiveSelector.pick_sentence(&set, &empty).unwrap();
        assert!(set.sentences.contains(&sentence));
    }

    #[test]
    fn test_adaptive_prefers_slowest_characters() {
        let set = test_set();
        let mut difficulties = HashMap::new();
        difficulties.insert('a', difficulty(4000.0, 3));
        difficulties.insert('b', difficulty(500.0, 3));
        difficulties.insert('c', difficulty(500.0, 3));

        // Pool is the top third of three sentences, so the all-'a'
        // sentence is the only possible pick
        let sentence = AdaptiveSelector.pick_sentence(&set, &difficulties).unwrap();
        assert_eq!(sentence, "aaa aaa");

        let letter = AdaptiveSelector.pick_letter(&set, &difficulties).unwrap();
        assert_eq!(letter, 'a');
    }

    #[test]
    fn test_adaptive_surfaces_untraced_letters() {
        let set = test_set();
        let mut difficulties = HashMap::new();
        // 'a' and 'b' are mastered quickly; 'c' has never been traced
        difficulties.insert('a', difficulty(300.0, 10));
        difficulties.insert('b', difficulty(300.0, 10));

        let letter = AdaptiveSelector.pick_letter(&set, &difficulties).unwrap();
        assert_eq!(letter, 'c');
    }

    #[test]
    fn test_char_score_dampened_by_attempts() {
        let mut difficulties = HashMap::new();
        difficulties.insert('a', difficulty(2000.0, 0));
        difficulties.insert('b', difficulty(2000.0, 40));
        let fresh = char_score('a', &difficulties);
        let practiced = char_score('b', &difficulties);
        assert!(fresh > practiced);
    }

    #[test]
    fn test_uppercase_maps_to_base_character_history() {
        let mut difficulties = HashMap::new();
        difficulties.insert('a', difficulty(3000.0, 5));
        let upper = char_score('A', &difficulties);
        let lower = char_score('a', &difficulties);
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_pool_size_bounds() {
        assert_eq!(pool_size(1), 1);
        assert_eq!(pool_size(2), 1);
        assert_eq!(pool_size(3), 1);
        assert_eq!(pool_size(12), 4);
    }
}
