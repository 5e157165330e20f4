use crate::composition::PracticeMode;
use serde::Serialize;

/// Completion notifications emitted by a session.
///
/// Events are returned synchronously from the pointer call that caused
/// them, already ordered character → word → session, and each fires at
/// most once per unit. Collaborators (audio encouragement, analytics)
/// consume them fire-and-forget; the engine never waits on anyone.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    CharacterCompleted {
        character: char,
        /// Global character index into the practiced content string.
        sentence_index: usize,
        duration_ms: u64,
    },
    WordCompleted {
        word_index: usize,
        text: String,
    },
    SessionCompleted {
        total_duration_ms: u64,
        mode: PracticeMode,
    },
}

impl TraceEvent {
    pub fn is_session_completed(&self) -> bool {
        matches!(self, TraceEvent::SessionCompleted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_event_tag() {
        let event = TraceEvent::WordCompleted {
            word_index: 1,
            text: "du".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"event\":\"word_completed\""));
        assert!(json.contains("\"text\":\"du\""));
    }

    #[test]
    fn session_completed_predicate() {
        let event = TraceEvent::SessionCompleted {
            total_duration_ms: 1234,
            mode: PracticeMode::Sentence,
        };
        assert!(event.is_session_completed());
        let other = TraceEvent::WordCompleted {
            word_index: 0,
            text: "Hej".to_string(),
        };
        assert!(!other.is_session_completed());
    }
}
