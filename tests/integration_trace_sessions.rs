use assert_matches::assert_matches;
use skriv::composition::PracticeMode;
use skriv::events::TraceEvent;
use skriv::geometry::Point;
use skriv::matcher;
use skriv::session::{SessionController, SessionPhase};

/// Integration tests for full tracing sessions: the event cascade across
/// characters, words and the session, mode behavior, and reset semantics.

const STEP_MS: u64 = 60;

/// Trace the currently active stroke by walking the pen along its guide
/// path, spacing calls above the match debounce.
fn trace_active_stroke(session: &mut SessionController, now_ms: &mut u64) -> Vec<TraceEvent> {
    let snapshot = session.snapshot().expect("session has content");
    let points: Vec<Point> = session.library().strokes(snapshot.character).strokes()
        [snapshot.active_stroke_index]
        .points()
        .to_vec();
    let progress = snapshot.stroke_progress[snapshot.active_stroke_index];
    let start = matcher::current_index(points.len(), progress);

    *now_ms += STEP_MS;
    session.on_pointer_down_at(points[start], *now_ms);
    let mut events = Vec::new();
    for p in &points[start..] {
        *now_ms += STEP_MS;
        events.extend(session.on_pointer_move_at(*p, *now_ms));
    }
    session.on_pointer_up();
    events
}

fn trace_to_completion(session: &mut SessionController, now_ms: &mut u64) -> Vec<TraceEvent> {
    let mut events = Vec::new();
    let mut guard = 200;
    while session.phase() == SessionPhase::Active && guard > 0 {
        guard -= 1;
        events.extend(trace_active_stroke(session, now_ms));
    }
    assert!(guard > 0, "session never completed");
    events
}

fn completed_characters(events: &[TraceEvent]) -> Vec<(char, usize)> {
    events
        .iter()
        .filter_map(|e| match e {
            TraceEvent::CharacterCompleted {
                character,
                sentence_index,
                ..
            } => Some((*character, *sentence_index)),
            _ => None,
        })
        .collect()
}

#[test]
fn sentence_session_emits_full_cascade_in_order() {
    let mut session = SessionController::new();
    session.start(PracticeMode::Sentence, "Hej du").unwrap();

    let mut now = 0;
    let events = trace_to_completion(&mut session, &mut now);

    // Five characters, in content order, with their global indices
    let chars = completed_characters(&events);
    assert_eq!(
        chars,
        vec![('H', 0), ('e', 1), ('j', 2), ('d', 4), ('u', 5)]
    );

    // Exactly two words and one session completion
    let words: Vec<(usize, &str)> = events
        .iter()
        .filter_map(|e| match e {
            TraceEvent::WordCompleted { word_index, text } => Some((*word_index, text.as_str())),
            _ => None,
        })
        .collect();
    assert_eq!(words, vec![(0, "Hej"), (1, "du")]);
    assert_eq!(
        events.iter().filter(|e| e.is_session_completed()).count(),
        1
    );

    // "Hej" completes immediately after its last character 'j'
    let j_pos = events
        .iter()
        .position(|e| matches!(e, TraceEvent::CharacterCompleted { character: 'j', .. }))
        .unwrap();
    assert_matches!(
        events[j_pos + 1],
        TraceEvent::WordCompleted { word_index: 0, .. }
    );

    // The session completion is the final event, strictly after the
    // second word
    assert_matches!(events.last(), Some(TraceEvent::SessionCompleted { .. }));
    assert_matches!(
        events[events.len() - 2],
        TraceEvent::WordCompleted { word_index: 1, .. }
    );
    assert_eq!(session.phase(), SessionPhase::Complete);

    // Durations were measured
    for event in &events {
        if let TraceEvent::CharacterCompleted { duration_ms, .. } = event {
            assert!(*duration_ms > 0);
        }
    }
}

#[test]
fn completed_session_ignores_further_input() {
    let mut session = SessionController::new();
    session.start(PracticeMode::SingleLetter, "l").unwrap();

    let mut now = 0;
    trace_to_completion(&mut session, &mut now);
    assert_eq!(session.phase(), SessionPhase::Complete);

    assert!(!session.on_pointer_down_at(Point::new(300.0, 100.0), now + 100));
    assert!(session
        .on_pointer_move_at(Point::new(300.0, 200.0), now + 200)
        .is_empty());
}

#[test]
fn single_letter_mode_cascades_once() {
    let mut session = SessionController::new();
    session.start(PracticeMode::SingleLetter, "B").unwrap();

    let mut now = 0;
    let events = trace_to_completion(&mut session, &mut now);

    assert_eq!(events.len(), 3);
    assert_matches!(
        events[0],
        TraceEvent::CharacterCompleted { character: 'B', sentence_index: 0, .. }
    );
    assert_matches!(events[1], TraceEvent::WordCompleted { word_index: 0, .. });
    assert_matches!(
        events[2],
        TraceEvent::SessionCompleted { mode: PracticeMode::SingleLetter, .. }
    );
}

#[test]
fn dual_case_keeps_lowercase_untouched_until_its_turn() {
    let mut session = SessionController::new();
    session.start(PracticeMode::DualCase, "A").unwrap();

    let mut now = 0;
    // Uppercase 'A' is three strokes; trace exactly those
    let mut events = Vec::new();
    for _ in 0..3 {
        events.extend(trace_active_stroke(&mut session, &mut now));
    }
    assert_eq!(completed_characters(&events), vec![('A', 0)]);
    assert!(!events.iter().any(|e| matches!(e, TraceEvent::WordCompleted { .. })));

    // Lowercase activated with entirely fresh progress
    let snapshot = session.snapshot().unwrap();
    assert_eq!(snapshot.character, 'a');
    assert_eq!(snapshot.active_character_index, 1);
    assert_eq!(snapshot.active_stroke_index, 0);
    assert!(snapshot.stroke_progress.iter().all(|&p| p == 0.0));
    assert_eq!(snapshot.completed_characters, vec![0]);

    // Pair completion only after the lowercase glyph is traced too
    let rest = trace_to_completion(&mut session, &mut now);
    assert_eq!(completed_characters(&rest), vec![('a', 1)]);
    assert_matches!(
        rest.last(),
        Some(TraceEvent::SessionCompleted { mode: PracticeMode::DualCase, .. })
    );
}

#[test]
fn reset_zeroes_partial_progress_and_keeps_content() {
    let mut session = SessionController::new();
    session.start(PracticeMode::SingleLetter, "B").unwrap();

    // Partially trace the first stroke of 'B'
    let snapshot = session.snapshot().unwrap();
    let points: Vec<Point> = session.library().strokes('B').strokes()[0].points().to_vec();
    assert_eq!(snapshot.character, 'B');
    let mut now = 0;
    session.on_pointer_down_at(points[0], now);
    for p in &points[..points.len() * 6 / 10] {
        now += STEP_MS;
        session.on_pointer_move_at(*p, now);
    }
    let partial = session.snapshot().unwrap();
    assert!(partial.stroke_progress[0] > 0.0);

    session.reset();
    let fresh = session.snapshot().unwrap();
    assert_eq!(fresh.character, 'B');
    assert_eq!(fresh.active_stroke_index, 0);
    assert!(fresh.stroke_progress.iter().all(|&p| p == 0.0));
    assert!(fresh.completed_characters.is_empty());
    assert_eq!(session.phase(), SessionPhase::Active);

    // The abandoned attempt never surfaces: a clean full trace emits
    // exactly one cascade
    let events = trace_to_completion(&mut session, &mut now);
    assert_eq!(
        events.iter().filter(|e| e.is_session_completed()).count(),
        1
    );
    assert_eq!(completed_characters(&events), vec![('B', 0)]);
}

#[test]
fn starting_new_content_discards_old_session() {
    let mut session = SessionController::new();
    session.start(PracticeMode::Sentence, "Hej du").unwrap();

    let mut now = 0;
    // Complete the first character of the old content
    let mut guard = 10;
    while session.snapshot().unwrap().completed_characters.is_empty() && guard > 0 {
        guard -= 1;
        trace_active_stroke(&mut session, &mut now);
    }

    session.start(PracticeMode::Sentence, "Om").unwrap();
    let events = trace_to_completion(&mut session, &mut now);

    // Only the new content's characters appear
    assert_eq!(completed_characters(&events), vec![('O', 0), ('m', 1)]);
    assert_eq!(
        events.iter().filter(|e| e.is_session_completed()).count(),
        1
    );
}

#[test]
fn unknown_character_traces_the_fallback_glyph() {
    let mut session = SessionController::new();
    session.start(PracticeMode::Sentence, "§").unwrap();

    // The renderer sees the default glyph...
    let snapshot = session.snapshot().unwrap();
    assert_eq!(snapshot.character, session.library().default_character());

    // ...while events report the practiced content character
    let mut now = 0;
    let events = trace_to_completion(&mut session, &mut now);
    assert_matches!(
        events[0],
        TraceEvent::CharacterCompleted { character: '§', sentence_index: 0, .. }
    );
    assert_eq!(session.phase(), SessionPhase::Complete);
}

#[test]
fn pointer_down_far_from_stroke_start_never_arms() {
    let mut session = SessionController::new();
    session.start(PracticeMode::SingleLetter, "l").unwrap();

    let points: Vec<Point> = session.library().strokes('l').strokes()[0].points().to_vec();
    let start = points[0];
    let far = Point::new(start.x + 400.0, start.y);
    assert!(!session.on_pointer_down_at(far, 0));

    // Moves before a qualifying down leave everything at zero
    let mut now = 0;
    for p in &points {
        now += STEP_MS;
        assert!(session.on_pointer_move_at(*p, now).is_empty());
    }
    let snapshot = session.snapshot().unwrap();
    assert!(snapshot.stroke_progress.iter().all(|&p| p == 0.0));
}
