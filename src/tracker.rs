//! Per-character tracing state.
//!
//! A tracker owns the in-flight progress of exactly one character: its
//! per-stroke progress vector, which stroke is accepting input, and the
//! drawing flag. It applies the matcher's verdicts and enforces the
//! sequencing rules: progress never regresses, stroke i+1 cannot begin
//! before stroke i is done, and completion is reported exactly once.

use crate::config::TraceConfig;
use crate::geometry::Point;
use crate::glyphs::{Glyph, Stroke};
use crate::matcher;

/// Reported once, when the last stroke of the character reaches full
/// progress. Duration runs from the first qualifying pointer-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterCompletion {
    pub character: char,
    pub duration_ms: u64,
}

#[derive(Debug, Clone)]
pub struct CharacterTracker {
    character: char,
    strokes: Vec<Stroke>,
    stroke_index: usize,
    stroke_progress: Vec<f64>,
    is_drawing: bool,
    started_at_ms: Option<u64>,
    last_attempt_ms: Option<u64>,
    completed: bool,
    config: TraceConfig,
}

impl CharacterTracker {
    pub fn new(glyph: &Glyph, config: TraceConfig) -> Self {
        let strokes = glyph.strokes().to_vec();
        let stroke_progress = vec![0.0; strokes.len()];
        Self {
            character: glyph.character(),
            strokes,
            stroke_index: 0,
            stroke_progress,
            is_drawing: false,
            started_at_ms: None,
            last_attempt_ms: None,
            completed: false,
            config,
        }
    }

    pub fn character(&self) -> char {
        self.character
    }

    pub fn stroke_index(&self) -> usize {
        self.stroke_index
    }

    pub fn stroke_progress(&self) -> &[f64] {
        &self.stroke_progress
    }

    pub fn is_drawing(&self) -> bool {
        self.is_drawing
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Arm drawing if the pointer landed close enough to the active
    /// stroke's start (fresh stroke) or its current target point (resume
    /// after a lift). Anything else is silently ignored.
    pub fn on_pointer_down(&mut self, pos: Point, now_ms: u64) -> bool {
        if self.completed {
            return false;
        }
        let stroke = &self.strokes[self.stroke_index];
        let progress = self.stroke_progress[self.stroke_index];
        if matcher::can_start(stroke.points(), progress, pos, &self.config) {
            self.is_drawing = true;
            if self.started_at_ms.is_none() {
                self.started_at_ms = Some(now_ms);
            }
            true
        } else {
            false
        }
    }

    /// Feed one pointer position into the active stroke.
    ///
    /// Attempts are rate-limited to the configured minimum interval; the
    /// matcher itself is pure, so the debounce lives here with the state.
    pub fn on_pointer_move(&mut self, pos: Point, now_ms: u64) -> Option<CharacterCompletion> {
        if self.completed || !self.is_drawing {
            return None;
        }
        if let Some(last) = self.last_attempt_ms {
            if now_ms.saturating_sub(last) < self.config.min_match_interval_ms {
                return None;
            }
        }
        self.last_attempt_ms = Some(now_ms);

        let index = self.stroke_index;
        let updated = matcher::advance_along(
            self.strokes[index].points(),
            self.stroke_progress[index],
            pos,
            &self.config,
        )?;
        debug_assert!(updated >= self.stroke_progress[index]);
        self.stroke_progress[index] = updated;

        if updated >= 1.0 {
            self.finish_stroke(now_ms)
        } else {
            None
        }
    }

    fn finish_stroke(&mut self, now_ms: u64) -> Option<CharacterCompletion> {
        // The next stroke needs a fresh qualifying pointer-down at its own
        // start before any matching happens.
        self.is_drawing = false;
        if self.stroke_index + 1 < self.strokes.len() {
            self.stroke_index += 1;
            None
        } else {
            self.completed = true;
            let started = self.started_at_ms.unwrap_or(now_ms);
            Some(CharacterCompletion {
                character: self.character,
                duration_ms: now_ms.saturating_sub(started),
            })
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.is_drawing = false;
    }

    /// Zero all progress and return to the first stroke; the loaded glyph
    /// stays as it was.
    pub fn reset(&mut self) {
        for p in &mut self.stroke_progress {
            *p = 0.0;
        }
        self.stroke_index = 0;
        self.is_drawing = false;
        self.started_at_ms = None;
        self.last_attempt_ms = None;
        self.completed = false;
    }
}
