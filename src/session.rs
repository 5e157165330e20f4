//! Session façade: the only entry point collaborators talk to.
//!
//! Owns one composition engine, gates pointer input on the session phase,
//! stamps timestamps, and exposes a read-only snapshot for rendering.

use crate::clock::{Clock, SystemClock};
use crate::composition::{CompositionEngine, PracticeMode};
use crate::config::TraceConfig;
use crate::events::TraceEvent;
use crate::geometry::Point;
use crate::glyphs::GlyphLibrary;
use serde::Serialize;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Active,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// `start` was called with content holding no traceable character.
    InvalidContent,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidContent => {
                write!(f, "content contains no traceable characters")
            }
        }
    }
}

impl Error for SessionError {}

/// Read-only view for the renderer: which character is active, which
/// stroke accepts input, and how far every stroke of that character has
/// been traced. The renderer combines this with the static glyph data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub character: char,
    /// Global character index into the practiced content.
    pub active_character_index: usize,
    pub active_stroke_index: usize,
    pub stroke_progress: Vec<f64>,
    /// Already-completed global character indices, sorted.
    pub completed_characters: Vec<usize>,
}

pub struct SessionController {
    library: Arc<GlyphLibrary>,
    config: TraceConfig,
    clock: Box<dyn Clock>,
    phase: SessionPhase,
    engine: Option<CompositionEngine>,
}

impl fmt::Debug for SessionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionController")
            .field("phase", &self.phase)
            .field("content", &self.engine.as_ref().map(|e| e.content()))
            .finish()
    }
}

impl SessionController {
    pub fn new() -> Self {
        Self::with_parts(
            Arc::new(GlyphLibrary::new()),
            TraceConfig::default(),
            Box::new(SystemClock::new()),
        )
    }

    pub fn with_parts(
        library: Arc<GlyphLibrary>,
        config: TraceConfig,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            library,
            config,
            clock,
            phase: SessionPhase::Idle,
            engine: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn library(&self) -> &GlyphLibrary {
        &self.library
    }

    /// Load content and become `Active`. Single-letter and dual-case
    /// contents are normalized from the first traceable character, so
    /// `start(DualCase, "a")` practices "Aa". On failure nothing changes.
    pub fn start(&mut self, mode: PracticeMode, content: &str) -> Result<(), SessionError> {
        let normalized = normalize_content(mode, content).ok_or(SessionError::InvalidContent)?;
        let engine = CompositionEngine::new(
            mode,
            &normalized,
            Arc::clone(&self.library),
            self.config.clone(),
        )
        .ok_or(SessionError::InvalidContent)?;
        self.engine = Some(engine);
        self.phase = SessionPhase::Active;
        Ok(())
    }

    pub fn on_pointer_down(&mut self, pos: Point) -> bool {
        let now = self.clock.now_ms();
        self.on_pointer_down_at(pos, now)
    }

    /// Timestamped twin of [`Self::on_pointer_down`] for deterministic
    /// tests and replays.
    pub fn on_pointer_down_at(&mut self, pos: Point, now_ms: u64) -> bool {
        if self.phase != SessionPhase::Active {
            return false;
        }
        match &mut self.engine {
            Some(engine) => engine.on_pointer_down(pos, now_ms),
            None => false,
        }
    }

    pub fn on_pointer_move(&mut self, pos: Point) -> Vec<TraceEvent> {
        let now = self.clock.now_ms();
        self.on_pointer_move_at(pos, now)
    }

    pub fn on_pointer_move_at(&mut self, pos: Point, now_ms: u64) -> Vec<TraceEvent> {
        if self.phase != SessionPhase::Active {
            return Vec::new();
        }
        let Some(engine) = &mut self.engine else {
            return Vec::new();
        };
        let events = engine.on_pointer_move(pos, now_ms);
        if events.iter().any(TraceEvent::is_session_completed) {
            self.phase = SessionPhase::Complete;
        }
        events
    }

    pub fn on_pointer_up(&mut self) {
        if self.phase == SessionPhase::Active {
            if let Some(engine) = &mut self.engine {
                engine.on_pointer_up();
            }
        }
    }

    /// Discard all progress on the loaded content and return to its first
    /// character; no event from the abandoned attempt fires afterward.
    /// Without loaded content this is a no-op.
    pub fn reset(&mut self) {
        if let Some(engine) = &mut self.engine {
            engine.reset();
            self.phase = SessionPhase::Active;
        }
    }

    pub fn snapshot(&self) -> Option<SessionSnapshot> {
        let engine = self.engine.as_ref()?;
        let tracker = engine.active_tracker();
        let mut completed: Vec<usize> = engine.completed_indices().iter().copied().collect();
        completed.sort_unstable();
        Some(SessionSnapshot {
            character: tracker.character(),
            active_character_index: engine.active_index(),
            active_stroke_index: tracker.stroke_index(),
            stroke_progress: tracker.stroke_progress().to_vec(),
            completed_characters: completed,
        })
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_content(mode: PracticeMode, content: &str) -> Option<String> {
    let first = content.chars().find(|c| !c.is_whitespace());
    match mode {
        PracticeMode::Sentence => {
            first?;
            Some(content.to_string())
        }
        PracticeMode::SingleLetter => Some(first?.to_string()),
        PracticeMode::DualCase => {
            let c = first?;
            let mut pair: String = c.to_uppercase().collect();
            pair.extend(c.to_lowercase());
            Some(pair)
        }
    }
}
