// Library surface for the tracing engine and its collaborator glue.
// The binary in main.rs is only a replay harness around this.
pub mod app_dirs;
pub mod clock;
pub mod composition;
pub mod config;
pub mod events;
pub mod geometry;
pub mod glyphs;
pub mod matcher;
pub mod phrases;
pub mod practice_log;
pub mod session;
pub mod stats;
pub mod tracker;
pub mod util;

pub use composition::PracticeMode;
pub use events::TraceEvent;
pub use geometry::Point;
pub use session::{SessionController, SessionError, SessionPhase, SessionSnapshot};
