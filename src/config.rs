use crate::app_dirs::AppDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Tunable matching parameters.
///
/// Every threshold the matcher and tracker compare against lives here as a
/// named field, so smoothing behavior can be tuned without touching the
/// matching math.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TraceConfig {
    /// Maximum pointer-to-path-point distance counted as a match, in canvas
    /// units. Deliberately generous (about a fifth of the canvas) so a
    /// child's imprecise motor control still advances progress.
    pub acceptance_radius: f64,
    /// Multiplier widening the acceptance radius around a fresh stroke's
    /// first point; a pointer-down outside it does not arm drawing.
    pub start_radius_factor: f64,
    /// How many upcoming path points the matcher inspects per update.
    pub look_ahead_points: usize,
    /// Cap on index advance per update, so one wild pointer jump cannot
    /// swallow a whole stroke segment.
    pub max_advance_points: usize,
    /// Minimum interval between match attempts; damps jitter from
    /// high-frequency pointer-move events.
    pub min_match_interval_ms: u64,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            acceptance_radius: 120.0,
            start_radius_factor: 2.0,
            look_ahead_points: 5,
            max_advance_points: 2,
            min_match_interval_ms: 50,
        }
    }
}

impl TraceConfig {
    /// Radius a pointer-down must land in to begin a stroke from zero.
    pub fn start_radius(&self) -> f64 {
        self.acceptance_radius * self.start_radius_factor
    }
}

pub trait ConfigStore {
    fn load(&self) -> TraceConfig;
    fn save(&self, cfg: &TraceConfig) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = AppDirs::config_path().unwrap_or_else(|| PathBuf::from("skriv_config.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> TraceConfig {
        if let Ok(bytes) = fs::read(&self.path) {
            if let Ok(cfg) = serde_json::from_slice::<TraceConfig>(&bytes) {
                return cfg;
            }
        }
        TraceConfig::default()
    }

    fn save(&self, cfg: &TraceConfig) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg).unwrap_or_default();
        fs::write(&self.path, data)
    }
}
