use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    /// State directory under $HOME/.local/state/skriv, falling back to the
    /// platform-specific local data dir.
    fn state_dir() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            Some(
                PathBuf::from(home)
                    .join(".local")
                    .join("state")
                    .join("skriv"),
            )
        } else {
            ProjectDirs::from("", "", "skriv").map(|proj_dirs| proj_dirs.data_local_dir().to_path_buf())
        }
    }

    pub fn db_path() -> Option<PathBuf> {
        Self::state_dir().map(|dir| dir.join("stats.db"))
    }

    pub fn log_path() -> Option<PathBuf> {
        Self::state_dir().map(|dir| dir.join("practice_log.csv"))
    }

    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "skriv").map(|proj_dirs| proj_dirs.config_dir().join("config.json"))
    }
}
