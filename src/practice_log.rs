use crate::app_dirs::AppDirs;
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// One finished practice session, as appended to the CSV history.
#[derive(Debug, Clone, Serialize)]
pub struct SessionRecord {
    pub date: String,
    pub mode: String,
    pub content: String,
    pub duration_secs: f64,
    pub characters: usize,
}

/// Append-only CSV log of completed sessions.
///
/// This is collaborator glue, not core: the engine only emits
/// `SessionCompleted`; whoever owns the session decides to persist it.
#[derive(Debug, Clone)]
pub struct PracticeLog {
    path: PathBuf,
}

impl PracticeLog {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = AppDirs::log_path().unwrap_or_else(|| PathBuf::from("skriv_log.csv"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn append(&self, record: &SessionRecord) -> csv::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Emit the header only when creating the file
        let needs_header = !self.path.exists();

        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;

        let mut writer = WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer.serialize(record)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record(content: &str, duration_secs: f64) -> SessionRecord {
        SessionRecord {
            date: "2024-03-01 10:00".to_string(),
            mode: "sentence".to_string(),
            content: content.to_string(),
            duration_secs,
            characters: content.chars().filter(|c| !c.is_whitespace()).count(),
        }
    }

    #[test]
    fn test_append_writes_header_once() {
        let dir = tempdir().unwrap();
        let log = PracticeLog::with_path(dir.path().join("log.csv"));

        log.append(&record("Hej du", 12.5)).unwrap();
        log.append(&record("Vi äter glass", 30.0)).unwrap();

        let contents = std::fs::read_to_string(dir.path().join("log.csv")).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("date"));
        assert!(lines[0].contains("duration_secs"));
        assert!(lines[1].contains("Hej du"));
        assert!(lines[2].contains("Vi äter glass"));
    }

    #[test]
    fn test_append_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("state").join("skriv").join("log.csv");
        let log = PracticeLog::with_path(&nested);
        log.append(&record("Aa", 4.0)).unwrap();
        assert!(nested.exists());
    }
}
