use crate::app_dirs::AppDirs;
use chrono::{DateTime, Local};
use rusqlite::{params, Connection, Result};
use std::collections::HashMap;
use std::path::PathBuf;

/// One completed character trace, as persisted for later analysis.
#[derive(Debug, Clone)]
pub struct CharTrace {
    pub character: char,
    pub duration_ms: u64,
    pub stroke_count: usize,
    pub mode: String,
    pub timestamp: DateTime<Local>,
}

/// How much a character still needs practicing, derived from history.
/// Slow average traces mark the characters the adaptive selector should
/// bring back more often.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceDifficulty {
    pub avg_duration_ms: f64,
    pub attempts: i64,
}

/// Database manager for tracing statistics
#[derive(Debug)]
pub struct TraceStatsDb {
    conn: Connection,
}

impl TraceStatsDb {
    /// Open (and if needed create) the on-disk statistics database.
    pub fn new() -> Result<Self> {
        let db_path = AppDirs::db_path().unwrap_or_else(|| PathBuf::from("skriv_stats.db"));

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                rusqlite::Error::SqliteFailure(
                    rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_CANTOPEN),
                    Some(format!("Failed to create directory: {}", e)),
                )
            })?;
        }

        let conn = Connection::open(&db_path)?;
        Self::init_schema(&conn)?;
        Ok(TraceStatsDb { conn })
    }

    /// In-memory database, used by tests and throwaway sessions.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(TraceStatsDb { conn })
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS char_traces (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                character TEXT NOT NULL,
                duration_ms INTEGER NOT NULL,
                stroke_count INTEGER NOT NULL,
                mode TEXT NOT NULL,
                timestamp TEXT NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            "#,
            [],
        )?;
        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_char_traces_char ON char_traces(character)",
            [],
        )?;
        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_char_traces_timestamp ON char_traces(timestamp)",
            [],
        )?;
        Ok(())
    }

    /// Record a single completed character trace
    pub fn record_trace(&self, trace: &CharTrace) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO char_traces (character, duration_ms, stroke_count, mode, timestamp)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                trace.character.to_string(),
                trace.duration_ms,
                trace.stroke_count as i64,
                trace.mode,
                trace.timestamp.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Record a whole session's traces in one transaction
    pub fn record_traces_batch(&mut self, traces: &[CharTrace]) -> Result<()> {
        let tx = self.conn.transaction()?;
        for trace in traces {
            tx.execute(
                r#"
                INSERT INTO char_traces (character, duration_ms, stroke_count, mode, timestamp)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
                params![
                    trace.character.to_string(),
                    trace.duration_ms,
                    trace.stroke_count as i64,
                    trace.mode,
                    trace.timestamp.to_rfc3339(),
                ],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    /// All recorded traces for one character, newest first
    pub fn get_char_traces(&self, character: char) -> Result<Vec<CharTrace>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT character, duration_ms, stroke_count, mode, timestamp
            FROM char_traces
            WHERE character = ?1
            ORDER BY timestamp DESC
            "#,
        )?;

        let trace_iter = stmt.query_map([character.to_string()], |row| {
            let timestamp_str: String = row.get(4)?;
            let timestamp = DateTime::parse_from_rfc3339(&timestamp_str)
                .map_err(|_| {
                    rusqlite::Error::InvalidColumnType(
                        4,
                        "timestamp".to_string(),
                        rusqlite::types::Type::Text,
                    )
                })?
                .with_timezone(&Local);

            Ok(CharTrace {
                character: row.get::<_, String>(0)?.chars().next().unwrap_or('\0'),
                duration_ms: row.get(1)?,
                stroke_count: row.get::<_, i64>(2)? as usize,
                mode: row.get(3)?,
                timestamp,
            })
        })?;

        let mut traces = Vec::new();
        for trace in trace_iter {
            traces.push(trace?);
        }
        Ok(traces)
    }

    /// Average trace duration for a character
    pub fn get_avg_duration(&self, character: char) -> Result<Option<f64>> {
        let mut stmt = self
            .conn
            .prepare("SELECT AVG(duration_ms) FROM char_traces WHERE character = ?1")?;
        let avg: Option<f64> = stmt.query_row([character.to_string()], |row| row.get(0))?;
        Ok(avg)
    }

    /// Per-character summary, slowest characters first:
    /// (character, avg duration ms, attempts)
    pub fn get_char_summary(&self) -> Result<Vec<(char, f64, i64)>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT
                character,
                AVG(duration_ms) as avg_duration,
                COUNT(*) as attempts
            FROM char_traces
            GROUP BY character
            ORDER BY avg_duration DESC
            "#,
        )?;

        let summary_iter = stmt.query_map([], |row| {
            let char_str: String = row.get(0)?;
            let character = char_str.chars().next().unwrap_or('\0');
            let avg_duration: f64 = row.get(1)?;
            let attempts: i64 = row.get(2)?;
            Ok((character, avg_duration, attempts))
        })?;

        let mut summary = Vec::new();
        for item in summary_iter {
            summary.push(item?);
        }
        Ok(summary)
    }

    /// Difficulty map consumed by the adaptive content selector
    pub fn get_trace_difficulties(&self) -> Result<HashMap<char, TraceDifficulty>> {
        let summary = self.get_char_summary()?;
        Ok(summary
            .into_iter()
            .map(|(character, avg_duration_ms, attempts)| {
                (
                    character,
                    TraceDifficulty {
                        avg_duration_ms,
                        attempts,
                    },
                )
            })
            .collect())
    }

    /// Clear all statistics (for testing or reset purposes)
    pub fn clear_all(&self) -> Result<()> {
        self.conn.execute("DELETE FROM char_traces", [])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace(character: char, duration_ms: u64) -> CharTrace {
        CharTrace {
            character,
            duration_ms,
            stroke_count: 2,
            mode: "sentence".to_string(),
            timestamp: Local::now(),
        }
    }

    #[test]
    fn test_record_and_retrieve_trace() {
        let db = TraceStatsDb::open_in_memory().unwrap();
        db.record_trace(&trace('h', 900)).unwrap();

        let traces = db.get_char_traces('h').unwrap();
        assert_eq!(traces.len(), 1);
        assert_eq!(traces[0].character, 'h');
        assert_eq!(traces[0].duration_ms, 900);
        assert_eq!(traces[0].stroke_count, 2);
        assert_eq!(traces[0].mode, "sentence");
    }

    #[test]
    fn test_avg_duration() {
        let db = TraceStatsDb::open_in_memory().unwrap();
        db.record_trace(&trace('a', 1000)).unwrap();
        db.record_trace(&trace('a', 2000)).unwrap();

        let avg = db.get_avg_duration('a').unwrap();
        assert_eq!(avg, Some(1500.0));
        assert_eq!(db.get_avg_duration('z').unwrap(), None);
    }

    #[test]
    fn test_summary_orders_slowest_first() {
        let db = TraceStatsDb::open_in_memory().unwrap();
        db.record_trace(&trace('a', 500)).unwrap();
        db.record_trace(&trace('k', 2500)).unwrap();
        db.record_trace(&trace('o', 1200)).unwrap();

        let summary = db.get_char_summary().unwrap();
        assert_eq!(summary.len(), 3);
        assert_eq!(summary[0].0, 'k');
        assert_eq!(summary[1].0, 'o');
        assert_eq!(summary[2].0, 'a');
    }

    #[test]
    fn test_batch_record_and_difficulties() {
        let mut db = TraceStatsDb::open_in_memory().unwrap();
        db.record_traces_batch(&[trace('s', 1800), trace('s', 2200), trace('i', 400)])
            .unwrap();

        let difficulties = db.get_trace_difficulties().unwrap();
        assert_eq!(difficulties.len(), 2);
        let s = &difficulties[&'s'];
        assert_eq!(s.avg_duration_ms, 2000.0);
        assert_eq!(s.attempts, 2);
        assert_eq!(difficulties[&'i'].attempts, 1);
    }

    #[test]
    fn test_clear_all() {
        let db = TraceStatsDb::open_in_memory().unwrap();
        db.record_trace(&trace('x', 700)).unwrap();
        assert_eq!(db.get_char_traces('x').unwrap().len(), 1);

        db.clear_all().unwrap();
        assert_eq!(db.get_char_traces('x').unwrap().len(), 0);
    }

    #[test]
    fn test_swedish_characters_roundtrip() {
        let db = TraceStatsDb::open_in_memory().unwrap();
        db.record_trace(&trace('å', 1100)).unwrap();
        let traces = db.get_char_traces('å').unwrap();
        assert_eq!(traces.len(), 1);
        assert_eq!(traces[0].character, 'å');
    }
}
