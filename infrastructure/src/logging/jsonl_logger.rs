//! JSONL file writer for match records.
//!
//! Each [`MatchRecord`] becomes a single JSON line with a UTC `timestamp`,
//! appended to the log file. The file is opened in append mode, so match
//! history accumulates across CLI runs.

use gigmatch_application::ports::match_logger::{MatchLogger, MatchRecord};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// One line of the match log: the record plus a timestamp.
#[derive(Serialize)]
struct LogLine<'a> {
    timestamp: String,
    #[serde(flatten)]
    record: &'a MatchRecord,
}

/// JSONL match logger that appends one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every record;
/// match requests are rare enough that buffering buys nothing.
pub struct JsonlMatchLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlMatchLogger {
    /// Open the log at the given path, creating the file (and parent
    /// directories) if needed. Existing history is kept.
    ///
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create match log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open match log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MatchLogger for JsonlMatchLogger {
    fn log(&self, record: &MatchRecord) {
        let line = LogLine {
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            record,
        };

        let Ok(json) = serde_json::to_string(&line) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", json);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlMatchLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_json_object_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matches.jsonl");
        let logger = JsonlMatchLogger::new(&path).unwrap();

        logger.log(&MatchRecord::ranked(
            "wedding",
            2,
            vec!["Blue Notes".to_string()],
        ));
        logger.log(&MatchRecord::unranked("corporate"));

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["event_type"], "wedding");
        assert_eq!(first["ranked"], true);
        assert!(first["timestamp"].is_string());

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["ranked"], false);
        assert_eq!(second["candidates"], 0);
    }

    #[test]
    fn reopened_log_keeps_prior_history() {
        // One logger per CLI run; the configured path is stable, so a new
        // run must append to the old history rather than truncate it.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matches.jsonl");

        {
            let logger = JsonlMatchLogger::new(&path).unwrap();
            logger.log(&MatchRecord::ranked(
                "wedding",
                2,
                vec!["Blue Notes".to_string()],
            ));
        }
        {
            let logger = JsonlMatchLogger::new(&path).unwrap();
            logger.log(&MatchRecord::unranked("corporate"));
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.lines().next().unwrap().contains("wedding"));
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/logs/matches.jsonl");
        let logger = JsonlMatchLogger::new(&path);
        assert!(logger.is_some());
        assert!(path.exists());
    }
}
