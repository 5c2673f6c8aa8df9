//! Bounded, timestamped event log.
//!
//! Append-only record of resolved actions, capped at 200 entries with
//! FIFO eviction. Read-only everywhere outside `append`/`clear`.

use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Maximum number of retained log entries.
pub const LOG_CAP: usize = 200;

/// One timestamped log line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Milliseconds since the unix epoch. Legacy snapshots that stored
    /// bare strings carry 0 here.
    pub timestamp: u64,

    /// Human-readable message.
    pub message: String,
}

/// Bounded append-only event log.
///
/// ```
/// use team_clash::core::EventLog;
///
/// let mut log = EventLog::new();
/// log.append("Welcome!");
/// assert_eq!(log.recent(1)[0].message, "Welcome!");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventLog {
    entries: VecDeque<LogEntry>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message stamped with the current time.
    ///
    /// If the log exceeds `LOG_CAP`, the oldest entry is evicted.
    pub fn append(&mut self, message: impl Into<String>) {
        self.push(LogEntry {
            timestamp: now_millis(),
            message: message.into(),
        });
    }

    /// Append an already-stamped entry, evicting past the cap.
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > LOG_CAP {
            self.entries.pop_front();
        }
    }

    /// The last `n` entries (or fewer), in chronological order.
    #[must_use]
    pub fn recent(&self, n: usize) -> Vec<&LogEntry> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip).collect()
    }

    /// Iterate over all entries in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Number of retained entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_recent() {
        let mut log = EventLog::new();
        log.append("first");
        log.append("second");
        log.append("third");

        let recent = log.recent(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].message, "second");
        assert_eq!(recent[1].message, "third");
    }

    #[test]
    fn test_recent_more_than_len() {
        let mut log = EventLog::new();
        log.append("only");

        assert_eq!(log.recent(10).len(), 1);
    }

    #[test]
    fn test_eviction_at_cap() {
        let mut log = EventLog::new();
        for i in 0..LOG_CAP + 1 {
            log.push(LogEntry {
                timestamp: i as u64,
                message: format!("entry {i}"),
            });
        }

        // 201st append evicts the oldest; order is preserved.
        assert_eq!(log.len(), LOG_CAP);
        let all: Vec<_> = log.iter().collect();
        assert_eq!(all[0].message, "entry 1");
        assert_eq!(all[LOG_CAP - 1].message, format!("entry {LOG_CAP}"));
    }

    #[test]
    fn test_never_exceeds_cap() {
        let mut log = EventLog::new();
        for i in 0..1000 {
            log.append(format!("entry {i}"));
            assert!(log.len() <= LOG_CAP);
        }
        assert_eq!(log.len(), LOG_CAP);
    }

    #[test]
    fn test_clear() {
        let mut log = EventLog::new();
        log.append("gone");
        log.clear();

        assert!(log.is_empty());
    }

    #[test]
    fn test_append_stamps_time() {
        let mut log = EventLog::new();
        log.append("stamped");

        assert!(log.recent(1)[0].timestamp > 0);
    }
}
