//! Response DTOs for the journal service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::journal::{Entry, EntryId, JournalStats};

/// Response body for listing or searching entries (GET /entries)
#[derive(Debug, Clone, Serialize)]
pub struct EntryListResponse {
    /// Matching entries, most recent first
    pub entries: Vec<Entry>,
    /// Number of entries returned
    pub count: usize,
}

impl EntryListResponse {
    pub fn new(entries: Vec<Entry>) -> Self {
        let count = entries.len();
        Self { entries, count }
    }
}

/// Response body for the delete operation (DELETE /entries/:id)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The id that was deleted
    pub id: EntryId,
    /// How long the deletion stays undoable, in milliseconds
    pub undo_window_ms: u64,
}

impl DeleteResponse {
    pub fn new(id: EntryId, undo_window_ms: u64) -> Self {
        Self {
            message: format!("Entry {id} deleted; undo is available"),
            id,
            undo_window_ms,
        }
    }
}

/// Response body for the undo operation (POST /undo)
#[derive(Debug, Clone, Serialize)]
pub struct UndoResponse {
    /// Success message
    pub message: String,
    /// The restored entry
    pub entry: Entry,
}

impl UndoResponse {
    pub fn new(entry: Entry) -> Self {
        Self {
            message: format!("Entry {} restored", entry.id),
            entry,
        }
    }
}

/// Response body for clearing the journal (DELETE /entries)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
    /// Number of entries removed
    pub removed: usize,
}

impl ClearResponse {
    pub fn new(removed: usize) -> Self {
        Self {
            message: format!("Journal cleared, {removed} entries removed"),
            removed,
        }
    }
}

/// Response body for the import operation (POST /import)
#[derive(Debug, Clone, Serialize)]
pub struct ImportResponse {
    /// Success message
    pub message: String,
    /// Number of entries merged into the journal
    pub imported: usize,
}

impl ImportResponse {
    pub fn new(imported: usize) -> Self {
        Self {
            message: format!("{imported} entries imported"),
            imported,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// All entries
    pub total: usize,
    /// Entries created today (local calendar)
    pub today: usize,
    /// Entries created in the last 7 days
    pub week: usize,
}

impl From<JournalStats> for StatsResponse {
    fn from(stats: JournalStats) -> Self {
        Self {
            total: stats.total,
            today: stats.today,
            week: stats.week,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> Entry {
        Entry {
            id: 3,
            timestamp: 1_000,
            topic: "Topic".to_string(),
            content: "Content long enough.".to_string(),
            link: None,
            image_url: None,
        }
    }

    #[test]
    fn test_entry_list_response_counts() {
        let resp = EntryListResponse::new(vec![entry()]);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["entries"][0]["id"], 3);
    }

    #[test]
    fn test_delete_response_serialize() {
        let resp = DeleteResponse::new(3, 5_000);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("undo"));
        assert!(json.contains("5000"));
    }

    #[test]
    fn test_undo_response_carries_entry() {
        let resp = UndoResponse::new(entry());
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["entry"]["id"], 3);
        assert!(json["message"].as_str().unwrap().contains("restored"));
    }

    #[test]
    fn test_stats_response_from_stats() {
        let resp = StatsResponse::from(JournalStats {
            total: 4,
            today: 1,
            week: 2,
        });
        assert_eq!(resp.total, 4);
        assert_eq!(resp.today, 1);
        assert_eq!(resp.week, 2);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
