//! Import / Export Module
//!
//! Merges externally supplied entry lists into the journal and produces
//! the export artifact. Import is all-or-nothing: either qualifying
//! entries are merged or the whole operation reports an error.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::{JournalError, Result};
use crate::journal::entry::{Entry, EntryId};

// == Candidate Entry ==
/// One element of an imported list, with every field optional so a
/// partially broken export can still be sifted for usable records.
#[derive(Debug, Deserialize)]
struct CandidateEntry {
    #[serde(default)]
    id: Option<EntryId>,
    #[serde(default)]
    timestamp: Option<i64>,
    #[serde(default)]
    topic: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(rename = "imageUrl", default)]
    image_url: Option<String>,
}

impl CandidateEntry {
    /// A candidate qualifies only with id, topic, content and timestamp
    /// all present.
    fn qualify(self) -> Option<Entry> {
        Some(Entry {
            id: self.id?,
            timestamp: self.timestamp?,
            topic: self.topic?,
            content: self.content?,
            link: self.link,
            image_url: self.image_url,
        })
    }
}

// == Merge Candidates ==
/// Parses `raw` as a JSON entry list and merges it with `existing`.
///
/// Candidates missing a required field or whose id already exists are
/// skipped. Returns the merged list sorted by timestamp descending plus
/// the number of entries actually imported. A parse failure and a
/// zero-qualifying list are reported as distinct errors.
pub fn merge_candidates(existing: &[Entry], raw: &str) -> Result<(Vec<Entry>, usize)> {
    let candidates: Vec<CandidateEntry> =
        serde_json::from_str(raw).map_err(|e| JournalError::ImportParse(e.to_string()))?;

    let mut seen: HashSet<EntryId> = existing.iter().map(|e| e.id).collect();
    let mut imported = Vec::new();

    for candidate in candidates {
        if let Some(entry) = candidate.qualify() {
            if seen.insert(entry.id) {
                imported.push(entry);
            }
        }
    }

    if imported.is_empty() {
        return Err(JournalError::NothingToImport);
    }

    let count = imported.len();
    let mut merged: Vec<Entry> = existing.to_vec();
    merged.append(&mut imported);
    merged.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    Ok((merged, count))
}

// == Export ==
/// Serializes the full entry list as pretty-printed JSON.
pub fn export_pretty(entries: &[Entry]) -> Result<String> {
    serde_json::to_string_pretty(entries)
        .map_err(|e| JournalError::Internal(format!("export serialization failed: {e}")))
}
