//! Journal Entry Module
//!
//! Defines the diary record stored by the journal, plus the draft and
//! patch shapes used to create and update it.

use serde::{Deserialize, Serialize};

/// Unique identifier for a journal entry.
///
/// Derived from the creation instant in epoch milliseconds, but the store
/// forces strict monotonicity so two entries created in the same tick can
/// never collide.
pub type EntryId = i64;

// == Entry ==
/// A single dated journal record.
///
/// `id` and `timestamp` are assigned by the store at creation time and are
/// immutable afterwards; updates only ever touch the text fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique, monotonically increasing identifier
    pub id: EntryId,
    /// Creation instant (epoch milliseconds), never altered by updates
    pub timestamp: i64,
    /// Short title, 3-200 characters
    pub topic: String,
    /// Body text, 10-10000 characters
    pub content: String,
    /// Optional absolute http(s) URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Optional absolute http(s) image URL
    #[serde(
        rename = "imageUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
}

// == Entry Draft ==
/// Candidate data for a new entry, before the store assigns id/timestamp.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub topic: String,
    pub content: String,
    pub link: Option<String>,
    pub image_url: Option<String>,
}

// == Entry Patch ==
/// Partial update applied to an existing entry.
///
/// `None` fields are left untouched. The patch deliberately carries no
/// `id` or `timestamp`, so neither can be rewritten through an update.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub topic: Option<String>,
    pub content: Option<String>,
    pub link: Option<String>,
    pub image_url: Option<String>,
}

impl Entry {
    // == Constructor ==
    /// Builds an entry from a draft with store-assigned id and timestamp.
    pub fn from_draft(id: EntryId, timestamp: i64, draft: EntryDraft) -> Self {
        Self {
            id,
            timestamp,
            topic: draft.topic,
            content: draft.content,
            link: draft.link,
            image_url: draft.image_url,
        }
    }

    // == Apply Patch ==
    /// Merges a patch into this entry, field by field.
    pub fn apply_patch(&mut self, patch: EntryPatch) {
        if let Some(topic) = patch.topic {
            self.topic = topic;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(link) = patch.link {
            self.link = Some(link);
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = Some(image_url);
        }
    }
}
