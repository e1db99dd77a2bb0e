//! Request DTOs for the journal service API
//!
//! Defines the structure of incoming HTTP request bodies and query
//! parameters.

use serde::Deserialize;

use crate::journal::{EntryDraft, EntryPatch};

/// Request body for creating an entry (POST /entries)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEntryRequest {
    /// Short title, 3-200 characters
    pub topic: String,
    /// Body text, 10-10000 characters
    pub content: String,
    /// Optional absolute http(s) URL
    #[serde(default)]
    pub link: Option<String>,
    /// Optional absolute http(s) image URL
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
}

impl CreateEntryRequest {
    /// Converts the request into a store draft; the store validates it.
    pub fn into_draft(self) -> EntryDraft {
        EntryDraft {
            topic: self.topic,
            content: self.content,
            link: self.link,
            image_url: self.image_url,
        }
    }
}

/// Request body for updating an entry (PUT /entries/:id)
///
/// All fields are optional; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEntryRequest {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
}

impl UpdateEntryRequest {
    /// Converts the request into a store patch.
    pub fn into_patch(self) -> EntryPatch {
        EntryPatch {
            topic: self.topic,
            content: self.content,
            link: self.link,
            image_url: self.image_url,
        }
    }
}

/// Query parameters for listing entries (GET /entries)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    /// Search query; absent or blank lists everything
    #[serde(default)]
    pub q: Option<String>,
}
