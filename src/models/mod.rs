//! Request and Response models for the journal service API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{CreateEntryRequest, ListParams, UpdateEntryRequest};
pub use responses::{
    ClearResponse, DeleteResponse, EntryListResponse, HealthResponse, ImportResponse,
    StatsResponse, UndoResponse,
};
