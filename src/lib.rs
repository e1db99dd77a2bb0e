//! Daybook - A personal log service
//!
//! An in-memory journal of dated entries with undoable deletion, change
//! notification, a cached search layer, and JSON-file persistence,
//! served over a small REST API.

pub mod api;
pub mod config;
pub mod error;
pub mod journal;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::{spawn_undo_timer, UndoTimer};
