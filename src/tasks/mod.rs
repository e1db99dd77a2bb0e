//! Background Tasks Module
//!
//! Contains the time-deferred work of the service.
//!
//! # Tasks
//! - Undo timer: single-shot task that finalizes a pending deletion
//!   once its undo window elapses

mod undo;

pub use undo::{spawn_undo_timer, UndoTimer};
