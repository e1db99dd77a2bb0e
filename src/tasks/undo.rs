//! Undo Window Timer
//!
//! Single-shot background task closing a deletion's undo window, plus
//! the handle that makes cancelling and rearming it explicit operations.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::journal::{EntryId, JournalStore};

/// Spawns a single-shot task that confirms a pending deletion after the
/// undo window elapses.
///
/// The task sleeps for the window, then asks the store to confirm the
/// deletion of `id`. Confirmation is id-checked in the store, so a timer
/// that outlives its deletion (undone, or collapsed by a newer delete)
/// lands as a no-op.
///
/// # Arguments
/// * `store` - shared journal store
/// * `id` - the entry whose deletion this timer finalizes
/// * `window` - how long the deletion stays undoable
///
/// # Returns
/// A JoinHandle for the spawned task, to be parked in an [`UndoTimer`]
/// so the next delete or an undo can abort it.
pub fn spawn_undo_timer(
    store: Arc<RwLock<JournalStore>>,
    id: EntryId,
    window: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(window).await;

        let confirmed = {
            let mut store = store.write().await;
            store.confirm_pending(id)
        };

        if confirmed {
            info!("undo window elapsed for entry {id}, deletion is final");
        } else {
            debug!("undo timer for entry {id} found nothing pending");
        }
    })
}

// == Undo Timer Handle ==
/// Owns the at-most-one live undo timer.
///
/// Rearming aborts the previous timer before parking the new one, and
/// cancelling aborts outright; the pending slot itself lives in the
/// store, this only manages the clockwork.
#[derive(Debug, Default)]
pub struct UndoTimer {
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl UndoTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the live timer, aborting any previous one.
    pub fn rearm(&self, handle: JoinHandle<()>) {
        let mut slot = self.lock();
        if let Some(previous) = slot.replace(handle) {
            previous.abort();
        }
    }

    /// Aborts the live timer, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.lock().take() {
            handle.abort();
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        // The critical section never panics, so poisoning is unreachable
        match self.handle.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
