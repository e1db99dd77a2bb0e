//! Journal Store Module
//!
//! The authoritative in-memory entry list. Owns the soft-delete state
//! machine (delete -> pending undo -> confirmed), notifies subscribers
//! synchronously on every mutation, and persists through an injected
//! storage backend. Persistence failures are logged and surfaced but
//! never roll back in-memory state.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{JournalError, Result};
use crate::journal::clock::Clock;
use crate::journal::entry::{Entry, EntryDraft, EntryId, EntryPatch};
use crate::journal::import;
use crate::journal::stats::JournalStats;
use crate::journal::storage::Storage;
use crate::journal::validate::validate_entry;

// == Journal Event ==
/// Mutation notification delivered synchronously to subscribers.
#[derive(Debug, Clone)]
pub enum JournalEvent {
    /// A new entry was inserted at the head of the list
    Added(Entry),
    /// An existing entry was merged with a patch, in place
    Updated(Entry),
    /// An entry left the list and became the pending soft delete
    Deleted(EntryId),
    /// The pending soft delete was re-inserted
    Restored(Entry),
    /// The undo window closed; recovery is no longer possible.
    /// Purely a signal: the entry itself was removed at `Deleted` time.
    DeleteConfirmed(EntryId),
    /// The list was emptied
    Cleared,
    /// The list was wholesale replaced (load or import)
    Loaded,
}

impl JournalEvent {
    /// Short action name for logs and consumers keyed by action.
    pub fn action(&self) -> &'static str {
        match self {
            JournalEvent::Added(_) => "add",
            JournalEvent::Updated(_) => "update",
            JournalEvent::Deleted(_) => "delete",
            JournalEvent::Restored(_) => "restore",
            JournalEvent::DeleteConfirmed(_) => "deleteConfirmed",
            JournalEvent::Cleared => "clear",
            JournalEvent::Loaded => "load",
        }
    }
}

/// Handle for removing a subscriber.
pub type SubscriberId = usize;

type SubscriberFn = Arc<dyn Fn(&JournalEvent) + Send + Sync>;

// == Pending Delete ==
/// The single recoverable soft delete: the removed entry, the index it
/// was removed from, and the instant its undo window closes.
#[derive(Debug, Clone)]
struct PendingDelete {
    entry: Entry,
    index: usize,
    expires_at: i64,
}

// == Journal Store ==
/// Ordered entry list (most recent first) with undoable deletion.
///
/// Storage and clock are constructor-injected; the store holds no global
/// state and owns no timers. The composing layer arms a single-shot
/// timer after each delete and routes its expiry to
/// [`JournalStore::confirm_pending`].
pub struct JournalStore {
    /// Entries ordered by insertion at the head
    entries: Vec<Entry>,
    /// At most one soft-deleted entry awaiting undo or confirmation
    pending: Option<PendingDelete>,
    /// Synchronous mutation observers
    subscribers: Vec<(SubscriberId, SubscriberFn)>,
    next_subscriber_id: SubscriberId,
    /// High-water mark keeping ids strictly increasing
    last_id: EntryId,
    storage: Arc<dyn Storage>,
    clock: Arc<dyn Clock>,
    undo_window: Duration,
}

impl JournalStore {
    // == Constructor ==
    /// Creates an empty store over the given storage slot and clock.
    pub fn new(storage: Arc<dyn Storage>, clock: Arc<dyn Clock>, undo_window: Duration) -> Self {
        Self {
            entries: Vec::new(),
            pending: None,
            subscribers: Vec::new(),
            next_subscriber_id: 0,
            last_id: 0,
            storage,
            clock,
            undo_window,
        }
    }

    // == Snapshots ==
    /// A copy of the current ordered list; mutating it cannot touch the
    /// store's state.
    pub fn entries(&self) -> Vec<Entry> {
        self.entries.clone()
    }

    /// Looks up one entry by id.
    pub fn entry_by_id(&self, id: EntryId) -> Option<Entry> {
        self.entries.iter().find(|e| e.id == id).cloned()
    }

    /// Number of active entries (the pending soft delete is not active).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a soft delete is currently awaiting undo.
    pub fn has_pending_delete(&self) -> bool {
        self.pending.is_some()
    }

    /// The configured undo window.
    pub fn undo_window(&self) -> Duration {
        self.undo_window
    }

    /// Counts for the current list as seen from the injected clock.
    pub fn stats(&self) -> JournalStats {
        JournalStats::calculate(&self.entries, self.clock.now())
    }

    // == Add ==
    /// Validates a draft and inserts the new entry at the head.
    ///
    /// On validation failure nothing is mutated, notified, or persisted.
    pub fn add_entry(&mut self, draft: EntryDraft) -> Result<Entry> {
        let errors = validate_entry(
            &draft.topic,
            &draft.content,
            draft.link.as_deref(),
            draft.image_url.as_deref(),
        );
        if !errors.is_empty() {
            return Err(JournalError::Validation(errors));
        }

        let entry = Entry::from_draft(self.next_id(), self.clock.now_millis(), draft);
        self.entries.insert(0, entry.clone());
        self.notify(JournalEvent::Added(entry.clone()));
        self.persist();
        Ok(entry)
    }

    // == Update ==
    /// Merges a patch into the entry with the given id, at its current
    /// position. The original timestamp always survives: the patch type
    /// cannot carry one.
    pub fn update_entry(&mut self, id: EntryId, patch: EntryPatch) -> Result<Entry> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(JournalError::NotFound(id))?;

        let mut merged = self.entries[index].clone();
        merged.apply_patch(patch);

        let errors = validate_entry(
            &merged.topic,
            &merged.content,
            merged.link.as_deref(),
            merged.image_url.as_deref(),
        );
        if !errors.is_empty() {
            return Err(JournalError::Validation(errors));
        }

        self.entries[index] = merged.clone();
        self.notify(JournalEvent::Updated(merged.clone()));
        self.persist();
        Ok(merged)
    }

    // == Delete ==
    /// Removes an entry and parks it as the single pending soft delete.
    ///
    /// The removal is persisted immediately: the entry is durably gone
    /// even though it remains recoverable in memory until the undo
    /// window closes. If another delete was already pending it is
    /// finalized first (the collapsing transition): its undo window
    /// ends on the spot and subscribers see its `DeleteConfirmed`.
    pub fn delete_entry(&mut self, id: EntryId) -> Result<EntryId> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(JournalError::NotFound(id))?;

        if let Some(previous) = self.pending.take() {
            self.notify(JournalEvent::DeleteConfirmed(previous.entry.id));
        }

        let entry = self.entries.remove(index);
        let expires_at = self.clock.now_millis() + self.undo_window.as_millis() as i64;
        self.pending = Some(PendingDelete {
            entry,
            index,
            expires_at,
        });

        self.notify(JournalEvent::Deleted(id));
        self.persist();
        Ok(id)
    }

    // == Undo ==
    /// Restores the pending soft delete at its recorded index.
    ///
    /// Fails when nothing is pending or the window already elapsed (an
    /// elapsed-but-unfired pending is finalized on the spot). A recorded
    /// index beyond the current list length clamps to the end.
    pub fn undo_delete(&mut self) -> Result<Entry> {
        let Some(pending) = self.pending.take() else {
            return Err(JournalError::NothingToUndo);
        };

        if self.clock.now_millis() >= pending.expires_at {
            self.notify(JournalEvent::DeleteConfirmed(pending.entry.id));
            return Err(JournalError::NothingToUndo);
        }

        let index = pending.index.min(self.entries.len());
        self.entries.insert(index, pending.entry.clone());
        self.notify(JournalEvent::Restored(pending.entry.clone()));
        self.persist();
        Ok(pending.entry)
    }

    // == Confirm Pending ==
    /// Point of no return, driven by the undo timer.
    ///
    /// Clears the pending slot and emits `DeleteConfirmed` if it still
    /// holds `id`; a stale timer that lost the race to an undo or a
    /// collapse is a no-op. Returns whether the confirmation applied.
    pub fn confirm_pending(&mut self, id: EntryId) -> bool {
        match &self.pending {
            Some(pending) if pending.entry.id == id => {
                self.pending = None;
                self.notify(JournalEvent::DeleteConfirmed(id));
                true
            }
            _ => false,
        }
    }

    // == Clear All ==
    /// Empties the list and cancels any pending undo.
    pub fn clear_all(&mut self) {
        self.entries.clear();
        self.pending = None;
        self.notify(JournalEvent::Cleared);
        self.persist();
    }

    // == Set Entries ==
    /// Wholesale replacement, used by load and import.
    ///
    /// Like `clear_all`, silently drops any pending soft delete: restoring
    /// it into an unrelated list could collide with an id the new list
    /// already carries.
    pub fn set_entries(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
        self.pending = None;
        self.bump_last_id();
        self.notify(JournalEvent::Loaded);
        self.persist();
    }

    // == Import / Export ==
    /// Merges an external JSON entry list into the journal.
    ///
    /// Returns the number of entries imported. All-or-nothing: on any
    /// error the list is untouched.
    pub fn import_json(&mut self, raw: &str) -> Result<usize> {
        let (merged, count) = import::merge_candidates(&self.entries, raw)?;
        self.set_entries(merged);
        Ok(count)
    }

    /// The full current list as pretty-printed JSON.
    pub fn export_json(&self) -> Result<String> {
        import::export_pretty(&self.entries)
    }

    // == Load ==
    /// Replaces in-memory state from the storage slot.
    ///
    /// Missing or corrupt data degrades to keeping the current state,
    /// with the failure logged; the store stays usable either way.
    pub fn load(&mut self) {
        match self.storage.load() {
            Ok(entries) => {
                self.entries = entries;
                self.pending = None;
                self.bump_last_id();
                self.notify(JournalEvent::Loaded);
            }
            Err(e) => {
                warn!("failed to load journal, continuing with current state: {e}");
            }
        }
    }

    // == Subscriptions ==
    /// Registers a synchronous observer for every mutation.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriberId
    where
        F: Fn(&JournalEvent) + Send + Sync + 'static,
    {
        let id = self.next_subscriber_id;
        self.next_subscriber_id += 1;
        self.subscribers.push((id, Arc::new(observer)));
        id
    }

    /// Removes a subscriber; unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    // == Internals ==
    /// Next strictly unique id: the creation instant in milliseconds,
    /// forced past the previous id when two entries land in one tick.
    fn next_id(&mut self) -> EntryId {
        self.last_id = self.clock.now_millis().max(self.last_id + 1);
        self.last_id
    }

    fn bump_last_id(&mut self) {
        let max_id = self.entries.iter().map(|e| e.id).max().unwrap_or(0);
        self.last_id = self.last_id.max(max_id);
    }

    /// Notifies a snapshot of the subscriber list, so observers added
    /// or removed mid-notification never perturb the iteration.
    fn notify(&self, event: JournalEvent) {
        debug!(action = event.action(), "journal event");
        let snapshot: Vec<SubscriberFn> = self
            .subscribers
            .iter()
            .map(|(_, f)| Arc::clone(f))
            .collect();
        for observer in snapshot {
            observer(&event);
        }
    }

    /// Persists the current list; failure is logged and surfaced to the
    /// subscriber side channel but in-memory state stays applied.
    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.entries) {
            warn!("failed to persist journal, in-memory state remains authoritative: {e}");
        }
    }
}
