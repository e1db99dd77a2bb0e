//! API Handlers
//!
//! HTTP request handlers for each journal service endpoint. This layer
//! composes the core: it owns the shared store, the search engine, and
//! the undo timer, and wires search-cache invalidation to store events.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tokio::sync::RwLock;

use crate::config::Config;
use crate::error::{JournalError, Result};
use crate::journal::{
    Entry, EntryId, JournalStore, JsonFileStorage, SearchEngine, SystemClock,
};
use crate::models::{
    ClearResponse, CreateEntryRequest, DeleteResponse, EntryListResponse, HealthResponse,
    ImportResponse, ListParams, StatsResponse, UndoResponse, UpdateEntryRequest,
};
use crate::tasks::{spawn_undo_timer, UndoTimer};

// == App State ==
/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared journal store
    pub store: Arc<RwLock<JournalStore>>,
    /// Search engine with its memoized result cache
    pub search: Arc<Mutex<SearchEngine>>,
    /// Handle of the at-most-one live undo timer
    pub undo_timer: Arc<UndoTimer>,
}

impl AppState {
    /// Wraps a store and wires the search cache to its mutations.
    ///
    /// Every store event empties the memoized results; the cache has no
    /// other invalidation signal.
    pub fn new(mut store: JournalStore, search_cache_capacity: usize) -> Self {
        let search = Arc::new(Mutex::new(SearchEngine::new(search_cache_capacity)));

        let cache = Arc::clone(&search);
        store.subscribe(move |_event| {
            let mut engine = match cache.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            engine.clear_cache();
        });

        Self {
            store: Arc::new(RwLock::new(store)),
            search,
            undo_timer: Arc::new(UndoTimer::new()),
        }
    }

    /// Builds production state from configuration: file-backed storage,
    /// system clock, journal loaded from disk.
    pub fn from_config(config: &Config) -> Self {
        let storage = Arc::new(JsonFileStorage::new(&config.data_path));
        let mut store = JournalStore::new(
            storage,
            Arc::new(SystemClock),
            Duration::from_secs(config.undo_window_secs),
        );
        store.load();
        Self::new(store, config.search_cache_capacity)
    }

    fn search_engine(&self) -> Result<std::sync::MutexGuard<'_, SearchEngine>> {
        self.search
            .lock()
            .map_err(|_| JournalError::Internal("search cache lock poisoned".to_string()))
    }
}

/// Handler for POST /entries
///
/// Validates and stores a new entry at the head of the journal.
pub async fn create_entry_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateEntryRequest>,
) -> Result<(StatusCode, Json<Entry>)> {
    let mut store = state.store.write().await;
    let entry = store.add_entry(req.into_draft())?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Handler for GET /entries
///
/// Lists all entries, or the matching ones when `q` is present. Search
/// results flow through the memoized cache.
pub async fn list_entries_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<EntryListResponse>> {
    let entries = {
        let store = state.store.read().await;
        store.entries()
    };

    let results = match params.q.as_deref() {
        Some(query) => state.search_engine()?.search(query, &entries).to_vec(),
        None => entries,
    };

    Ok(Json(EntryListResponse::new(results)))
}

/// Handler for GET /entries/:id
pub async fn get_entry_handler(
    State(state): State<AppState>,
    Path(id): Path<EntryId>,
) -> Result<Json<Entry>> {
    let store = state.store.read().await;
    let entry = store.entry_by_id(id).ok_or(JournalError::NotFound(id))?;

    Ok(Json(entry))
}

/// Handler for PUT /entries/:id
///
/// Merges a partial update into an existing entry.
pub async fn update_entry_handler(
    State(state): State<AppState>,
    Path(id): Path<EntryId>,
    Json(req): Json<UpdateEntryRequest>,
) -> Result<Json<Entry>> {
    let mut store = state.store.write().await;
    let entry = store.update_entry(id, req.into_patch())?;

    Ok(Json(entry))
}

/// Handler for DELETE /entries/:id
///
/// Soft-deletes the entry and (re)arms the undo timer; a previous
/// pending deletion is finalized by the store before the new one starts.
pub async fn delete_entry_handler(
    State(state): State<AppState>,
    Path(id): Path<EntryId>,
) -> Result<Json<DeleteResponse>> {
    let window = {
        let mut store = state.store.write().await;
        store.delete_entry(id)?;
        store.undo_window()
    };

    let handle = spawn_undo_timer(Arc::clone(&state.store), id, window);
    state.undo_timer.rearm(handle);

    Ok(Json(DeleteResponse::new(id, window.as_millis() as u64)))
}

/// Handler for POST /undo
///
/// Restores the pending deletion, if its window is still open.
pub async fn undo_handler(State(state): State<AppState>) -> Result<Json<UndoResponse>> {
    let entry = {
        let mut store = state.store.write().await;
        store.undo_delete()?
    };

    state.undo_timer.cancel();
    Ok(Json(UndoResponse::new(entry)))
}

/// Handler for DELETE /entries
///
/// Empties the journal and cancels any pending undo.
pub async fn clear_entries_handler(State(state): State<AppState>) -> Result<Json<ClearResponse>> {
    let removed = {
        let mut store = state.store.write().await;
        let removed = store.len();
        store.clear_all();
        removed
    };

    state.undo_timer.cancel();
    Ok(Json(ClearResponse::new(removed)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let store = state.store.read().await;
    Json(StatsResponse::from(store.stats()))
}

/// Handler for GET /export
///
/// Returns the full journal as pretty-printed JSON.
pub async fn export_handler(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let store = state.store.read().await;
    let body = store.export_json()?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}

/// Handler for POST /import
///
/// Merges an external entry list into the journal; the body is the same
/// JSON array /export produces.
pub async fn import_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ImportResponse>> {
    let mut store = state.store.write().await;
    let imported = store.import_json(&body)?;

    Ok(Json(ImportResponse::new(imported)))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
