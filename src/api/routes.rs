//! API Routes
//!
//! Configures the Axum router with all journal service endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_entries_handler, create_entry_handler, delete_entry_handler, export_handler,
    get_entry_handler, health_handler, import_handler, list_entries_handler, stats_handler,
    undo_handler, update_entry_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /entries` - Create an entry
/// - `GET /entries[?q=]` - List or search entries
/// - `DELETE /entries` - Clear the journal
/// - `GET /entries/:id` - Fetch one entry
/// - `PUT /entries/:id` - Update an entry
/// - `DELETE /entries/:id` - Soft-delete an entry (undoable)
/// - `POST /undo` - Restore the pending deletion
/// - `GET /stats` - Entry counts (total/today/week)
/// - `GET /export` - Full journal as pretty JSON
/// - `POST /import` - Merge an external entry list
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route(
            "/entries",
            post(create_entry_handler)
                .get(list_entries_handler)
                .delete(clear_entries_handler),
        )
        .route(
            "/entries/:id",
            get(get_entry_handler)
                .put(update_entry_handler)
                .delete(delete_entry_handler),
        )
        .route("/undo", post(undo_handler))
        .route("/stats", get(stats_handler))
        .route("/export", get(export_handler))
        .route("/import", post(import_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::{JournalStore, MemoryStorage, SystemClock};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use std::time::Duration;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let store = JournalStore::new(
            Arc::new(MemoryStorage::new()),
            Arc::new(SystemClock),
            Duration::from_secs(60),
        );
        create_router(AppState::new(store, 8))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/nonexistent")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_undo_without_pending_is_conflict() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/undo")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
