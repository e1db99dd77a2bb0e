//! API Module
//!
//! HTTP handlers and routing for the journal service REST API.
//!
//! # Endpoints
//! - `POST /entries` - Create an entry
//! - `GET /entries[?q=]` - List or search entries
//! - `DELETE /entries` - Clear the journal
//! - `GET /entries/:id` / `PUT /entries/:id` / `DELETE /entries/:id`
//! - `POST /undo` - Restore the pending deletion
//! - `GET /stats`, `GET /export`, `POST /import`, `GET /health`

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
