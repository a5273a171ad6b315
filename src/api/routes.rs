//! API route configuration.

use crate::api::handlers::{delete_handler, redirect_handler, retrieve_handler, save_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All alias routes.
///
/// # Endpoints
///
/// - `POST   /url`           - Save a URL, optionally under a chosen alias
/// - `POST   /get-url`       - Resolve an alias to its URL as JSON
/// - `GET    /{alias}`       - Redirect to the URL stored under an alias
/// - `DELETE /url/{alias}`   - Delete an alias
///
/// `url` and `get-url` are static segments, so those two names can be
/// stored as aliases but never reached through the redirect route.
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_handler))
        .route("/get-url", post(retrieve_handler))
        .route("/url/{alias}", delete(delete_handler))
        .route("/{alias}", get(redirect_handler))
}
