use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// Boards Router Module
///
/// Defines the CRUD endpoints for the single `Board` entity. All routes are
/// open: the application carries no authentication layer, so access control
/// is out of scope here.
pub fn board_routes() -> Router<AppState> {
    Router::new()
        // GET /boards
        // Lists all posts, newest first (the Index action).
        .route("/boards", get(handlers::list_boards))
        // POST /boards
        // Submits a new post. Payload validation happens in the handler
        // before the repository insert.
        .route("/boards", post(handlers::create_board))
        // GET /boards/{id}
        // Retrieves the detailed view of a single post.
        .route("/boards/{id}", get(handlers::get_board))
        // PUT /boards/{id}
        // Edits a post; the repository stamps updated_at on success.
        .route("/boards/{id}", put(handlers::update_board))
        // DELETE /boards/{id}
        // Permanently removes a post.
        .route("/boards/{id}", delete(handlers::delete_board))
}
