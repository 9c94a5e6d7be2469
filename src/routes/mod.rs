/// Router Module Index
///
/// Organizes the application's routing logic. The route table follows the
/// conventional `{controller}/{action}/{id?}` default: with no path segments
/// the request resolves to the board listing action, and the `/boards/*`
/// resources carry the remaining CRUD actions.

/// CRUD routes for the `boards` resource, plus the `/` default entry point.
pub mod boards;

use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// routes
///
/// Assembles the full application route table: the liveness probe, the
/// default entry point, and the boards resource.
pub fn routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // A simple endpoint used for monitoring and load balancer checks.
        // Returns "ok" immediately to verify the service is responsive.
        .route("/health", get(|| async { "ok" }))
        // GET /
        // The default route with no path segments resolves to the board
        // listing action, mirroring the {controller=Board}/{action=Index}
        // convention.
        .route("/", get(handlers::list_boards))
        .merge(boards::board_routes())
}
