pub mod routes;

use axum::Router;

/// JSON routes describing the card definitions, ready to merge into the site router.
pub fn api_router() -> Router {
    Router::new().merge(routes::api_routes())
}
