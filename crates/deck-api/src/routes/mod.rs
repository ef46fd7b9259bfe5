pub mod cards;

use axum::Router;

pub fn api_routes() -> Router {
    Router::new().merge(cards::routes())
}
