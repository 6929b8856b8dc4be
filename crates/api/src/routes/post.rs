use axum::routing::post;
use axum::Router;

use crate::handlers::post as post_handlers;
use crate::state::AppState;

/// Routes mounted at `/api/post`. Update and delete take the record id
/// from the `?id=` query parameter.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        post(post_handlers::create)
            .get(post_handlers::list)
            .put(post_handlers::update)
            .delete(post_handlers::delete),
    )
}
