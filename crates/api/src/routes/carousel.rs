use axum::routing::post;
use axum::Router;

use crate::handlers::carousel;
use crate::state::AppState;

/// Routes mounted at `/api/carousel`. Update and delete take the record id
/// from the `?id=` query parameter.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        post(carousel::create)
            .get(carousel::list)
            .put(carousel::update)
            .delete(carousel::delete),
    )
}
