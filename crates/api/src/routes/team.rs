use axum::routing::post;
use axum::Router;

use crate::handlers::team;
use crate::state::AppState;

/// Routes mounted at `/api/team`. Update and delete take the record id
/// from the `?id=` query parameter.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        post(team::create)
            .get(team::list)
            .put(team::update)
            .delete(team::delete),
    )
}
