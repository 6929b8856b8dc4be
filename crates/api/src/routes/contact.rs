use axum::routing::post;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/api/contact`. Create is called by the public
/// contact form; the rest serve the admin table view.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        post(contact::create)
            .get(contact::list)
            .put(contact::update)
            .delete(contact::delete),
    )
}
