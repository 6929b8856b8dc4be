pub mod carousel;
pub mod contact;
pub mod health;
pub mod post;
pub mod team;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /carousel          POST create, GET list, PUT ?id update, DELETE ?id delete
/// /post              POST create, GET list, PUT ?id update, DELETE ?id delete
/// /team              POST create, GET list, PUT ?id update, DELETE ?id delete
/// /contact           POST create, GET list, PUT ?id update, DELETE ?id delete
///
/// /user/signup       register admin account (public)
/// /user/login        authenticate, set session cookie (public)
/// /user/logout       clear session cookie
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/carousel", carousel::router())
        .nest("/post", post::router())
        .nest("/team", team::router())
        .nest("/contact", contact::router())
        .nest("/user", user::router())
}
