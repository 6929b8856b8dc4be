use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// GET /health
///
/// Round-trips the database so deploy probes catch a broken pool early.
pub async fn health_check(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    hub_db::health_check(&state.pool).await?;

    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    }))
}
