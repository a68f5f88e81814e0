use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::AppState;
use domain::health as HealthApi;

/// GET per-dependency health for the dashboard.
///
/// Always responds 200; the backend, database and LLM dependencies report
/// healthy/unhealthy independently in the body.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health of the backend, database and LLM dependencies")
    )
)]
pub async fn health_check(State(app_state): State<AppState>) -> impl IntoResponse {
    let status = HealthApi::check(app_state.db_conn_ref(), &app_state.config).await;

    Json(status)
}
