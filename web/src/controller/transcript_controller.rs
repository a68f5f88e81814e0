use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::controller::ApiResponse;
use crate::params::transcript::CreateParams;
use crate::{AppState, Error};
use domain::transcript as TranscriptApi;
use log::*;

/// POST ingest a new Transcript: extract its action items with the
/// configured model and persist everything.
#[utoipa::path(
    post,
    path = "/transcripts",
    request_body = CreateParams,
    responses(
        (status = 200, description = "Successfully ingested the Transcript", body = [domain::TranscriptWithItems]),
        (status = 400, description = "Transcript content is missing, not a string, or empty"),
        (status = 500, description = "Missing API credential, unusable model reply, or database failure"),
        (status = 502, description = "Generation service unreachable")
    )
)]
pub async fn create(
    State(app_state): State<AppState>,
    Json(params): Json<CreateParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a new Transcript");

    let content = params.content()?.to_string();
    let transcript =
        TranscriptApi::create(app_state.db_conn_ref(), &app_state.config, content).await?;

    Ok(Json(ApiResponse::new(
        StatusCode::CREATED.into(),
        transcript,
    )))
}

/// GET the most recently submitted Transcripts with their action items.
#[utoipa::path(
    get,
    path = "/transcripts",
    responses(
        (status = 200, description = "Successfully retrieved the latest Transcripts", body = [domain::TranscriptWithItems]),
        (status = 500, description = "Database failure")
    )
)]
pub async fn index(State(app_state): State<AppState>) -> Result<impl IntoResponse, Error> {
    debug!("GET latest Transcripts");

    let transcripts = TranscriptApi::find_latest(
        app_state.db_conn_ref(),
        app_state.config.transcript_history_limit,
    )
    .await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), transcripts)))
}
