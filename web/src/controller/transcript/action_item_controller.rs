use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::controller::ApiResponse;
use crate::params::action_item::CreateParams;
use crate::{AppState, Error};
use domain::{action_item as ActionItemApi, Id};
use log::*;

/// POST create an ActionItem by hand under an existing Transcript.
///
/// The transcript id is not verified up front; an unknown id fails the
/// foreign key constraint and surfaces as a persistence error.
#[utoipa::path(
    post,
    path = "/transcripts/{id}/items",
    params(
        ("id" = String, Path, description = "Transcript id to attach the new item to")
    ),
    request_body = CreateParams,
    responses(
        (status = 200, description = "Successfully created a new ActionItem", body = [domain::action_items::Model]),
        (status = 400, description = "Task is missing or empty, or the due date is unparseable"),
        (status = 500, description = "Unknown transcript id or database failure")
    )
)]
pub async fn create(
    State(app_state): State<AppState>,
    Path(transcript_id): Path<Id>,
    Json(params): Json<CreateParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a new ActionItem under Transcript: {transcript_id}");

    let new_item = params.try_into_new_item()?;
    let action_item =
        ActionItemApi::create(app_state.db_conn_ref(), transcript_id, new_item).await?;

    Ok(Json(ApiResponse::new(
        StatusCode::CREATED.into(),
        action_item,
    )))
}
