use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::controller::ApiResponse;
use crate::params::action_item::UpdateParams;
use crate::{AppState, Error};
use domain::{action_item as ActionItemApi, Id};
use log::*;

/// PUT apply a partial update to an ActionItem. Only fields present in the
/// request body are touched; `owner` and `dueDate` sent as `null` clear the
/// stored value.
#[utoipa::path(
    put,
    path = "/action-items/{id}",
    params(
        ("id" = String, Path, description = "Id of the action item to update")
    ),
    request_body = UpdateParams,
    responses(
        (status = 200, description = "Successfully updated the ActionItem", body = [domain::action_items::Model]),
        (status = 400, description = "Unparseable due date"),
        (status = 404, description = "ActionItem not found"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
    Json(params): Json<UpdateParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT Update ActionItem with id: {id}");

    let update = params.try_into_update()?;
    let action_item = ActionItemApi::update(app_state.db_conn_ref(), id, update).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), action_item)))
}

/// DELETE an ActionItem specified by its primary key.
#[utoipa::path(
    delete,
    path = "/action-items/{id}",
    params(
        ("id" = String, Path, description = "Id of the action item to delete")
    ),
    responses(
        (status = 204, description = "Successfully deleted the ActionItem"),
        (status = 404, description = "ActionItem not found"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn delete(
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("DELETE ActionItem by id: {id}");

    ActionItemApi::delete_by_id(app_state.db_conn_ref(), id).await?;

    Ok(StatusCode::NO_CONTENT)
}
