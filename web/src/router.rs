use crate::{controller::health_check_controller, params, AppState};
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::services::ServeDir;

use crate::controller::{action_item_controller, transcript, transcript_controller};

use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Action Tracker API"
    ),
    paths(
        transcript_controller::create,
        transcript_controller::index,
        transcript::action_item_controller::create,
        action_item_controller::update,
        action_item_controller::delete,
        health_check_controller::health_check,
    ),
    components(
        schemas(
            domain::transcripts::Model,
            domain::action_items::Model,
            domain::TranscriptWithItems,
            params::transcript::CreateParams,
            params::action_item::CreateParams,
            params::action_item::UpdateParams,
        )
    ),
    tags(
        (name = "action_tracker", description = "Meeting transcript action-item extraction API")
    )
)]
struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(transcript_routes(app_state.clone()))
        .merge(transcript_action_item_routes(app_state.clone()))
        .merge(action_item_routes(app_state.clone()))
        .merge(health_routes(app_state))
        .merge(RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi()).path("/rapidoc"))
        .fallback_service(static_routes())
}

fn transcript_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/transcripts", post(transcript_controller::create))
        .route("/transcripts", get(transcript_controller::index))
        .with_state(app_state)
}

fn transcript_action_item_routes(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/transcripts/{id}/items",
            post(transcript::action_item_controller::create),
        )
        .with_state(app_state)
}

fn action_item_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/action-items/{id}", put(action_item_controller::update))
        .route("/action-items/{id}", delete(action_item_controller::delete))
        .with_state(app_state)
}

fn health_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check_controller::health_check))
        .with_state(app_state)
}

// This will serve static files that we can use as a "fallback" for anything
// outside the API surface
pub fn static_routes() -> ServeDir {
    ServeDir::new("./")
}
