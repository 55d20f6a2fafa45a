use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;

use stratus_core::Guid;
use stratus_core::documents::CreateApplicationRequest;

use crate::ControllerState;
use crate::records::ApplicationRecord;
use crate::routes::common;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create))
        .route("/:guid", get(show))
        .route("/:guid/summary", get(summary))
}

async fn create(
    Extension(state): Extension<ControllerState>,
    Json(body): Json<CreateApplicationRequest>,
) -> Response {
    if !state.spaces.contains(&body.space_guid) {
        return common::not_found("space");
    }

    let now = Utc::now();
    let record = ApplicationRecord::new(
        state.guids.next("app"),
        body.name,
        body.space_guid,
        body.diego,
        now,
    );
    let record = state.applications.add(record);

    tracing::info!(guid = %record.guid, space = %record.space_guid, "application created");
    (StatusCode::CREATED, Json(record.to_response())).into_response()
}

async fn show(
    Extension(state): Extension<ControllerState>,
    Path(guid): Path<String>,
) -> Response {
    match state.applications.get(&Guid::new(guid)) {
        Some(app) => (StatusCode::OK, Json(app.to_response())).into_response(),
        None => common::not_found("application"),
    }
}

async fn summary(
    Extension(state): Extension<ControllerState>,
    Path(guid): Path<String>,
) -> Response {
    match state.applications.get(&Guid::new(guid)) {
        Some(app) => (StatusCode::OK, Json(app.to_summary())).into_response(),
        None => common::not_found("application"),
    }
}
