use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;

use stratus_core::Guid;
use stratus_core::documents::CreateUserRequest;

use crate::ControllerState;
use crate::records::UserRecord;
use crate::routes::common;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create))
        .route("/:guid", get(show))
}

async fn create(
    Extension(state): Extension<ControllerState>,
    Json(body): Json<CreateUserRequest>,
) -> Response {
    // User GUIDs normally arrive from the identity provider; mint one only
    // when the caller left it blank.
    let guid = if body.guid.is_empty() {
        state.guids.next("user")
    } else {
        body.guid
    };

    let now = Utc::now();
    let record = state
        .users
        .add(UserRecord::new(guid, body.default_space_guid, now));

    tracing::info!(guid = %record.guid, "user created");
    (StatusCode::CREATED, Json(record.to_response())).into_response()
}

async fn show(
    Extension(state): Extension<ControllerState>,
    Path(guid): Path<String>,
) -> Response {
    match state.users.get(&Guid::new(guid)) {
        Some(user) => (StatusCode::OK, Json(user.to_response())).into_response(),
        None => common::not_found("user"),
    }
}
