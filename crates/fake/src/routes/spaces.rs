use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::Utc;

use stratus_core::documents::{CreateSpaceRequest, UserResponse};
use stratus_core::{Guid, Page, PageQuery};

use crate::ControllerState;
use crate::records::{SpaceRecord, push_unique};
use crate::routes::common;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create))
        .route("/:guid", get(show))
        .route("/:guid/developers", get(list_developers))
        .route("/:guid/developers/:user_guid", put(associate_developer))
}

async fn create(
    Extension(state): Extension<ControllerState>,
    Json(body): Json<CreateSpaceRequest>,
) -> Response {
    if !state.organizations.contains(&body.organization_guid) {
        return common::not_found("organization");
    }

    let now = Utc::now();
    let record = SpaceRecord::new(
        state.guids.next("space"),
        body.name,
        body.organization_guid,
        now,
    );
    let record = state.spaces.add(record);

    tracing::info!(guid = %record.guid, organization = %record.organization_guid, "space created");
    (StatusCode::CREATED, Json(record.to_response())).into_response()
}

async fn show(
    Extension(state): Extension<ControllerState>,
    Path(guid): Path<String>,
) -> Response {
    match state.spaces.get(&Guid::new(guid)) {
        Some(space) => (StatusCode::OK, Json(space.to_response())).into_response(),
        None => common::not_found("space"),
    }
}

async fn list_developers(
    Extension(state): Extension<ControllerState>,
    Path(guid): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    let guid = Guid::new(guid);
    let Some(space) = state.spaces.get(&guid) else {
        return common::not_found("space");
    };

    let base_path = format!("/v2/spaces/{guid}/developers");
    let users: Vec<UserResponse> = space
        .developers
        .iter()
        .filter_map(|user_guid| state.users.get(user_guid))
        .map(|user| user.to_response())
        .collect();

    (StatusCode::OK, Json(Page::build(&users, &base_path, query))).into_response()
}

async fn associate_developer(
    Extension(state): Extension<ControllerState>,
    Path((guid, user_guid)): Path<(String, String)>,
) -> Response {
    let guid = Guid::new(guid);
    let user_guid = Guid::new(user_guid);

    if !state.users.contains(&user_guid) {
        return common::not_found("user");
    }

    match state
        .spaces
        .update(&guid, |space| push_unique(&mut space.developers, user_guid))
    {
        Some(space) => (StatusCode::CREATED, Json(space.to_response())).into_response(),
        None => common::not_found("space"),
    }
}
