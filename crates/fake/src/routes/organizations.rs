use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::Utc;

use stratus_core::documents::{CreateOrganizationRequest, UserResponse};
use stratus_core::{Guid, Page, PageQuery};

use crate::ControllerState;
use crate::records::{OrganizationRecord, push_unique};
use crate::routes::common;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create))
        .route("/:guid", get(show))
        .route("/:guid/users", get(list_users))
        .route("/:guid/users/:user_guid", put(associate_user))
        .route("/:guid/billing_managers", get(list_billing_managers))
        .route("/:guid/billing_managers/:user_guid", put(associate_billing_manager))
        .route("/:guid/auditors", get(list_auditors))
        .route("/:guid/auditors/:user_guid", put(associate_auditor))
        .route("/:guid/managers", get(list_managers))
        .route("/:guid/managers/:user_guid", put(associate_manager))
}

async fn create(
    Extension(state): Extension<ControllerState>,
    Json(body): Json<CreateOrganizationRequest>,
) -> Response {
    let now = Utc::now();
    let record = OrganizationRecord::new(state.guids.next("org"), body.name, now);
    let record = state.organizations.add(record);

    tracing::info!(guid = %record.guid, "organization created");
    (StatusCode::CREATED, Json(record.to_response())).into_response()
}

async fn show(
    Extension(state): Extension<ControllerState>,
    Path(guid): Path<String>,
) -> Response {
    match state.organizations.get(&Guid::new(guid)) {
        Some(org) => (StatusCode::OK, Json(org.to_response())).into_response(),
        None => common::not_found("organization"),
    }
}

async fn list_users(
    Extension(state): Extension<ControllerState>,
    Path(guid): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    list_role(&state, &guid, "users", query, |org| org.users.clone())
}

async fn list_billing_managers(
    Extension(state): Extension<ControllerState>,
    Path(guid): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    list_role(&state, &guid, "billing_managers", query, |org| {
        org.billing_managers.clone()
    })
}

async fn list_auditors(
    Extension(state): Extension<ControllerState>,
    Path(guid): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    list_role(&state, &guid, "auditors", query, |org| org.auditors.clone())
}

async fn list_managers(
    Extension(state): Extension<ControllerState>,
    Path(guid): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    list_role(&state, &guid, "managers", query, |org| org.managers.clone())
}

async fn associate_user(
    Extension(state): Extension<ControllerState>,
    Path((guid, user_guid)): Path<(String, String)>,
) -> Response {
    associate(&state, &guid, &user_guid, |org, user| {
        push_unique(&mut org.users, user)
    })
}

async fn associate_billing_manager(
    Extension(state): Extension<ControllerState>,
    Path((guid, user_guid)): Path<(String, String)>,
) -> Response {
    associate(&state, &guid, &user_guid, |org, user| {
        push_unique(&mut org.billing_managers, user)
    })
}

async fn associate_auditor(
    Extension(state): Extension<ControllerState>,
    Path((guid, user_guid)): Path<(String, String)>,
) -> Response {
    associate(&state, &guid, &user_guid, |org, user| {
        push_unique(&mut org.auditors, user)
    })
}

async fn associate_manager(
    Extension(state): Extension<ControllerState>,
    Path((guid, user_guid)): Path<(String, String)>,
) -> Response {
    associate(&state, &guid, &user_guid, |org, user| {
        push_unique(&mut org.managers, user)
    })
}

/// One page of an organization's member role, 404 when the organization is
/// unknown (no page is constructed in that case).
fn list_role(
    state: &ControllerState,
    guid: &str,
    segment: &str,
    query: PageQuery,
    members: impl FnOnce(&OrganizationRecord) -> Vec<Guid>,
) -> Response {
    let guid = Guid::new(guid);
    let Some(org) = state.organizations.get(&guid) else {
        return common::not_found("organization");
    };

    let base_path = format!("/v2/organizations/{guid}/{segment}");
    let users: Vec<UserResponse> = members(&org)
        .iter()
        .filter_map(|user_guid| state.users.get(user_guid))
        .map(|user| user.to_response())
        .collect();

    (StatusCode::OK, Json(Page::build(&users, &base_path, query))).into_response()
}

fn associate(
    state: &ControllerState,
    guid: &str,
    user_guid: &str,
    apply: impl FnOnce(&mut OrganizationRecord, Guid),
) -> Response {
    let guid = Guid::new(guid);
    let user_guid = Guid::new(user_guid);

    if !state.users.contains(&user_guid) {
        return common::not_found("user");
    }

    match state.organizations.update(&guid, |org| apply(org, user_guid)) {
        Some(org) => (StatusCode::CREATED, Json(org.to_response())).into_response(),
        None => common::not_found("organization"),
    }
}
