//! HTTP routes for the fake controller (one module per resource area).

use axum::{Extension, Router};

use crate::ControllerState;

pub mod applications;
pub mod organizations;
pub mod spaces;
pub mod users;

mod common;

pub fn router(state: ControllerState) -> Router {
    Router::new()
        .nest("/v2/organizations", organizations::router())
        .nest("/v2/spaces", spaces::router())
        .nest("/v2/users", users::router())
        .nest("/v2/apps", applications::router())
        .layer(Extension(state))
}
