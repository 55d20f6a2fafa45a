//! `stratus-fake` — in-process fake cloud controller.
//!
//! Serves the same v2 surface the client speaks, backed by explicit
//! in-memory stores. State is injected (no process-wide registries), so
//! tests can run controllers side by side and pin down GUID generation.

use std::sync::Arc;

pub mod records;
pub mod routes;
pub mod server;
pub mod store;

pub use server::FakeCloudController;
pub use store::{GuidSource, SequenceGuidSource, Store, UuidGuidSource};

use records::{ApplicationRecord, OrganizationRecord, SpaceRecord, UserRecord};

/// Shared controller state: one store per resource plus the identity source.
#[derive(Clone)]
pub struct ControllerState {
    pub organizations: Arc<Store<OrganizationRecord>>,
    pub spaces: Arc<Store<SpaceRecord>>,
    pub users: Arc<Store<UserRecord>>,
    pub applications: Arc<Store<ApplicationRecord>>,
    pub guids: Arc<dyn GuidSource>,
}

impl ControllerState {
    pub fn new(guids: Arc<dyn GuidSource>) -> Self {
        Self {
            organizations: Arc::new(Store::new()),
            spaces: Arc::new(Store::new()),
            users: Arc::new(Store::new()),
            applications: Arc::new(Store::new()),
            guids,
        }
    }
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::new(Arc::new(UuidGuidSource))
    }
}

/// Build the full controller router over the given state.
pub fn build_router(state: ControllerState) -> axum::Router {
    routes::router(state)
}
