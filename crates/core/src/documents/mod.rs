//! Wire document schema for the v2 REST API.
//!
//! Every resource travels inside the standard envelope
//! `{ "metadata": {...}, "entity": {...} }`; list endpoints return the
//! serialized form of [`crate::page::Page`] over such envelopes.

mod application;
mod metadata;
mod organization;
mod space;
mod user;

pub use application::{
    ApplicationEntity, ApplicationResponse, ApplicationSummary, CreateApplicationRequest,
};
pub use metadata::{Metadata, Resource};
pub use organization::{CreateOrganizationRequest, OrganizationEntity, OrganizationResponse};
pub use space::{CreateSpaceRequest, SpaceEntity, SpaceResponse};
pub use user::{CreateUserRequest, UserEntity, UserResponse};
