use serde::{Deserialize, Serialize};

use super::metadata::Resource;
use crate::guid::Guid;

/// The `entity` object of an application envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationEntity {
    pub name: String,
    pub space_guid: Guid,
    pub diego: bool,
}

pub type ApplicationResponse = Resource<ApplicationEntity>;

/// Flat document returned by `GET /v2/apps/:guid/summary` (no envelope).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationSummary {
    pub guid: Guid,
    pub name: String,
    pub space_guid: Guid,
}

/// Body of `POST /v2/apps`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateApplicationRequest {
    pub name: String,
    pub space_guid: Guid,
    pub diego: bool,
}
