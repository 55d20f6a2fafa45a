use serde::{Deserialize, Serialize};

use super::metadata::Resource;
use crate::guid::Guid;

/// The `entity` object of a space envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpaceEntity {
    pub name: String,
    pub organization_guid: Guid,
    pub space_quota_definition_guid: Guid,
    pub organization_url: String,
    pub developers_url: String,
    pub managers_url: String,
    pub auditors_url: String,
    pub apps_url: String,
    pub routes_url: String,
    pub domains_url: String,
    pub service_instances_url: String,
    pub app_events_url: String,
    pub events_url: String,
    pub security_groups_url: String,
}

pub type SpaceResponse = Resource<SpaceEntity>;

/// Body of `POST /v2/spaces`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateSpaceRequest {
    pub name: String,
    pub organization_guid: Guid,
}
