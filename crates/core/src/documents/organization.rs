use serde::{Deserialize, Serialize};

use super::metadata::Resource;
use crate::guid::Guid;

/// The `entity` object of an organization envelope.
///
/// Every field defaults on absence, preserving the API's lenient decoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationEntity {
    pub name: String,
    pub billing_enabled: bool,
    pub status: String,
    pub quota_definition_guid: Guid,
    pub quota_definition_url: String,
    pub spaces_url: String,
    pub domains_url: String,
    pub private_domains_url: String,
    pub users_url: String,
    pub managers_url: String,
    pub billing_managers_url: String,
    pub auditors_url: String,
    pub app_events_url: String,
    pub space_quota_definitions_url: String,
}

pub type OrganizationResponse = Resource<OrganizationEntity>;

/// Body of `POST /v2/organizations`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateOrganizationRequest {
    pub name: String,
}
