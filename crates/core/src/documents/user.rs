use serde::{Deserialize, Serialize};

use super::metadata::Resource;
use crate::guid::Guid;

/// The `entity` object of a user envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserEntity {
    pub admin: bool,
    pub active: bool,
    pub default_space_guid: Guid,
    pub spaces_url: String,
    pub organizations_url: String,
    pub managed_organizations_url: String,
    pub billing_managed_organizations_url: String,
    pub audited_organizations_url: String,
    pub managed_spaces_url: String,
    pub audited_spaces_url: String,
}

pub type UserResponse = Resource<UserEntity>;

/// Body of `POST /v2/users`.
///
/// The GUID is caller-supplied: user identities originate in the identity
/// provider and the controller only mirrors them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    pub guid: Guid,
    pub default_space_guid: Guid,
}
