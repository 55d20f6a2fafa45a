//! Users: identity-provider mirrors kept by the controller.

use chrono::{DateTime, Utc};

use stratus_core::Guid;
use stratus_core::documents::{CreateUserRequest, Metadata, UserEntity, UserResponse};

use crate::config::Config;
use crate::error::Result;
use crate::transport::Transport;

/// A user known to the controller. Immutable once constructed from a
/// response.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub guid: Guid,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
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

impl User {
    pub fn from_response(response: UserResponse) -> Self {
        Self {
            guid: response.metadata.guid.clone(),
            url: response.metadata.url.clone(),
            created_at: response.metadata.created_at_or_zero(),
            updated_at: response.metadata.updated_at_or_zero(),
            admin: response.entity.admin,
            active: response.entity.active,
            default_space_guid: response.entity.default_space_guid,
            spaces_url: response.entity.spaces_url,
            organizations_url: response.entity.organizations_url,
            managed_organizations_url: response.entity.managed_organizations_url,
            billing_managed_organizations_url: response.entity.billing_managed_organizations_url,
            audited_organizations_url: response.entity.audited_organizations_url,
            managed_spaces_url: response.entity.managed_spaces_url,
            audited_spaces_url: response.entity.audited_spaces_url,
        }
    }

    pub fn to_response(&self) -> UserResponse {
        UserResponse {
            metadata: Metadata {
                guid: self.guid.clone(),
                url: self.url.clone(),
                created_at: Some(self.created_at),
                updated_at: Some(self.updated_at),
            },
            entity: UserEntity {
                admin: self.admin,
                active: self.active,
                default_space_guid: self.default_space_guid.clone(),
                spaces_url: self.spaces_url.clone(),
                organizations_url: self.organizations_url.clone(),
                managed_organizations_url: self.managed_organizations_url.clone(),
                billing_managed_organizations_url: self.billing_managed_organizations_url.clone(),
                audited_organizations_url: self.audited_organizations_url.clone(),
                managed_spaces_url: self.managed_spaces_url.clone(),
                audited_spaces_url: self.audited_spaces_url.clone(),
            },
        }
    }
}

pub struct UsersService {
    transport: Transport,
}

impl UsersService {
    pub fn new(config: Config) -> Self {
        Self {
            transport: Transport::new(config),
        }
    }

    pub(crate) fn with_transport(transport: Transport) -> Self {
        Self { transport }
    }

    /// Create a user. The GUID is caller-supplied (it originates in the
    /// identity provider).
    pub async fn create(&self, guid: &Guid, token: &str) -> Result<User> {
        let request = CreateUserRequest {
            guid: guid.clone(),
            default_space_guid: Guid::default(),
        };
        let response: UserResponse = self.transport.post("/v2/users", token, &request).await?;
        Ok(User::from_response(response))
    }

    pub async fn get(&self, guid: &Guid, token: &str) -> Result<User> {
        let response: UserResponse = self
            .transport
            .get(&format!("/v2/users/{guid}"), token)
            .await?;
        Ok(User::from_response(response))
    }
}
