//! Organizations: creation, lookup, and member-role listings.

use chrono::{DateTime, Utc};

use stratus_core::documents::{
    CreateOrganizationRequest, Metadata, OrganizationEntity, OrganizationResponse, UserResponse,
};
use stratus_core::{Guid, Page, PageQuery};

use crate::config::Config;
use crate::error::Result;
use crate::transport::Transport;
use crate::users::User;

/// An organization on the platform. Immutable once constructed from a
/// response.
#[derive(Debug, Clone, PartialEq)]
pub struct Organization {
    pub guid: Guid,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
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

impl Organization {
    pub fn from_response(response: OrganizationResponse) -> Self {
        Self {
            guid: response.metadata.guid.clone(),
            url: response.metadata.url.clone(),
            created_at: response.metadata.created_at_or_zero(),
            updated_at: response.metadata.updated_at_or_zero(),
            name: response.entity.name,
            billing_enabled: response.entity.billing_enabled,
            status: response.entity.status,
            quota_definition_guid: response.entity.quota_definition_guid,
            quota_definition_url: response.entity.quota_definition_url,
            spaces_url: response.entity.spaces_url,
            domains_url: response.entity.domains_url,
            private_domains_url: response.entity.private_domains_url,
            users_url: response.entity.users_url,
            managers_url: response.entity.managers_url,
            billing_managers_url: response.entity.billing_managers_url,
            auditors_url: response.entity.auditors_url,
            app_events_url: response.entity.app_events_url,
            space_quota_definitions_url: response.entity.space_quota_definitions_url,
        }
    }

    pub fn to_response(&self) -> OrganizationResponse {
        OrganizationResponse {
            metadata: Metadata {
                guid: self.guid.clone(),
                url: self.url.clone(),
                created_at: Some(self.created_at),
                updated_at: Some(self.updated_at),
            },
            entity: OrganizationEntity {
                name: self.name.clone(),
                billing_enabled: self.billing_enabled,
                status: self.status.clone(),
                quota_definition_guid: self.quota_definition_guid.clone(),
                quota_definition_url: self.quota_definition_url.clone(),
                spaces_url: self.spaces_url.clone(),
                domains_url: self.domains_url.clone(),
                private_domains_url: self.private_domains_url.clone(),
                users_url: self.users_url.clone(),
                managers_url: self.managers_url.clone(),
                billing_managers_url: self.billing_managers_url.clone(),
                auditors_url: self.auditors_url.clone(),
                app_events_url: self.app_events_url.clone(),
                space_quota_definitions_url: self.space_quota_definitions_url.clone(),
            },
        }
    }
}

pub struct OrganizationsService {
    transport: Transport,
}

impl OrganizationsService {
    pub fn new(config: Config) -> Self {
        Self {
            transport: Transport::new(config),
        }
    }

    pub(crate) fn with_transport(transport: Transport) -> Self {
        Self { transport }
    }

    pub async fn create(&self, name: &str, token: &str) -> Result<Organization> {
        let request = CreateOrganizationRequest {
            name: name.to_string(),
        };
        let response: OrganizationResponse = self
            .transport
            .post("/v2/organizations", token, &request)
            .await?;
        Ok(Organization::from_response(response))
    }

    pub async fn get(&self, guid: &Guid, token: &str) -> Result<Organization> {
        let response: OrganizationResponse = self
            .transport
            .get(&format!("/v2/organizations/{guid}"), token)
            .await?;
        Ok(Organization::from_response(response))
    }

    pub async fn list_users(
        &self,
        guid: &Guid,
        token: &str,
        query: PageQuery,
    ) -> Result<Page<User>> {
        self.list_role(guid, "users", token, query).await
    }

    pub async fn list_billing_managers(
        &self,
        guid: &Guid,
        token: &str,
        query: PageQuery,
    ) -> Result<Page<User>> {
        self.list_role(guid, "billing_managers", token, query).await
    }

    pub async fn list_auditors(
        &self,
        guid: &Guid,
        token: &str,
        query: PageQuery,
    ) -> Result<Page<User>> {
        self.list_role(guid, "auditors", token, query).await
    }

    pub async fn list_managers(
        &self,
        guid: &Guid,
        token: &str,
        query: PageQuery,
    ) -> Result<Page<User>> {
        self.list_role(guid, "managers", token, query).await
    }

    pub async fn associate_user(&self, guid: &Guid, user_guid: &Guid, token: &str) -> Result<()> {
        self.associate(guid, "users", user_guid, token).await
    }

    pub async fn associate_billing_manager(
        &self,
        guid: &Guid,
        user_guid: &Guid,
        token: &str,
    ) -> Result<()> {
        self.associate(guid, "billing_managers", user_guid, token).await
    }

    pub async fn associate_auditor(
        &self,
        guid: &Guid,
        user_guid: &Guid,
        token: &str,
    ) -> Result<()> {
        self.associate(guid, "auditors", user_guid, token).await
    }

    pub async fn associate_manager(
        &self,
        guid: &Guid,
        user_guid: &Guid,
        token: &str,
    ) -> Result<()> {
        self.associate(guid, "managers", user_guid, token).await
    }

    async fn list_role(
        &self,
        guid: &Guid,
        role: &str,
        token: &str,
        query: PageQuery,
    ) -> Result<Page<User>> {
        let path = format!(
            "/v2/organizations/{guid}/{role}?page={}&results-per-page={}",
            query.page, query.per_page
        );
        let page: Page<UserResponse> = self.transport.get(&path, token).await?;
        Ok(page.map(User::from_response))
    }

    async fn associate(
        &self,
        guid: &Guid,
        role: &str,
        user_guid: &Guid,
        token: &str,
    ) -> Result<()> {
        self.transport
            .put_discard(&format!("/v2/organizations/{guid}/{role}/{user_guid}"), token)
            .await
    }
}
