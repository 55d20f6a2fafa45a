//! Spaces: creation, lookup, and developer listings.

use chrono::{DateTime, Utc};

use stratus_core::documents::{CreateSpaceRequest, Metadata, SpaceEntity, SpaceResponse, UserResponse};
use stratus_core::{Guid, Page, PageQuery};

use crate::config::Config;
use crate::error::Result;
use crate::transport::Transport;
use crate::users::User;

/// A space inside an organization. Immutable once constructed from a
/// response.
#[derive(Debug, Clone, PartialEq)]
pub struct Space {
    pub guid: Guid,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
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

impl Space {
    pub fn from_response(response: SpaceResponse) -> Self {
        Self {
            guid: response.metadata.guid.clone(),
            url: response.metadata.url.clone(),
            created_at: response.metadata.created_at_or_zero(),
            updated_at: response.metadata.updated_at_or_zero(),
            name: response.entity.name,
            organization_guid: response.entity.organization_guid,
            space_quota_definition_guid: response.entity.space_quota_definition_guid,
            organization_url: response.entity.organization_url,
            developers_url: response.entity.developers_url,
            managers_url: response.entity.managers_url,
            auditors_url: response.entity.auditors_url,
            apps_url: response.entity.apps_url,
            routes_url: response.entity.routes_url,
            domains_url: response.entity.domains_url,
            service_instances_url: response.entity.service_instances_url,
            app_events_url: response.entity.app_events_url,
            events_url: response.entity.events_url,
            security_groups_url: response.entity.security_groups_url,
        }
    }

    pub fn to_response(&self) -> SpaceResponse {
        SpaceResponse {
            metadata: Metadata {
                guid: self.guid.clone(),
                url: self.url.clone(),
                created_at: Some(self.created_at),
                updated_at: Some(self.updated_at),
            },
            entity: SpaceEntity {
                name: self.name.clone(),
                organization_guid: self.organization_guid.clone(),
                space_quota_definition_guid: self.space_quota_definition_guid.clone(),
                organization_url: self.organization_url.clone(),
                developers_url: self.developers_url.clone(),
                managers_url: self.managers_url.clone(),
                auditors_url: self.auditors_url.clone(),
                apps_url: self.apps_url.clone(),
                routes_url: self.routes_url.clone(),
                domains_url: self.domains_url.clone(),
                service_instances_url: self.service_instances_url.clone(),
                app_events_url: self.app_events_url.clone(),
                events_url: self.events_url.clone(),
                security_groups_url: self.security_groups_url.clone(),
            },
        }
    }
}

pub struct SpacesService {
    transport: Transport,
}

impl SpacesService {
    pub fn new(config: Config) -> Self {
        Self {
            transport: Transport::new(config),
        }
    }

    pub(crate) fn with_transport(transport: Transport) -> Self {
        Self { transport }
    }

    pub async fn create(
        &self,
        name: &str,
        organization_guid: &Guid,
        token: &str,
    ) -> Result<Space> {
        let request = CreateSpaceRequest {
            name: name.to_string(),
            organization_guid: organization_guid.clone(),
        };
        let response: SpaceResponse = self.transport.post("/v2/spaces", token, &request).await?;
        Ok(Space::from_response(response))
    }

    pub async fn get(&self, guid: &Guid, token: &str) -> Result<Space> {
        let response: SpaceResponse = self
            .transport
            .get(&format!("/v2/spaces/{guid}"), token)
            .await?;
        Ok(Space::from_response(response))
    }

    pub async fn list_developers(
        &self,
        guid: &Guid,
        token: &str,
        query: PageQuery,
    ) -> Result<Page<User>> {
        let path = format!(
            "/v2/spaces/{guid}/developers?page={}&results-per-page={}",
            query.page, query.per_page
        );
        let page: Page<UserResponse> = self.transport.get(&path, token).await?;
        Ok(page.map(User::from_response))
    }

    pub async fn associate_developer(
        &self,
        guid: &Guid,
        user_guid: &Guid,
        token: &str,
    ) -> Result<()> {
        self.transport
            .put_discard(&format!("/v2/spaces/{guid}/developers/{user_guid}"), token)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_round_trip_is_identity() {
        let space = Space {
            guid: Guid::new("space-001"),
            url: "/v2/spaces/space-001".to_string(),
            created_at: "2014-10-09T22:02:26+00:00".parse().unwrap(),
            updated_at: DateTime::UNIX_EPOCH,
            name: "development".to_string(),
            organization_guid: Guid::new("org-001"),
            space_quota_definition_guid: Guid::default(),
            organization_url: "/v2/organizations/org-001".to_string(),
            developers_url: "/v2/spaces/space-001/developers".to_string(),
            managers_url: "/v2/spaces/space-001/managers".to_string(),
            auditors_url: "/v2/spaces/space-001/auditors".to_string(),
            apps_url: "/v2/spaces/space-001/apps".to_string(),
            routes_url: "/v2/spaces/space-001/routes".to_string(),
            domains_url: "/v2/spaces/space-001/domains".to_string(),
            service_instances_url: "/v2/spaces/space-001/service_instances".to_string(),
            app_events_url: "/v2/spaces/space-001/app_events".to_string(),
            events_url: "/v2/spaces/space-001/events".to_string(),
            security_groups_url: "/v2/spaces/space-001/security_groups".to_string(),
        };

        assert_eq!(Space::from_response(space.to_response()), space);
    }
}
