//! Applications: creation, lookup, and the flat summary document.

use chrono::{DateTime, Utc};

use stratus_core::Guid;
use stratus_core::documents::{
    ApplicationEntity, ApplicationResponse, ApplicationSummary, CreateApplicationRequest, Metadata,
};

use crate::config::Config;
use crate::error::Result;
use crate::transport::Transport;

/// An application deployed to a space.
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub guid: Guid,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
    pub space_guid: Guid,
    pub diego: bool,
}

impl Application {
    pub fn from_response(response: ApplicationResponse) -> Self {
        Self {
            guid: response.metadata.guid.clone(),
            url: response.metadata.url.clone(),
            created_at: response.metadata.created_at_or_zero(),
            updated_at: response.metadata.updated_at_or_zero(),
            name: response.entity.name,
            space_guid: response.entity.space_guid,
            diego: response.entity.diego,
        }
    }

    /// Build from the flat summary document; fields the summary omits keep
    /// their zero values.
    pub fn from_summary(summary: ApplicationSummary) -> Self {
        Self {
            guid: summary.guid,
            url: String::new(),
            created_at: DateTime::UNIX_EPOCH,
            updated_at: DateTime::UNIX_EPOCH,
            name: summary.name,
            space_guid: summary.space_guid,
            diego: false,
        }
    }

    pub fn to_response(&self) -> ApplicationResponse {
        ApplicationResponse {
            metadata: Metadata {
                guid: self.guid.clone(),
                url: self.url.clone(),
                created_at: Some(self.created_at),
                updated_at: Some(self.updated_at),
            },
            entity: ApplicationEntity {
                name: self.name.clone(),
                space_guid: self.space_guid.clone(),
                diego: self.diego,
            },
        }
    }
}

pub struct ApplicationsService {
    transport: Transport,
}

impl ApplicationsService {
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
        space_guid: &Guid,
        diego: bool,
        token: &str,
    ) -> Result<Application> {
        let request = CreateApplicationRequest {
            name: name.to_string(),
            space_guid: space_guid.clone(),
            diego,
        };
        let response: ApplicationResponse = self.transport.post("/v2/apps", token, &request).await?;
        Ok(Application::from_response(response))
    }

    pub async fn get(&self, guid: &Guid, token: &str) -> Result<Application> {
        let response: ApplicationResponse = self
            .transport
            .get(&format!("/v2/apps/{guid}"), token)
            .await?;
        Ok(Application::from_response(response))
    }

    pub async fn summary(&self, guid: &Guid, token: &str) -> Result<Application> {
        let summary: ApplicationSummary = self
            .transport
            .get(&format!("/v2/apps/{guid}/summary"), token)
            .await?;
        Ok(Application::from_summary(summary))
    }
}
