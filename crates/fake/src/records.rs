//! Resource records held by the fake controller, and their wire projections.

use chrono::{DateTime, Utc};

use stratus_core::Guid;
use stratus_core::documents::{
    ApplicationEntity, ApplicationResponse, ApplicationSummary, Metadata, OrganizationEntity,
    OrganizationResponse, SpaceEntity, SpaceResponse, UserEntity, UserResponse,
};

use crate::store::HasGuid;

fn metadata(guid: &Guid, url: &str, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Metadata {
    Metadata {
        guid: guid.clone(),
        url: url.to_string(),
        created_at: Some(created_at),
        updated_at: Some(updated_at),
    }
}

/// Append a member GUID unless already present.
pub fn push_unique(members: &mut Vec<Guid>, guid: Guid) {
    if !members.contains(&guid) {
        members.push(guid);
    }
}

#[derive(Debug, Clone)]
pub struct OrganizationRecord {
    pub guid: Guid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub users: Vec<Guid>,
    pub billing_managers: Vec<Guid>,
    pub auditors: Vec<Guid>,
    pub managers: Vec<Guid>,
}

impl OrganizationRecord {
    pub fn new(guid: Guid, name: String, now: DateTime<Utc>) -> Self {
        Self {
            guid,
            name,
            created_at: now,
            updated_at: now,
            users: Vec::new(),
            billing_managers: Vec::new(),
            auditors: Vec::new(),
            managers: Vec::new(),
        }
    }

    pub fn url(&self) -> String {
        format!("/v2/organizations/{}", self.guid)
    }

    pub fn to_response(&self) -> OrganizationResponse {
        let url = self.url();
        OrganizationResponse {
            metadata: metadata(&self.guid, &url, self.created_at, self.updated_at),
            entity: OrganizationEntity {
                name: self.name.clone(),
                billing_enabled: false,
                status: "active".to_string(),
                quota_definition_guid: Guid::default(),
                quota_definition_url: String::new(),
                spaces_url: format!("{url}/spaces"),
                domains_url: format!("{url}/domains"),
                private_domains_url: format!("{url}/private_domains"),
                users_url: format!("{url}/users"),
                managers_url: format!("{url}/managers"),
                billing_managers_url: format!("{url}/billing_managers"),
                auditors_url: format!("{url}/auditors"),
                app_events_url: format!("{url}/app_events"),
                space_quota_definitions_url: format!("{url}/space_quota_definitions"),
            },
        }
    }
}

impl HasGuid for OrganizationRecord {
    fn guid(&self) -> &Guid {
        &self.guid
    }
}

#[derive(Debug, Clone)]
pub struct SpaceRecord {
    pub guid: Guid,
    pub name: String,
    pub organization_guid: Guid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub developers: Vec<Guid>,
}

impl SpaceRecord {
    pub fn new(guid: Guid, name: String, organization_guid: Guid, now: DateTime<Utc>) -> Self {
        Self {
            guid,
            name,
            organization_guid,
            created_at: now,
            updated_at: now,
            developers: Vec::new(),
        }
    }

    pub fn url(&self) -> String {
        format!("/v2/spaces/{}", self.guid)
    }

    pub fn to_response(&self) -> SpaceResponse {
        let url = self.url();
        SpaceResponse {
            metadata: metadata(&self.guid, &url, self.created_at, self.updated_at),
            entity: SpaceEntity {
                name: self.name.clone(),
                organization_guid: self.organization_guid.clone(),
                space_quota_definition_guid: Guid::default(),
                organization_url: format!("/v2/organizations/{}", self.organization_guid),
                developers_url: format!("{url}/developers"),
                managers_url: format!("{url}/managers"),
                auditors_url: format!("{url}/auditors"),
                apps_url: format!("{url}/apps"),
                routes_url: format!("{url}/routes"),
                domains_url: format!("{url}/domains"),
                service_instances_url: format!("{url}/service_instances"),
                app_events_url: format!("{url}/app_events"),
                events_url: format!("{url}/events"),
                security_groups_url: format!("{url}/security_groups"),
            },
        }
    }
}

impl HasGuid for SpaceRecord {
    fn guid(&self) -> &Guid {
        &self.guid
    }
}

#[derive(Debug, Clone)]
pub struct UserRecord {
    pub guid: Guid,
    pub admin: bool,
    pub active: bool,
    pub default_space_guid: Guid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn new(guid: Guid, default_space_guid: Guid, now: DateTime<Utc>) -> Self {
        Self {
            guid,
            admin: false,
            active: true,
            default_space_guid,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn url(&self) -> String {
        format!("/v2/users/{}", self.guid)
    }

    pub fn to_response(&self) -> UserResponse {
        let url = self.url();
        UserResponse {
            metadata: metadata(&self.guid, &url, self.created_at, self.updated_at),
            entity: UserEntity {
                admin: self.admin,
                active: self.active,
                default_space_guid: self.default_space_guid.clone(),
                spaces_url: format!("{url}/spaces"),
                organizations_url: format!("{url}/organizations"),
                managed_organizations_url: format!("{url}/managed_organizations"),
                billing_managed_organizations_url: format!("{url}/billing_managed_organizations"),
                audited_organizations_url: format!("{url}/audited_organizations"),
                managed_spaces_url: format!("{url}/managed_spaces"),
                audited_spaces_url: format!("{url}/audited_spaces"),
            },
        }
    }
}

impl HasGuid for UserRecord {
    fn guid(&self) -> &Guid {
        &self.guid
    }
}

#[derive(Debug, Clone)]
pub struct ApplicationRecord {
    pub guid: Guid,
    pub name: String,
    pub space_guid: Guid,
    pub diego: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ApplicationRecord {
    pub fn new(guid: Guid, name: String, space_guid: Guid, diego: bool, now: DateTime<Utc>) -> Self {
        Self {
            guid,
            name,
            space_guid,
            diego,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn url(&self) -> String {
        format!("/v2/apps/{}", self.guid)
    }

    pub fn to_response(&self) -> ApplicationResponse {
        ApplicationResponse {
            metadata: metadata(&self.guid, &self.url(), self.created_at, self.updated_at),
            entity: ApplicationEntity {
                name: self.name.clone(),
                space_guid: self.space_guid.clone(),
                diego: self.diego,
            },
        }
    }

    pub fn to_summary(&self) -> ApplicationSummary {
        ApplicationSummary {
            guid: self.guid.clone(),
            name: self.name.clone(),
            space_guid: self.space_guid.clone(),
        }
    }
}

impl HasGuid for ApplicationRecord {
    fn guid(&self) -> &Guid {
        &self.guid
    }
}
