//! `stratus-client` — typed client for the cloud controller v2 API.
//!
//! Each operation is one HTTP round trip mapped to a typed document: no
//! retries, no batching, no caching. The client is stateless apart from its
//! read-only [`Config`] and can be shared freely across tasks.

pub mod applications;
pub mod config;
pub mod error;
pub mod organizations;
pub mod spaces;
pub mod transport;
pub mod users;

pub use applications::{Application, ApplicationsService};
pub use config::Config;
pub use error::{Error, Result};
pub use organizations::{Organization, OrganizationsService};
pub use spaces::{Space, SpacesService};
pub use users::{User, UsersService};

pub use stratus_core::{Guid, Page, PageQuery};

use transport::Transport;

/// Entry point: owns the HTTP transport and hands out per-resource services.
#[derive(Debug, Clone)]
pub struct Client {
    transport: Transport,
}

impl Client {
    pub fn new(config: Config) -> Self {
        Self {
            transport: Transport::new(config),
        }
    }

    pub fn organizations(&self) -> OrganizationsService {
        OrganizationsService::with_transport(self.transport.clone())
    }

    pub fn spaces(&self) -> SpacesService {
        SpacesService::with_transport(self.transport.clone())
    }

    pub fn users(&self) -> UsersService {
        UsersService::with_transport(self.transport.clone())
    }

    pub fn applications(&self) -> ApplicationsService {
        ApplicationsService::with_transport(self.transport.clone())
    }
}
