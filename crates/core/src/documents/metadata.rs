use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::guid::Guid;

/// The `metadata` object of the standard resource envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub guid: Guid,
    pub url: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Timestamp defaulting rule: a `created_at` that is missing or null on
    /// the wire reads as the zero instant rather than an error.
    pub fn created_at_or_zero(&self) -> DateTime<Utc> {
        self.created_at.unwrap_or(DateTime::UNIX_EPOCH)
    }

    /// Same defaulting rule as [`Metadata::created_at_or_zero`].
    pub fn updated_at_or_zero(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(DateTime::UNIX_EPOCH)
    }
}

/// The standard resource envelope: metadata plus a resource-specific entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource<E> {
    pub metadata: Metadata,
    pub entity: E,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_timestamps_read_as_the_zero_instant() {
        let metadata: Metadata = serde_json::from_str(
            r#"{ "guid": "org-001", "url": "/v2/organizations/org-001", "updated_at": null }"#,
        )
        .unwrap();

        assert_eq!(metadata.created_at_or_zero(), DateTime::UNIX_EPOCH);
        assert_eq!(metadata.updated_at_or_zero(), DateTime::UNIX_EPOCH);
        assert_eq!(metadata.guid, Guid::new("org-001"));
    }

    #[test]
    fn present_timestamps_are_kept() {
        let metadata: Metadata = serde_json::from_str(
            r#"{ "guid": "space-001", "url": "", "created_at": "2014-10-09T22:02:26+00:00" }"#,
        )
        .unwrap();

        assert_eq!(
            metadata.created_at_or_zero().to_rfc3339(),
            "2014-10-09T22:02:26+00:00"
        );
        assert_eq!(metadata.updated_at_or_zero(), DateTime::UNIX_EPOCH);
    }
}
