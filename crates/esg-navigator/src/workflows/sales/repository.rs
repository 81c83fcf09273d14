use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{ContactDetails, LeadId, LeadRecord, QualificationResult};
use crate::workflows::storage::RepositoryError;

/// Stored lead with the qualification it received at intake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadEntry {
    pub lead_id: LeadId,
    pub lead: LeadRecord,
    pub contact: ContactDetails,
    pub qualification: QualificationResult,
    pub received_at: DateTime<Utc>,
}

/// Storage abstraction so the service can be exercised without a database.
pub trait LeadRepository: Send + Sync {
    fn insert(&self, entry: LeadEntry) -> Result<LeadEntry, RepositoryError>;
    fn fetch(&self, id: &LeadId) -> Result<Option<LeadEntry>, RepositoryError>;
    /// Newest first.
    fn recent(&self, limit: usize) -> Result<Vec<LeadEntry>, RepositoryError>;
}

/// Outbound CRM hook (Zoho or similar) notified about promising leads.
pub trait CrmPublisher: Send + Sync {
    fn publish(&self, notification: CrmNotification) -> Result<(), CrmError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrmNotification {
    pub template: String,
    pub lead_id: LeadId,
    pub details: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CrmError {
    #[error("crm transport unavailable: {0}")]
    Transport(String),
}
