use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::sales::domain::{ContactDetails, LeadId, LeadRecord, LeadSubmission};
use crate::workflows::sales::repository::{
    CrmError, CrmNotification, CrmPublisher, LeadEntry, LeadRepository,
};
use crate::workflows::sales::{LeadQualifier, QualificationRules, SalesQualificationService};
use crate::workflows::storage::RepositoryError;

pub(super) fn lead(company: &str, industry: &str, employees: Option<u64>) -> LeadRecord {
    LeadRecord {
        company_name: company.to_string(),
        industry: industry.to_string(),
        country: "South Africa".to_string(),
        region: Some("Gauteng".to_string()),
        employee_count: employees,
        revenue_usd: None,
        is_jse_listed: false,
        has_global_footprint: false,
    }
}

pub(super) fn qualifier() -> LeadQualifier {
    LeadQualifier::standard()
}

pub(super) fn submission(lead: LeadRecord) -> LeadSubmission {
    LeadSubmission {
        lead,
        contact: ContactDetails {
            contact_name: Some("Thandi Mokoena".to_string()),
            contact_email: Some("thandi@example.co.za".to_string()),
            contact_phone: None,
            source: Some("website".to_string()),
        },
    }
}

pub(super) fn build_service() -> (
    SalesQualificationService<MemoryLeads, MemoryCrm>,
    Arc<MemoryLeads>,
    Arc<MemoryCrm>,
) {
    let repository = Arc::new(MemoryLeads::default());
    let crm = Arc::new(MemoryCrm::default());
    let service = SalesQualificationService::new(
        repository.clone(),
        crm.clone(),
        QualificationRules::standard(),
    );
    (service, repository, crm)
}

#[derive(Default, Clone)]
pub(super) struct MemoryLeads {
    pub(super) entries: Arc<Mutex<HashMap<LeadId, LeadEntry>>>,
}

impl LeadRepository for MemoryLeads {
    fn insert(&self, entry: LeadEntry) -> Result<LeadEntry, RepositoryError> {
        let mut guard = self.entries.lock().expect("lead mutex poisoned");
        if guard.contains_key(&entry.lead_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(entry.lead_id.clone(), entry.clone());
        Ok(entry)
    }

    fn fetch(&self, id: &LeadId) -> Result<Option<LeadEntry>, RepositoryError> {
        let guard = self.entries.lock().expect("lead mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<LeadEntry>, RepositoryError> {
        let guard = self.entries.lock().expect("lead mutex poisoned");
        let mut entries: Vec<_> = guard.values().cloned().collect();
        entries.sort_by(|a, b| b.received_at.cmp(&a.received_at));
        entries.truncate(limit);
        Ok(entries)
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryCrm {
    events: Arc<Mutex<Vec<CrmNotification>>>,
}

impl MemoryCrm {
    pub(super) fn events(&self) -> Vec<CrmNotification> {
        self.events.lock().expect("crm mutex poisoned").clone()
    }
}

impl CrmPublisher for MemoryCrm {
    fn publish(&self, notification: CrmNotification) -> Result<(), CrmError> {
        self.events
            .lock()
            .expect("crm mutex poisoned")
            .push(notification);
        Ok(())
    }
}

pub(super) struct OfflineCrm;

impl CrmPublisher for OfflineCrm {
    fn publish(&self, _notification: CrmNotification) -> Result<(), CrmError> {
        Err(CrmError::Transport("zoho unreachable".to_string()))
    }
}

pub(super) struct ConflictLeads;

impl LeadRepository for ConflictLeads {
    fn insert(&self, _entry: LeadEntry) -> Result<LeadEntry, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &LeadId) -> Result<Option<LeadEntry>, RepositoryError> {
        Ok(None)
    }

    fn recent(&self, _limit: usize) -> Result<Vec<LeadEntry>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableLeads;

impl LeadRepository for UnavailableLeads {
    fn insert(&self, _entry: LeadEntry) -> Result<LeadEntry, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &LeadId) -> Result<Option<LeadEntry>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<LeadEntry>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
