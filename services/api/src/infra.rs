use esg_navigator::workflows::assessment::{
    AssessmentSubmissionRecord, SubmissionReference, SubmissionRepository,
};
use esg_navigator::workflows::sales::{
    CrmError, CrmNotification, CrmPublisher, LeadEntry, LeadId, LeadRepository,
};
use esg_navigator::workflows::RepositoryError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

fn poisoned(what: &str) -> RepositoryError {
    RepositoryError::Unavailable(format!("{what} lock poisoned"))
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryLeadRepository {
    entries: Arc<Mutex<HashMap<LeadId, LeadEntry>>>,
}

impl LeadRepository for InMemoryLeadRepository {
    fn insert(&self, entry: LeadEntry) -> Result<LeadEntry, RepositoryError> {
        let mut guard = self.entries.lock().map_err(|_| poisoned("lead"))?;
        if guard.contains_key(&entry.lead_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(entry.lead_id.clone(), entry.clone());
        Ok(entry)
    }

    fn fetch(&self, id: &LeadId) -> Result<Option<LeadEntry>, RepositoryError> {
        let guard = self.entries.lock().map_err(|_| poisoned("lead"))?;
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<LeadEntry>, RepositoryError> {
        let guard = self.entries.lock().map_err(|_| poisoned("lead"))?;
        let mut entries: Vec<LeadEntry> = guard.values().cloned().collect();
        entries.sort_by(|a, b| {
            b.received_at
                .cmp(&a.received_at)
                .then_with(|| b.lead_id.0.cmp(&a.lead_id.0))
        });
        entries.truncate(limit);
        Ok(entries)
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySubmissionRepository {
    records: Arc<Mutex<HashMap<SubmissionReference, AssessmentSubmissionRecord>>>,
}

impl SubmissionRepository for InMemorySubmissionRepository {
    fn insert(
        &self,
        record: AssessmentSubmissionRecord,
    ) -> Result<AssessmentSubmissionRecord, RepositoryError> {
        let mut guard = self.records.lock().map_err(|_| poisoned("submission"))?;
        if guard.contains_key(&record.reference) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.reference.clone(), record.clone());
        Ok(record)
    }

    fn fetch(
        &self,
        reference: &SubmissionReference,
    ) -> Result<Option<AssessmentSubmissionRecord>, RepositoryError> {
        let guard = self.records.lock().map_err(|_| poisoned("submission"))?;
        Ok(guard.get(reference).cloned())
    }
}

const OUTBOX_CAPACITY: usize = 256;

/// Keeps the most recent CRM hand-offs in memory until a real CRM adapter is
/// configured. The oldest notification is dropped once the outbox is full.
#[derive(Clone)]
pub(crate) struct CrmOutbox {
    capacity: usize,
    events: Arc<Mutex<VecDeque<CrmNotification>>>,
}

impl CrmOutbox {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            events: Arc::new(Mutex::new(VecDeque::with_capacity(capacity.max(1)))),
        }
    }
}

impl Default for CrmOutbox {
    fn default() -> Self {
        Self::with_capacity(OUTBOX_CAPACITY)
    }
}

impl CrmPublisher for CrmOutbox {
    fn publish(&self, notification: CrmNotification) -> Result<(), CrmError> {
        info!(
            template = %notification.template,
            lead_id = %notification.lead_id.0,
            "crm notification queued"
        );
        let mut events = self
            .events
            .lock()
            .map_err(|_| CrmError::Transport("outbox lock poisoned".to_string()))?;
        if events.len() == self.capacity {
            if let Some(dropped) = events.pop_front() {
                debug!(lead_id = %dropped.lead_id.0, "crm outbox full, dropping oldest");
            }
        }
        events.push_back(notification);
        Ok(())
    }
}

#[cfg(test)]
impl CrmOutbox {
    pub(crate) fn events(&self) -> Vec<CrmNotification> {
        self.events
            .lock()
            .map(|guard| guard.iter().cloned().collect())
            .unwrap_or_default()
    }
}
