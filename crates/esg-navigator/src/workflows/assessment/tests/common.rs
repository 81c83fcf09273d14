use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::assessment::{
    standard_bank, AssessmentAnswer, AssessmentService, AssessmentSubmissionRecord,
    SubmissionReference, SubmissionRepository,
};
use crate::workflows::storage::RepositoryError;

/// Affirmative answers for the first `count` questions of the standard bank.
pub(super) fn yes_to_first(count: usize) -> Vec<AssessmentAnswer> {
    standard_bank()
        .into_iter()
        .take(count)
        .map(|question| AssessmentAnswer::new(question.id, true))
        .collect()
}

pub(super) fn build_service() -> (AssessmentService<MemorySubmissions>, Arc<MemorySubmissions>) {
    let repository = Arc::new(MemorySubmissions::default());
    (AssessmentService::new(repository.clone()), repository)
}

#[derive(Default, Clone)]
pub(super) struct MemorySubmissions {
    records: Arc<Mutex<HashMap<SubmissionReference, AssessmentSubmissionRecord>>>,
}

impl SubmissionRepository for MemorySubmissions {
    fn insert(
        &self,
        record: AssessmentSubmissionRecord,
    ) -> Result<AssessmentSubmissionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("submission mutex poisoned");
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
        let guard = self.records.lock().expect("submission mutex poisoned");
        Ok(guard.get(reference).cloned())
    }
}

pub(super) struct OfflineSubmissions;

impl SubmissionRepository for OfflineSubmissions {
    fn insert(
        &self,
        _record: AssessmentSubmissionRecord,
    ) -> Result<AssessmentSubmissionRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(
        &self,
        _reference: &SubmissionReference,
    ) -> Result<Option<AssessmentSubmissionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
