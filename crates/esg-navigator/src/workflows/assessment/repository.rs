use super::domain::{AssessmentSubmissionRecord, SubmissionReference};
use crate::workflows::storage::RepositoryError;

/// Storage for completed ten-question submissions.
pub trait SubmissionRepository: Send + Sync {
    fn insert(
        &self,
        record: AssessmentSubmissionRecord,
    ) -> Result<AssessmentSubmissionRecord, RepositoryError>;
    fn fetch(
        &self,
        reference: &SubmissionReference,
    ) -> Result<Option<AssessmentSubmissionRecord>, RepositoryError>;
}
