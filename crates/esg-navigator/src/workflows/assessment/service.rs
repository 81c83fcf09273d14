use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::aggregator::aggregate;
use super::bank::standard_bank;
use super::domain::{
    AssessmentQuestion, AssessmentSubmission, AssessmentSubmissionRecord, QuestionSet,
    SubmissionReference,
};
use super::repository::SubmissionRepository;
use crate::workflows::storage::RepositoryError;
use crate::workflows::time_derived_id;

/// Public ten-question assessment: serves the bank and scores submissions.
pub struct AssessmentService<S> {
    bank: Arc<Vec<AssessmentQuestion>>,
    repository: Arc<S>,
}

impl<S> AssessmentService<S>
where
    S: SubmissionRepository + 'static,
{
    pub fn new(repository: Arc<S>) -> Self {
        Self::with_bank(standard_bank(), repository)
    }

    pub fn with_bank(bank: Vec<AssessmentQuestion>, repository: Arc<S>) -> Self {
        Self {
            bank: Arc::new(bank),
            repository,
        }
    }

    pub fn bank(&self) -> &[AssessmentQuestion] {
        &self.bank
    }

    /// The bank does not vary by industry; the value is only echoed back.
    pub fn questions(&self, industry: Option<String>) -> QuestionSet {
        QuestionSet {
            industry: industry.unwrap_or_default(),
            questions: self.bank.as_ref().clone(),
        }
    }

    pub fn submit(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<AssessmentSubmissionRecord, AssessmentServiceError> {
        let AssessmentSubmission {
            company,
            email,
            industry,
            answers,
        } = submission;

        let assessment = aggregate(&self.bank, &answers);
        let record = self.repository.insert(AssessmentSubmissionRecord {
            reference: SubmissionReference(time_derived_id("10Q")),
            company,
            email,
            industry,
            assessment,
            submitted_at: Utc::now(),
        })?;

        info!(
            reference = %record.reference.0,
            score = record.assessment.score,
            maturity = record.assessment.maturity,
            "assessment submitted"
        );

        Ok(record)
    }

    pub fn get(
        &self,
        reference: &SubmissionReference,
    ) -> Result<AssessmentSubmissionRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(reference)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
