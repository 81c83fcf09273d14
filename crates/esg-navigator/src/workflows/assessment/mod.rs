//! Public ten-question ESG assessment.

mod aggregator;
mod bank;
pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use aggregator::{aggregate, maturity};
pub use bank::standard_bank;
pub use domain::{
    AssessmentAnswer, AssessmentQuestion, AssessmentResult, AssessmentSubmission,
    AssessmentSubmissionRecord, QuestionDetail, QuestionSet, SubmissionReference,
};
pub use repository::SubmissionRepository;
pub use router::assessment_router;
pub use service::{AssessmentService, AssessmentServiceError};
