//! Sales lead intake: qualification scoring, storage, and CRM hand-off.

pub mod domain;
mod qualification;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ContactDetails, LeadId, LeadRecord, LeadSubmission, QualificationResult, QualificationStatus,
};
pub use qualification::{
    IndustryProfile, LeadQualifier, NameOverride, QualificationOutcome, QualificationRules,
    ScoreComponent, ScoreFactor, SizeBand,
};
pub use repository::{CrmError, CrmNotification, CrmPublisher, LeadEntry, LeadRepository};
pub use router::sales_router;
pub use service::{LeadServiceError, SalesQualificationService};
