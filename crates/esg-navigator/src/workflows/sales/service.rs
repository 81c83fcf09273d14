use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{LeadId, LeadSubmission, QualificationStatus};
use super::qualification::{LeadQualifier, QualificationRules};
use super::repository::{CrmError, CrmNotification, CrmPublisher, LeadEntry, LeadRepository};
use crate::workflows::storage::RepositoryError;
use crate::workflows::time_derived_id;

/// Service composing the qualifier, lead storage, and CRM hand-off.
pub struct SalesQualificationService<R, C> {
    qualifier: Arc<LeadQualifier>,
    repository: Arc<R>,
    crm: Arc<C>,
}

impl<R, C> SalesQualificationService<R, C>
where
    R: LeadRepository + 'static,
    C: CrmPublisher + 'static,
{
    pub fn new(repository: Arc<R>, crm: Arc<C>, rules: QualificationRules) -> Self {
        Self {
            qualifier: Arc::new(LeadQualifier::new(rules)),
            repository,
            crm,
        }
    }

    pub fn qualifier(&self) -> &LeadQualifier {
        &self.qualifier
    }

    /// Score, store, and hand the lead to the CRM when it is worth following up.
    pub fn qualify(&self, submission: LeadSubmission) -> Result<LeadEntry, LeadServiceError> {
        let LeadSubmission { lead, contact } = submission;
        let qualification = self.qualifier.score(&lead);
        let lead_id = LeadId(time_derived_id("lead"));

        let entry = self.repository.insert(LeadEntry {
            lead_id,
            lead,
            contact,
            qualification,
            received_at: Utc::now(),
        })?;

        info!(
            lead_id = %entry.lead_id.0,
            company = %entry.lead.company_name,
            score = entry.qualification.overall_score,
            status = entry.qualification.qualification_status.label(),
            "lead qualified"
        );

        if let Some(notification) = crm_notification(&entry) {
            if let Err(err) = self.crm.publish(notification) {
                warn!(lead_id = %entry.lead_id.0, error = %err, "crm hand-off failed");
                return Err(err.into());
            }
        }

        Ok(entry)
    }

    pub fn get(&self, lead_id: &LeadId) -> Result<LeadEntry, LeadServiceError> {
        let entry = self
            .repository
            .fetch(lead_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(entry)
    }

    pub fn recent(&self, limit: usize) -> Result<Vec<LeadEntry>, LeadServiceError> {
        Ok(self.repository.recent(limit)?)
    }
}

fn crm_notification(entry: &LeadEntry) -> Option<CrmNotification> {
    let template = match entry.qualification.qualification_status {
        QualificationStatus::Qualified => "lead_qualified",
        QualificationStatus::NeedsNurturing => "lead_nurture",
        QualificationStatus::NotQualified => return None,
    };

    let mut details = BTreeMap::new();
    details.insert("company".to_string(), entry.lead.company_name.clone());
    details.insert(
        "score".to_string(),
        entry.qualification.overall_score.to_string(),
    );
    details.insert(
        "estimated_value".to_string(),
        entry.qualification.estimated_value.to_string(),
    );
    if !entry.qualification.recommended_agents.is_empty() {
        details.insert(
            "recommended_agents".to_string(),
            entry.qualification.recommended_agents.join(", "),
        );
    }
    if let Some(email) = &entry.contact.contact_email {
        details.insert("contact_email".to_string(), email.clone());
    }

    Some(CrmNotification {
        template: template.to_string(),
        lead_id: entry.lead_id.clone(),
        details,
    })
}

/// Error raised by the sales qualification service.
#[derive(Debug, thiserror::Error)]
pub enum LeadServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Crm(#[from] CrmError),
}
