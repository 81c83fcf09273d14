use serde::{Deserialize, Serialize};

use crate::workflows::lenient;

/// Identifier wrapper for qualified leads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadId(pub String);

/// Company facts the qualification rules look at.
///
/// Every field decodes permissively so a sloppy form post still scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
    #[serde(default, alias = "company", deserialize_with = "lenient::string")]
    pub company_name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub industry: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub country: String,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub employee_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub revenue_usd: Option<f64>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_jse_listed: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub has_global_footprint: bool,
}

impl LeadRecord {
    pub fn employees(&self) -> u64 {
        self.employee_count.unwrap_or(0)
    }
}

/// Contact fields captured with a lead; scoring ignores them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub contact_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub contact_email: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub contact_phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub source: Option<String>,
}

/// Body of `POST /api/sales/qualify`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadSubmission {
    #[serde(flatten)]
    pub lead: LeadRecord,
    #[serde(flatten)]
    pub contact: ContactDetails,
}

/// Coarse bucket derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualificationStatus {
    Qualified,
    NeedsNurturing,
    NotQualified,
}

impl QualificationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            QualificationStatus::Qualified => "qualified",
            QualificationStatus::NeedsNurturing => "needs_nurturing",
            QualificationStatus::NotQualified => "not_qualified",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualificationResult {
    pub overall_score: u32,
    pub qualification_status: QualificationStatus,
    pub estimated_value: u64,
    pub recommended_agents: Vec<String>,
    pub univen_opportunity: bool,
    pub grant_funding_potential: bool,
}
