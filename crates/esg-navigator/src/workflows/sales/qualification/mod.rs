mod config;
mod rules;

pub use config::{IndustryProfile, NameOverride, QualificationRules, SizeBand};

use super::domain::{LeadRecord, QualificationResult};
use serde::{Deserialize, Serialize};

/// Stateless scorer applying a rule set to lead records.
#[derive(Debug, Clone)]
pub struct LeadQualifier {
    rules: QualificationRules,
}

impl LeadQualifier {
    pub fn new(rules: QualificationRules) -> Self {
        Self { rules }
    }

    pub fn standard() -> Self {
        Self::new(QualificationRules::standard())
    }

    pub fn rules(&self) -> &QualificationRules {
        &self.rules
    }

    /// Score a lead and keep the per-rule trail.
    pub fn evaluate(&self, lead: &LeadRecord) -> QualificationOutcome {
        rules::score_lead(lead, &self.rules)
    }

    pub fn score(&self, lead: &LeadRecord) -> QualificationResult {
        self.evaluate(lead).result
    }
}

impl Default for LeadQualifier {
    fn default() -> Self {
        Self::standard()
    }
}

/// Which rule produced a score adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Base,
    Industry,
    CompanySize,
    JseListing,
    GlobalFootprint,
    NameOverride,
    Ceiling,
}

/// Discrete contribution to a qualification score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: i64,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualificationOutcome {
    pub result: QualificationResult,
    pub components: Vec<ScoreComponent>,
}

impl QualificationOutcome {
    /// Sum of all component points; equals the final score.
    pub fn component_total(&self) -> i64 {
        self.components.iter().map(|component| component.points).sum()
    }
}
