use serde::{Deserialize, Serialize};

use super::super::domain::{LeadRecord, QualificationStatus};

/// Point values and thresholds driving lead qualification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualificationRules {
    pub base_score: u32,
    /// Checked in order; the first exact industry match wins.
    pub industries: Vec<IndustryProfile>,
    /// Checked in order; the first band the headcount exceeds wins.
    pub size_bands: Vec<SizeBand>,
    pub jse_listing_bonus: u32,
    pub global_footprint_bonus: u32,
    /// Checked in order; a match replaces the accumulated score.
    pub name_overrides: Vec<NameOverride>,
    pub score_ceiling: u32,
    pub qualified_threshold: u32,
    pub nurture_threshold: u32,
    pub value_per_point: u64,
    pub home_country: String,
    pub univen_industry: String,
    pub grant_employee_threshold: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryProfile {
    pub industry: String,
    pub bonus: u32,
    pub recommended_agents: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeBand {
    pub employees_above: u64,
    pub bonus: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameOverride {
    /// Lowercase fragment searched for in the lowercased company name.
    pub name_contains: String,
    #[serde(default)]
    pub region: Option<String>,
    pub score: u32,
}

impl NameOverride {
    pub fn matches(&self, lead: &LeadRecord) -> bool {
        let name = lead.company_name.to_lowercase();
        if !name.contains(&self.name_contains.to_lowercase()) {
            return false;
        }

        match &self.region {
            Some(region) => lead.region.as_deref() == Some(region.as_str()),
            None => true,
        }
    }
}

fn agents(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

impl QualificationRules {
    /// The rule set the sales desk runs in production.
    pub fn standard() -> Self {
        Self {
            base_score: 50,
            industries: vec![
                IndustryProfile {
                    industry: "Mining".to_string(),
                    bonus: 25,
                    recommended_agents: agents(&[
                        "Environmental Management",
                        "Health & Safety",
                        "Supply Chain ESG",
                    ]),
                },
                IndustryProfile {
                    industry: "Financial Services".to_string(),
                    bonus: 20,
                    recommended_agents: agents(&[
                        "ISO 27001",
                        "Financial Services ESG",
                        "Data Privacy",
                    ]),
                },
                IndustryProfile {
                    industry: "Education".to_string(),
                    bonus: 15,
                    recommended_agents: agents(&[
                        "Education Sector ESG",
                        "Data Privacy",
                        "Quality Management",
                    ]),
                },
            ],
            size_bands: vec![
                SizeBand {
                    employees_above: 5000,
                    bonus: 20,
                },
                SizeBand {
                    employees_above: 1000,
                    bonus: 15,
                },
                SizeBand {
                    employees_above: 250,
                    bonus: 10,
                },
            ],
            jse_listing_bonus: 15,
            global_footprint_bonus: 15,
            name_overrides: vec![
                NameOverride {
                    name_contains: "sibanye".to_string(),
                    region: None,
                    score: 95,
                },
                NameOverride {
                    name_contains: "university".to_string(),
                    region: Some("Limpopo".to_string()),
                    score: 90,
                },
            ],
            score_ceiling: 100,
            qualified_threshold: 75,
            nurture_threshold: 50,
            value_per_point: 2500,
            home_country: "South Africa".to_string(),
            univen_industry: "Education".to_string(),
            grant_employee_threshold: 50,
        }
    }

    /// Rejects rule sets whose status bands overlap or whose ceiling sits below the
    /// qualification threshold.
    pub fn validate(&self) -> Result<(), String> {
        if self.nurture_threshold > self.qualified_threshold {
            return Err(format!(
                "nurture_threshold {} exceeds qualified_threshold {}",
                self.nurture_threshold, self.qualified_threshold
            ));
        }
        if self.score_ceiling < self.qualified_threshold {
            return Err(format!(
                "score_ceiling {} is below qualified_threshold {}",
                self.score_ceiling, self.qualified_threshold
            ));
        }
        Ok(())
    }

    pub fn status_for(&self, score: u32) -> QualificationStatus {
        if score >= self.qualified_threshold {
            QualificationStatus::Qualified
        } else if score >= self.nurture_threshold {
            QualificationStatus::NeedsNurturing
        } else {
            QualificationStatus::NotQualified
        }
    }
}

impl Default for QualificationRules {
    fn default() -> Self {
        Self::standard()
    }
}
