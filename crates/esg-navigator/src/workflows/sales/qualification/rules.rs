use super::super::domain::{LeadRecord, QualificationResult};
use super::config::QualificationRules;
use super::{QualificationOutcome, ScoreComponent, ScoreFactor};

pub(crate) fn score_lead(lead: &LeadRecord, rules: &QualificationRules) -> QualificationOutcome {
    let mut components = Vec::new();
    let mut score = rules.base_score;
    components.push(ScoreComponent {
        factor: ScoreFactor::Base,
        points: points(rules.base_score),
        notes: format!("base score {}", rules.base_score),
    });

    let mut recommended_agents = Vec::new();
    if let Some(profile) = rules
        .industries
        .iter()
        .find(|profile| profile.industry == lead.industry)
    {
        score = score.saturating_add(profile.bonus);
        recommended_agents = profile.recommended_agents.clone();
        components.push(ScoreComponent {
            factor: ScoreFactor::Industry,
            points: points(profile.bonus),
            notes: format!("{} industry", profile.industry),
        });
    }

    let employees = lead.employees();
    if let Some(band) = rules
        .size_bands
        .iter()
        .find(|band| employees > band.employees_above)
    {
        score = score.saturating_add(band.bonus);
        components.push(ScoreComponent {
            factor: ScoreFactor::CompanySize,
            points: points(band.bonus),
            notes: format!("{employees} employees exceeds {}", band.employees_above),
        });
    }

    if lead.is_jse_listed {
        score = score.saturating_add(rules.jse_listing_bonus);
        components.push(ScoreComponent {
            factor: ScoreFactor::JseListing,
            points: points(rules.jse_listing_bonus),
            notes: "listed on the JSE".to_string(),
        });
    }

    if lead.has_global_footprint {
        score = score.saturating_add(rules.global_footprint_bonus);
        components.push(ScoreComponent {
            factor: ScoreFactor::GlobalFootprint,
            points: points(rules.global_footprint_bonus),
            notes: "operates internationally".to_string(),
        });
    }

    if let Some(rule) = rules.name_overrides.iter().find(|rule| rule.matches(lead)) {
        components.push(ScoreComponent {
            factor: ScoreFactor::NameOverride,
            points: points(rule.score) - points(score),
            notes: format!(
                "name matches '{}', score set to {}",
                rule.name_contains, rule.score
            ),
        });
        score = rule.score;
    }

    if score > rules.score_ceiling {
        components.push(ScoreComponent {
            factor: ScoreFactor::Ceiling,
            points: points(rules.score_ceiling) - points(score),
            notes: format!("capped at {}", rules.score_ceiling),
        });
        score = rules.score_ceiling;
    }

    let in_home_country = lead.country == rules.home_country;

    let result = QualificationResult {
        overall_score: score,
        qualification_status: rules.status_for(score),
        estimated_value: u64::from(score).saturating_mul(rules.value_per_point),
        recommended_agents,
        univen_opportunity: in_home_country && lead.industry == rules.univen_industry,
        grant_funding_potential: in_home_country && employees > rules.grant_employee_threshold,
    };

    QualificationOutcome { result, components }
}

fn points(value: u32) -> i64 {
    i64::from(value)
}
