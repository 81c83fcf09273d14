use super::domain::AssessmentQuestion;

const STANDARD_WEIGHT: f64 = 10.0;

const STANDARD_QUESTIONS: [(&str, &str); 10] = [
    (
        "esg_policy",
        "Does your organisation have a board-approved ESG or sustainability policy?",
    ),
    (
        "emissions_tracking",
        "Do you measure and report your Scope 1 and Scope 2 greenhouse gas emissions?",
    ),
    (
        "energy_targets",
        "Have you set targets for energy efficiency or renewable energy use?",
    ),
    (
        "waste_water",
        "Do you monitor waste generation and water consumption across operations?",
    ),
    (
        "health_safety",
        "Is there a certified occupational health and safety management system in place?",
    ),
    (
        "bbbee",
        "Do you hold a current B-BBEE verification certificate?",
    ),
    (
        "community_investment",
        "Do you run community investment or socio-economic development programmes?",
    ),
    (
        "supplier_screening",
        "Are suppliers screened against environmental and social criteria?",
    ),
    (
        "ethics_governance",
        "Do you have an anti-corruption policy and a whistleblowing channel?",
    ),
    (
        "data_privacy",
        "Is your organisation compliant with POPIA for personal information?",
    ),
];

/// The fixed, ordered ten-question bank; every item carries the same weight.
pub fn standard_bank() -> Vec<AssessmentQuestion> {
    STANDARD_QUESTIONS
        .iter()
        .map(|(id, text)| AssessmentQuestion {
            id: id.to_string(),
            text: text.to_string(),
            weight: STANDARD_WEIGHT,
        })
        .collect()
}
