use clap::Args;
use esg_navigator::config::AppConfig;
use esg_navigator::error::AppError;
use esg_navigator::workflows::assessment::{
    aggregate, standard_bank, AssessmentAnswer, AssessmentQuestion, AssessmentResult,
};
use esg_navigator::workflows::sales::{LeadQualifier, LeadRecord, QualificationOutcome};
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct QualifyArgs {
    /// JSON lead document; replaces the field flags below when given
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
    /// Company name
    #[arg(long, default_value = "")]
    pub(crate) company: String,
    /// Industry, matched exactly (e.g. "Mining")
    #[arg(long, default_value = "")]
    pub(crate) industry: String,
    /// Country, matched exactly (e.g. "South Africa")
    #[arg(long, default_value = "")]
    pub(crate) country: String,
    /// Province or region
    #[arg(long)]
    pub(crate) region: Option<String>,
    /// Number of employees
    #[arg(long)]
    pub(crate) employees: Option<u64>,
    /// Annual revenue in USD
    #[arg(long)]
    pub(crate) revenue: Option<f64>,
    /// Listed on the Johannesburg Stock Exchange
    #[arg(long)]
    pub(crate) jse_listed: bool,
    /// Operates outside South Africa
    #[arg(long)]
    pub(crate) global_footprint: bool,
}

impl QualifyArgs {
    fn into_lead(self) -> Result<LeadRecord, AppError> {
        if let Some(path) = self.file {
            let raw = fs::read_to_string(path)?;
            return Ok(serde_json::from_str(&raw)?);
        }

        Ok(LeadRecord {
            company_name: self.company,
            industry: self.industry,
            country: self.country,
            region: self.region,
            employee_count: self.employees,
            revenue_usd: self.revenue,
            is_jse_listed: self.jse_listed,
            has_global_footprint: self.global_footprint,
        })
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// Question id answered "yes"; repeat for each affirmative answer
    #[arg(long = "yes", value_name = "QUESTION_ID")]
    pub(crate) yes: Vec<String>,
    /// Industry label echoed in the output
    #[arg(long)]
    pub(crate) industry: Option<String>,
}

pub(crate) fn run_qualify(args: QualifyArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let qualifier = LeadQualifier::new(config.scoring.qualification_rules()?);
    let lead = args.into_lead()?;

    let outcome = qualifier.evaluate(&lead);
    render_qualification(&lead, &outcome);
    Ok(())
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let bank = standard_bank();
    let answers: Vec<AssessmentAnswer> = args
        .yes
        .into_iter()
        .map(|id| AssessmentAnswer::new(id, true))
        .collect();

    let result = aggregate(&bank, &answers);
    if let Some(industry) = args.industry.filter(|value| !value.is_empty()) {
        println!("Industry: {industry}");
    }
    render_assessment(&bank, &result);
    Ok(())
}

pub(crate) fn run_questions() -> Result<(), AppError> {
    println!("Ten-question ESG assessment");
    for (index, question) in standard_bank().iter().enumerate() {
        println!(
            "{:>2}. [{}] {} (weight {})",
            index + 1,
            question.id,
            question.text,
            question.weight
        );
    }
    Ok(())
}

fn render_qualification(lead: &LeadRecord, outcome: &QualificationOutcome) {
    let result = &outcome.result;
    let company = if lead.company_name.is_empty() {
        "(unnamed company)"
    } else {
        lead.company_name.as_str()
    };

    println!("Lead qualification for {company}");
    for component in &outcome.components {
        println!("  {:+4}  {}", component.points, component.notes);
    }
    println!(
        "Score {} ({}) | estimated value {}",
        result.overall_score,
        result.qualification_status.label(),
        result.estimated_value
    );
    if result.recommended_agents.is_empty() {
        println!("Recommended agents: none");
    } else {
        println!(
            "Recommended agents: {}",
            result.recommended_agents.join(", ")
        );
    }
    println!(
        "Univen opportunity: {} | grant funding potential: {}",
        yes_no(result.univen_opportunity),
        yes_no(result.grant_funding_potential)
    );
}

fn render_assessment(bank: &[AssessmentQuestion], result: &AssessmentResult) {
    for (question, detail) in bank.iter().zip(&result.detail) {
        let mark = if detail.value == 1 { "x" } else { " " };
        println!("  [{mark}] {}", question.text);
    }
    println!(
        "Score {}% | maturity {:.2} / 5",
        result.score, result.maturity
    );
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
