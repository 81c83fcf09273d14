use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::workflows::lenient;

/// One weighted yes/no item of the assessment bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentQuestion {
    pub id: String,
    pub text: String,
    pub weight: f64,
}

/// A respondent's answer; `value` is anything a form might post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentAnswer {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default)]
    pub value: Value,
}

impl AssessmentAnswer {
    pub fn new(id: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }

    pub fn is_affirmative(&self) -> bool {
        lenient::is_truthy(&self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDetail {
    pub id: String,
    pub weight: f64,
    pub value: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub score: u32,
    /// 0-5 scale, two decimals.
    pub maturity: f64,
    pub detail: Vec<QuestionDetail>,
}

/// Body of `POST /public/10q/submit`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub industry: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub answers: Vec<AssessmentAnswer>,
}

/// Opaque reference handed back to respondents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionReference(pub String);

/// Stored submission with its computed result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSubmissionRecord {
    pub reference: SubmissionReference,
    pub company: Option<String>,
    pub email: Option<String>,
    pub industry: Option<String>,
    pub assessment: AssessmentResult,
    pub submitted_at: DateTime<Utc>,
}

/// Response of `GET /public/10q/questions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionSet {
    pub industry: String,
    pub questions: Vec<AssessmentQuestion>,
}
