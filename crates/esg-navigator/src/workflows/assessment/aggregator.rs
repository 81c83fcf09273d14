use super::domain::{AssessmentAnswer, AssessmentQuestion, AssessmentResult, QuestionDetail};

/// Weighted percentage of affirmative answers over the bank, in bank order.
///
/// The first answer per id counts; ids outside the bank are ignored and
/// unanswered questions score zero. An empty bank scores zero.
pub fn aggregate(bank: &[AssessmentQuestion], answers: &[AssessmentAnswer]) -> AssessmentResult {
    let mut weighted_total = 0.0;
    let mut max_total = 0.0;
    let mut detail = Vec::with_capacity(bank.len());

    for question in bank {
        let value = answers
            .iter()
            .find(|answer| answer.id == question.id)
            .map(|answer| u8::from(answer.is_affirmative()))
            .unwrap_or(0);

        weighted_total += question.weight * f64::from(value);
        max_total += question.weight;
        detail.push(QuestionDetail {
            id: question.id.clone(),
            weight: question.weight,
            value,
        });
    }

    let score = if max_total > 0.0 {
        (100.0 * weighted_total / max_total).round() as u32
    } else {
        0
    };

    AssessmentResult {
        score,
        maturity: maturity(score),
        detail,
    }
}

/// Percentage mapped onto the 0-5 scale, rounded to two decimals.
pub fn maturity(score: u32) -> f64 {
    (f64::from(score) / 20.0 * 100.0).round() / 100.0
}
