use serde::Serialize;
use tracing::info;

use crate::error::RouteError;
use crate::models::QuestionBank;
use crate::navigation::{Route, decode_answers};

/// Minimum percent for a positive verdict.
pub const PASS_THRESHOLD: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Positive,
    Negative,
}

impl Verdict {
    pub fn from_percent(percent: u32) -> Self {
        if percent >= PASS_THRESHOLD {
            Verdict::Positive
        } else {
            Verdict::Negative
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Verdict::Positive => "😺",
            Verdict::Negative => "😿",
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Verdict::Positive => "Great Job!",
            Verdict::Negative => "Keep Practicing!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub score: usize,
    pub total: usize,
    pub percent: u32,
    pub verdict: Verdict,
}

/// Score a serialized answers payload against `answer_key`.
///
/// A missing or unreadable payload scores as if nothing was answered.
pub fn evaluate(payload: Option<&str>, answer_key: &[String]) -> Evaluation {
    let evaluation = score_answers(&decode_answers(payload), answer_key);
    info!(
        score = evaluation.score,
        total = evaluation.total,
        percent = evaluation.percent,
        verdict = ?evaluation.verdict,
        "answers evaluated"
    );
    evaluation
}

/// Score the answers carried by a results URL such as `/result?ans=...`.
///
/// Fails only when the URL does not point at the results screen; a bad
/// `ans` payload still scores as unanswered.
pub fn evaluate_url(url: &str, bank: &QuestionBank) -> Result<Evaluation, RouteError> {
    match Route::parse(url)? {
        Route::Results { answers } => Ok(evaluate(answers.as_deref(), &bank.answer_key())),
        Route::Quiz => Err(RouteError::NotResults {
            target: url.to_string(),
        }),
    }
}

/// Count positional matches. Only indices present in both sequences are
/// compared, as exact text.
pub fn score_answers(answers: &[Option<String>], answer_key: &[String]) -> Evaluation {
    let score = answers
        .iter()
        .zip(answer_key)
        .filter(|(answer, correct)| answer.as_deref() == Some(correct.as_str()))
        .count();
    let total = answer_key.len();
    let percent = calculate_percentage(score, total);

    Evaluation {
        score,
        total,
        percent,
        verdict: Verdict::from_percent(percent),
    }
}

/// Whole percent, rounding halves away from zero. An empty key scores 0.
pub fn calculate_percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (score as f64 * 100.0 / total as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_bank;
    use crate::navigation::encode_answers;

    fn key() -> Vec<String> {
        builtin_bank().unwrap().answer_key()
    }

    fn payload(answers: &[&str]) -> String {
        let answers: Vec<Option<String>> = answers.iter().map(|a| Some(a.to_string())).collect();
        encode_answers(&answers)
    }

    #[test]
    fn test_all_correct() {
        let result = evaluate(
            Some(&payload(&["Meow-Meow", "ice cream", "yellow", "Infinite"])),
            &key(),
        );
        assert_eq!(result.score, 4);
        assert_eq!(result.percent, 100);
        assert_eq!(result.verdict, Verdict::Positive);
    }

    #[test]
    fn test_all_wrong() {
        let result = evaluate(Some(&payload(&["Bhau-Bhau", "shoes", "blue", "Two"])), &key());
        assert_eq!(result.score, 0);
        assert_eq!(result.percent, 0);
        assert_eq!(result.verdict, Verdict::Negative);
    }

    #[test]
    fn test_half_correct_is_negative() {
        let result = evaluate(
            Some(&payload(&["Meow-Meow", "shoes", "yellow", "Two"])),
            &key(),
        );
        assert_eq!(result.score, 2);
        assert_eq!(result.percent, 50);
        assert_eq!(result.verdict, Verdict::Negative);
    }

    #[test]
    fn test_missing_or_malformed_payload_scores_zero() {
        for bad in [None, Some("not json"), Some("{\"ans\":1}"), Some("")] {
            let result = evaluate(bad, &key());
            assert_eq!(result.score, 0);
            assert_eq!(result.total, 4);
            assert_eq!(result.percent, 0);
            assert_eq!(result.verdict, Verdict::Negative);
        }
    }

    #[test]
    fn test_length_mismatch_compares_common_prefix() {
        let short = evaluate(Some(&payload(&["Meow-Meow", "ice cream"])), &key());
        assert_eq!((short.score, short.total, short.percent), (2, 4, 50));

        let long = evaluate(
            Some(&payload(&["Meow-Meow", "ice cream", "yellow", "Infinite", "extra"])),
            &key(),
        );
        assert_eq!((long.score, long.percent), (4, 100));
    }

    #[test]
    fn test_comparison_is_exact_text() {
        let result = evaluate(
            Some(&payload(&["meow-meow", "ice cream ", "Yellow", "Infinite"])),
            &key(),
        );
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let answers = payload(&["Meow-Meow", "shoes", "yellow", "Infinite"]);
        let first = evaluate(Some(&answers), &key());
        let second = evaluate(Some(&answers), &key());
        assert_eq!(first, second);
        assert_eq!(first.verdict, Verdict::Positive);
    }

    #[test]
    fn test_percentage_rounds_half_away_from_zero() {
        assert_eq!(calculate_percentage(1, 3), 33);
        assert_eq!(calculate_percentage(2, 3), 67);
        assert_eq!(calculate_percentage(1, 8), 13);
        assert_eq!(calculate_percentage(3, 8), 38);
        assert_eq!(calculate_percentage(0, 0), 0);
    }

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(Verdict::from_percent(59), Verdict::Negative);
        assert_eq!(Verdict::from_percent(60), Verdict::Positive);
    }

    #[test]
    fn test_evaluate_url_reads_answers_param() {
        let bank = builtin_bank().unwrap();
        let url = Route::Results {
            answers: Some(payload(&["Meow-Meow", "ice cream", "yellow", "Two"])),
        }
        .to_url();

        let evaluation = evaluate_url(&url, &bank).unwrap();
        assert_eq!(
            evaluation,
            Evaluation {
                score: 3,
                total: 4,
                percent: 75,
                verdict: Verdict::Positive,
            }
        );
        assert_eq!(evaluate_url("/result", &bank).unwrap().score, 0);
    }

    #[test]
    fn test_evaluate_url_rejects_other_screens() {
        let bank = builtin_bank().unwrap();
        assert_eq!(
            evaluate_url("/", &bank).unwrap_err(),
            RouteError::NotResults {
                target: "/".to_string()
            }
        );
        assert!(matches!(
            evaluate_url("/nowhere", &bank),
            Err(RouteError::UnknownPath { .. })
        ));
    }

    #[test]
    fn test_evaluation_serializes_verdict_lowercase() {
        let json = serde_json::to_string(&score_answers(&[], &key())).unwrap();
        assert_eq!(
            json,
            r#"{"score":0,"total":4,"percent":0,"verdict":"negative"}"#
        );
    }
}
