use crate::error::BankError;
use crate::models::{Question, QuestionBank};

pub fn builtin_questions() -> Vec<Question> {
    vec![
        Question::new(
            "What sound does a cat make?",
            ["Bhau-Bhau", "Meow-Meow", "Oink-Oink"],
            "Meow-Meow",
        ),
        Question::new(
            "What would you probably find in your fridge?",
            ["shoes", "ice cream", "books"],
            "ice cream",
        ),
        Question::new(
            "What color are bananas?",
            ["blue", "yellow", "red"],
            "yellow",
        ),
        Question::new(
            "How many stars are in the sky?",
            ["Infinite", "100", "Two"],
            "Infinite",
        ),
    ]
}

/// The fixed in-memory bank the quiz ships with.
pub fn builtin_bank() -> Result<QuestionBank, BankError> {
    QuestionBank::new(builtin_questions())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_answer_key() {
        assert_eq!(
            builtin_bank().unwrap().answer_key(),
            vec!["Meow-Meow", "ice cream", "yellow", "Infinite"]
        );
    }
}
