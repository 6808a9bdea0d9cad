use std::collections::HashSet;

use crate::error::BankError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: String,
}

impl Question {
    pub fn new<P, O, C>(prompt: P, options: O, correct: C) -> Self
    where
        P: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
        C: Into<String>,
    {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct: correct.into(),
        }
    }

    pub fn is_correct(&self, option: &str) -> bool {
        self.correct == option
    }

    /// Position of the correct answer within `options`.
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|option| *option == self.correct)
    }

    fn validate(&self, number: usize) -> Result<(), BankError> {
        if self.options.is_empty() {
            return Err(BankError::NoOptions { number });
        }

        let mut seen = HashSet::with_capacity(self.options.len());
        for option in &self.options {
            if !seen.insert(option.as_str()) {
                return Err(BankError::DuplicateOption {
                    number,
                    option: option.clone(),
                });
            }
        }

        if self.correct_index().is_none() {
            return Err(BankError::CorrectNotAnOption {
                number,
                correct: self.correct.clone(),
            });
        }

        Ok(())
    }
}

/// A validated, non-empty, ordered list of questions.
///
/// The answer key used for scoring is always derived from the bank, so it
/// has the same length and order as the questions presented.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }

        for (index, question) in questions.iter().enumerate() {
            question.validate(index + 1)?;
        }

        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn answer_key(&self) -> Vec<String> {
        self.questions
            .iter()
            .map(|question| question.correct.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: &str) -> Question {
        Question::new("Pick one", ["a", "b"], correct)
    }

    #[test]
    fn test_bank_rejects_empty() {
        assert_eq!(QuestionBank::new(Vec::new()).unwrap_err(), BankError::Empty);
    }

    #[test]
    fn test_bank_rejects_correct_outside_options() {
        let err = QuestionBank::new(vec![question("a"), question("c")]).unwrap_err();
        assert_eq!(
            err,
            BankError::CorrectNotAnOption {
                number: 2,
                correct: "c".to_string()
            }
        );
    }

    #[test]
    fn test_bank_rejects_duplicate_and_missing_options() {
        let duplicate = Question::new("Pick one", ["a", "a"], "a");
        assert!(matches!(
            QuestionBank::new(vec![duplicate]),
            Err(BankError::DuplicateOption { number: 1, .. })
        ));

        let bare = Question::new("Pick one", Vec::<String>::new(), "a");
        assert_eq!(
            QuestionBank::new(vec![bare]).unwrap_err(),
            BankError::NoOptions { number: 1 }
        );
    }

    #[test]
    fn test_answer_key_follows_question_order() {
        let bank = QuestionBank::new(vec![question("b"), question("a")]).unwrap();
        assert_eq!(bank.answer_key(), vec!["b", "a"]);
        assert_eq!(bank.questions()[0].correct_index(), Some(1));
    }
}
