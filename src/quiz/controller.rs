use std::sync::Arc;

use tracing::debug;

use crate::cue::{Cue, CuePlayer};
use crate::models::{Question, QuestionBank};
use crate::navigation::{Route, encode_answers};

/// State and actions of the quiz screen.
///
/// The answer sequence is sized once from the bank and never resized.
/// `current_index` only moves forward past an answered question.
pub struct QuizController {
    questions: Vec<Question>,
    current_index: usize,
    selected: Vec<Option<String>>,
    cues: Arc<dyn CuePlayer>,
}

impl QuizController {
    pub fn new(bank: &QuestionBank, cues: Arc<dyn CuePlayer>) -> Self {
        Self {
            questions: bank.questions().to_vec(),
            current_index: 0,
            selected: vec![None; bank.len()],
            cues,
        }
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn selected_answers(&self) -> &[Option<String>] {
        &self.selected
    }

    pub fn current_answer(&self) -> Option<&str> {
        self.selected[self.current_index].as_deref()
    }

    /// Index of the chosen option for the current question, if any.
    pub fn current_answer_index(&self) -> Option<usize> {
        let answer = self.current_answer()?;
        self.current_question()
            .options
            .iter()
            .position(|option| option == answer)
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    pub fn can_go_next(&self) -> bool {
        !self.is_last() && self.current_answer().is_some()
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_submit(&self) -> bool {
        self.is_last() && self.current_answer().is_some()
    }

    /// Record option `option` of the current question as its answer.
    ///
    /// Returns `false` and changes nothing if the index is out of range.
    pub fn select_option(&mut self, option: usize) -> bool {
        let question = &self.questions[self.current_index];
        let Some(text) = question.options.get(option) else {
            return false;
        };

        let cue = if question.is_correct(text) {
            Cue::Correct
        } else {
            Cue::Wrong
        };
        debug!(question = self.current_index, option = %text, "option selected");
        self.selected[self.current_index] = Some(text.clone());
        self.cues.play(cue);
        true
    }

    pub fn go_next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.current_index += 1;
        self.cues.play(Cue::Click);
        true
    }

    pub fn go_previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.current_index -= 1;
        self.cues.play(Cue::Click);
        true
    }

    /// Hand the answers off to the results screen.
    ///
    /// Only available on the last question once it has been answered.
    pub fn submit(&self) -> Option<Route> {
        if !self.can_submit() {
            return None;
        }
        self.cues.play(Cue::Click);
        Some(Route::Results {
            answers: Some(encode_answers(&self.selected)),
        })
    }
}
