//! URL-style hand-off between the quiz and results screens.

mod payload;
mod route;

pub use payload::{decode_answers, encode_answers};
pub use route::{ANSWERS_PARAM, QUIZ_PATH, RESULTS_PATH, Route};
