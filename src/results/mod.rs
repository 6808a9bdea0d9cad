mod confetti;
mod effects;
mod evaluator;

pub use confetti::{ConfettiField, PIECE_COUNT, Piece};
pub use effects::{CONFETTI_DURATION, COUNTER_DURATION, COUNTER_STEP, ResultsEffects, counter_step};
pub use evaluator::{
    Evaluation, PASS_THRESHOLD, Verdict, calculate_percentage, evaluate, evaluate_url, score_answers,
};
