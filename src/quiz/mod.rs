mod controller;

pub use controller::QuizController;
