use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{error, info};

use crate::config::QuizOptions;
use crate::cue::{Cue, CuePlayer};
use crate::data::builtin_bank;
use crate::error::{QuizError, RouteError};
use crate::models::QuestionBank;
use crate::navigation::Route;
use crate::quiz::QuizController;
use crate::results::{ConfettiField, Evaluation, ResultsEffects, evaluate};

/// Duration of the slide-in when a question is shown.
pub const QUESTION_TRANSITION: Duration = Duration::from_millis(200);

pub struct QuizScreen {
    controller: QuizController,
    focused_option: usize,
    shown_at: Instant,
}

impl QuizScreen {
    fn new(bank: &QuestionBank, cues: Arc<dyn CuePlayer>) -> Self {
        Self {
            controller: QuizController::new(bank, cues),
            focused_option: 0,
            shown_at: Instant::now(),
        }
    }

    pub fn controller(&self) -> &QuizController {
        &self.controller
    }

    pub fn focused_option(&self) -> usize {
        self.focused_option
    }

    pub fn focus_next(&mut self) {
        let count = self.controller.current_question().options.len();
        self.focused_option = (self.focused_option + 1) % count;
    }

    pub fn focus_previous(&mut self) {
        let count = self.controller.current_question().options.len();
        self.focused_option = (self.focused_option + count - 1) % count;
    }

    pub fn select_focused(&mut self) -> bool {
        self.select(self.focused_option)
    }

    pub fn select(&mut self, option: usize) -> bool {
        let selected = self.controller.select_option(option);
        if selected {
            self.focused_option = option;
        }
        selected
    }

    pub fn next(&mut self) -> bool {
        let moved = self.controller.go_next();
        if moved {
            self.question_changed();
        }
        moved
    }

    pub fn previous(&mut self) -> bool {
        let moved = self.controller.go_previous();
        if moved {
            self.question_changed();
        }
        moved
    }

    pub fn submit(&self) -> Option<Route> {
        self.controller.submit()
    }

    /// Progress of the slide-in animation, from 0.0 (just shown) to 1.0.
    pub fn transition_progress(&self) -> f32 {
        let elapsed = self.shown_at.elapsed().as_secs_f32();
        (elapsed / QUESTION_TRANSITION.as_secs_f32()).min(1.0)
    }

    fn question_changed(&mut self) {
        self.focused_option = self.controller.current_answer_index().unwrap_or(0);
        self.shown_at = Instant::now();
    }
}

pub struct ResultsScreen {
    evaluation: Evaluation,
    effects: ResultsEffects,
    confetti: ConfettiField,
    cues: Arc<dyn CuePlayer>,
}

impl ResultsScreen {
    fn new(answers: Option<&str>, answer_key: &[String], cues: Arc<dyn CuePlayer>) -> Self {
        let evaluation = evaluate(answers, answer_key);
        Self {
            effects: ResultsEffects::start(evaluation.percent),
            evaluation,
            confetti: ConfettiField::burst(),
            cues,
        }
    }

    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    /// Percent shown by the animated counter.
    pub fn counter(&self) -> u32 {
        self.effects.counter()
    }

    /// Confetti to draw, while the confetti timer is running and pieces
    /// are still falling.
    pub fn confetti(&self) -> Option<&ConfettiField> {
        self.confetti_active().then_some(&self.confetti)
    }

    fn confetti_active(&self) -> bool {
        self.effects.confetti_visible() && !self.confetti.is_settled()
    }

    fn advance_frame(&mut self) {
        if self.confetti_active() {
            self.confetti.advance();
        }
    }

    fn restart(&self) -> Route {
        self.cues.play(Cue::Click);
        Route::Quiz
    }
}

pub enum Screen {
    Quiz(QuizScreen),
    Results(ResultsScreen),
}

/// Top-level application: the current screen and the route that mounted it.
///
/// Navigating replaces the screen outright; the quiz and results screens
/// never hold references to each other.
pub struct App {
    bank: QuestionBank,
    cues: Arc<dyn CuePlayer>,
    route: Route,
    screen: Screen,
}

impl App {
    /// Build the app on the built-in question bank.
    ///
    /// Mounting a results screen starts its timers, so this must run inside
    /// a tokio runtime.
    pub fn new(options: &QuizOptions) -> Result<Self, QuizError> {
        let bank = builtin_bank()?;
        Ok(Self::with_bank(
            bank,
            options.cue_player(),
            options.start_route.clone(),
        ))
    }

    pub fn with_bank(bank: QuestionBank, cues: Arc<dyn CuePlayer>, route: Route) -> Self {
        let screen = mount(&route, &bank, &cues);
        info!(route = %route, "screen mounted");
        Self {
            bank,
            cues,
            route,
            screen,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Replace the current screen with the one `route` names.
    pub fn navigate(&mut self, route: Route) {
        info!(from = %self.route, to = %route, "navigating");
        self.screen = mount(&route, &self.bank, &self.cues);
        self.route = route;
    }

    /// Navigate to a URL-style target such as `/result?ans=...`.
    pub fn open(&mut self, target: &str) -> Result<(), RouteError> {
        let route = Route::parse(target)?;
        self.navigate(route);
        Ok(())
    }

    /// Follow a route by its URL, the same way an external link would.
    pub fn follow(&mut self, route: Route) {
        let target = route.to_url();
        if let Err(err) = self.open(&target) {
            error!(error = %err, target = %target, "navigation failed");
        }
    }

    pub fn restart(&mut self) {
        if let Screen::Results(results) = &self.screen {
            let route = results.restart();
            self.follow(route);
        }
    }

    /// Advance frame-driven animations.
    pub fn on_frame(&mut self) {
        if let Screen::Results(results) = &mut self.screen {
            results.advance_frame();
        }
    }
}

fn mount(route: &Route, bank: &QuestionBank, cues: &Arc<dyn CuePlayer>) -> Screen {
    match route {
        Route::Quiz => Screen::Quiz(QuizScreen::new(bank, Arc::clone(cues))),
        Route::Results { answers } => Screen::Results(ResultsScreen::new(
            answers.as_deref(),
            &bank.answer_key(),
            Arc::clone(cues),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cue::testing::RecordingCues;
    use crate::results::Verdict;

    fn app(route: Route) -> (App, Arc<RecordingCues>) {
        let cues = RecordingCues::new();
        let app = App::with_bank(builtin_bank().unwrap(), cues.clone(), route);
        (app, cues)
    }

    fn quiz(app: &mut App) -> &mut QuizScreen {
        match app.screen_mut() {
            Screen::Quiz(quiz) => quiz,
            Screen::Results(_) => panic!("expected the quiz screen"),
        }
    }

    fn results(app: &App) -> &ResultsScreen {
        match app.screen() {
            Screen::Results(results) => results,
            Screen::Quiz(_) => panic!("expected the results screen"),
        }
    }

    #[tokio::test]
    async fn test_full_run_hands_answers_to_results() {
        let (mut app, _) = app(Route::Quiz);

        for option in [1, 1, 0, 2] {
            let screen = quiz(&mut app);
            assert!(screen.select(option));
            screen.next();
        }
        let route = quiz(&mut app).submit().unwrap();
        app.follow(route);

        assert_eq!(
            app.route(),
            &Route::Results {
                answers: Some(r#"["Meow-Meow","ice cream","blue","Two"]"#.to_string())
            }
        );
        let evaluation = results(&app).evaluation();
        assert_eq!((evaluation.score, evaluation.percent), (2, 50));
        assert_eq!(evaluation.verdict, Verdict::Negative);
    }

    #[tokio::test]
    async fn test_restart_mounts_a_fresh_quiz() {
        let (mut app, cues) = app(Route::Quiz);
        quiz(&mut app).select(1);
        app.navigate(Route::Results { answers: None });
        app.restart();

        assert_eq!(app.route(), &Route::Quiz);
        let screen = quiz(&mut app);
        assert_eq!(screen.controller().current_index(), 0);
        assert!(screen.controller().selected_answers().iter().all(Option::is_none));
        assert_eq!(cues.played(), vec![Cue::Correct, Cue::Click]);
    }

    #[tokio::test]
    async fn test_open_malformed_results_url_scores_zero() {
        let (mut app, _) = app(Route::Quiz);
        app.open("/result?ans=%5Bnot-json").unwrap();

        let evaluation = results(&app).evaluation();
        assert_eq!((evaluation.score, evaluation.percent), (0, 0));
        assert_eq!(evaluation.verdict, Verdict::Negative);
    }

    #[tokio::test]
    async fn test_open_unknown_path_keeps_current_screen() {
        let (mut app, _) = app(Route::Quiz);
        assert!(app.open("/nowhere").is_err());
        assert_eq!(app.route(), &Route::Quiz);
    }

    #[tokio::test]
    async fn test_focus_follows_question_changes() {
        let (mut app, _) = app(Route::Quiz);
        let screen = quiz(&mut app);
        screen.focus_previous();
        assert_eq!(screen.focused_option(), 2);
        assert!(screen.select_focused());
        assert_eq!(screen.controller().current_answer(), Some("Oink-Oink"));

        screen.next();
        assert_eq!(screen.focused_option(), 0);
        screen.previous();
        assert_eq!(screen.focused_option(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_confetti_stops_once_every_piece_has_fallen() {
        let (mut app, _) = app(Route::Results { answers: None });
        for _ in 0..300 {
            app.on_frame();
        }
        assert!(results(&app).confetti().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_results_confetti_disappears() {
        let (mut app, _) = app(Route::Results { answers: None });
        assert!(results(&app).confetti().is_some());

        tokio::time::sleep(crate::results::CONFETTI_DURATION * 2).await;
        app.on_frame();
        assert!(results(&app).confetti().is_none());
    }
}
