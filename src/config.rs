use std::sync::Arc;

use crate::cue::{CuePlayer, Silent, TerminalBell};
use crate::navigation::Route;

/// Options a quiz session is started with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOptions {
    /// Screen shown first.
    pub start_route: Route,
    /// Replace sound cues with a no-op player.
    pub muted: bool,
}

impl QuizOptions {
    pub fn cue_player(&self) -> Arc<dyn CuePlayer> {
        if self.muted {
            Arc::new(Silent)
        } else {
            Arc::new(TerminalBell)
        }
    }
}

impl Default for QuizOptions {
    fn default() -> Self {
        Self {
            start_route: Route::Quiz,
            muted: false,
        }
    }
}
