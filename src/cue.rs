//! Fire-and-forget audio feedback.

use std::io::{self, Write};

use tracing::debug;

/// A named audio feedback event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Click,
    Correct,
    Wrong,
}

impl Cue {
    pub fn asset(self) -> &'static str {
        match self {
            Cue::Click => "sounds/click.mp3",
            Cue::Correct => "sounds/correct.mp3",
            Cue::Wrong => "sounds/wrong.mp3",
        }
    }

    pub fn volume(self) -> f32 {
        match self {
            Cue::Click => 0.4,
            Cue::Correct | Cue::Wrong => 0.5,
        }
    }
}

/// Something that can play a [`Cue`].
///
/// Playing never fails from the caller's point of view and has no effect on
/// control flow.
pub trait CuePlayer: Send + Sync {
    fn play(&self, cue: Cue);
}

/// Rings the terminal bell for every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalBell;

impl CuePlayer for TerminalBell {
    fn play(&self, cue: Cue) {
        debug!(?cue, asset = cue.asset(), volume = cue.volume(), "playing cue");
        let mut stdout = io::stdout();
        if let Err(err) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
            debug!(error = %err, "terminal bell unavailable");
        }
    }
}

/// Drops every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl CuePlayer for Silent {
    fn play(&self, cue: Cue) {
        debug!(?cue, "cue muted");
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{Arc, Mutex};

    use super::{Cue, CuePlayer};

    /// Records every cue it is asked to play.
    #[derive(Default)]
    pub struct RecordingCues {
        played: Mutex<Vec<Cue>>,
    }

    impl RecordingCues {
        pub fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        pub fn played(&self) -> Vec<Cue> {
            self.played.lock().unwrap().clone()
        }
    }

    impl CuePlayer for RecordingCues {
        fn play(&self, cue: Cue) {
            self.played.lock().unwrap().push(cue);
        }
    }
}
