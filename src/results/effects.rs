//! Timers owned by the results screen.
//!
//! Both timers run as tokio tasks that are aborted when [`ResultsEffects`]
//! is dropped, whichever way the screen is left.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

/// How long the counter takes to climb from 0 to the final percent.
pub const COUNTER_DURATION: Duration = Duration::from_millis(1500);
pub const COUNTER_STEP: Duration = Duration::from_millis(20);
/// How long confetti stays on screen after the results appear.
pub const CONFETTI_DURATION: Duration = Duration::from_millis(4000);

#[derive(Debug)]
struct Shared {
    counter: AtomicU32,
    confetti_visible: AtomicBool,
}

pub struct ResultsEffects {
    shared: Arc<Shared>,
    tasks: Vec<JoinHandle<()>>,
}

impl ResultsEffects {
    /// Start the counter animation towards `target` and the confetti timer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(target: u32) -> Self {
        let shared = Arc::new(Shared {
            counter: AtomicU32::new(0),
            confetti_visible: AtomicBool::new(true),
        });

        let counter = tokio::spawn(run_counter(Arc::clone(&shared), target));
        let confetti = tokio::spawn(run_confetti_timer(Arc::clone(&shared)));

        Self {
            shared,
            tasks: vec![counter, confetti],
        }
    }

    /// Value the counter currently displays.
    pub fn counter(&self) -> u32 {
        self.shared.counter.load(Ordering::Relaxed)
    }

    pub fn confetti_visible(&self) -> bool {
        self.shared.confetti_visible.load(Ordering::Relaxed)
    }
}

impl Drop for ResultsEffects {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
        debug!("results timers cancelled");
    }
}

/// One counter tick: advance by a fixed fraction of `target`, clamped.
pub fn counter_step(current: f64, target: u32) -> f64 {
    let steps = COUNTER_DURATION.as_millis() as f64 / COUNTER_STEP.as_millis() as f64;
    let target = f64::from(target);
    let next = current + target / steps;
    if next >= target { target } else { next }
}

async fn run_counter(shared: Arc<Shared>, target: u32) {
    let mut ticker = time::interval(COUNTER_STEP);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; the counter moves one step later.
    ticker.tick().await;

    let mut value = 0.0;
    loop {
        ticker.tick().await;
        value = counter_step(value, target);
        shared.counter.store(value.floor() as u32, Ordering::Relaxed);
        if value >= f64::from(target) {
            break;
        }
    }
}

async fn run_confetti_timer(shared: Arc<Shared>) {
    time::sleep(CONFETTI_DURATION).await;
    shared.confetti_visible.store(false, Ordering::Relaxed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_step_clamps_at_target() {
        assert_eq!(counter_step(0.0, 0), 0.0);
        assert!((counter_step(0.0, 75) - 1.0).abs() < f64::EPSILON);
        assert_eq!(counter_step(74.5, 75), 75.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_counter_climbs_monotonically_to_target() {
        let effects = ResultsEffects::start(100);
        assert_eq!(effects.counter(), 0);

        let mut last = 0;
        for _ in 0..40 {
            time::sleep(COUNTER_STEP).await;
            let now = effects.counter();
            assert!(now >= last);
            last = now;
        }
        assert!(last > 0 && last < 100);

        time::sleep(COUNTER_DURATION).await;
        assert_eq!(effects.counter(), 100);
    }

    #[tokio::test(start_paused = true)]
    async fn test_uneven_target_lands_exactly() {
        let effects = ResultsEffects::start(50);
        time::sleep(COUNTER_DURATION - COUNTER_STEP * 2).await;
        assert!(effects.counter() < 50);

        time::sleep(COUNTER_STEP * 4).await;
        assert_eq!(effects.counter(), 50);

        time::sleep(COUNTER_DURATION).await;
        assert_eq!(effects.counter(), 50);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_target_stays_at_zero() {
        let effects = ResultsEffects::start(0);
        time::sleep(COUNTER_DURATION * 2).await;
        assert_eq!(effects.counter(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_confetti_hides_after_timeout() {
        let effects = ResultsEffects::start(50);
        time::sleep(CONFETTI_DURATION - Duration::from_millis(10)).await;
        assert!(effects.confetti_visible());

        time::sleep(Duration::from_millis(20)).await;
        assert!(!effects.confetti_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_timers() {
        let effects = ResultsEffects::start(100);
        let shared = Arc::clone(&effects.shared);
        time::sleep(Duration::from_millis(200)).await;
        let frozen = shared.counter.load(Ordering::Relaxed);
        assert!(frozen < 100);

        drop(effects);
        time::sleep(CONFETTI_DURATION).await;

        assert_eq!(shared.counter.load(Ordering::Relaxed), frozen);
        assert!(shared.confetti_visible.load(Ordering::Relaxed));
    }
}
