//! Session module - a controller wired to its tick source and input gate
//!
//! The session keeps the scheduler and keyboard listening in step with the
//! controller's phase: both run while a piece is falling, both stop on pause
//! and game over. Events are handled one at a time, in arrival order.

use rand::Rng;

use crate::controller::{GameController, TickOutcome};
use crate::rng::SimpleRng;
use crate::scheduler::Scheduler;
use crate::types::{GameAction, GamePhase};
use crate::view::View;

#[derive(Debug, Clone)]
pub struct Session<S, R = SimpleRng> {
    controller: GameController<R>,
    scheduler: S,
    listening: bool,
}

impl<S: Scheduler, R: Rng> Session<S, R> {
    pub fn new(controller: GameController<R>, scheduler: S) -> Self {
        Self {
            controller,
            scheduler,
            listening: false,
        }
    }

    /// Start the game; ticking and listening begin if the first piece fits.
    pub fn start(&mut self) -> bool {
        if !self.controller.start() {
            return false;
        }
        if self.controller.phase() == GamePhase::Active {
            self.scheduler.begin();
            self.listening = true;
        }
        true
    }

    /// Scheduler callback.
    pub fn on_tick(&mut self) -> TickOutcome {
        if !self.scheduler.is_running() {
            return TickOutcome::Ignored;
        }
        let outcome = self.controller.tick();
        if let TickOutcome::GameOver { .. } = outcome {
            self.stop();
        }
        outcome
    }

    /// Input callback. Dropped unless listening.
    pub fn on_input(&mut self, action: GameAction) -> bool {
        if !self.listening {
            return false;
        }
        self.controller.apply_action(action)
    }

    /// Pause control: stops ticking and listening when running, restarts
    /// both otherwise. Ignored before start and after game over.
    pub fn toggle_pause(&mut self) -> bool {
        if !matches!(
            self.controller.phase(),
            GamePhase::Active | GamePhase::Paused
        ) {
            return false;
        }

        if self.scheduler.is_running() {
            self.stop();
            self.controller.pause();
        } else {
            self.scheduler.begin();
            self.listening = true;
            self.controller.resume();
        }
        true
    }

    fn stop(&mut self) {
        self.scheduler.end();
        self.listening = false;
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn controller(&self) -> &GameController<R> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut GameController<R> {
        &mut self.controller
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Deliver pending notifications to `view`.
    pub fn flush_to<V: View + ?Sized>(&mut self, view: &mut V) {
        self.controller.flush_to(view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;

    fn session(seed: u32) -> Session<ManualScheduler> {
        Session::new(
            GameController::with_seed(10, 20, seed),
            ManualScheduler::new(),
        )
    }

    #[test]
    fn start_begins_ticking_and_listening() {
        let mut s = session(1);
        assert!(!s.is_listening());
        assert!(s.start());
        assert!(s.scheduler().is_running());
        assert!(s.is_listening());
        assert!(!s.start());
        assert_eq!(s.scheduler().begins(), 1);
    }

    #[test]
    fn ticks_are_ignored_before_start() {
        let mut s = session(1);
        assert_eq!(s.on_tick(), TickOutcome::Ignored);
        assert!(!s.on_input(GameAction::ShiftLeft));
    }

    #[test]
    fn pause_toggle_follows_scheduler() {
        let mut s = session(2);
        s.start();

        assert!(s.toggle_pause());
        assert!(!s.scheduler().is_running());
        assert!(!s.is_listening());
        assert_eq!(s.controller().phase(), GamePhase::Paused);
        assert_eq!(s.on_tick(), TickOutcome::Ignored);
        assert!(!s.on_input(GameAction::Rotate));

        assert!(s.toggle_pause());
        assert!(s.scheduler().is_running());
        assert!(s.is_listening());
        assert_eq!(s.controller().phase(), GamePhase::Active);
        assert_eq!(s.scheduler().begins(), 2);
        assert_eq!(s.scheduler().ends(), 1);
    }

    #[test]
    fn game_over_stops_everything() {
        let mut s = session(3);
        s.start();
        for _ in 0..10_000 {
            if let TickOutcome::GameOver { .. } = s.on_tick() {
                break;
            }
        }
        assert!(s.controller().is_game_over());
        assert!(!s.scheduler().is_running());
        assert!(!s.is_listening());
        assert!(!s.toggle_pause());
        assert_eq!(s.on_tick(), TickOutcome::Ignored);
    }
}
