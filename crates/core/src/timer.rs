//! Timer module - the two session clocks
//!
//! The countdown and the mismatch hide delay are independent timers with
//! their own start/stop/arm contracts. Both consume elapsed milliseconds from
//! the fixed-timestep tick; neither can disturb the other's cadence.

use crate::types::SECOND_MS;

/// Whole-second countdown with an explicit run state.
///
/// `tick` consumes elapsed milliseconds and steps the remaining time down by
/// at most one second per accumulated `SECOND_MS`. The timer stops itself on
/// reaching zero, so expiry is observable exactly once.
#[derive(Debug, Clone)]
pub struct Countdown {
    remaining_secs: u32,
    acc_ms: u32,
    running: bool,
}

impl Countdown {
    /// Create a stopped countdown with a full budget.
    pub fn new(budget_secs: u32) -> Self {
        Self {
            remaining_secs: budget_secs,
            acc_ms: 0,
            running: false,
        }
    }

    /// Start (or resume) the countdown.
    pub fn start(&mut self) {
        if self.remaining_secs > 0 {
            self.running = true;
        }
    }

    /// Stop the countdown without touching the remaining budget.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Restore a full budget and stop.
    pub fn reset(&mut self, budget_secs: u32) {
        self.remaining_secs = budget_secs;
        self.acc_ms = 0;
        self.running = false;
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance by `elapsed_ms`; returns how many whole seconds were consumed.
    ///
    /// Returns 0 while stopped. When the budget hits zero mid-tick the timer
    /// stops itself and surplus milliseconds are discarded.
    pub fn tick(&mut self, elapsed_ms: u32) -> u32 {
        if !self.running {
            return 0;
        }

        self.acc_ms += elapsed_ms;
        let mut consumed = 0;
        while self.acc_ms >= SECOND_MS && self.remaining_secs > 0 {
            self.acc_ms -= SECOND_MS;
            self.remaining_secs -= 1;
            consumed += 1;

            if self.remaining_secs == 0 {
                self.running = false;
                self.acc_ms = 0;
                break;
            }
        }
        consumed
    }
}

/// One-shot millisecond delay used to flip mismatched tiles back.
#[derive(Debug, Clone, Default)]
pub struct HideDelay {
    remaining_ms: Option<u32>,
}

impl HideDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the delay; re-arming restarts it.
    pub fn arm(&mut self, duration_ms: u32) {
        self.remaining_ms = Some(duration_ms);
    }

    /// Disarm without firing.
    pub fn cancel(&mut self) {
        self.remaining_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.remaining_ms.is_some()
    }

    /// Advance by `elapsed_ms`; returns true on the tick the delay fires.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        match self.remaining_ms {
            Some(left) if left <= elapsed_ms => {
                self.remaining_ms = None;
                true
            }
            Some(left) => {
                self.remaining_ms = Some(left - elapsed_ms);
                false
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_steps_once_per_second() {
        let mut countdown = Countdown::new(3);
        countdown.start();

        assert_eq!(countdown.tick(999), 0);
        assert_eq!(countdown.remaining_secs(), 3);

        assert_eq!(countdown.tick(1), 1);
        assert_eq!(countdown.remaining_secs(), 2);
    }

    #[test]
    fn countdown_consumes_lag_in_whole_seconds() {
        let mut countdown = Countdown::new(10);
        countdown.start();

        assert_eq!(countdown.tick(2500), 2);
        assert_eq!(countdown.remaining_secs(), 8);
        // The leftover 500ms still counts toward the next step.
        assert_eq!(countdown.tick(500), 1);
        assert_eq!(countdown.remaining_secs(), 7);
    }

    #[test]
    fn countdown_stops_itself_at_zero() {
        let mut countdown = Countdown::new(2);
        countdown.start();

        assert_eq!(countdown.tick(5000), 2);
        assert_eq!(countdown.remaining_secs(), 0);
        assert!(!countdown.is_running());

        // Expired timers ignore further ticks.
        assert_eq!(countdown.tick(5000), 0);
        assert_eq!(countdown.remaining_secs(), 0);
    }

    #[test]
    fn stopped_countdown_holds_its_budget() {
        let mut countdown = Countdown::new(30);
        countdown.start();
        countdown.tick(1000);
        countdown.stop();

        assert_eq!(countdown.tick(10_000), 0);
        assert_eq!(countdown.remaining_secs(), 29);

        countdown.start();
        assert_eq!(countdown.tick(1000), 1);
        assert_eq!(countdown.remaining_secs(), 28);
    }

    #[test]
    fn countdown_reset_restores_budget() {
        let mut countdown = Countdown::new(5);
        countdown.start();
        countdown.tick(3000);

        countdown.reset(60);
        assert_eq!(countdown.remaining_secs(), 60);
        assert!(!countdown.is_running());
    }

    #[test]
    fn hide_delay_fires_once() {
        let mut delay = HideDelay::new();
        assert!(!delay.tick(1000));

        delay.arm(1000);
        assert!(delay.is_armed());
        assert!(!delay.tick(999));
        assert!(delay.tick(1));
        assert!(!delay.is_armed());
        assert!(!delay.tick(1000));
    }

    #[test]
    fn hide_delay_cancel_disarms() {
        let mut delay = HideDelay::new();
        delay.arm(500);
        delay.cancel();
        assert!(!delay.tick(500));
    }

    #[test]
    fn timers_do_not_share_state() {
        let mut countdown = Countdown::new(60);
        let mut delay = HideDelay::new();
        countdown.start();
        delay.arm(1000);

        // Advancing one leaves the other untouched.
        assert_eq!(countdown.tick(1000), 1);
        assert!(delay.is_armed());
        assert!(delay.tick(1000));
        assert_eq!(countdown.remaining_secs(), 59);
    }
}
