//! Caret blink animation
//!
//! The timer is sampled, not scheduled: the host calls [`BlinkTimer::tick`]
//! once per frame with its elapsed clock. A late frame delays the next toggle
//! but never queues extra ones.

/// Blink state driven by an external clock
#[derive(Debug, Clone)]
pub struct BlinkTimer {
    period: f32,
    active: bool,
    visible: bool,
    last_toggle_time: f32,
    now: f32,
}

impl BlinkTimer {
    /// Create an inactive, hidden timer toggling every `period` seconds
    pub fn new(period: f32) -> Self {
        Self {
            period,
            active: false,
            visible: false,
            last_toggle_time: 0.0,
            now: 0.0,
        }
    }

    /// Seconds between toggles
    pub fn period(&self) -> f32 {
        self.period
    }

    /// Whether the caret is drawn
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Whether blinking is enabled
    pub fn active(&self) -> bool {
        self.active
    }

    /// Clock value of the last visibility change
    pub fn last_toggle_time(&self) -> f32 {
        self.last_toggle_time
    }

    /// Show the caret and restart the cycle at the current clock
    pub fn show(&mut self) {
        self.set_visible(true);
    }

    /// Enable blinking with the caret shown
    pub fn activate(&mut self) {
        self.active = true;
        self.set_visible(true);
    }

    /// Disable blinking; the caret stays hidden until reactivated
    pub fn deactivate(&mut self) {
        self.active = false;
        self.set_visible(false);
    }

    /// Sample the clock
    ///
    /// Values older than the last sample are ignored.
    pub fn tick(&mut self, elapsed: f32) {
        if elapsed < self.now {
            log::trace!("Ignoring blink tick at {elapsed}s, clock is already at {}s", self.now);
            return;
        }
        self.now = elapsed;

        if self.active && self.now - self.last_toggle_time >= self.period {
            self.set_visible(!self.visible);
        }
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.last_toggle_time = self.now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_timer_never_blinks() {
        let mut timer = BlinkTimer::new(0.5);

        for frame in 0..10u8 {
            timer.tick(f32::from(frame) * 0.25);
            assert!(!timer.visible());
        }
    }

    #[test]
    fn test_toggles_each_period() {
        let mut timer = BlinkTimer::new(0.5);
        timer.activate();
        assert!(timer.visible());

        timer.tick(0.25);
        assert!(timer.visible());

        timer.tick(0.5);
        assert!(!timer.visible());
        assert_eq!(timer.last_toggle_time(), 0.5);

        timer.tick(0.75);
        assert!(!timer.visible());

        timer.tick(1.0);
        assert!(timer.visible());
    }

    #[test]
    fn test_skipped_frames_toggle_once() {
        let mut timer = BlinkTimer::new(0.5);
        timer.activate();

        timer.tick(3.0);
        assert!(!timer.visible());
        assert_eq!(timer.last_toggle_time(), 3.0);

        timer.tick(3.25);
        assert!(!timer.visible());
    }

    #[test]
    fn test_show_restarts_cycle() {
        let mut timer = BlinkTimer::new(0.5);
        timer.activate();
        timer.tick(0.5);
        assert!(!timer.visible());

        timer.tick(0.7);
        timer.show();
        assert!(timer.visible());
        assert_eq!(timer.last_toggle_time(), 0.7);

        timer.tick(1.0);
        assert!(timer.visible());
        timer.tick(1.2);
        assert!(!timer.visible());
    }

    #[test]
    fn test_clock_going_backwards_is_ignored() {
        let mut timer = BlinkTimer::new(0.5);
        timer.activate();
        timer.tick(2.0);
        let visible = timer.visible();

        timer.tick(1.0);
        assert_eq!(timer.visible(), visible);
        assert_eq!(timer.last_toggle_time(), 2.0);
    }

    #[test]
    fn test_deactivate_hides() {
        let mut timer = BlinkTimer::new(0.5);
        timer.activate();
        timer.deactivate();

        assert!(!timer.active());
        assert!(!timer.visible());
        timer.tick(5.0);
        assert!(!timer.visible());
    }
}
