//! Polled button input with debouncing.
//!
//! Both buttons are active-low with pull-ups.  A press is reported once, on
//! the first tick that sees the line low, and only if the same button's
//! previous accepted press is at least the debounce window old.  The line
//! must be seen released before another press can count, so holding a
//! button never repeats.

use embedded_hal::digital::InputPin;

use crate::config::BUTTON_DEBOUNCE_MS;
use crate::error::Error;
use crate::ui::ButtonEvent;

/// Edge + time filter for one button line (no I/O).
#[derive(Clone, Debug)]
pub struct PressFilter {
    window_ms: u64,
    held: bool,
    last_press_ms: Option<u64>,
}

impl PressFilter {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            held: false,
            last_press_ms: None,
        }
    }

    /// Feed one observation of the line. Returns `true` for an accepted press.
    pub fn update(&mut self, active: bool, now_ms: u64) -> bool {
        if !active {
            self.held = false;
            return false;
        }
        if self.held {
            return false;
        }
        // A rejected press still counts as held, so chatter inside the
        // window can't turn into a late press.
        self.held = true;

        let settled = self
            .last_press_ms
            .map_or(true, |last| now_ms.saturating_sub(last) >= self.window_ms);
        if settled {
            self.last_press_ms = Some(now_ms);
        }
        settled
    }
}

/// A button line plus its filter.
pub struct DebouncedButton<P> {
    pin: P,
    filter: PressFilter,
}

impl<P: InputPin> DebouncedButton<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            filter: PressFilter::new(BUTTON_DEBOUNCE_MS),
        }
    }

    /// Sample the line. A read failure counts as "no press" and leaves the
    /// filter untouched.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.pin.is_low().map_err(|_| Error::Input) {
            Ok(low) => self.filter.update(low, now_ms),
            Err(e) => {
                warn!("buttons: read failed: {}", e);
                false
            }
        }
    }
}

/// Presses seen during one poll of both buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Presses {
    pub arm: bool,
    pub disarm: bool,
}

impl Presses {
    /// Accepted presses in handling order: ARM first, then DISARM.
    pub fn events(self) -> impl Iterator<Item = ButtonEvent> {
        [(self.arm, ButtonEvent::Arm), (self.disarm, ButtonEvent::Disarm)]
            .into_iter()
            .filter_map(|(pressed, event)| pressed.then_some(event))
    }
}

/// The ARM and DISARM buttons.
pub struct InputDebouncer<P> {
    arm: DebouncedButton<P>,
    disarm: DebouncedButton<P>,
}

impl<P: InputPin> InputDebouncer<P> {
    pub fn new(arm: P, disarm: P) -> Self {
        Self {
            arm: DebouncedButton::new(arm),
            disarm: DebouncedButton::new(disarm),
        }
    }

    /// Poll both lines.
    pub fn poll(&mut self, now_ms: u64) -> Presses {
        let presses = Presses {
            arm: self.arm.poll(now_ms),
            disarm: self.disarm.poll(now_ms),
        };
        for event in presses.events() {
            debug!("buttons: {} at {}ms", event, now_ms);
        }
        presses
    }

    /// Poll only DISARM (the one input honoured while the alarm sounds).
    pub fn poll_disarm(&mut self, now_ms: u64) -> bool {
        let pressed = self.disarm.poll(now_ms);
        if pressed {
            debug!("buttons: {} at {}ms", ButtonEvent::Disarm, now_ms);
        }
        pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use embedded_hal::digital::{ErrorKind, ErrorType};
    use std::rc::Rc;

    /// Line level shared with the test; `None` makes reads fail.
    #[derive(Clone)]
    struct Line(Rc<Cell<Option<bool>>>);

    impl Line {
        fn new() -> Self {
            Line(Rc::new(Cell::new(Some(true))))
        }
        fn press(&self) {
            self.0.set(Some(false));
        }
        fn release(&self) {
            self.0.set(Some(true));
        }
        fn break_line(&self) {
            self.0.set(None);
        }
    }

    impl ErrorType for Line {
        type Error = ErrorKind;
    }

    impl InputPin for Line {
        fn is_high(&mut self) -> Result<bool, ErrorKind> {
            self.0.get().ok_or(ErrorKind::Other)
        }
        fn is_low(&mut self) -> Result<bool, ErrorKind> {
            self.is_high().map(|high| !high)
        }
    }

    #[test]
    fn first_press_is_accepted_immediately() {
        let mut filter = PressFilter::new(200);
        assert!(filter.update(true, 0));
    }

    #[test]
    fn holding_reports_once() {
        let mut filter = PressFilter::new(200);
        assert!(filter.update(true, 1_000));
        for t in (1_100..5_000).step_by(100) {
            assert!(!filter.update(true, t));
        }
    }

    #[test]
    fn presses_inside_window_collapse_to_one() {
        let mut filter = PressFilter::new(200);
        assert!(filter.update(true, 1_000));
        assert!(!filter.update(false, 1_050));
        assert!(!filter.update(true, 1_150));
        // Still held after the window closes: not a new press.
        assert!(!filter.update(true, 1_300));
    }

    #[test]
    fn presses_outside_window_count_twice() {
        let mut filter = PressFilter::new(200);
        assert!(filter.update(true, 1_000));
        assert!(!filter.update(false, 1_100));
        assert!(filter.update(true, 1_250));
    }

    #[test]
    fn press_exactly_at_window_counts() {
        let mut filter = PressFilter::new(200);
        assert!(filter.update(true, 0));
        filter.update(false, 100);
        assert!(filter.update(true, 200));
    }

    #[test]
    fn lines_are_independent() {
        let (arm, disarm) = (Line::new(), Line::new());
        let mut buttons = InputDebouncer::new(arm.clone(), disarm.clone());

        arm.press();
        assert_eq!(buttons.poll(0), Presses { arm: true, disarm: false });

        disarm.press();
        assert_eq!(buttons.poll(50), Presses { arm: false, disarm: true });
    }

    #[test]
    fn events_keep_arm_before_disarm() {
        let both = Presses { arm: true, disarm: true };
        let events: Vec<_> = both.events().collect();
        assert_eq!(events, [ButtonEvent::Arm, ButtonEvent::Disarm]);
        assert_eq!(Presses::default().events().count(), 0);
    }

    #[test]
    fn read_failure_is_no_press() {
        let (arm, disarm) = (Line::new(), Line::new());
        let mut buttons = InputDebouncer::new(arm.clone(), disarm.clone());

        disarm.break_line();
        assert!(!buttons.poll_disarm(0));

        // The failed read didn't mark the line as held.
        disarm.press();
        assert!(buttons.poll_disarm(100));
        disarm.release();
        assert!(!buttons.poll_disarm(200));
    }
}
