//! Integration tests for vibmon host-testable logic.

use std::cell::RefCell;
use std::rc::Rc;

use vibmon::config::{BASELINE_VOLTS, VIBRATION_THRESHOLD_VOLTS};
use vibmon::hal::TextSurface;
use vibmon::{
    Color, DisplayPresenter, Error, IndicatorCommand, ScreenContent, SystemState, Trigger,
    VibrationSample,
};

/// Wraps a type from another crate, the way the firmware wraps the SSD1306
/// driver, so the surface can be implemented outside the library.
struct Panel(Rc<RefCell<(Vec<String>, Vec<String>)>>);

impl TextSurface for Panel {
    fn clear(&mut self) -> Result<(), Error> {
        self.0.borrow_mut().0.clear();
        Ok(())
    }

    fn draw_text(&mut self, _column: i32, _row: i32, text: &str) -> Result<(), Error> {
        self.0.borrow_mut().0.push(text.to_string());
        Ok(())
    }

    fn commit(&mut self) -> Result<(), Error> {
        let mut panel = self.0.borrow_mut();
        panel.1 = panel.0.clone();
        Ok(())
    }
}

/// Walk a full arm → alarm → acknowledge → disarm cycle through the public
/// state machine and check screen and indicator stay in step.
#[test]
fn full_cycle_keeps_outputs_consistent() {
    let steps = [
        (Trigger::Arm, SystemState::Monitoring, ScreenContent::ArmedIdle, Color::Green),
        (Trigger::Vibration, SystemState::Alerting, ScreenContent::AlertVibration, Color::Red),
        (Trigger::Disarm, SystemState::Monitoring, ScreenContent::ArmedIdle, Color::Green),
        (Trigger::Disarm, SystemState::Inactive, ScreenContent::Disarmed, Color::Blue),
    ];

    let mut state = SystemState::default();
    assert_eq!(state, SystemState::Inactive);

    for (trigger, next, screen, color) in steps {
        state = state.on(trigger).expect("transition should apply");
        assert_eq!(state, next);
        assert_eq!(ScreenContent::for_state(state), screen);
        assert_eq!(IndicatorCommand::for_state(state, false).color, color);
    }
}

#[test]
fn only_the_alarm_is_audible() {
    for state in [SystemState::Inactive, SystemState::Monitoring, SystemState::Alerting] {
        let audible = IndicatorCommand::for_state(state, true).audible;
        assert_eq!(audible, state == SystemState::Alerting);
    }
}

#[test]
fn sample_at_threshold_does_not_alarm() {
    // Sensor sits at baseline + threshold exactly.
    let at = VibrationSample {
        raw: 0,
        volts: BASELINE_VOLTS + VIBRATION_THRESHOLD_VOLTS,
        deviation: VIBRATION_THRESHOLD_VOLTS,
    };
    assert!(!at.exceeds(VIBRATION_THRESHOLD_VOLTS));

    // 0.30 V off baseline.
    assert!(VibrationSample::from_raw(2420).exceeds(VIBRATION_THRESHOLD_VOLTS));
    assert!(!VibrationSample::quiescent().exceeds(VIBRATION_THRESHOLD_VOLTS));
}

#[test]
fn welcome_screen_is_boot_only() {
    for state in [SystemState::Inactive, SystemState::Monitoring, SystemState::Alerting] {
        assert_ne!(ScreenContent::for_state(state), ScreenContent::Welcome);
    }
    assert_eq!(ScreenContent::Welcome.lines().len(), 4);
}

#[test]
fn surface_implemented_outside_the_library_drives_presenter() {
    let panel = Rc::new(RefCell::new((Vec::new(), Vec::new())));
    let mut presenter = DisplayPresenter::new(Panel(panel.clone()));

    presenter.show(ScreenContent::Welcome);
    presenter.show(ScreenContent::AlertVibration);

    assert_eq!(presenter.current(), Some(ScreenContent::AlertVibration));
    assert_eq!(panel.borrow().1, ["ALERT:", "EXCESSIVE", "VIBRATION!"]);
}
