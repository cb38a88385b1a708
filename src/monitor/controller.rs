//! The control loop.
//!
//! One call to [`MonitorController::tick`] is one step of the loop:
//!
//! - **Inactive / Monitoring**: poll ARM then DISARM, apply each press; after
//!   a press that changed the state wait [`BUTTON_SETTLE_MS`].  While
//!   monitoring, take one sample; a sample over the threshold switches to
//!   Alerting and ends the tick straight away.  Otherwise wait
//!   [`TICK_PERIOD_MS`].
//! - **Alerting** (alert-hold phase): play one tone burst, wait
//!   [`ALERT_RECHECK_MS`], then poll DISARM only.  ARM and the sensor are
//!   ignored until the alarm is acknowledged.
//!
//! Screen and indicator always change together with the state, inside the
//! same tick.

use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::pwm::SetDutyCycle;
use embedded_hal_async::delay::DelayNs;

use super::{SystemState, Trigger};
use crate::config::{ALERT_RECHECK_MS, BUTTON_SETTLE_MS, TICK_PERIOD_MS, VIBRATION_THRESHOLD_VOLTS};
use crate::hal::{AnalogSource, Clock, TextSurface};
use crate::sensor::AnalogSampler;
use crate::ui::buttons::InputDebouncer;
use crate::ui::display::DisplayPresenter;
use crate::ui::indicator::IndicatorDriver;
use crate::ui::ScreenContent;

/// Owns the system state and every collaborator; drives the loop.
pub struct MonitorController<A, I, O, P, S, D, C> {
    state: SystemState,
    sampler: AnalogSampler<A>,
    buttons: InputDebouncer<I>,
    indicator: IndicatorDriver<O, P>,
    presenter: DisplayPresenter<S>,
    delay: D,
    clock: C,
}

impl<A, I, O, P, S, D, C> MonitorController<A, I, O, P, S, D, C>
where
    A: AnalogSource,
    I: InputPin,
    O: OutputPin,
    P: SetDutyCycle,
    S: TextSurface,
    D: DelayNs,
    C: Clock,
{
    /// Build a controller in the Inactive state. Call [`start`](Self::start)
    /// (or [`run`](Self::run)) before ticking.
    pub fn new(
        sampler: AnalogSampler<A>,
        buttons: InputDebouncer<I>,
        indicator: IndicatorDriver<O, P>,
        presenter: DisplayPresenter<S>,
        delay: D,
        clock: C,
    ) -> Self {
        Self {
            state: SystemState::Inactive,
            sampler,
            buttons,
            indicator,
            presenter,
            delay,
            clock,
        }
    }

    /// Current system state.
    pub fn state(&self) -> SystemState {
        self.state
    }

    /// Screen last sent to the display.
    pub fn screen(&self) -> Option<ScreenContent> {
        self.presenter.current()
    }

    /// Put the outputs in their power-on combination and show the welcome
    /// screen.
    pub async fn start(&mut self) {
        info!("monitor: starting in {}", self.state);
        self.indicator.apply(self.state, false, &mut self.delay).await;
        self.presenter.show(ScreenContent::Welcome);
    }

    /// Run forever.
    pub async fn run(mut self) -> ! {
        self.start().await;
        loop {
            self.tick().await;
        }
    }

    /// Run one step of the loop and return the resulting state.
    pub async fn tick(&mut self) -> SystemState {
        match self.state {
            SystemState::Alerting => self.hold_alarm().await,
            SystemState::Inactive | SystemState::Monitoring => self.supervise().await,
        }
        self.state
    }

    async fn supervise(&mut self) {
        let presses = self.buttons.poll(self.clock.now_ms());
        for event in presses.events() {
            if self.fire(event.into()).await {
                self.delay.delay_ms(BUTTON_SETTLE_MS).await;
            }
        }

        if self.state == SystemState::Monitoring {
            let sample = self.sampler.sample();
            if sample.exceeds(VIBRATION_THRESHOLD_VOLTS) {
                info!(
                    "monitor: deviation {}V over {}V (raw {})",
                    sample.deviation,
                    VIBRATION_THRESHOLD_VOLTS,
                    sample.raw
                );
                self.fire(Trigger::Vibration).await;
                return;
            }
        }

        self.delay.delay_ms(TICK_PERIOD_MS).await;
    }

    async fn hold_alarm(&mut self) {
        self.indicator
            .apply(SystemState::Alerting, true, &mut self.delay)
            .await;
        self.delay.delay_ms(ALERT_RECHECK_MS).await;

        if self.buttons.poll_disarm(self.clock.now_ms()) {
            self.fire(Trigger::Disarm).await;
            self.delay.delay_ms(TICK_PERIOD_MS).await;
        }
    }

    /// Apply `trigger`. Returns `true` if the state changed.
    async fn fire(&mut self, trigger: Trigger) -> bool {
        let Some(next) = self.state.on(trigger) else {
            debug!("monitor: {} ignored in {}", trigger, self.state);
            return false;
        };

        info!("monitor: {} -> {} ({})", self.state, next, trigger);
        self.state = next;
        self.presenter.show(ScreenContent::for_state(next));
        self.indicator.apply(next, false, &mut self.delay).await;
        true
    }
}
