//! Text screens for the OLED.

use crate::error::Error;
use crate::hal::TextSurface;
use crate::monitor::SystemState;
use crate::ui::ScreenContent;

/// One line of a screen, anchored at its top-left pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextLine {
    pub column: i32,
    pub row: i32,
    pub text: &'static str,
}

const fn line(row: i32, text: &'static str) -> TextLine {
    TextLine {
        column: 0,
        row,
        text,
    }
}

const WELCOME: [TextLine; 4] = [
    line(0, "Structure"),
    line(16, "Monitoring"),
    line(32, "Waiting for"),
    line(48, "sensors..."),
];

const ARMED_IDLE: [TextLine; 2] = [line(16, "Monitoring"), line(32, "ACTIVE")];

const DISARMED: [TextLine; 2] = [line(16, "Monitoring"), line(32, "INACTIVE")];

const ALERT_VIBRATION: [TextLine; 3] = [
    line(16, "ALERT:"),
    line(32, "EXCESSIVE"),
    line(48, "VIBRATION!"),
];

impl ScreenContent {
    /// The screen that belongs to `state`.
    pub fn for_state(state: SystemState) -> Self {
        match state {
            SystemState::Inactive => ScreenContent::Disarmed,
            SystemState::Monitoring => ScreenContent::ArmedIdle,
            SystemState::Alerting => ScreenContent::AlertVibration,
        }
    }

    pub fn lines(self) -> &'static [TextLine] {
        match self {
            ScreenContent::Welcome => &WELCOME,
            ScreenContent::ArmedIdle => &ARMED_IDLE,
            ScreenContent::Disarmed => &DISARMED,
            ScreenContent::AlertVibration => &ALERT_VIBRATION,
        }
    }
}

/// Draws whole screens onto a [`TextSurface`].
pub struct DisplayPresenter<S> {
    surface: S,
    current: Option<ScreenContent>,
}

impl<S: TextSurface> DisplayPresenter<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            current: None,
        }
    }

    /// Clear, draw and commit `screen`.
    ///
    /// Every call redraws from a blank buffer. A failed draw is logged and
    /// the screen is still recorded as current; the next transition redraws.
    pub fn show(&mut self, screen: ScreenContent) {
        if let Err(e) = self.render(screen) {
            warn!("display: {} not drawn: {}", screen, e);
        }
        self.current = Some(screen);
    }

    /// Last screen requested.
    pub fn current(&self) -> Option<ScreenContent> {
        self.current
    }

    fn render(&mut self, screen: ScreenContent) -> Result<(), Error> {
        self.surface.clear()?;
        for line in screen.lines() {
            self.surface.draw_text(line.column, line.row, line.text)?;
        }
        self.surface.commit()
    }
}
