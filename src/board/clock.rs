use embassy_time::Instant;
use vibmon::hal::Clock;

/// Milliseconds since the Embassy time driver started.
pub struct Uptime;

impl Clock for Uptime {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
