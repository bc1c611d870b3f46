//! Shared test support for deterministic timestamps.

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

/// Clock returning a strictly increasing timestamp on every reading.
///
/// Each call advances one millisecond past the previous reading, so tests
/// can assert ordering and timestamp refresh without sleeping.
#[derive(Debug)]
pub struct SteppingClock {
    base: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    /// Creates a stepping clock starting at a fixed instant.
    pub fn new() -> Self {
        Self {
            base: Utc
                .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
                .single()
                .expect("fixed test instant is valid"),
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.base + Duration::milliseconds(tick)
    }
}
