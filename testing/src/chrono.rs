//! Fixed-clock stand-in for `chrono::Utc` so backend tests see a
//! deterministic timestamp.

pub const TEST_TIMESTAMP: i64 = 1234567890;

pub struct Utc;

pub struct FixedInstant;

impl Utc {
    pub fn now() -> FixedInstant {
        FixedInstant
    }
}

impl FixedInstant {
    pub fn timestamp(&self) -> i64 {
        TEST_TIMESTAMP
    }
}
