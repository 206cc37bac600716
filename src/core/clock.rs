//! Wall-clock milliseconds, shared by rng seeding and step timing.

/// Milliseconds since the Unix epoch (`Date.now()` in the browser).
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Milliseconds since the Unix epoch, 0 if the system clock is before it.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

/// Milliseconds since `started_ms`, never negative when the clock steps back.
pub fn since_ms(started_ms: f64) -> f64 {
    (now_ms() - started_ms).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_past_the_epoch() {
        assert!(now_ms() > 0.0);
    }

    #[test]
    fn elapsed_time_is_never_negative() {
        assert!(since_ms(now_ms() + 60_000.0) == 0.0);
        assert!(since_ms(now_ms() - 5.0) >= 5.0);
    }
}
