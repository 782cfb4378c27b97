use chrono::{DateTime, Duration, Utc};

/// Gates refreshes to at most one per interval.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    interval: Duration,
    last_refresh: DateTime<Utc>,
}

impl RateLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_refresh: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    pub fn from_secs(seconds: u64) -> Self {
        Self::new(Duration::seconds(seconds.min(u32::MAX as u64) as i64))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn last_refresh(&self) -> DateTime<Utc> {
        self.last_refresh
    }

    pub fn should_refresh(&self, now: DateTime<Utc>, force: bool) -> bool {
        force
            || self
                .last_refresh
                .checked_add_signed(self.interval)
                .is_some_and(|next| next <= now)
    }

    pub fn mark_refreshed(&mut self, now: DateTime<Utc>) {
        self.last_refresh = now;
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::from_secs(10)
    }
}
