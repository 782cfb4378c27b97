use crate::client::Manager;
use crate::collectors::build_tables;
use crate::config::DisplayConfig;
use crate::renderer::{select_renderer, StatusRenderer};
use chrono::{DateTime, Utc};
use log::debug;

pub mod limiter;

pub use limiter::RateLimiter;

/// Periodic status display: a rate limited refresh feeding one renderer.
///
/// Calls to [`StatusDisplay::update`] must be serialized by the caller.
pub struct StatusDisplay {
    limiter: RateLimiter,
    renderer: Box<dyn StatusRenderer>,
}

impl StatusDisplay {
    pub fn new(interval: u64, renderer: Box<dyn StatusRenderer>) -> Self {
        Self {
            limiter: RateLimiter::from_secs(interval),
            renderer,
        }
    }

    pub fn from_config(config: &DisplayConfig) -> Self {
        Self::new(config.interval, select_renderer(config))
    }

    pub fn active(&self) -> bool {
        self.renderer.active()
    }

    pub fn renderer_name(&self) -> &'static str {
        self.renderer.name()
    }

    pub fn update<M: Manager + ?Sized>(&mut self, manager: Option<&M>, force: bool) -> bool {
        self.update_at(manager, force, Utc::now())
    }

    /// Refreshes when the interval elapsed or `force` is set. Returns whether a
    /// refresh happened.
    pub fn update_at<M: Manager + ?Sized>(
        &mut self,
        manager: Option<&M>,
        force: bool,
        now: DateTime<Utc>,
    ) -> bool {
        if !self.limiter.should_refresh(now, force) {
            return false;
        }
        self.limiter.mark_refreshed(now);

        if !self.renderer.active() {
            debug!("{} renderer inactive, skipping refresh", self.renderer.name());
            return false;
        }

        let tables = build_tables(manager, now);
        self.renderer.render(&tables);
        true
    }
}
