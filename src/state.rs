use std::{sync::Arc, time::Duration};

use crate::{config::Config, limit::RateLimiter, mailer::Mailer};

pub struct AppState {
    pub config: Config,
    pub mailer: Mailer,
    pub limiter: RateLimiter,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        Self::from_config(Config::load())
    }

    pub fn from_config(config: Config) -> Arc<Self> {
        let mailer = Mailer::from_config(&config);
        let limiter = RateLimiter::new(
            config.rate_limit_max,
            Duration::from_secs(config.rate_limit_window_secs),
        );

        Arc::new(Self {
            config,
            mailer,
            limiter,
        })
    }
}
