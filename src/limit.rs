//! Per-client rate limiting for the email endpoints.
//!
//! Fixed window per IP: the first request opens a window, requests past the
//! cap are rejected until the window expires. Stale entries are swept inline
//! once the table grows; there is no background task.

use std::{
    collections::HashMap,
    net::IpAddr,
    time::{Duration, Instant},
};

use tokio::sync::Mutex;

const SWEEP_THRESHOLD: usize = 1024;

pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    windows: Mutex<HashMap<IpAddr, Window>>,
}

struct Window {
    started: Instant,
    count: u32,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Records a request from `ip`. Returns false when the current window is
    /// exhausted.
    pub async fn try_acquire(&self, ip: IpAddr) -> bool {
        let now = Instant::now();
        let mut windows = self.windows.lock().await;

        if windows.len() >= SWEEP_THRESHOLD {
            windows.retain(|_, w| now.duration_since(w.started) < self.window);
        }

        let entry = windows.entry(ip).or_insert(Window {
            started: now,
            count: 0,
        });

        if now.duration_since(entry.started) >= self.window {
            entry.started = now;
            entry.count = 0;
        }

        if entry.count >= self.max_requests {
            return false;
        }

        entry.count += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IP: IpAddr = IpAddr::V4(std::net::Ipv4Addr::LOCALHOST);

    #[tokio::test]
    async fn admits_up_to_the_cap_then_rejects() {
        let limiter = RateLimiter::new(10, Duration::from_secs(900));
        for _ in 0..10 {
            assert!(limiter.try_acquire(IP).await);
        }
        assert!(!limiter.try_acquire(IP).await);
    }

    #[tokio::test]
    async fn a_fresh_window_admits_again() {
        let limiter = RateLimiter::new(1, Duration::from_millis(20));
        assert!(limiter.try_acquire(IP).await);
        assert!(!limiter.try_acquire(IP).await);

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(limiter.try_acquire(IP).await);
    }

    #[tokio::test]
    async fn clients_are_tracked_independently() {
        let limiter = RateLimiter::new(1, Duration::from_secs(900));
        let other = IpAddr::V4(std::net::Ipv4Addr::new(10, 0, 0, 1));
        assert!(limiter.try_acquire(IP).await);
        assert!(!limiter.try_acquire(IP).await);
        assert!(limiter.try_acquire(other).await);
    }
}
