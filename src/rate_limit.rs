//! Fixed-window request limiter keyed by client address.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::cache::now_millis;

#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    started_at: i64,
}

/// Result of counting one request against the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateDecision {
    pub allowed: bool,
    pub limit: u32,
    pub remaining: u32,
}

/// Counts requests per client in fixed windows.
///
/// A window starts at a client's first request and resets once it is older
/// than the window length. Once `max_clients` clients are tracked, expired
/// windows are dropped before a new client is added. Clones share counters.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    windows: Arc<Mutex<HashMap<String, Window>>>,
    limit: u32,
    window: Duration,
    max_clients: usize,
}

impl RateLimiter {
    pub fn new(limit: u32, window: Duration, max_clients: usize) -> Self {
        Self {
            windows: Arc::new(Mutex::new(HashMap::new())),
            limit,
            window,
            max_clients: max_clients.max(1),
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Number of clients currently tracked.
    pub fn tracked_clients(&self) -> usize {
        self.windows.lock().len()
    }

    /// Records a request from `client` and decides whether it may proceed.
    pub fn check(&self, client: &str) -> RateDecision {
        self.check_at(client, now_millis())
    }

    /// [`RateLimiter::check`] evaluated at `now` (epoch milliseconds).
    pub fn check_at(&self, client: &str, now: i64) -> RateDecision {
        let window_ms = i64::try_from(self.window.as_millis()).unwrap_or(i64::MAX);
        let mut windows = self.windows.lock();

        if windows.len() >= self.max_clients && !windows.contains_key(client) {
            let before = windows.len();
            windows.retain(|_, w| now.saturating_sub(w.started_at) <= window_ms);
            tracing::debug!(
                dropped = before - windows.len(),
                "Dropped expired rate limit windows"
            );
        }

        let window = windows.entry(client.to_string()).or_insert(Window {
            count: 0,
            started_at: now,
        });

        if now.saturating_sub(window.started_at) > window_ms {
            window.count = 0;
            window.started_at = now;
        }

        window.count = window.count.saturating_add(1);

        RateDecision {
            allowed: window.count <= self.limit,
            limit: self.limit,
            remaining: self.limit.saturating_sub(window.count),
        }
    }
}
