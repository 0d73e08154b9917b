//! Fixed-window rate limiter
//!
//! Keeps, per key, the timestamps of accepted requests inside the trailing
//! window. State lives in memory only and is scoped to this process.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::debug;

use crate::config::RateLimitConfig;

/// Outcome of a rate limit check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    /// Request accepted and recorded
    Allowed { remaining: usize },
    /// Request rejected; the oldest recorded request leaves the window after `retry_after`
    Limited { retry_after: Duration },
}

impl RateDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RateDecision::Allowed { .. })
    }
}

#[derive(Debug, Default)]
struct Buckets {
    keys: HashMap<String, VecDeque<Instant>>,
    last_sweep: Option<Instant>,
}

#[derive(Debug, Clone)]
pub struct RateLimiter {
    max_requests: usize,
    window: Duration,
    requests: Arc<Mutex<Buckets>>,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            requests: Arc::new(Mutex::new(Buckets::default())),
        }
    }

    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(config.max_requests, Duration::from_secs(config.window_secs))
    }

    pub fn max_requests(&self) -> usize {
        self.max_requests
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Keys currently held in memory
    pub async fn tracked_keys(&self) -> usize {
        self.requests.lock().await.keys.len()
    }

    /// Check and, if accepted, record a request for `key` now
    pub async fn check(&self, key: &str) -> RateDecision {
        self.check_at(key, Instant::now()).await
    }

    pub async fn check_at(&self, key: &str, now: Instant) -> RateDecision {
        let mut buckets = self.requests.lock().await;
        self.sweep(&mut buckets, now);
        let timestamps = buckets.keys.entry(key.to_string()).or_default();
        self.prune(timestamps, now);

        if timestamps.len() >= self.max_requests {
            let retry_after = timestamps
                .front()
                .map(|oldest| self.window.saturating_sub(now.duration_since(*oldest)))
                .unwrap_or(self.window);
            debug!(key = %key, in_window = timestamps.len(), "Rate limit reached");
            return RateDecision::Limited { retry_after };
        }

        timestamps.push_back(now);
        RateDecision::Allowed {
            remaining: self.max_requests - timestamps.len(),
        }
    }

    /// Requests still available to `key` in the current window
    pub async fn remaining(&self, key: &str) -> usize {
        self.remaining_at(key, Instant::now()).await
    }

    pub async fn remaining_at(&self, key: &str, now: Instant) -> usize {
        let mut buckets = self.requests.lock().await;
        let Some(timestamps) = buckets.keys.get_mut(key) else {
            return self.max_requests;
        };
        self.prune(timestamps, now);
        let in_window = timestamps.len();
        if in_window == 0 {
            buckets.keys.remove(key);
        }
        self.max_requests.saturating_sub(in_window)
    }

    /// Evict keys with no request left in their window, at most once per window
    fn sweep(&self, buckets: &mut Buckets, now: Instant) {
        let due = buckets
            .last_sweep
            .map_or(true, |last| now.saturating_duration_since(last) >= self.window);
        if !due {
            return;
        }

        let before = buckets.keys.len();
        buckets.keys.retain(|_, timestamps| {
            self.prune(timestamps, now);
            !timestamps.is_empty()
        });
        buckets.last_sweep = Some(now);

        let evicted = before - buckets.keys.len();
        if evicted > 0 {
            debug!(evicted = evicted, tracked = buckets.keys.len(), "Evicted idle rate limit keys");
        }
    }

    /// Drop timestamps at or before `now - window`
    fn prune(&self, timestamps: &mut VecDeque<Instant>, now: Instant) {
        let Some(cutoff) = now.checked_sub(self.window) else {
            return;
        };
        while timestamps.front().is_some_and(|t| *t <= cutoff) {
            timestamps.pop_front();
        }
    }
}
