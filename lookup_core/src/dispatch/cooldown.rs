//! Per-user rate limit for mention-triggered queries.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Per-user spacing of mention-triggered queries.
///
/// A query arriving within `spacing` of the user's last admitted one is
/// dropped, and does not move the window.
#[derive(Debug)]
pub struct CooldownGate {
    spacing: Duration,
    last_admitted: Mutex<HashMap<String, Instant>>,
}

impl CooldownGate {
    pub fn new(spacing: Duration) -> Self {
        Self {
            spacing,
            last_admitted: Mutex::new(HashMap::new()),
        }
    }

    pub fn admit(&self, user: &str) -> bool {
        self.admit_at(user, Instant::now())
    }

    pub fn admit_at(&self, user: &str, now: Instant) -> bool {
        let mut last = self
            .last_admitted
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(prev) = last.get(user) {
            if now.saturating_duration_since(*prev) < self.spacing {
                return false;
            }
        }
        last.insert(user.to_string(), now);
        true
    }
}
