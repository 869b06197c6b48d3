//! Session-scoped flash messages with time-based expiry.
//!
//! A message pushed for a session is handed out by exactly one later
//! [`FlashStore::take`] for that session, and silently dropped if nobody
//! takes it within the session TTL.

use super::SessionId;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// Pending messages for one session.
#[derive(Debug, Clone)]
struct FlashEntry {
    messages: Vec<String>,
    touched_at: Instant,
}

impl FlashEntry {
    fn is_live(&self, now: Instant, ttl: Duration) -> bool {
        now.duration_since(self.touched_at) < ttl
    }
}

/// A thread-safe, read-once message store keyed by session.
///
/// Cloning is cheap and clones share the same messages.
#[derive(Clone)]
pub struct FlashStore {
    sessions: Arc<RwLock<HashMap<SessionId, FlashEntry>>>,
    ttl: Duration,
}

impl FlashStore {
    /// Create a store whose messages expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Queue a message for the session's next [`take`](Self::take).
    pub fn push(&self, session: &SessionId, message: impl Into<String>) {
        let now = Instant::now();

        if let Ok(mut sessions) = self.sessions.write() {
            let entry = sessions.entry(session.clone()).or_insert_with(|| FlashEntry {
                messages: Vec::new(),
                touched_at: now,
            });

            if !entry.is_live(now, self.ttl) {
                entry.messages.clear();
            }
            entry.messages.push(message.into());
            entry.touched_at = now;
        }
    }

    /// Remove and return the session's pending messages, oldest first.
    ///
    /// Returns an empty vector when there are none or they have expired.
    pub fn take(&self, session: &SessionId) -> Vec<String> {
        let now = Instant::now();

        let Ok(mut sessions) = self.sessions.write() else {
            return Vec::new();
        };

        match sessions.remove(session) {
            Some(entry) if entry.is_live(now, self.ttl) => entry.messages,
            _ => Vec::new(),
        }
    }

    /// Drop every session whose messages have expired.
    ///
    /// Expired entries are already ignored by `take`; this only frees memory.
    pub fn cleanup_expired(&self) {
        let now = Instant::now();

        if let Ok(mut sessions) = self.sessions.write() {
            sessions.retain(|_, entry| entry.is_live(now, self.ttl));
        }
    }

    /// Number of sessions with pending messages (including expired ones).
    pub fn len(&self) -> usize {
        self.sessions.read().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl std::fmt::Debug for FlashStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlashStore")
            .field("ttl", &self.ttl)
            .field("sessions", &self.len())
            .finish()
    }
}
