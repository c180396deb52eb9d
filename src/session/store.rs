//! In-process session table with idle expiry.
//!
//! Sessions are kept in a shared map keyed by `SessionId`. An entry expires
//! once it has gone unused for longer than the TTL; every successful lookup
//! refreshes it. An expired entry is dropped when `get()` finds it, and the
//! whole table is swept once every `SWEEP_EVERY` session creations.

use super::id::SessionId;
use super::Session;
use crate::models::SeedData;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::debug;

/// Number of session creations between full sweeps of the table.
pub const SWEEP_EVERY: usize = 32;

/// Shared, lockable handle to one session's state.
pub type SessionHandle = Arc<Mutex<Session>>;

#[derive(Debug)]
struct SessionEntry {
    session: SessionHandle,
    last_seen: Instant,
}

/// A thread-safe session table.
///
/// Cloning is cheap and clones share the same sessions. New sessions start
/// with their own copy of the seed data.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionEntry>>>,
    created: Arc<AtomicUsize>,
    seed: SeedData,
    ttl: Duration,
}

impl SessionStore {
    /// Create an empty table whose sessions expire after `ttl` of inactivity.
    pub fn new(seed: SeedData, ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            created: Arc::new(AtomicUsize::new(0)),
            seed,
            ttl,
        }
    }

    /// Start a new session seeded with the store's seed data.
    pub fn create(&self) -> (SessionId, SessionHandle) {
        let now = Instant::now();
        let id = SessionId::new();
        let session = Arc::new(Mutex::new(Session::new(&self.seed)));

        let count = self.created.fetch_add(1, Ordering::Relaxed) + 1;

        let mut sessions = self.write();
        let expired = if count % SWEEP_EVERY == 0 {
            self.sweep(&mut sessions, now)
        } else {
            0
        };
        sessions.insert(
            id,
            SessionEntry {
                session: Arc::clone(&session),
                last_seen: now,
            },
        );

        debug!(session_id = %id, expired, active = sessions.len(), "Session created");
        (id, session)
    }

    /// Look up a live session and mark it as used.
    ///
    /// Returns `None` if the ID is unknown or the session has expired. An
    /// expired session is dropped together with its contacts.
    pub fn get(&self, id: &SessionId) -> Option<SessionHandle> {
        let now = Instant::now();
        let mut sessions = self.write();

        let expired = match sessions.get_mut(id) {
            Some(entry) if now.duration_since(entry.last_seen) < self.ttl => {
                entry.last_seen = now;
                return Some(Arc::clone(&entry.session));
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            sessions.remove(id);
            debug!(session_id = %id, "Session expired");
        }
        None
    }

    /// Resume the session named by `id` if it is still live, otherwise start
    /// a new one. The returned flag is `true` when a session was created.
    pub fn load_or_create(&self, id: Option<SessionId>) -> (SessionId, SessionHandle, bool) {
        if let Some(id) = id {
            if let Some(session) = self.get(&id) {
                return (id, session, false);
            }
        }
        let (id, session) = self.create();
        (id, session, true)
    }

    /// Remove all sessions idle since before `now - ttl`; returns how many.
    fn sweep(&self, sessions: &mut HashMap<SessionId, SessionEntry>, now: Instant) -> usize {
        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_seen) < self.ttl);
        before - sessions.len()
    }

    /// Number of sessions in the table (including expired ones not yet swept).
    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Idle time after which a session expires.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // A panic while holding the lock cannot leave the map half-updated, so
    // a poisoned lock is still safe to use.
    fn write(&self) -> RwLockWriteGuard<'_, HashMap<SessionId, SessionEntry>> {
        self.sessions.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("ttl", &self.ttl)
            .field("sessions", &self.len())
            .finish()
    }
}
