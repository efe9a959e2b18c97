//! Session store: the bearer token and admin profile that represent a
//! signed-in user.
//!
//! The session is persisted as `session.json` under the platform data
//! directory so it survives restarts, mirroring the two durable keys the
//! web client keeps in local storage. The in-memory copy is the source of
//! truth for outgoing requests; it is mutated only through `login`,
//! `clear`, and the pipeline's 401 handler, and every request reads the
//! token fresh so the Authorization header is never stale.

use std::path::PathBuf;
use std::sync::RwLock;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::warn;

use crate::models::UserProfile;

/// Session file name in the data directory.
const SESSION_FILE: &str = "session.json";

/// Application name used for the data directory path.
const APP_NAME: &str = "finconsult";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    pub token: String,
    pub profile: UserProfile,
    pub created_at: DateTime<Utc>,
}

/// Broadcast to subscribers whenever the session changes. The presentation
/// layer watches this to redirect to the login page on forced sign-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    SignedOut,
    SignedIn,
}

pub struct SessionStore {
    path: PathBuf,
    data: RwLock<Option<SessionData>>,
    state_tx: watch::Sender<SessionState>,
}

impl SessionStore {
    /// Open the store at an explicit path, rehydrating any persisted
    /// session. A missing or unreadable file means signed out.
    pub fn open(path: PathBuf) -> Self {
        let data = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<SessionData>(&contents) {
                Ok(session) => Some(session),
                Err(e) => {
                    warn!(error = %e, "Ignoring unparsable session file");
                    None
                }
            },
            Err(_) => None,
        };

        let initial = if data.is_some() {
            SessionState::SignedIn
        } else {
            SessionState::SignedOut
        };
        let (state_tx, _) = watch::channel(initial);

        Self {
            path,
            data: RwLock::new(data),
            state_tx,
        }
    }

    /// Open the store at the default platform location.
    pub fn open_default() -> Result<Self> {
        let data_dir = dirs::data_dir().context("Could not find data directory")?;
        Ok(Self::open(data_dir.join(APP_NAME).join(SESSION_FILE)))
    }

    /// The current bearer token, read fresh for every request.
    pub fn token(&self) -> Option<String> {
        self.read().as_ref().map(|d| d.token.clone())
    }

    /// The signed-in user's profile, if any.
    pub fn profile(&self) -> Option<UserProfile> {
        self.read().as_ref().map(|d| d.profile.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    /// Watch session-state transitions (login, logout, forced sign-out).
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    /// Store a new session and persist it to disk. The in-memory session
    /// is replaced first so outgoing requests pick up the new token even
    /// if persistence fails.
    pub fn login(&self, token: String, profile: UserProfile) -> Result<()> {
        let session = SessionData {
            token,
            profile,
            created_at: Utc::now(),
        };
        *self.write() = Some(session.clone());
        self.state_tx.send_replace(SessionState::SignedIn);
        self.persist(&session)
    }

    /// Clear the session from memory and disk. A no-op when already
    /// signed out.
    pub fn clear(&self) -> Result<()> {
        *self.write() = None;
        if self.path.exists() {
            std::fs::remove_file(&self.path).context("Failed to remove session file")?;
        }
        self.state_tx.send_replace(SessionState::SignedOut);
        Ok(())
    }

    /// Forced sign-out on a 401 from the server. Best effort: the in-memory
    /// session always goes away even if the file removal fails.
    pub(crate) fn invalidate(&self) {
        *self.write() = None;
        if self.path.exists() {
            if let Err(e) = std::fs::remove_file(&self.path) {
                warn!(error = %e, "Failed to remove session file on forced sign-out");
            }
        }
        self.state_tx.send_replace(SessionState::SignedOut);
    }

    fn persist(&self, session: &SessionData) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, contents).context("Failed to write session file")?;
        Ok(())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Option<SessionData>> {
        self.data.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Option<SessionData>> {
        self.data.write().unwrap_or_else(|e| e.into_inner())
    }
}
