//! Session state: a single writer, many readers.
//!
//! The session is considered authenticated whenever a token is present. The
//! token is never validated here; the product directory is the authority.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;

use crate::error::SessionError;
use crate::token_store::{MemoryTokenStore, StoredToken, TokenStore};

/// Opaque bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// `None` for an empty or blank token.
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

/// Entry point for creating a session pair.
pub struct Session;

impl Session {
    /// Open a session seeded from `store`.
    ///
    /// An unreadable token file starts the session anonymous; the next login
    /// or logout overwrites it. I/O failures are still reported.
    pub fn open(
        store: Arc<dyn TokenStore>,
    ) -> Result<(SessionWriter, SessionHandle), SessionError> {
        let stored = match store.load() {
            Ok(stored) => stored,
            Err(SessionError::Corrupt(reason)) => {
                tracing::warn!(%reason, "ignoring corrupt session file; starting anonymous");
                None
            }
            Err(e) => return Err(e),
        };
        let initial = stored.and_then(|stored| AuthToken::parse(stored.token));
        if initial.is_some() {
            tracing::debug!("restored session token from store");
        }

        let (tx, rx) = watch::channel(initial);
        Ok((SessionWriter { tx, store }, SessionHandle { rx }))
    }

    /// Unauthenticated session without persistence.
    pub fn in_memory() -> (SessionWriter, SessionHandle) {
        let store: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
        let (tx, rx) = watch::channel(None);
        (SessionWriter { tx, store }, SessionHandle { rx })
    }
}

/// The only party allowed to change the session.
///
/// Not `Clone`: hand out [`SessionHandle`]s to everyone else.
pub struct SessionWriter {
    tx: watch::Sender<Option<AuthToken>>,
    store: Arc<dyn TokenStore>,
}

impl SessionWriter {
    /// Persist `token` and mark the session authenticated.
    pub fn login(&self, token: AuthToken) -> Result<(), SessionError> {
        self.store.save(&StoredToken {
            token: token.as_str().to_string(),
            saved_at: Utc::now(),
        })?;
        self.tx.send_replace(Some(token));
        tracing::info!("session started");
        Ok(())
    }

    /// Forget the stored token and mark the session anonymous.
    pub fn logout(&self) -> Result<(), SessionError> {
        self.store.clear()?;
        self.tx.send_replace(None);
        tracing::info!("session ended");
        Ok(())
    }

    /// A new reader of this session.
    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            rx: self.tx.subscribe(),
        }
    }
}

/// Read-only view of the session, cheap to clone and inject.
#[derive(Clone)]
pub struct SessionHandle {
    rx: watch::Receiver<Option<AuthToken>>,
}

impl SessionHandle {
    pub fn is_authenticated(&self) -> bool {
        self.rx.borrow().is_some()
    }

    pub fn bearer_token(&self) -> Option<AuthToken> {
        self.rx.borrow().clone()
    }
}

impl core::fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SessionHandle")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
