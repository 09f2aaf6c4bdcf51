//! In-memory session store.
//!
//! Sessions live only for the lifetime of the process; there is no durable
//! storage by design. The map is behind one `RwLock`; interactions are
//! single commits, so contention is not a concern, but handlers must never
//! hold the guard across an await.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::errors::AppError;
use crate::wizard::machine::WizardSession;

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, WizardSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fresh session and returns a snapshot of it.
    pub fn create(&self) -> WizardSession {
        let session = WizardSession::new();
        let snapshot = session.clone();
        self.write().insert(session.id, session);
        snapshot
    }

    /// Runs a closure against the mutable session. Closures validate
    /// before mutating so an error leaves the session untouched.
    pub fn with_session<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut WizardSession) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut sessions = self.write();
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("session {id} not found")))?;
        f(session)
    }

    /// Read-only access to a session.
    pub fn read_session<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&WizardSession) -> T,
    ) -> Result<T, AppError> {
        let sessions = self.read();
        let session = sessions
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("session {id} not found")))?;
        Ok(f(session))
    }

    /// Ends a session, dropping its aggregate.
    pub fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.write()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("session {id} not found")))
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<Uuid, WizardSession>> {
        self.inner.read().expect("session lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<Uuid, WizardSession>> {
        self.inner.write().expect("session lock poisoned")
    }
}
