//! The session store: at most one authenticated identity, held in memory and
//! mirrored into a durable slot.
//!
//! The in-memory copy is authoritative while present. When it is empty (a
//! fresh process, or after `reset_transient`) the durable copy is loaded and
//! promoted. Every mutating operation updates both copies.

use chrono::Utc;
use parking_lot::Mutex;

use super::error::{AuthError, SessionLoadError};
use crate::config::{SlotConfig, DEFAULT_SESSION_KEY};
use crate::identity::{seed, Identity, Registration, UserType};
use crate::slot::{create_slot, DurableSlot, MemorySlot};

/// Prefix for identifiers synthesized at registration.
pub const REGISTERED_ID_PREFIX: &str = "user_";

pub struct SessionStore {
    current: Mutex<Option<Identity>>,
    slot: Box<dyn DurableSlot>,
    key: String,
}

impl SessionStore {
    /// Store backed by `slot` under the default key.
    pub fn new(slot: Box<dyn DurableSlot>) -> Self {
        Self::with_key(slot, DEFAULT_SESSION_KEY)
    }

    pub fn with_key(slot: Box<dyn DurableSlot>, key: impl Into<String>) -> Self {
        Self {
            current: Mutex::new(None),
            slot,
            key: key.into(),
        }
    }

    pub fn from_config(config: &SlotConfig) -> anyhow::Result<Self> {
        let slot = create_slot(config)?;
        tracing::debug!(backend = slot.name(), key = %config.key, "Session slot opened");
        Ok(Self::with_key(slot, config.key.clone()))
    }

    /// Store with a throwaway in-memory slot.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemorySlot::new()))
    }

    pub fn slot(&self) -> &dyn DurableSlot {
        self.slot.as_ref()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    // ── Mutations ───────────────────────────────────────────────

    /// Log in as the seeded identity with this email.
    ///
    /// The password is accepted but never checked. Returns `Ok(None)` when
    /// no seed matches, leaving any current session untouched.
    pub fn login(&self, email: &str, _password: &str) -> Result<Option<Identity>, AuthError> {
        let Some(identity) = seed::find_by_email(email) else {
            tracing::info!(email, "Login rejected: unknown email");
            return Ok(None);
        };

        self.activate(&identity)?;
        tracing::info!(user_id = %identity.id, role = %identity.user_type, "Logged in");
        Ok(Some(identity))
    }

    /// Register a new identity and make it the active session.
    pub fn register(&self, registration: &Registration) -> Result<Identity, AuthError> {
        let valid = registration.validate()?;
        let now = Utc::now();

        let identity = Identity {
            id: format!("{REGISTERED_ID_PREFIX}{}", now.timestamp_millis()),
            email: valid.email,
            first_name: valid.first_name,
            last_name: valid.last_name,
            user_type: valid.user_type,
            profile_image_url: valid.profile_image_url,
            created_at: now,
            is_active: true,
            is_verified: false,
        };

        self.activate(&identity)?;
        tracing::info!(user_id = %identity.id, role = %identity.user_type, "Registered");
        Ok(identity)
    }

    /// Clear both copies of the session.
    pub fn logout(&self) -> Result<(), AuthError> {
        let mut current = self.current.lock();
        // Durable first: a failed remove keeps the session as it was.
        self.slot.remove(&self.key).map_err(AuthError::Storage)?;
        match current.take() {
            Some(identity) => tracing::info!(user_id = %identity.id, "Logged out"),
            None => tracing::debug!("Logout with no in-memory session"),
        }
        Ok(())
    }

    /// Drop only the in-memory copy, as a page reload would. The next read
    /// goes to the durable slot.
    pub fn reset_transient(&self) {
        self.current.lock().take();
    }

    fn activate(&self, identity: &Identity) -> Result<(), AuthError> {
        let json = serde_json::to_string(identity)?;
        let mut current = self.current.lock();
        // Durable first: a failed write leaves both copies as they were.
        self.slot.set(&self.key, &json).map_err(AuthError::Storage)?;
        *current = Some(identity.clone());
        Ok(())
    }

    // ── Reads ───────────────────────────────────────────────────

    /// Current identity, distinguishing "no session" from unreadable or
    /// corrupt session data.
    pub fn load_current_user(&self) -> Result<Option<Identity>, SessionLoadError> {
        let mut current = self.current.lock();
        if let Some(identity) = current.as_ref() {
            return Ok(Some(identity.clone()));
        }

        let Some(raw) = self.slot.get(&self.key).map_err(SessionLoadError::Storage)? else {
            return Ok(None);
        };

        let identity: Identity =
            serde_json::from_str(&raw).map_err(|e| SessionLoadError::Corrupt {
                reason: e.to_string(),
            })?;
        tracing::debug!(user_id = %identity.id, "Session restored from durable slot");
        *current = Some(identity.clone());
        Ok(Some(identity))
    }

    /// Current identity, failing closed: unreadable or corrupt data counts
    /// as no session.
    pub fn current_user(&self) -> Option<Identity> {
        match self.load_current_user() {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!(backend = self.slot.name(), "Ignoring stored session: {e}");
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    pub fn has_role(&self, role: UserType) -> bool {
        self.current_user()
            .is_some_and(|identity| identity.user_type == role)
    }

    /// Raw `userType` of whatever is stored in the durable slot, even when
    /// the record as a whole does not parse as an identity.
    pub fn stored_role_tag(&self) -> Option<String> {
        let raw = self.slot.get(&self.key).ok()??;
        let value: serde_json::Value = serde_json::from_str(&raw).ok()?;
        value
            .get("userType")
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }
}
