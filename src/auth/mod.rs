//! Mock authentication for the demo platform.
//!
//! Provides:
//! - Login by email against the seeded identities (passwords are ignored)
//! - Registration with presence checks on required fields
//! - A single active session, mirrored into a durable slot
//! - Role checks against the active session

pub mod error;
pub mod session;

pub use error::{AuthError, SessionLoadError, INVALID_CREDENTIALS_MESSAGE};
pub use session::{SessionStore, REGISTERED_ID_PREFIX};
