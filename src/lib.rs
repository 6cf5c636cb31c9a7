//! Session core for the WorkPerk career intelligence platform demo.
//!
//! Provides:
//! - A seed list of four demo identities, one per role
//! - A session store holding at most one authenticated identity, mirrored
//!   into a durable key-value slot so it survives restarts
//! - A role dispatcher that picks the dashboard view for an identity
//!
//! There is no real authentication here: login matches an email against the
//! seed list and never looks at the password.

pub mod auth;
pub mod config;
pub mod dispatch;
pub mod identity;
pub mod logging;
pub mod slot;

pub use auth::{AuthError, SessionLoadError, SessionStore, INVALID_CREDENTIALS_MESSAGE};
pub use config::Config;
pub use dispatch::{dispatch, dispatch_tag, route, Screen, View};
pub use identity::{Identity, Registration, UserType};
pub use slot::{create_slot, DurableSlot};
