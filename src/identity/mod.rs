//! Participant identities: roles, the identity record, registration input,
//! and the fixed demo seed list.

pub mod model;
pub mod seed;

pub use model::{Identity, Registration, UserType, ValidRegistration};
pub use seed::{demo_accounts, find_by_email, seed_identities};
