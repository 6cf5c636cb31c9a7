//! Role dispatch: which dashboard an identity lands on.

use crate::auth::SessionStore;
use crate::identity::{Identity, UserType};

const PRODUCT_NAME: &str = "WorkPerk";

/// A role-specific view the front-end can activate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    CandidateDashboard,
    EmployerDashboard,
    AdminDashboard,
    LabOwnerDashboard,
    /// Fallback for a role tag outside the known set.
    UnknownRole(String),
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::CandidateDashboard => "Candidate Dashboard",
            Self::EmployerDashboard => "Employer Dashboard",
            Self::AdminDashboard => "Admin Dashboard",
            Self::LabOwnerDashboard => "Lab Owner Dashboard",
            Self::UnknownRole(_) => "Unknown user type",
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::UnknownRole(_))
    }
}

/// Total mapping over the closed role set.
pub fn dispatch(role: UserType) -> View {
    match role {
        UserType::Candidate => View::CandidateDashboard,
        UserType::Employer => View::EmployerDashboard,
        UserType::Admin => View::AdminDashboard,
        UserType::LabOwner => View::LabOwnerDashboard,
    }
}

/// Dispatch an untyped tag, e.g. one read back from storage.
pub fn dispatch_tag(tag: &str) -> View {
    match UserType::parse(tag) {
        Some(role) => dispatch(role),
        None => {
            tracing::warn!(tag, "Unrecognised role tag");
            View::UnknownRole(tag.to_string())
        }
    }
}

/// What the front-end should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard {
        identity: Option<Identity>,
        view: View,
    },
}

/// Pick the screen for the store's current state.
///
/// A valid session lands on its role's dashboard. Stored data that no longer
/// parses fails closed to the login surface, except when it carries a role
/// tag outside the known set: that lands on the unknown-role view with no
/// identity attached.
pub fn route(store: &SessionStore) -> Screen {
    match store.load_current_user() {
        Ok(Some(identity)) => {
            let view = dispatch(identity.user_type);
            Screen::Dashboard {
                identity: Some(identity),
                view,
            }
        }
        Ok(None) => Screen::Login,
        Err(e) => {
            tracing::warn!("Stored session unusable: {e}");
            match store.stored_role_tag() {
                Some(tag) if UserType::parse(&tag).is_none() => Screen::Dashboard {
                    identity: None,
                    view: View::UnknownRole(tag),
                },
                _ => Screen::Login,
            }
        }
    }
}

/// Dashboard header line: product name, role badge, greeting.
pub fn header(identity: &Identity) -> String {
    format!(
        "{PRODUCT_NAME} [{}] Welcome, {}",
        identity.user_type.label(),
        identity.display_name()
    )
}
