use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::AuthError;

// ── Roles ───────────────────────────────────────────────────────

/// The four participant categories on the platform.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserType {
    Candidate,
    Employer,
    Admin,
    LabOwner,
}

impl UserType {
    pub const ALL: [UserType; 4] = [
        UserType::Candidate,
        UserType::Employer,
        UserType::Admin,
        UserType::LabOwner,
    ];

    /// Wire tag as stored in the durable slot.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Candidate => "CANDIDATE",
            Self::Employer => "EMPLOYER",
            Self::Admin => "ADMIN",
            Self::LabOwner => "LAB_OWNER",
        }
    }

    /// Parse a role tag. Accepts the wire tag plus lowercase and kebab
    /// spellings; anything else is `None`.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "CANDIDATE" | "candidate" => Some(Self::Candidate),
            "EMPLOYER" | "employer" => Some(Self::Employer),
            "ADMIN" | "admin" => Some(Self::Admin),
            "LAB_OWNER" | "lab_owner" | "lab-owner" => Some(Self::LabOwner),
            _ => None,
        }
    }

    /// Badge text shown next to the product name, e.g. `lab owner`.
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ").to_lowercase()
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Identity ────────────────────────────────────────────────────

/// A registered participant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    /// Login key.
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
    pub is_verified: bool,
}

impl Identity {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// ── Registration ────────────────────────────────────────────────

/// Caller-supplied data for a new identity.
///
/// Every field is optional at this level so that form input can be passed
/// through untouched; `validate` decides what is actually present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    #[serde(default)]
    pub email: Option<String>,
    /// Accepted from the form, never stored.
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub user_type: Option<UserType>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

/// Registration fields that passed the presence checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRegistration {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub user_type: UserType,
    pub profile_image_url: Option<String>,
}

impl Registration {
    /// Check that every required field is present and non-blank.
    /// Reports the first missing field by its wire name.
    pub fn validate(&self) -> Result<ValidRegistration, AuthError> {
        let email = required(&self.email, "email")?;
        let first_name = required(&self.first_name, "firstName")?;
        let last_name = required(&self.last_name, "lastName")?;
        let user_type = self.user_type.ok_or(AuthError::MissingField("userType"))?;
        let profile_image_url = self
            .profile_image_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(ValidRegistration {
            email,
            first_name,
            last_name,
            user_type,
            profile_image_url,
        })
    }
}

fn required(value: &Option<String>, field: &'static str) -> Result<String, AuthError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(AuthError::MissingField(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_registration() -> Registration {
        Registration {
            email: Some("  jo@example.com ".into()),
            password: Some("hunter2".into()),
            first_name: Some("Jo".into()),
            last_name: Some("Park".into()),
            user_type: Some(UserType::Employer),
            profile_image_url: None,
        }
    }

    #[test]
    fn user_type_wire_tags() {
        let json = serde_json::to_string(&UserType::LabOwner).unwrap();
        assert_eq!(json, "\"LAB_OWNER\"");
        let back: UserType = serde_json::from_str("\"CANDIDATE\"").unwrap();
        assert_eq!(back, UserType::Candidate);
        for role in UserType::ALL {
            assert_eq!(UserType::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn user_type_parse_spellings() {
        assert_eq!(UserType::parse("lab-owner"), Some(UserType::LabOwner));
        assert_eq!(UserType::parse("admin"), Some(UserType::Admin));
        assert_eq!(UserType::parse("Admin"), None);
        assert_eq!(UserType::parse(" ADMIN "), None);
        assert_eq!(UserType::parse("SUPERUSER"), None);
        assert_eq!(UserType::parse(""), None);
    }

    #[test]
    fn user_type_label() {
        assert_eq!(UserType::LabOwner.label(), "lab owner");
        assert_eq!(UserType::Candidate.label(), "candidate");
    }

    #[test]
    fn identity_uses_camel_case_fields() {
        let identity = Identity {
            id: "user_1".into(),
            email: "a@b.c".into(),
            first_name: "A".into(),
            last_name: "B".into(),
            user_type: UserType::Admin,
            profile_image_url: None,
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
            is_active: true,
            is_verified: false,
        };
        let value = serde_json::to_value(&identity).unwrap();
        assert_eq!(value["firstName"], "A");
        assert_eq!(value["userType"], "ADMIN");
        assert_eq!(value["isVerified"], false);
        assert!(value.get("profileImageUrl").is_none());
        assert_eq!(identity.display_name(), "A B");
    }

    #[test]
    fn validate_trims_and_accepts() {
        let valid = full_registration().validate().unwrap();
        assert_eq!(valid.email, "jo@example.com");
        assert_eq!(valid.user_type, UserType::Employer);
        assert!(valid.profile_image_url.is_none());
    }

    #[test]
    fn validate_reports_first_missing_field() {
        let mut reg = full_registration();
        reg.email = None;
        assert!(matches!(reg.validate(), Err(AuthError::MissingField("email"))));

        let mut reg = full_registration();
        reg.first_name = Some("   ".into());
        assert!(matches!(reg.validate(), Err(AuthError::MissingField("firstName"))));

        let mut reg = full_registration();
        reg.last_name = Some(String::new());
        assert!(matches!(reg.validate(), Err(AuthError::MissingField("lastName"))));

        let mut reg = full_registration();
        reg.user_type = None;
        assert!(matches!(reg.validate(), Err(AuthError::MissingField("userType"))));
    }

    #[test]
    fn validate_drops_blank_avatar() {
        let mut reg = full_registration();
        reg.profile_image_url = Some("  ".into());
        assert!(reg.validate().unwrap().profile_image_url.is_none());
    }
}
