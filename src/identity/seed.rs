//! Fixed demo identities used for login lookup.

use chrono::{DateTime, TimeZone, Utc};

use super::model::{Identity, UserType};

const CANDIDATE_AVATAR: &str =
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face";
const EMPLOYER_AVATAR: &str =
    "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=150&h=150&fit=crop&crop=face";
const LAB_OWNER_AVATAR: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face";

struct Seed {
    id: &'static str,
    email: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    user_type: UserType,
    avatar: Option<&'static str>,
    /// (year, month, day, hour)
    created: (i32, u32, u32, u32),
}

const SEEDS: [Seed; 4] = [
    Seed {
        id: "candidate_1",
        email: "alex.chen@email.com",
        first_name: "Alex",
        last_name: "Chen",
        user_type: UserType::Candidate,
        avatar: Some(CANDIDATE_AVATAR),
        created: (2024, 1, 15, 10),
    },
    Seed {
        id: "employer_1",
        email: "sarah.martinez@techcorp.com",
        first_name: "Sarah",
        last_name: "Martinez",
        user_type: UserType::Employer,
        avatar: Some(EMPLOYER_AVATAR),
        created: (2024, 1, 10, 9),
    },
    Seed {
        id: "admin_1",
        email: "admin@workperk.com",
        first_name: "Admin",
        last_name: "User",
        user_type: UserType::Admin,
        avatar: None,
        created: (2024, 1, 1, 0),
    },
    Seed {
        id: "lab_owner_1",
        email: "david.kim@makerspace.com",
        first_name: "David",
        last_name: "Kim",
        user_type: UserType::LabOwner,
        avatar: Some(LAB_OWNER_AVATAR),
        created: (2024, 1, 5, 12),
    },
];

fn seed_time((year, month, day, hour): (i32, u32, u32, u32)) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

impl Seed {
    fn to_identity(&self) -> Identity {
        Identity {
            id: self.id.to_string(),
            email: self.email.to_string(),
            first_name: self.first_name.to_string(),
            last_name: self.last_name.to_string(),
            user_type: self.user_type,
            profile_image_url: self.avatar.map(str::to_string),
            created_at: seed_time(self.created),
            is_active: true,
            is_verified: true,
        }
    }
}

/// All seeded identities, one per role.
pub fn seed_identities() -> Vec<Identity> {
    SEEDS.iter().map(Seed::to_identity).collect()
}

/// Exact, case-sensitive email lookup.
pub fn find_by_email(email: &str) -> Option<Identity> {
    SEEDS
        .iter()
        .find(|seed| seed.email == email)
        .map(Seed::to_identity)
}

/// Quick-login accounts in the order the login form offers them.
pub fn demo_accounts() -> Vec<(UserType, &'static str)> {
    [
        UserType::Candidate,
        UserType::Employer,
        UserType::LabOwner,
        UserType::Admin,
    ]
    .into_iter()
    .filter_map(|role| {
        SEEDS
            .iter()
            .find(|seed| seed.user_type == role)
            .map(|seed| (role, seed.email))
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_seed_per_role() {
        let seeds = seed_identities();
        assert_eq!(seeds.len(), 4);
        for role in UserType::ALL {
            assert_eq!(seeds.iter().filter(|s| s.user_type == role).count(), 1);
        }
        assert!(seeds.iter().all(|s| s.is_active && s.is_verified));
    }

    #[test]
    fn seed_timestamps_match_fixture() {
        let alex = find_by_email("alex.chen@email.com").unwrap();
        assert_eq!(alex.created_at.to_rfc3339(), "2024-01-15T10:00:00+00:00");
        let admin = find_by_email("admin@workperk.com").unwrap();
        assert!(admin.profile_image_url.is_none());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(find_by_email("david.kim@makerspace.com").is_some());
        assert!(find_by_email("David.Kim@makerspace.com").is_none());
        assert!(find_by_email(" david.kim@makerspace.com").is_none());
    }

    #[test]
    fn demo_accounts_follow_form_order() {
        let accounts = demo_accounts();
        let roles: Vec<_> = accounts.iter().map(|(r, _)| *r).collect();
        assert_eq!(
            roles,
            vec![
                UserType::Candidate,
                UserType::Employer,
                UserType::LabOwner,
                UserType::Admin
            ]
        );
        assert_eq!(accounts[3].1, "admin@workperk.com");
    }
}
