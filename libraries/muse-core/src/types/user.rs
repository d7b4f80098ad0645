/// User profile and account domain types
use crate::types::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The signed-in user as persisted under the `currentUser` key.
///
/// Never carries credentials; those stay on the `UserAccount` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Email address (lowercased on registration)
    pub email: String,

    /// Short bio shown on the profile page
    #[serde(default)]
    pub bio: String,

    /// Location shown on the profile page
    #[serde(default)]
    pub location: String,

    /// Account creation timestamp
    pub joined_at: DateTime<Utc>,

    /// Which provider registered the account ("email" for the form flow)
    pub provider: String,
}

/// A registered account as persisted in the `users` collection.
///
/// Demo-grade only: the password is stored as-is because this product ships
/// with mock authentication and no server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Unique user identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Email address (lowercased on registration)
    pub email: String,

    /// Demo-only stored password
    pub password: String,

    /// Short bio shown on the profile page
    #[serde(default)]
    pub bio: String,

    /// Location shown on the profile page
    #[serde(default)]
    pub location: String,

    /// Account creation timestamp
    pub joined_at: DateTime<Utc>,

    /// Which provider registered the account
    pub provider: String,
}

impl UserAccount {
    /// Create a new email-provider account
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::generate(),
            name: name.into(),
            email: email.into().to_lowercase(),
            password: password.into(),
            bio: String::new(),
            location: String::new(),
            joined_at: Utc::now(),
            provider: "email".to_string(),
        }
    }

    /// The profile view of this account (credentials stripped)
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            bio: self.bio.clone(),
            location: self.location.clone(),
            joined_at: self.joined_at,
            provider: self.provider.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_lowercases_email() {
        let account = UserAccount::new("Alice", "Alice@Example.COM", "hunter2");
        assert_eq!(account.email, "alice@example.com");
    }

    #[test]
    fn profile_strips_credentials() {
        let account = UserAccount::new("Alice", "alice@example.com", "hunter2");
        let profile = account.profile();

        assert_eq!(profile.id, account.id);
        assert_eq!(profile.email, account.email);
        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("hunter2"));
    }
}
