//! Demo accounts and the signed-in profile
//!
//! Mock authentication only: accounts live in the same key-value store
//! as everything else and passwords compare in plain text. This mirrors
//! a self-contained client demo; it is not a security layer.

use crate::keys::{KEY_CURRENT_USER, KEY_USERS};
use muse_core::{MuseError, Result, StateStore, UserAccount, UserProfile};

/// Account registry and signed-in profile, backed by the state store
pub struct ProfileStore<S> {
    store: S,
}

impl<S: StateStore> ProfileStore<S> {
    /// Create a profile store over the given state store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The signed-in profile, if any
    pub async fn current_user(&self) -> Result<Option<UserProfile>> {
        match self.store.get(KEY_CURRENT_USER).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Register a new account and sign it in
    ///
    /// Email comparison is case-insensitive; registering an address
    /// that already exists fails with [`MuseError::Duplicate`].
    pub async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<UserProfile> {
        let mut accounts = self.accounts().await?;
        let email_lower = email.to_lowercase();

        if accounts.iter().any(|a| a.email == email_lower) {
            return Err(MuseError::duplicate(format!(
                "Account already exists: {email_lower}"
            )));
        }

        let account = UserAccount::new(name, email, password);
        let profile = account.profile();

        accounts.push(account);
        self.save_accounts(&accounts).await?;
        self.set_current(&profile).await?;

        tracing::debug!("Registered account {}", profile.email);
        Ok(profile)
    }

    /// Sign in with email and password
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserProfile> {
        let accounts = self.accounts().await?;
        let email_lower = email.to_lowercase();

        let account = accounts
            .iter()
            .find(|a| a.email == email_lower && a.password == password)
            .ok_or_else(|| MuseError::invalid_input("Invalid email or password"))?;

        let profile = account.profile();
        self.set_current(&profile).await?;
        Ok(profile)
    }

    /// Sign out, leaving registered accounts in place
    pub async fn sign_out(&self) -> Result<()> {
        self.store.remove(KEY_CURRENT_USER).await
    }

    /// Update the signed-in profile's editable fields
    ///
    /// Changes are synced into the matching account record so they
    /// survive sign-out and sign-in.
    pub async fn update_profile(&self, name: &str, bio: &str, location: &str) -> Result<UserProfile> {
        let Some(mut profile) = self.current_user().await? else {
            return Err(MuseError::invalid_input("No user signed in"));
        };

        profile.name = name.to_string();
        profile.bio = bio.to_string();
        profile.location = location.to_string();

        let mut accounts = self.accounts().await?;
        if let Some(account) = accounts.iter_mut().find(|a| a.id == profile.id) {
            account.name = profile.name.clone();
            account.bio = profile.bio.clone();
            account.location = profile.location.clone();
            self.save_accounts(&accounts).await?;
        }

        self.set_current(&profile).await?;
        Ok(profile)
    }

    async fn accounts(&self) -> Result<Vec<UserAccount>> {
        match self.store.get(KEY_USERS).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    async fn save_accounts(&self, accounts: &[UserAccount]) -> Result<()> {
        let raw = serde_json::to_string(accounts)?;
        self.store.put(KEY_USERS, &raw).await
    }

    async fn set_current(&self, profile: &UserProfile) -> Result<()> {
        let raw = serde_json::to_string(profile)?;
        self.store.put(KEY_CURRENT_USER, &raw).await
    }
}
