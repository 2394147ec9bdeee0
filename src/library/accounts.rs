//! Accounts in the `users` collection.
//!
//! Credentials are not checked here; an account is identified by its email.

use std::fmt;

use log::info;

use super::store::{DocumentStore, StoreError, USERS};
use super::types::{CurrentUser, UserProfile};

#[derive(Debug)]
pub enum AuthError {
    /// Blank or malformed email.
    InvalidEmail,
    /// No `users` document carries this email.
    UnknownAccount(String),
    /// Sign-up with an email that already has an account.
    AccountExists(String),
    Store(StoreError),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidEmail => write!(f, "enter a valid email"),
            AuthError::UnknownAccount(email) => write!(f, "no account for {email}"),
            AuthError::AccountExists(email) => write!(f, "an account for {email} already exists"),
            AuthError::Store(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<StoreError> for AuthError {
    fn from(e: StoreError) -> Self {
        AuthError::Store(e)
    }
}

/// Normalize an email for lookup. Rejects blanks and anything without a local part.
pub fn normalize_email(email: &str) -> Result<String, AuthError> {
    let email = email.trim().to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(AuthError::InvalidEmail),
    }
}

async fn find_profile(
    store: &dyn DocumentStore,
    email: &str,
) -> Result<Option<UserProfile>, AuthError> {
    for doc in store.list(USERS).await? {
        let mut profile: UserProfile = doc.decode()?;
        if profile.email == email {
            profile.id = doc.id;
            return Ok(Some(profile));
        }
    }
    Ok(None)
}

/// Sign in to an existing account.
pub async fn sign_in(store: &dyn DocumentStore, email: &str) -> Result<CurrentUser, AuthError> {
    let email = normalize_email(email)?;
    let profile = find_profile(store, &email)
        .await?
        .ok_or_else(|| AuthError::UnknownAccount(email.clone()))?;
    info!("Signed in as {} ({})", profile.display_name, profile.user_id);
    Ok(CurrentUser::from(&profile))
}

/// Create an account and write its `users` document.
pub async fn create_account(
    store: &dyn DocumentStore,
    email: &str,
) -> Result<CurrentUser, AuthError> {
    let email = normalize_email(email)?;
    if find_profile(store, &email).await?.is_some() {
        return Err(AuthError::AccountExists(email));
    }

    let profile = UserProfile::for_email(&email);
    let fields = serde_json::to_value(&profile).map_err(StoreError::Parse)?;
    let id = store.add(USERS, fields).await?;
    info!("Created account {} for {} (doc {})", profile.user_id, email, id);
    Ok(CurrentUser::from(&profile))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Ada@Example.com ").unwrap(), "ada@example.com");
        assert!(matches!(normalize_email("   "), Err(AuthError::InvalidEmail)));
        assert!(matches!(normalize_email("@example.com"), Err(AuthError::InvalidEmail)));
        assert!(matches!(normalize_email("ada"), Err(AuthError::InvalidEmail)));
    }
}
