use tracing::{debug, info};

use crate::config::NEW_ACCOUNT_BIO;
use crate::core::db::SessionBackend;
use crate::core::errors::{FeedError, ValidationFailure};
use crate::core::helpers::next_sequential_id;
use crate::models::models::Account;
use crate::store::SessionStore;

/// Logs in the account whose email and password both match exactly.
pub fn login<B: SessionBackend>(
    store: &mut SessionStore<B>,
    email: &str,
    password: &str,
) -> Result<Account, FeedError> {
    let accounts = store.accounts()?;
    let account = accounts
        .into_iter()
        .find(|a| a.email == email && a.password == password);

    match account {
        Some(account) => {
            store.set_current_user(Some(&account))?;
            info!(user_id = account.id, "logged in");
            Ok(account)
        }
        None => {
            debug!("login rejected");
            Err(FeedError::InvalidCredentials)
        }
    }
}

/// Registers a new account and logs it in.
///
/// Rules are checked in order and the first violation is reported: all
/// fields present, passwords equal, email unused, username unused.
pub fn signup<B: SessionBackend>(
    store: &mut SessionStore<B>,
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<Account, FeedError> {
    if username.is_empty() || email.is_empty() || password.is_empty() || confirm_password.is_empty() {
        return Err(ValidationFailure::MissingFields.into());
    }
    if password != confirm_password {
        return Err(ValidationFailure::PasswordMismatch.into());
    }

    let mut accounts = store.accounts()?;
    if accounts.iter().any(|a| a.email == email) {
        return Err(ValidationFailure::EmailTaken.into());
    }
    if accounts.iter().any(|a| a.username == username) {
        return Err(ValidationFailure::UsernameTaken.into());
    }

    let ids: Vec<u64> = accounts.iter().map(|a| a.id).collect();
    let account = Account {
        id: next_sequential_id(&ids),
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        bio: NEW_ACCOUNT_BIO.to_string(),
        followers: 0,
        following: 0,
    };

    accounts.push(account.clone());
    store.set_accounts(&accounts)?;
    store.set_current_user(Some(&account))?;
    info!(user_id = account.id, username = %account.username, "account created");

    Ok(account)
}

/// Ends the session. Liked state is session-scoped, so it goes too.
pub fn logout<B: SessionBackend>(store: &mut SessionStore<B>) -> Result<(), FeedError> {
    store.set_current_user(None)?;
    store.set_liked_posts(&Default::default())?;
    info!("logged out");
    Ok(())
}
