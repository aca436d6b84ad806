//! Sign-in and sign-out.

use std::time::Duration;

use crate::api::VideoApi;
use crate::error::AuthError;
use crate::traits::{SessionError, SessionStore};

/// Log in and persist the issued token for `ttl`.
pub async fn sign_in(
    api: &VideoApi,
    store: &dyn SessionStore,
    ttl: Duration,
    username: &str,
    password: &str,
) -> Result<(), AuthError> {
    let token = api.login(username, password).await?;
    store.set(&token, ttl)?;
    tracing::info!(%username, "signed in");
    Ok(())
}

/// Forget the stored token.
pub fn sign_out(store: &dyn SessionStore) -> Result<(), SessionError> {
    store.clear()?;
    tracing::info!("signed out");
    Ok(())
}
