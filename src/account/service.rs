use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use crate::account::model::{NewUser, PublicUser, Role};
use crate::account::password::{hash_password, verify_password};
use crate::account::store::UserStore;
use crate::error::{AuthError, Result};

/// Registration input. `role` falls back to [`Role::User`] when unset.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
}

/// Registers accounts and authenticates login attempts against an injected
/// [`UserStore`].
///
/// Callers are expected to hand in non-empty, policy-checked name, email and
/// password; email shape and password strength are not enforced here, and
/// emails are passed to the store verbatim.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn UserStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Create an account with a freshly hashed password and return the
    /// stored record without its hash.
    #[instrument(skip(self, new), fields(email = %new.email))]
    pub async fn register(&self, new: NewAccount) -> Result<PublicUser> {
        if let Some(existing) = self.store.find_by_email(&new.email).await? {
            warn!(user_id = %existing.id, "email already registered");
            return Err(AuthError::DuplicateEmail);
        }

        let plain = new.password;
        let hash = tokio::task::spawn_blocking(move || hash_password(&plain))
            .await
            .map_err(|e| {
                error!(error = %e, "password hashing task failed");
                AuthError::Hashing(e.to_string())
            })??;

        // The store's UNIQUE constraint is the authoritative guard; a
        // concurrent registration between the lookup above and this insert
        // still surfaces as DuplicateEmail.
        let user = self
            .store
            .insert(&NewUser {
                name: new.name,
                email: new.email,
                password_hash: hash,
                role: new.role.unwrap_or_default(),
            })
            .await?;

        info!(user_id = %user.id, email = %user.email, "user registered");
        Ok(user.into())
    }

    /// Check a login attempt. Unknown email and wrong password both come
    /// back as [`AuthError::InvalidCredentials`]; only the log distinguishes
    /// the cause.
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<PublicUser> {
        let user = match self.store.find_by_email(email).await? {
            Some(u) => u,
            None => {
                warn!("login attempt for unknown email");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let plain = password.to_string();
        let stored = user.password_hash.clone();
        let ok = tokio::task::spawn_blocking(move || verify_password(&plain, &stored))
            .await
            .map_err(|e| {
                error!(error = %e, "password verification task failed");
                AuthError::Verification(e.to_string())
            })??;

        if !ok {
            warn!(user_id = %user.id, "login attempt with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        info!(user_id = %user.id, email = %user.email, "user authenticated");
        Ok(user.into())
    }
}
