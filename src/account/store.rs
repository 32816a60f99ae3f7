use async_trait::async_trait;

use crate::account::model::{NewUser, User};
use crate::error::Result;

/// Persistence boundary for user records.
///
/// Implementations must enforce email uniqueness themselves: `insert` has to
/// fail with [`DuplicateEmail`](crate::error::AuthError::DuplicateEmail) when
/// the email is already taken, even if the caller looked it up first. The
/// lookup-then-insert sequence in the service is not atomic across
/// concurrent registrations.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Insert a new user, generating its id and creation timestamp.
    async fn insert(&self, new: &NewUser) -> Result<User>;
}
