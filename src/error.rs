use thiserror::Error;

/// Failure kinds surfaced by the account core.
///
/// `DuplicateEmail` and `InvalidCredentials` are expected outcomes that a
/// transport layer maps to client-correctable responses; the remaining kinds
/// are server faults and should map to a generic error response without
/// echoing internal detail.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The password hash could not be produced. A partial or empty hash is
    /// never returned.
    #[error("password hashing failed: {0}")]
    Hashing(String),

    /// Verification hit a lower-level fault, e.g. a stored hash that cannot
    /// be parsed. Distinct from a plain mismatch, which the verifier reports
    /// as `Ok(false)`.
    #[error("password verification failed: {0}")]
    Verification(String),

    /// Registration conflict: the email already has an account.
    #[error("an account with this email already exists")]
    DuplicateEmail,

    /// Login denied. Covers both unknown email and wrong password so the
    /// response cannot be used to probe which emails are registered.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Store-level fault, propagated unchanged.
    #[error("user store error: {0}")]
    Store(anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AuthError>;
