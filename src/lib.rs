//! Credential-management core: account registration and login verification
//! against Argon2-hashed passwords.
//!
//! Three pieces compose sequentially:
//! - [`account::password`]: one-way hashing and verification of plaintext
//!   passwords, the only place plaintext is ever touched;
//! - [`account::UserStore`]: the persistence boundary, with a Postgres
//!   adapter in [`account::PgUserStore`];
//! - [`account::AccountService`]: `register` and `authenticate` on top of
//!   the other two.
//!
//! Transports (HTTP, CLI, RPC) live outside this crate and decide how each
//! [`AuthError`] kind maps to an externally visible response. Sessions,
//! tokens, rate limiting and multi-factor flows are likewise out of scope.

pub mod account;
pub mod config;
pub mod error;

pub use account::{
    AccountService, NewAccount, NewUser, PgUserStore, PublicUser, Role, User, UserStore,
};
pub use config::AppConfig;
pub use error::{AuthError, Result};
