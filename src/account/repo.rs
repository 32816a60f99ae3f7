use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::account::model::{NewUser, User};
use crate::account::store::UserStore;
use crate::config::AppConfig;
use crate::error::{AuthError, Result};

/// Postgres-backed user store.
///
/// The `users.email` UNIQUE constraint is the authoritative uniqueness
/// guard; a violated insert comes back as `DuplicateEmail` rather than an
/// opaque store error.
#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn connect(config: &AppConfig) -> anyhow::Result<Self> {
        let db = PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await?;
        Ok(Self::new(db))
    }

    /// Apply the bundled schema migrations.
    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations").run(&self.db).await?;
        Ok(())
    }
}

fn store_err(e: sqlx::Error) -> AuthError {
    AuthError::Store(e.into())
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, role, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await
        .map_err(store_err)?;
        Ok(user)
    }

    async fn insert(&self, new: &NewUser) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password_hash, role, created_at
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.password_hash)
        .bind(new.role)
        .fetch_one(&self.db)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => AuthError::DuplicateEmail,
            other => store_err(other),
        })?;
        Ok(user)
    }
}
