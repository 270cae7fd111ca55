//! User repository

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{User, UserCreate};

const TABLE: &str = "user";

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE email = $email LIMIT 1")
            .bind(("email", email.to_string()))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Register a new, unverified account.
    pub async fn create(&self, data: UserCreate, verification_code: String) -> RepoResult<User> {
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate("User already exists".to_string()));
        }

        let hash_pass = User::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Password hashing failed: {e}")))?;

        let user = User {
            id: None,
            email: data.email,
            username: data.username,
            hash_pass,
            role: "customer".to_string(),
            verified: false,
            verification_code: Some(verification_code),
            created_at: Utc::now(),
        };

        let created: Option<User> = self.base.db().create(TABLE).content(user).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }

    /// Confirm the address: match email + code, set verified, clear the
    /// code. Returns the updated user, or `None` when the pair matches
    /// nothing.
    pub async fn verify(&self, email: &str, code: &str) -> RepoResult<Option<User>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM user WHERE email = $email AND verification_code = $code LIMIT 1",
            )
            .bind(("email", email.to_string()))
            .bind(("code", code.to_string()))
            .await?;
        let users: Vec<User> = result.take(0)?;
        let Some(user) = users.into_iter().next() else {
            return Ok(None);
        };

        let id = user
            .id
            .clone()
            .ok_or_else(|| RepoError::Database("User record without id".to_string()))?;
        self.base
            .db()
            .query("UPDATE $user SET verified = true, verification_code = NONE")
            .bind(("user", id))
            .await?;

        self.find_by_email(email).await
    }
}
