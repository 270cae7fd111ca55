//! User account entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::UserInfo;

use super::serde_helpers;

pub type UserId = RecordId;

/// User account. Handlers never return this type directly; [`User::to_info`]
/// is the only shape that leaves the server, so the hash and the pending
/// verification code stay internal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<UserId>,
    pub email: String,
    pub username: String,
    pub hash_pass: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub verification_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

fn default_role() -> String {
    "customer".to_string()
}

/// Register payload
#[derive(Debug, Clone, Deserialize)]
pub struct UserCreate {
    pub email: String,
    pub password: String,
    pub username: String,
}

impl User {
    /// Verify a password against the stored argon2 hash.
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.hash_pass)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash a password with argon2 and a fresh salt.
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }

    /// Public view, safe to return from auth endpoints.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
            email: self.email.clone(),
            username: self.username.clone(),
            role: self.role.clone(),
            verified: self.verified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_round_trip() {
        let hash = User::hash_password("s3cret-password").unwrap();
        let user = User {
            id: None,
            email: "a@b.com".into(),
            username: "a".into(),
            hash_pass: hash,
            role: default_role(),
            verified: false,
            verification_code: None,
            created_at: Utc::now(),
        };
        assert!(user.verify_password("s3cret-password").unwrap());
        assert!(!user.verify_password("wrong").unwrap());
    }
}
