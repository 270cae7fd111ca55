//! Public view of an account

use serde::{Deserialize, Serialize};

/// User payload returned by auth endpoints. Never carries the password hash
/// or the pending verification code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub username: String,
    pub role: String,
    pub verified: bool,
}
