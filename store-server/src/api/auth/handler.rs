//! Authentication handlers
//!
//! Registration issues a 6-digit verification code and emails it; login is
//! blocked until the address is verified.

use std::time::Duration;

use axum::{Json, extract::State};
use rand::Rng;
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use shared::models::UserInfo;

use crate::auth::MaybeUser;
use crate::core::ServerState;
use crate::db::models::UserCreate;
use crate::db::repository::UserRepository;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_PASSWORD_LEN, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

const MIN_PASSWORD_LEN: usize = 8;

fn generate_verification_code() -> String {
    let code: u32 = rand::thread_rng().gen_range(100_000..1_000_000);
    code.to_string()
}

// ========== Register ==========

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub username: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "requiresVerification")]
    pub requires_verification: bool,
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<Json<RegisterResponse>> {
    if !req.email.validate_email() || req.email.len() > MAX_EMAIL_LEN {
        return Err(AppError::validation("A valid email address is required"));
    }
    validate_required_text(&req.username, "username", MAX_NAME_LEN)?;
    if req.password.len() < MIN_PASSWORD_LEN || req.password.len() > MAX_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "Password must be between {MIN_PASSWORD_LEN} and {MAX_PASSWORD_LEN} characters"
        )));
    }

    let code = generate_verification_code();
    let repo = UserRepository::new(state.db.clone());
    let user = repo
        .create(
            UserCreate {
                email: req.email,
                password: req.password,
                username: req.username,
            },
            code.clone(),
        )
        .await?;

    // Delivery failure is logged by the transport; registration stands
    // either way so the code can be re-sent later.
    if let Err(e) = state.email.send_verification_code(&user.email, &code).await {
        tracing::warn!(email = %user.email, error = %e, "Failed to send verification email");
    }

    Ok(Json(RegisterResponse {
        success: true,
        message: "Registration successful. Please check your email for verification code."
            .to_string(),
        requires_verification: true,
    }))
}

// ========== Login ==========

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let repo = UserRepository::new(state.db.clone());
    let user = repo.find_by_email(&req.email).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error message to prevent account enumeration
    let user = match user {
        Some(u) => {
            let password_valid = u
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
            if !password_valid {
                tracing::warn!(email = %req.email, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }
            u
        }
        None => {
            tracing::warn!(email = %req.email, "Login failed - user not found");
            return Err(AppError::invalid_credentials());
        }
    };

    if !user.verified {
        return Err(AppError::forbidden(
            "Email not verified. Please verify your email first.",
        ));
    }

    let info = user.to_info();
    let token = state
        .get_jwt_service()
        .generate_token(&info)
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    Ok(Json(LoginResponse { token, user: info }))
}

// ========== Verify ==========

#[derive(Deserialize)]
pub struct VerifyRequest {
    pub email: String,
    pub code: String,
}

#[derive(Serialize)]
pub struct VerifyResponse {
    pub success: bool,
    pub user: UserInfo,
}

/// POST /api/auth/verify
pub async fn verify(
    State(state): State<ServerState>,
    Json(req): Json<VerifyRequest>,
) -> AppResult<Json<VerifyResponse>> {
    let repo = UserRepository::new(state.db.clone());
    let user = repo
        .verify(&req.email, &req.code)
        .await?
        .ok_or_else(|| AppError::invalid("Invalid verification code"))?;

    Ok(Json(VerifyResponse {
        success: true,
        user: user.to_info(),
    }))
}

// ========== Check ==========

#[derive(Serialize)]
pub struct CheckResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserInfo>,
}

/// GET /api/auth/check - report who the bearer token belongs to. Missing or
/// bad tokens downgrade to `authenticated: false` instead of an error.
pub async fn check(MaybeUser(user): MaybeUser) -> Json<CheckResponse> {
    match user {
        Some(current) => Json(CheckResponse {
            authenticated: true,
            user: Some(current.as_user_info()),
        }),
        None => Json(CheckResponse {
            authenticated: false,
            user: None,
        }),
    }
}
