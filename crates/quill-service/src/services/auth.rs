//! Authentication service
//!
//! Handles user registration and login. Login attempts emit AUTH_SUCCESS or
//! AUTH_FAILURE security events through the audit side channel.

use quill_common::auth::{hash_password, validate_password_strength, verify_password};
use quill_core::entities::{SecurityEventType, User};
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, CurrentUserResponse, LoginRequest, RegisterRequest};

use super::audit::AuditEvent;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const LOGIN_ENDPOINT: &str = "/api/v1/auth/login";

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        // Validate password strength before proceeding
        validate_password_strength(&request.password)?;

        // Check if email already exists
        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        // Hash password
        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user = User::new(self.ctx.generate_id(), request.username, request.email);
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered");

        let token = self.ctx.jwt_service().issue(user.id)?;
        Ok(AuthResponse::new(
            token.access_token,
            token.expires_in,
            CurrentUserResponse::from(&user),
        ))
    }

    /// Login with email and password
    ///
    /// A banned principal may still authenticate; every mutating operation is
    /// denied by the access policy instead.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest, ip: &str) -> ServiceResult<AuthResponse> {
        let user = match self.ctx.user_repo().find_by_email(&request.email).await? {
            Some(user) => user,
            None => {
                warn!("Login failed: unknown email");
                self.ctx.audit().record(
                    AuditEvent::new(SecurityEventType::AuthFailure, ip, LOGIN_ENDPOINT)
                        .with_details(serde_json::json!({"reason": "unknown_email"})),
                );
                return Err(ServiceError::App(quill_common::AppError::InvalidCredentials));
            }
        };

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(quill_common::AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            self.ctx.audit().record(
                AuditEvent::new(SecurityEventType::AuthFailure, ip, LOGIN_ENDPOINT)
                    .with_user(user.id)
                    .with_details(serde_json::json!({"reason": "invalid_password"})),
            );
            return Err(ServiceError::App(quill_common::AppError::InvalidCredentials));
        }

        info!(user_id = %user.id, "User logged in");
        self.ctx.audit().record(
            AuditEvent::new(SecurityEventType::AuthSuccess, ip, LOGIN_ENDPOINT)
                .with_user(user.id),
        );

        let token = self.ctx.jwt_service().issue(user.id)?;
        Ok(AuthResponse::new(
            token.access_token,
            token.expires_in,
            CurrentUserResponse::from(&user),
        ))
    }
}
