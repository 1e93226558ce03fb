//! Admin authentication service
//!
//! One shared admin password; a successful login yields a signed,
//! time-limited token. Logout is a client-side discard.

use roster_common::AdminClaims;
use tracing::{info, instrument, warn};

use crate::dto::{LoginRequest, LoginResponse, ValidateResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Admin authentication service
pub struct AdminAuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminAuthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Exchange the admin password for a token
    #[instrument(skip(self, request))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        if let Err(e) = self.ctx.admin_password().verify(&request.password) {
            warn!("Admin login failed");
            return Err(e.into());
        }

        let token = self.ctx.token_service().issue()?;
        info!(expires_at = token.expires_at, "Admin logged in");

        Ok(LoginResponse {
            success: true,
            token: token.token,
            expires_at: token.expires_at,
        })
    }

    /// Check a bearer token and return its claims
    pub fn authenticate(&self, token: &str) -> ServiceResult<AdminClaims> {
        Ok(self.ctx.token_service().validate(token)?)
    }

    /// Check a bearer token for the validity endpoint
    #[instrument(skip(self, token))]
    pub fn validate(&self, token: &str) -> ServiceResult<ValidateResponse> {
        self.authenticate(token)?;
        Ok(ValidateResponse::valid())
    }
}
