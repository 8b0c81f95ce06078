use tracing::info;

use crate::client::ApiClient;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest, RegisteredUser};
use crate::error::Result;
use crate::session::jwt::{self, TokenClaims};
use crate::utils::validation::{field_error, validate};

#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Logs in, stores the token pair and lands on the dashboard route.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let payload = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        validate(&payload)?;
        if password.trim().is_empty() {
            return Err(field_error("senha", "required", "Password is required"));
        }

        let response: LoginResponse = self.client.post_public("auth/login", &payload).await?;
        self.client
            .start_session(&response.access_token, &response.refresh_token)?;

        info!("User {} logged in", payload.email);
        self.client
            .navigator()
            .navigate(self.client.dashboard_route());
        Ok(response)
    }

    pub async fn register(&self, payload: RegisterRequest) -> Result<RegisteredUser> {
        validate(&payload)?;
        let user: RegisteredUser = self.client.post_public("auth/register", &payload).await?;
        info!("Registered {:?} account for {}", user.user_type, user.email);
        Ok(user)
    }

    /// Clears every stored key and redirects to the login route.
    pub fn logout(&self) {
        info!("Logging out");
        self.client.end_session();
    }

    /// True when a non-empty access token is stored. Neither signature nor
    /// expiry is checked.
    pub fn is_authenticated(&self) -> bool {
        self.client.store().access_token().is_some()
    }

    pub fn claims(&self) -> Option<TokenClaims> {
        jwt::current_claims(self.client.store())
    }

    pub fn organization_id(&self) -> Option<String> {
        jwt::organization_id(self.client.store())
    }

    pub fn organization_name(&self) -> Option<String> {
        jwt::organization_name(self.client.store())
    }

    pub fn roles(&self) -> Option<Vec<String>> {
        jwt::roles(self.client.store())
    }

    pub fn email(&self) -> Option<String> {
        jwt::email(self.client.store())
    }

    pub fn user_id(&self) -> Option<String> {
        jwt::user_id(self.client.store())
    }

    pub fn display_name(&self) -> Option<String> {
        jwt::display_name(self.client.store())
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.claims().map(|c| c.has_role(role)).unwrap_or(false)
    }
}
