//! Local bearer-token inspection.
//!
//! Tokens are decoded without signature or expiry checks. The claims only
//! drive what the UI shows; the API validates the token on every request.

use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::session::store::SessionStore;

fn deserialize_roles<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(role)) => Some(vec![role]),
        Some(OneOrMany::Many(roles)) => Some(roles),
        None => None,
    })
}

/// Claims carried by the platform's access token. Only `sub` (the user's
/// email) is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    #[serde(
        rename = "organizacaoId",
        default,
        deserialize_with = "crate::utils::id::flexible_option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub organization_id: Option<String>,
    #[serde(rename = "organizacaoNome", default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(
        default,
        alias = "role",
        deserialize_with = "deserialize_roles",
        skip_serializing_if = "Option::is_none"
    )]
    pub roles: Option<Vec<String>>,
    #[serde(
        rename = "userId",
        default,
        deserialize_with = "crate::utils::id::flexible_option::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<String>,
    #[serde(rename = "nome", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl TokenClaims {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|r| r.eq_ignore_ascii_case(role))
    }
}

/// Decodes the claims of `token`. Malformed tokens are logged and yield `None`.
pub fn decode_token(token: &str) -> Option<TokenClaims> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    match decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation) {
        Ok(data) => Some(data.claims),
        Err(e) => {
            warn!("Failed to decode access token: {}", e);
            None
        }
    }
}

pub fn current_claims(store: &dyn SessionStore) -> Option<TokenClaims> {
    store.access_token().and_then(|t| decode_token(&t))
}

pub fn organization_id(store: &dyn SessionStore) -> Option<String> {
    current_claims(store)?.organization_id
}

pub fn organization_name(store: &dyn SessionStore) -> Option<String> {
    current_claims(store)?.organization_name
}

pub fn roles(store: &dyn SessionStore) -> Option<Vec<String>> {
    current_claims(store)?.roles
}

/// The subject claim, which the platform fills with the login email.
pub fn email(store: &dyn SessionStore) -> Option<String> {
    current_claims(store).map(|c| c.sub)
}

pub fn user_id(store: &dyn SessionStore) -> Option<String> {
    current_claims(store)?.user_id
}

pub fn display_name(store: &dyn SessionStore) -> Option<String> {
    current_claims(store)?.name
}
