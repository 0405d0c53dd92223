/**
 * Session Tokens
 *
 * HS256 bearer tokens issued on login and verified by the auth middleware.
 *
 * Each token carries the user's email as subject, a fresh UUID v4 `jti`,
 * the internal user id as `nameid`, one `role` entry per role, the
 * configured issuer (also used as audience), `iat`, and an `exp` exactly
 * [`TOKEN_LIFETIME_SECONDS`] after `iat`. There is no refresh mechanism.
 */

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::auth::identity::IdentityUser;

/// Lifetime of an issued token
pub const TOKEN_LIFETIME_SECONDS: i64 = 300;

/// JWT claims
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User email
    pub sub: String,
    /// Unique token id
    pub jti: String,
    /// Internal user id
    pub nameid: String,
    /// Role names
    #[serde(default)]
    pub role: Vec<String>,
    pub iss: String,
    pub aud: String,
    /// Issued at (Unix seconds)
    pub iat: i64,
    /// Expiration (Unix seconds)
    pub exp: i64,
}

impl Claims {
    pub fn has_role(&self, role: &str) -> bool {
        self.role.iter().any(|r| r == role)
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("JWT signing key is not configured")]
    MissingKey,

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

/// A signed token together with the claims it carries
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: Claims,
}

/// Signs and verifies session tokens with one symmetric key
#[derive(Clone)]
pub struct TokenIssuer {
    key: String,
    issuer: String,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("key", &"<redacted>")
            .field("issuer", &self.issuer)
            .finish()
    }
}

impl TokenIssuer {
    /// Create an issuer
    ///
    /// # Errors
    /// [`TokenError::MissingKey`] if `key` is empty
    pub fn new(key: impl Into<String>, issuer: impl Into<String>) -> Result<Self, TokenError> {
        let key = key.into();
        if key.is_empty() {
            return Err(TokenError::MissingKey);
        }
        Ok(Self {
            key,
            issuer: issuer.into(),
        })
    }

    /// Issue a token for `user` holding `roles`, valid from now
    pub fn issue(&self, user: &IdentityUser, roles: &[String]) -> Result<IssuedToken, TokenError> {
        self.issue_at(user, roles, Utc::now())
    }

    /// Issue a token with an explicit issuance instant
    pub fn issue_at(
        &self,
        user: &IdentityUser,
        roles: &[String],
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedToken, TokenError> {
        let iat = issued_at.timestamp();
        let claims = Claims {
            sub: user.email.clone(),
            jti: uuid::Uuid::new_v4().to_string(),
            nameid: user.id.clone(),
            role: roles.to_vec(),
            iss: self.issuer.clone(),
            aud: self.issuer.clone(),
            iat,
            exp: iat + TOKEN_LIFETIME_SECONDS,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.key.as_bytes()),
        )?;

        Ok(IssuedToken { token, claims })
    }

    /// Verify signature, issuer, audience and expiry, returning the claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[self.issuer.as_str()]);
        validation.set_audience(&[self.issuer.as_str()]);
        validation.leeway = 0;

        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.key.as_bytes()),
            &validation,
        )?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new("a-test-signing-key-of-reasonable-length", "bookstore-api").unwrap()
    }

    fn user() -> IdentityUser {
        IdentityUser {
            id: "3f1c2a9e-0000-4000-8000-000000000001".to_string(),
            username: "admin@bookstore.com".to_string(),
            email: "admin@bookstore.com".to_string(),
            password_hash: String::new(),
            lockout_end: None,
        }
    }

    #[test]
    fn test_empty_key_is_rejected() {
        let result = TokenIssuer::new("", "bookstore-api");
        assert!(matches!(result, Err(TokenError::MissingKey)));
    }

    #[test]
    fn test_issue_sets_claims() {
        let roles = vec!["Administrator".to_string()];
        let issued = issuer().issue(&user(), &roles).unwrap();

        assert_eq!(issued.token.split('.').count(), 3);
        assert_eq!(issued.claims.sub, "admin@bookstore.com");
        assert_eq!(issued.claims.nameid, user().id);
        assert_eq!(issued.claims.role, roles);
        assert_eq!(issued.claims.iss, "bookstore-api");
        assert_eq!(issued.claims.aud, "bookstore-api");
        assert_eq!(issued.claims.exp, issued.claims.iat + TOKEN_LIFETIME_SECONDS);
        assert!(uuid::Uuid::parse_str(&issued.claims.jti).is_ok());
    }

    #[test]
    fn test_back_to_back_tokens_differ_only_in_identity() {
        let roles = vec!["Customer".to_string()];
        let first = issuer().issue(&user(), &roles).unwrap();
        let second = issuer().issue(&user(), &roles).unwrap();

        assert_ne!(first.claims.jti, second.claims.jti);
        assert_ne!(first.token, second.token);
        assert_eq!(first.claims.sub, second.claims.sub);
        assert_eq!(first.claims.role, second.claims.role);
        assert_eq!(second.claims.exp, second.claims.iat + TOKEN_LIFETIME_SECONDS);
    }

    #[test]
    fn test_verify_round_trip() {
        let issuer = issuer();
        let issued = issuer.issue(&user(), &["Administrator".to_string()]).unwrap();

        let claims = issuer.verify(&issued.token).unwrap();
        assert_eq!(claims, issued.claims);
        assert!(claims.has_role("Administrator"));
        assert!(!claims.has_role("Customer"));
    }

    #[test]
    fn test_verify_rejects_wrong_key() {
        let issued = issuer().issue(&user(), &[]).unwrap();
        let other = TokenIssuer::new("a-different-signing-key", "bookstore-api").unwrap();
        assert!(other.verify(&issued.token).is_err());
    }

    #[test]
    fn test_verify_rejects_wrong_issuer() {
        let issued = issuer().issue(&user(), &[]).unwrap();
        let other =
            TokenIssuer::new("a-test-signing-key-of-reasonable-length", "someone-else").unwrap();
        assert!(other.verify(&issued.token).is_err());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let issuer = issuer();
        let issued = issuer
            .issue_at(&user(), &[], Utc::now() - Duration::seconds(TOKEN_LIFETIME_SECONDS + 60))
            .unwrap();
        assert!(issuer.verify(&issued.token).is_err());
    }

    #[test]
    fn test_verify_rejects_garbage() {
        assert!(issuer().verify("invalid.token.here").is_err());
    }

    #[test]
    fn test_debug_redacts_key() {
        let debug = format!("{:?}", issuer());
        assert!(!debug.contains("reasonable-length"));
    }
}
