/// Authentication service - JWT and password handling
use crate::error::{Result, ServerError};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct AuthService {
    secret: String,
    token_expiration: Duration,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user ID)
    pub exp: i64,    // Expiration time
    pub iat: i64,    // Issued at
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl AuthService {
    pub fn new(secret: String, expiration_hours: u64) -> Self {
        Self {
            secret,
            token_expiration: Duration::hours(expiration_hours as i64),
        }
    }

    /// Hash a password using bcrypt
    pub fn hash_password(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(ServerError::from)
    }

    /// Verify a password against a hash
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(password, hash).map_err(ServerError::from)
    }

    /// Create a signed token for a user
    pub fn create_token(&self, user_id: i64, role: Role) -> Result<String> {
        let now = Utc::now();
        let exp = now + self.token_expiration;

        let claims = Claims {
            sub: user_id.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            role,
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());
        encode(&Header::default(), &claims, &encoding_key).map_err(ServerError::from)
    }

    /// Verify and decode a token
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &decoding_key, &validation)?;
        Ok(token_data.claims)
    }

    /// Verify a token and return the caller's user id and role
    pub fn authenticate(&self, token: &str) -> Result<(i64, Role)> {
        let claims = self.verify_token(token)?;
        let user_id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| ServerError::Auth("Invalid subject claim".to_string()))?;
        Ok((user_id, claims.role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hashing() {
        let auth = AuthService::new("secret".to_string(), 1);
        let password = "my_secure_password";

        let hash = auth.hash_password(password).unwrap();
        assert!(auth.verify_password(password, &hash).unwrap());
        assert!(!auth.verify_password("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_token_creation_and_verification() {
        let auth = AuthService::new("secret".to_string(), 1);

        let token = auth.create_token(42, Role::User).unwrap();
        let (user_id, role) = auth.authenticate(&token).unwrap();

        assert_eq!(user_id, 42);
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_admin_role_survives_roundtrip() {
        let auth = AuthService::new("secret".to_string(), 1);

        let token = auth.create_token(1, Role::Admin).unwrap();
        let (_, role) = auth.authenticate(&token).unwrap();

        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let auth = AuthService::new("secret".to_string(), 1);
        let other = AuthService::new("other-secret".to_string(), 1);

        let token = other.create_token(42, Role::User).unwrap();
        assert!(auth.authenticate(&token).is_err());
    }
}
