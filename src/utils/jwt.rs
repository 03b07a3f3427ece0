use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use chrono::{Duration, Utc};
use crate::utils::auth::Authenticator;

const TOKEN_LIFETIME_DAYS: i64 = 7;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

/// Accepts HS256 tokens signed with the configured secret.
pub struct JwtAuthenticator {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtAuthenticator {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn issue(&self, subject: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: subject.to_string(),
            exp: (Utc::now() + Duration::days(TOKEN_LIFETIME_DAYS)).timestamp() as usize,
        };
        encode(&Header::default(), &claims, &self.encoding_key)
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
    }
}

impl Authenticator for JwtAuthenticator {
    fn verify(&self, credential: &str) -> bool {
        self.validate_token(credential).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_tokens_verify() {
        let auth = JwtAuthenticator::new("signing-secret");
        let token = auth.issue("hr-admin").unwrap();
        assert!(auth.verify(&token));
        assert_eq!(auth.validate_token(&token).unwrap().sub, "hr-admin");
    }

    #[test]
    fn tokens_from_another_secret_are_rejected() {
        let token = JwtAuthenticator::new("other-secret").issue("hr-admin").unwrap();
        assert!(!JwtAuthenticator::new("signing-secret").verify(&token));
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let claims = Claims {
            sub: "hr-admin".to_string(),
            exp: (Utc::now() - Duration::days(1)).timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(b"signing-secret")).unwrap();
        assert!(!JwtAuthenticator::new("signing-secret").verify(&token));
    }

    #[test]
    fn raw_shared_secret_is_not_a_token() {
        assert!(!JwtAuthenticator::new("signing-secret").verify("signing-secret"));
    }
}
