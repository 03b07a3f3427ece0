use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use crate::errors::AppError;

/// Decides whether a bearer credential grants access to the protected routes.
pub trait Authenticator: Send + Sync {
    fn verify(&self, credential: &str) -> bool;
}

/// One shared secret, compared verbatim.
pub struct StaticTokenAuthenticator {
    token: String,
}

impl StaticTokenAuthenticator {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

impl Authenticator for StaticTokenAuthenticator {
    fn verify(&self, credential: &str) -> bool {
        credential == self.token
    }
}

/// Extractor guarding a handler behind the registered `Authenticator`.
///
/// Extraction fails with `AppError::Unauthorized` when the `Authorization`
/// header is missing, the scheme is not exactly `Bearer`, or the credential
/// is rejected.
pub struct Authenticated;

impl FromRequest for Authenticated {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authorize(req))
    }
}

fn authorize(req: &HttpRequest) -> Result<Authenticated, AppError> {
    let authenticator = req
        .app_data::<web::Data<dyn Authenticator>>()
        .ok_or_else(|| AppError::InternalServerError("Authenticator not configured".to_string()))?;

    let (scheme, credential) = req.headers().get("Authorization")
        .and_then(|auth| auth.to_str().ok())
        .and_then(|auth| auth.split_once(' '))
        .filter(|(scheme, credential)| !scheme.is_empty() && !credential.is_empty())
        .ok_or_else(|| AppError::Unauthorized("Not authenticated".to_string()))?;

    if scheme != "Bearer" {
        return Err(AppError::Unauthorized("Invalid authentication scheme".to_string()));
    }

    if !authenticator.verify(credential) {
        return Err(AppError::Unauthorized("Invalid or expired token".to_string()));
    }

    Ok(Authenticated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use std::sync::Arc;

    fn request_with(header: Option<&str>) -> HttpRequest {
        let authenticator: Arc<dyn Authenticator> = Arc::new(StaticTokenAuthenticator::new("my-secret-token"));
        let mut req = TestRequest::default().app_data(web::Data::from(authenticator));
        if let Some(value) = header {
            req = req.insert_header(("Authorization", value));
        }
        req.to_http_request()
    }

    fn detail(result: Result<Authenticated, AppError>) -> String {
        match result {
            Err(AppError::Unauthorized(msg)) => msg,
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("request was authorized"),
        }
    }

    #[test]
    fn static_token_matches_exactly() {
        let auth = StaticTokenAuthenticator::new("my-secret-token");
        assert!(auth.verify("my-secret-token"));
        assert!(!auth.verify("my-secret-token "));
        assert!(!auth.verify("MY-SECRET-TOKEN"));
    }

    #[test]
    fn valid_bearer_header_is_accepted() {
        assert!(authorize(&request_with(Some("Bearer my-secret-token"))).is_ok());
    }

    #[test]
    fn missing_or_malformed_header_is_not_authenticated() {
        assert_eq!(detail(authorize(&request_with(None))), "Not authenticated");
        assert_eq!(detail(authorize(&request_with(Some("Bearer")))), "Not authenticated");
    }

    #[test]
    fn scheme_must_be_exactly_bearer() {
        assert_eq!(
            detail(authorize(&request_with(Some("bearer my-secret-token")))),
            "Invalid authentication scheme"
        );
        assert_eq!(
            detail(authorize(&request_with(Some("Basic my-secret-token")))),
            "Invalid authentication scheme"
        );
    }

    #[test]
    fn wrong_token_is_rejected() {
        assert_eq!(detail(authorize(&request_with(Some("Bearer nope")))), "Invalid or expired token");
    }

    #[test]
    fn missing_authenticator_is_a_server_error() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer my-secret-token"))
            .to_http_request();
        assert!(matches!(authorize(&req), Err(AppError::InternalServerError(_))));
    }
}
