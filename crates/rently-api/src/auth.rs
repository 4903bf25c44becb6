use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::Error;

/// Credentials for authenticating with the rental backend.
///
/// Each variant carries the secret material needed for its flow.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// A previously issued access token (the common case -- resolved from
    /// env, keyring, or profile config by `rently-config`).
    Token(SecretString),

    /// Username + password. Exchanged for an access token via
    /// `POST /api/v1/auth/login` during connect.
    Password {
        username: String,
        password: SecretString,
    },
}

/// Build the default headers that carry the access token.
///
/// The backend's edge middleware gates on the `accessToken` cookie, while
/// the API handlers accept a bearer token -- both are sent so either path
/// authenticates. Header values are marked sensitive so they never appear
/// in debug output.
pub(crate) fn token_headers(token: &SecretString) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();

    let mut bearer = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
        .map_err(|e| Error::Authentication {
            message: format!("invalid access token header value: {e}"),
        })?;
    bearer.set_sensitive(true);
    headers.insert(reqwest::header::AUTHORIZATION, bearer);

    let mut cookie = HeaderValue::from_str(&format!("accessToken={}", token.expose_secret()))
        .map_err(|e| Error::Authentication {
            message: format!("invalid access token cookie value: {e}"),
        })?;
    cookie.set_sensitive(true);
    headers.insert(reqwest::header::COOKIE, cookie);

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_headers_are_sensitive() {
        let token = SecretString::from("abc123".to_owned());
        let headers = token_headers(&token).expect("headers should build");
        assert!(
            headers
                .get(reqwest::header::AUTHORIZATION)
                .expect("authorization header")
                .is_sensitive()
        );
        assert!(
            headers
                .get(reqwest::header::COOKIE)
                .expect("cookie header")
                .is_sensitive()
        );
    }

    #[test]
    fn control_characters_are_rejected() {
        let token = SecretString::from("bad\ntoken".to_owned());
        assert!(matches!(
            token_headers(&token),
            Err(Error::Authentication { .. })
        ));
    }
}
