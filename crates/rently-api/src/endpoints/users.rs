//! Auth and user-profile endpoints.

use secrecy::{ExposeSecret, SecretString};

use crate::Error;
use crate::client::RentalClient;
use crate::types::{LoginRequest, LoginResponse, UserProfileResponse};

impl RentalClient {
    /// Exchange username + password for an access token.
    ///
    /// Works on an unauthenticated client. The backend reports bad
    /// credentials through the same 401 shape as an expired session, so
    /// that case is remapped to an authentication failure here.
    pub async fn login(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<LoginResponse, Error> {
        let body = LoginRequest {
            username,
            password: password.expose_secret(),
        };

        match self.post("auth/login", &body).await {
            Err(Error::SessionExpired) => Err(Error::Authentication {
                message: "invalid username or password".into(),
            }),
            Err(Error::Api {
                status_code: 400 | 403,
                message,
            }) => Err(Error::Authentication { message }),
            other => other,
        }
    }

    /// Invalidate the current token server-side. Best-effort.
    pub async fn logout(&self) -> Result<(), Error> {
        self.post_no_data("auth/logout", &serde_json::json!({}))
            .await
    }

    /// Fetch the signed-in user's profile.
    ///
    /// Doubles as the session probe: a dead token surfaces as
    /// [`Error::SessionExpired`] from the envelope's 401.
    pub async fn get_profile(&self) -> Result<UserProfileResponse, Error> {
        self.get("users/profile").await
    }
}
