//! plex.tv account sign-in.

use serde::Deserialize;

use crate::http;

use super::{default_headers, PlexError};

const SIGNIN_URL: &str = "https://plex.tv/api/v2/users/signin";

/// Account token returned by a successful sign-in. Sent as `X-Plex-Token` on
/// every subsequent request.
#[derive(Debug, Clone)]
pub struct AuthToken(pub(crate) String);

/// The part of the sign-in response we care about.
#[derive(Debug, Deserialize)]
struct SignInResponse {
    #[serde(rename = "authToken")]
    auth_token: String,
}

/// Authenticate against plex.tv with username and password.
///
/// A 401/403 from the endpoint becomes [`PlexError::AuthRejected`]; other
/// failures pass through unchanged.
pub fn sign_in(username: &str, password: &str) -> Result<AuthToken, PlexError> {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("login", username)
        .append_pair("password", password)
        .finish();

    let response = http::post_form(SIGNIN_URL, &body, &default_headers(None)).map_err(|err| {
        match err {
            PlexError::Status { code, .. } if code == 401 || code == 403 => {
                PlexError::AuthRejected(code)
            }
            other => other,
        }
    })?;

    let parsed: SignInResponse =
        serde_json::from_slice(&response).map_err(|source| PlexError::Decode {
            context: "sign-in response",
            source,
        })?;
    tracing::debug!("signed in to plex.tv as {username}");
    Ok(AuthToken(parsed.auth_token))
}
