//! The ClientLogin credential exchange.

use std::collections::HashMap;

use contentstack_http::Transport;

use crate::error::AuthError;
use crate::token::AuthToken;

/// Default ClientLogin endpoint.
pub const DEFAULT_LOGIN_URI: &str = "https://www.google.com/accounts/ClientLogin";

/// Service name of the Content API for Shopping.
pub const DEFAULT_SERVICE: &str = "structuredcontent";

/// Everything about a login except the credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginParams {
    /// ClientLogin endpoint.
    pub uri: String,
    /// Service the token is requested for.
    pub service: String,
    /// Identifies the calling application.
    pub source: String,
    /// Account type, `GOOGLE` for regular accounts.
    pub account_type: String,
}

impl Default for LoginParams {
    fn default() -> Self {
        Self {
            uri: DEFAULT_LOGIN_URI.to_owned(),
            service: DEFAULT_SERVICE.to_owned(),
            source: "contentstack".to_owned(),
            account_type: "GOOGLE".to_owned(),
        }
    }
}

/// Exchange `email` and `password` for a token.
///
/// # Errors
///
/// - `AuthError::Transport` if the request cannot be exchanged
/// - `AuthError::Rejected` if the endpoint answers with a non-200 status
/// - `AuthError::MissingToken` if a 200 answer has no `Auth` field
pub fn client_login<T: Transport + ?Sized>(
    transport: &T,
    params: &LoginParams,
    email: &str,
    password: &str,
) -> Result<AuthToken, AuthError> {
    let fields = [
        ("Email", email),
        ("Passwd", password),
        ("service", params.service.as_str()),
        ("source", params.source.as_str()),
        ("accountType", params.account_type.as_str()),
    ];
    let response = transport.post_form(&params.uri, &fields)?;
    let mut values = parse_key_values(&response.body);

    if !response.is_ok() {
        let reason = values.remove("Error").unwrap_or_default();
        tracing::warn!(status = %response.status, reason = %reason, "login rejected");
        return Err(AuthError::Rejected {
            status: response.status.as_u16(),
            reason,
        });
    }

    let token = values.remove("Auth").ok_or(AuthError::MissingToken)?;
    tracing::info!(service = %params.service, "logged in");
    Ok(AuthToken::new(token))
}

/// Parse `key=value` lines, ignoring blank lines and lines without `=`.
fn parse_key_values(body: &str) -> HashMap<String, String> {
    body.lines()
        .map(str::trim_end)
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use contentstack_http::{HttpResponse, RecordingTransport};
    use http::StatusCode;

    use super::*;

    const OK_BODY: &str = "SID=DQAAAGgA\r\nLSID=DQAAAGsA\r\nAuth=DQAAAGgAdk3\r\n";

    #[test]
    fn test_should_post_credentials_as_form() {
        let transport =
            RecordingTransport::new().respond(HttpResponse::new(StatusCode::OK, OK_BODY));

        let token = client_login(&transport, &LoginParams::default(), "me@example.com", "pw")
            .expect("login succeeds");

        assert_eq!(token.as_str(), "DQAAAGgAdk3");
        let request = transport.last_request().expect("request sent");
        assert_eq!(request.uri, DEFAULT_LOGIN_URI);
        let body = request.body.expect("form body");
        assert!(body.contains("Email=me%40example.com"));
        assert!(body.contains("Passwd=pw"));
        assert!(body.contains("service=structuredcontent"));
        assert!(body.contains("accountType=GOOGLE"));
    }

    #[test]
    fn test_should_report_rejection_reason() {
        let transport = RecordingTransport::new().respond(HttpResponse::new(
            StatusCode::FORBIDDEN,
            "Error=BadAuthentication\n",
        ));

        let err = client_login(&transport, &LoginParams::default(), "me@example.com", "bad")
            .unwrap_err();
        assert!(matches!(
            err,
            AuthError::Rejected { status: 403, ref reason } if reason == "BadAuthentication"
        ));
    }

    #[test]
    fn test_should_fail_without_auth_field() {
        let transport =
            RecordingTransport::new().respond(HttpResponse::new(StatusCode::OK, "SID=x\n"));

        let err = client_login(&transport, &LoginParams::default(), "a", "b").unwrap_err();
        assert!(matches!(err, AuthError::MissingToken));
    }

    #[test]
    fn test_should_keep_equals_signs_in_values() {
        let values = parse_key_values("Auth=abc==\n\nnoise\nError=x=y");
        assert_eq!(values.get("Auth").map(String::as_str), Some("abc=="));
        assert_eq!(values.get("Error").map(String::as_str), Some("x=y"));
        assert_eq!(values.len(), 2);
    }
}
