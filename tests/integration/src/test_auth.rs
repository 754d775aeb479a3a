//! ClientLogin integration tests.

#[cfg(test)]
mod tests {
    use contentstack_auth::{AuthError, client_login};
    use contentstack_http::ReqwestTransport;

    use crate::{live_client, live_config};

    #[test]
    #[ignore = "requires live Content API credentials"]
    fn test_should_log_in_with_credentials() {
        let client = live_client().expect("live client");
        assert!(client.is_authenticated());
        assert!(
            client
                .token_header()
                .expect("token")
                .starts_with("GoogleLogin auth=")
        );
    }

    #[test]
    #[ignore = "requires live Content API credentials"]
    fn test_should_reject_bad_password() {
        let config = live_config();
        let transport =
            ReqwestTransport::new(&config.user_agent, config.timeout()).expect("transport");
        let email = std::env::var("CONTENT_API_EMAIL").expect("CONTENT_API_EMAIL");

        let err = client_login(&transport, &config.login_params(), &email, "not-the-password")
            .unwrap_err();
        assert!(matches!(err, AuthError::Rejected { .. }), "got {err:?}");
    }
}
