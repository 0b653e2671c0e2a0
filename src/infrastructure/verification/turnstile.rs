use super::traits::BotVerifier;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

pub const DEFAULT_VERIFY_URL: &str = "https://challenges.cloudflare.com/turnstile/v0/siteverify";

#[derive(Debug, Deserialize)]
struct SiteVerifyResponse {
    success: bool,
    #[serde(default, rename = "error-codes")]
    error_codes: Vec<String>,
}

/// Cloudflare Turnstile `siteverify` client.
pub struct TurnstileVerifier {
    client: reqwest::Client,
    secret_key: Option<String>,
    verify_url: String,
}

impl TurnstileVerifier {
    pub fn new(secret_key: Option<String>, verify_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            secret_key,
            verify_url: verify_url.into(),
        }
    }
}

#[async_trait]
impl BotVerifier for TurnstileVerifier {
    #[instrument(skip(self, token), fields(has_ip = remote_ip.is_some()))]
    async fn verify(&self, token: &str, remote_ip: Option<String>) -> anyhow::Result<bool> {
        let Some(secret) = self.secret_key.as_deref() else {
            warn!("Turnstile secret key not configured, accepting token unverified");
            return Ok(true);
        };

        let mut form = vec![("secret", secret), ("response", token)];
        if let Some(ip) = remote_ip.as_deref() {
            form.push(("remoteip", ip));
        }

        let response: SiteVerifyResponse = self
            .client
            .post(&self.verify_url)
            .form(&form)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if !response.success {
            debug!(errors = ?response.error_codes, "Turnstile rejected token");
        }
        Ok(response.success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Form, Json, Router, extract::State, http::StatusCode, routing::post};
    use serde_json::{Value, json};
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };

    type Captured = Arc<Mutex<Vec<HashMap<String, String>>>>;

    /// Serves a fixed siteverify reply and records every submitted form.
    async fn stub_siteverify(status: StatusCode, body: Value) -> (String, Captured) {
        let captured: Captured = Arc::default();
        let app = Router::new()
            .route(
                "/siteverify",
                post(
                    move |State(seen): State<Captured>,
                          Form(form): Form<HashMap<String, String>>| {
                        let body = body.clone();
                        async move {
                            seen.lock().unwrap().push(form);
                            (status, Json(body))
                        }
                    },
                ),
            )
            .with_state(captured.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        (format!("http://{addr}/siteverify"), captured)
    }

    #[tokio::test]
    async fn posts_secret_token_and_client_ip_as_form_fields() {
        let (url, captured) = stub_siteverify(StatusCode::OK, json!({"success": true})).await;
        let verifier = TurnstileVerifier::new(Some("shh".into()), url);

        assert!(
            verifier
                .verify("tok-1", Some("203.0.113.7".into()))
                .await
                .unwrap()
        );

        let forms = captured.lock().unwrap();
        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0]["secret"], "shh");
        assert_eq!(forms[0]["response"], "tok-1");
        assert_eq!(forms[0]["remoteip"], "203.0.113.7");
    }

    #[tokio::test]
    async fn omits_remoteip_when_client_address_is_unknown() {
        let (url, captured) = stub_siteverify(StatusCode::OK, json!({"success": true})).await;
        let verifier = TurnstileVerifier::new(Some("shh".into()), url);

        verifier.verify("tok-2", None).await.unwrap();

        let forms = captured.lock().unwrap();
        assert!(!forms[0].contains_key("remoteip"));
    }

    #[tokio::test]
    async fn unsuccessful_siteverify_reply_is_a_rejection() {
        let (url, _) = stub_siteverify(
            StatusCode::OK,
            json!({"success": false, "error-codes": ["timeout-or-duplicate"]}),
        )
        .await;
        let verifier = TurnstileVerifier::new(Some("shh".into()), url);

        assert!(!verifier.verify("stale", None).await.unwrap());
    }

    #[tokio::test]
    async fn server_error_from_siteverify_is_an_error() {
        let (url, _) =
            stub_siteverify(StatusCode::INTERNAL_SERVER_ERROR, json!({"success": true})).await;
        let verifier = TurnstileVerifier::new(Some("shh".into()), url);

        assert!(verifier.verify("tok-3", None).await.is_err());
    }

    #[tokio::test]
    async fn unreachable_siteverify_is_an_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let verifier =
            TurnstileVerifier::new(Some("shh".into()), format!("http://{addr}/siteverify"));

        assert!(verifier.verify("tok-4", None).await.is_err());
    }

    #[tokio::test]
    async fn missing_secret_accepts_any_token() {
        let verifier = TurnstileVerifier::new(None, DEFAULT_VERIFY_URL);
        assert!(verifier.verify("anything", None).await.unwrap());
    }

    #[test]
    fn parses_siteverify_payload() {
        let parsed: SiteVerifyResponse =
            serde_json::from_str(r#"{"success": false, "error-codes": ["invalid-input-response"]}"#)
                .unwrap();
        assert!(!parsed.success);
        assert_eq!(parsed.error_codes, ["invalid-input-response"]);
    }
}
