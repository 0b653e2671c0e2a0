use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use bulk_chai::{
    config::Config,
    domain::{
        quote::{LeadQuote, NewLeadQuote, QuoteRepository},
        shared::errors::DomainError,
    },
    infrastructure::{dataset::loader, verification::BotVerifier},
    presentation::http::{routes::create_router, state::AppState},
};
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use uuid::Uuid;

/// Behaviour of the in-memory lead store.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StoreMode {
    Accepting,
    Unreachable,
    Broken,
}

pub struct InMemoryQuoteRepository {
    mode: StoreMode,
    pub stored: Mutex<Vec<LeadQuote>>,
}

impl InMemoryQuoteRepository {
    pub fn new(mode: StoreMode) -> Self {
        Self {
            mode,
            stored: Mutex::new(Vec::new()),
        }
    }

    pub fn count(&self) -> usize {
        self.stored.lock().unwrap().len()
    }
}

#[async_trait]
impl QuoteRepository for InMemoryQuoteRepository {
    async fn create(&self, quote: &NewLeadQuote) -> Result<LeadQuote, DomainError> {
        match self.mode {
            StoreMode::Unreachable => {
                return Err(DomainError::StorageUnavailable("pool timed out".into()));
            }
            StoreMode::Broken => {
                return Err(DomainError::InfrastructureError(
                    "relation \"bulk_chai_price_quotes\" does not exist".into(),
                ));
            }
            StoreMode::Accepting => {}
        }

        let now = Utc::now();
        let row = LeadQuote {
            id: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
            name: quote.name.clone(),
            email: quote.email.clone(),
            phone: quote.phone.clone(),
            company_name: quote.company_name.clone(),
            city: quote.city.clone(),
            state: quote.state.clone(),
            quantity_kg: quote.quantity_kg,
            estimated_amount: quote.estimated_amount,
            message: quote.message.clone(),
            source_page: quote.source_page.clone(),
            resolved: false,
            resolved_at: None,
            resolved_by: None,
            notes: None,
        };
        self.stored.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        match self.mode {
            StoreMode::Unreachable => Err(DomainError::StorageUnavailable("down".into())),
            _ => Ok(()),
        }
    }
}

/// Accepts exactly one token and records every call.
pub struct RecordingVerifier {
    pub valid_token: &'static str,
    pub calls: Mutex<Vec<(String, Option<String>)>>,
}

#[async_trait]
impl BotVerifier for RecordingVerifier {
    async fn verify(&self, token: &str, remote_ip: Option<String>) -> anyhow::Result<bool> {
        self.calls
            .lock()
            .unwrap()
            .push((token.to_string(), remote_ip));
        Ok(token == self.valid_token)
    }
}

pub const VALID_TOKEN: &str = "valid-turnstile-token";

pub struct TestOptions {
    /// `None` leaves the lead store unconfigured.
    pub store: Option<StoreMode>,
    pub verification_required: bool,
}

impl Default for TestOptions {
    fn default() -> Self {
        Self {
            store: Some(StoreMode::Accepting),
            verification_required: false,
        }
    }
}

pub struct TestApp {
    pub app: Router,
    pub quotes: Option<Arc<InMemoryQuoteRepository>>,
    pub verifier: Arc<RecordingVerifier>,
}

pub fn build_config(verification_required: bool) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: None,
        database_max_connections: 1,
        run_migrations: false,
        ignore_missing_migrations: true,
        turnstile_secret_key: verification_required.then(|| "test-secret".to_string()),
        turnstile_site_key: verification_required.then(|| "test-site-key".to_string()),
        turnstile_verify_url: "http://127.0.0.1:9/siteverify".to_string(),
        cities_path: None,
        site_url: "https://bulkchai.test".to_string(),
        contact_telephone: "+91-9000000000".to_string(),
        whatsapp_number: "919000000000".to_string(),
        contact_email: "sales@bulkchai.test".to_string(),
    }
}

pub fn spawn_app() -> TestApp {
    spawn_app_with(TestOptions::default())
}

pub fn spawn_app_with(options: TestOptions) -> TestApp {
    let config = build_config(options.verification_required);
    let dataset = loader::load_embedded().expect("embedded dataset must load");

    let quotes = options
        .store
        .map(|mode| Arc::new(InMemoryQuoteRepository::new(mode)));
    let verifier = Arc::new(RecordingVerifier {
        valid_token: VALID_TOKEN,
        calls: Mutex::new(Vec::new()),
    });

    let state = AppState::new(
        config,
        dataset,
        quotes
            .clone()
            .map(|repo| repo as Arc<dyn QuoteRepository>),
        verifier.clone(),
    );

    TestApp {
        app: create_router(state),
        quotes,
        verifier,
    }
}

pub async fn send(app: &Router, req: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(req).await.expect("request failed")
}

pub async fn get(app: &Router, uri: &str) -> axum::response::Response {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request");
    send(app, req).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> axum::response::Response {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header("cf-connecting-ip", "203.0.113.9")
        .body(Body::from(body.to_string()))
        .expect("failed to build request");
    send(app, req).await
}

pub async fn read_json<T: DeserializeOwned>(res: axum::response::Response) -> T {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("failed to parse json")
}

pub async fn read_text(res: axum::response::Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("invalid utf8")
}

pub async fn expect_status(
    res: axum::response::Response,
    expected: StatusCode,
) -> axum::response::Response {
    let actual = res.status();

    if actual == expected {
        return res;
    }

    let body = read_text(res).await;
    panic!(
        "HTTP status mismatch. Expected {}, got {}. Response body: {}",
        expected, actual, body
    );
}

/// Asserts a JSON error response and returns its `error` message.
pub async fn expect_error(res: axum::response::Response, expected: StatusCode) -> String {
    let res = expect_status(res, expected).await;
    let body: Value = read_json(res).await;
    body["error"]
        .as_str()
        .expect("error body must carry a message")
        .to_string()
}
