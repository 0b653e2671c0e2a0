use async_trait::async_trait;

/// Checks a client-side bot challenge token with the issuing service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BotVerifier: Send + Sync {
    /// Returns `Ok(false)` when the service rejects the token and `Err` when
    /// the service could not be asked at all.
    async fn verify(&self, token: &str, remote_ip: Option<String>) -> anyhow::Result<bool>;
}
