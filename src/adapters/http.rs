use crate::utils::error::{MaritimeError, Result};
use reqwest::Client;
use std::time::Duration;

pub fn build_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(concat!("maritime-assistant/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Turns a reqwest failure into `Timeout` when the deadline was the cause.
pub fn map_request_error(err: reqwest::Error, operation: &str, timeout: Duration) -> MaritimeError {
    if err.is_timeout() {
        tracing::warn!("{} timed out after {:?}", operation, timeout);
        MaritimeError::Timeout {
            operation: operation.to_string(),
            seconds: timeout.as_secs(),
        }
    } else {
        MaritimeError::ApiError(err)
    }
}

/// Keeps error bodies short enough for a log line.
pub fn truncate_body(body: &str) -> String {
    const MAX: usize = 500;
    if body.chars().count() <= MAX {
        body.to_string()
    } else {
        let mut short: String = body.chars().take(MAX).collect();
        short.push('…');
        short
    }
}
