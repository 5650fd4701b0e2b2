//! Shared HTTP plumbing for the AWS clients
//!
//! Each provider builds and signs its own `RequestBuilder`; this module owns
//! the common part: sending, logging, classifying transport failures and
//! reading the body.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP helper functions
pub struct HttpUtils;

impl HttpUtils {
    /// Send a request and return `(status, body)`.
    ///
    /// HTTP 429 becomes [`ProviderError::RateLimited`] and 500 or 502-504
    /// become [`ProviderError::NetworkError`]; every other status is returned
    /// to the caller for provider-specific error parsing.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url_or_action: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url_or_action}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status_code == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(ProviderError::RateLimited {
                provider: provider_name.to_string(),
                retry_after,
                raw_message: Some(body),
            });
        }

        if matches!(status_code, 500 | 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Server error (HTTP {status_code})");
            return Err(ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("HTTP {status_code}: {}", truncate_for_log(&body)),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body.
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Parse an XML response body.
    pub fn parse_xml<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        quick_xml::de::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] XML parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Send a request and run `check_response` on its `(status, body)`.
    ///
    /// Returns the body once `check_response` accepts it.
    async fn execute_and_check<F>(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url_or_action: &str,
        check_response: &F,
    ) -> Result<String, ProviderError>
    where
        F: Fn(u16, &str) -> Result<(), ProviderError>,
    {
        let (status, response_text) =
            Self::execute_request(request_builder, provider_name, method_name, url_or_action)
                .await?;
        check_response(status, &response_text)?;
        Ok(response_text)
    }

    /// Send a request, retrying transient failures up to `max_retries` times.
    ///
    /// `check_response` turns a non-2xx `(status, body)` into the provider's
    /// error, so AWS throttling codes sent with HTTP 400 are retried like
    /// HTTP 429. `max_retries == 0` sends exactly once. Only
    /// [`ProviderError::is_retryable`] errors are retried, with exponential
    /// backoff (100ms, 200ms, 400ms, ... capped at 10s) or the server's
    /// `Retry-After` (capped at 30s).
    pub async fn execute_request_with_retry<F>(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url_or_action: &str,
        max_retries: u32,
        check_response: F,
    ) -> Result<String, ProviderError>
    where
        F: Fn(u16, &str) -> Result<(), ProviderError>,
    {
        if max_retries == 0 {
            return Self::execute_and_check(
                request_builder,
                provider_name,
                method_name,
                url_or_action,
                &check_response,
            )
            .await;
        }

        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder is single-use
            let Some(req) = request_builder.try_clone() else {
                log::warn!("[{provider_name}] Cannot clone request, disabling retry");
                return Self::execute_and_check(
                    request_builder,
                    provider_name,
                    method_name,
                    url_or_action,
                    &check_response,
                )
                .await;
            };

            let result = Self::execute_and_check(
                req,
                provider_name,
                method_name,
                url_or_action,
                &check_response,
            )
            .await;

            match result {
                Ok(body) => return Ok(body),
                Err(e) if attempt < max_retries && e.is_retryable() => {
                    let delay = retry_delay(&e, attempt);
                    log::warn!(
                        "[{}] Request failed (attempt {}/{}), retrying in {:.1}s: {}",
                        provider_name,
                        attempt + 1,
                        max_retries,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| ProviderError::NetworkError {
            provider: provider_name.to_string(),
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

/// Delay before the next attempt.
///
/// A throttled response with `Retry-After` wins (capped at 30s); otherwise
/// exponential backoff.
fn retry_delay(error: &ProviderError, attempt: u32) -> Duration {
    if let ProviderError::RateLimited {
        retry_after: Some(secs),
        ..
    } = error
    {
        Duration::from_secs((*secs).min(30))
    } else {
        backoff_delay(attempt)
    }
}

/// 100ms, 200ms, 400ms, 800ms, 1.6s, ... capped at 10s.
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20);
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(10_000))
}
