//! Route53 signed HTTP requests

use std::time::SystemTime;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::providers::sigv4::sign_request;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::truncate_for_log;

use super::types::{ErrorResponse, InvalidChangeBatchResponse};
use super::{ROUTE53_API_VERSION, ROUTE53_SCOPE, Route53Provider};

impl Route53Provider {
    // ==================== Helpers ====================

    /// Turn a non-2xx response into a [`ProviderError`].
    fn handle_response_error(
        &self,
        status: u16,
        response_text: &str,
        ctx: ErrorContext,
    ) -> Result<()> {
        if (200..300).contains(&status) {
            return Ok(());
        }

        if let Ok(error) = quick_xml::de::from_str::<ErrorResponse>(response_text) {
            return Err(self.map_error(
                RawApiError::with_code(error.error.code, error.error.message),
                ctx,
            ));
        }

        if let Ok(batch) = quick_xml::de::from_str::<InvalidChangeBatchResponse>(response_text) {
            return Err(self.map_error(
                RawApiError::with_code("InvalidChangeBatch", batch.messages.message.join("; ")),
                ctx,
            ));
        }

        Err(self.unknown_error(RawApiError::new(format!(
            "HTTP {status}: {}",
            truncate_for_log(response_text)
        ))))
    }

    /// Sign and send a request, returning the parsed 2xx body.
    async fn send<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        query: &str,
        body: Option<String>,
        ctx: ErrorContext,
    ) -> Result<T> {
        let url = if query.is_empty() {
            format!("{}{ROUTE53_API_VERSION}{path}", self.endpoint)
        } else {
            format!("{}{ROUTE53_API_VERSION}{path}?{query}", self.endpoint)
        };
        let payload = body.unwrap_or_default();

        let extra: &[(&str, &str)] = if payload.is_empty() {
            &[]
        } else {
            &[("Content-Type", "application/xml")]
        };

        let signed = sign_request(
            &self.credentials,
            ROUTE53_SCOPE,
            method,
            &url,
            extra,
            payload.as_bytes(),
            SystemTime::now(),
        )?;

        let mut request = match method {
            "POST" => self.client.post(&url).body(payload),
            _ => self.client.get(&url),
        };
        for (name, value) in extra {
            request = request.header(*name, *value);
        }
        for (name, value) in &signed {
            request = request.header(name.as_str(), value.as_str());
        }

        let response_text = HttpUtils::execute_request_with_retry(
            request,
            self.provider_name(),
            method,
            &url,
            self.max_retries,
            |status, text| self.handle_response_error(status, text, ctx.clone()),
        )
        .await?;

        HttpUtils::parse_xml(&response_text, self.provider_name())
    }

    // ==================== Public helpers ====================

    /// Signed GET.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
        ctx: ErrorContext,
    ) -> Result<T> {
        self.send("GET", path, query, None, ctx).await
    }

    /// Signed POST of an XML document.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        ctx: ErrorContext,
    ) -> Result<T> {
        let payload = quick_xml::se::to_string(body).map_err(|e| {
            ProviderError::SerializationError {
                provider: self.provider_name().to_string(),
                detail: e.to_string(),
            }
        })?;

        log::debug!("Request Body: {}", truncate_for_log(&payload));

        self.send("POST", path, "", Some(payload), ctx).await
    }
}
