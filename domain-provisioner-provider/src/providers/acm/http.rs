//! ACM signed JSON 1.1 requests

use std::time::SystemTime;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::providers::sigv4::sign_request;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::truncate_for_log;

use super::types::ErrorResponse;
use super::{ACM_SCOPE, AcmProvider};

const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

impl AcmProvider {
    fn handle_response_error(
        &self,
        status: u16,
        response_text: &str,
        ctx: ErrorContext,
    ) -> Result<()> {
        if (200..300).contains(&status) {
            return Ok(());
        }

        if let Ok(error) = serde_json::from_str::<ErrorResponse>(response_text)
            && let Some(code) = error.code()
        {
            return Err(self.map_error(
                RawApiError::with_code(code, error.message.clone().unwrap_or_default()),
                ctx,
            ));
        }

        Err(self.unknown_error(RawApiError::new(format!(
            "HTTP {status}: {}",
            truncate_for_log(response_text)
        ))))
    }

    /// Invoke `CertificateManager.<action>` with a JSON body.
    pub(crate) async fn call<T, B>(&self, action: &str, body: &B, ctx: ErrorContext) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let payload =
            serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
                provider: self.provider_name().to_string(),
                detail: e.to_string(),
            })?;

        log::debug!("Request Body: {}", truncate_for_log(&payload));

        let target = format!("CertificateManager.{action}");
        let headers = [("Content-Type", CONTENT_TYPE), ("X-Amz-Target", target.as_str())];
        let url = format!("{}/", self.endpoint);

        let signed = sign_request(
            &self.credentials,
            ACM_SCOPE,
            "POST",
            &url,
            &headers,
            payload.as_bytes(),
            SystemTime::now(),
        )?;

        let mut request = self.client.post(&url).body(payload);
        for (name, value) in headers {
            request = request.header(name, value);
        }
        for (name, value) in &signed {
            request = request.header(name.as_str(), value.as_str());
        }

        let response_text = HttpUtils::execute_request_with_retry(
            request,
            self.provider_name(),
            "POST",
            action,
            self.max_retries,
            |status, text| self.handle_response_error(status, text, ctx.clone()),
        )
        .await?;

        HttpUtils::parse_json(&response_text, self.provider_name())
    }
}
