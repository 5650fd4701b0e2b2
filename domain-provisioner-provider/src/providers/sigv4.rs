//! AWS Signature Version 4 via `aws-sigv4`
//!
//! Reference: <https://docs.aws.amazon.com/IAM/latest/UserGuide/reference_sigv-create-signed-request.html>

use std::time::SystemTime;

use aws_credential_types::Credentials;
use aws_sigv4::{
    http_request::{SignableBody, SignableRequest, SigningSettings},
    sign::v4::SigningParams,
};

use crate::error::{ProviderError, Result};
use crate::types::AwsCredentials;
use crate::utils::log_sanitizer::mask_key_id;

/// Region and service a request is signed for.
///
/// The service name doubles as the provider name in signing errors.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SigningScope<'a> {
    pub region: &'a str,
    pub service: &'a str,
}

fn to_sdk_credentials(credentials: &AwsCredentials) -> Credentials {
    Credentials::new(
        &credentials.access_key_id,
        &credentials.secret_access_key,
        credentials.session_token.clone(),
        None,
        "domain-provisioner",
    )
}

fn signing_error(scope: SigningScope<'_>, detail: impl std::fmt::Display) -> ProviderError {
    ProviderError::SerializationError {
        provider: scope.service.to_string(),
        detail: format!("SigV4 signing failed: {detail}"),
    }
}

/// Sign a request and return the headers to add to it.
///
/// `headers` are the caller's own headers (`Content-Type`, `X-Amz-Target`);
/// they are covered by the signature but not repeated in the result. The
/// result carries `X-Amz-Date`, `Authorization` and, for temporary
/// credentials, `X-Amz-Security-Token`. `Host` is taken from `url`.
pub(crate) fn sign_request(
    credentials: &AwsCredentials,
    scope: SigningScope<'_>,
    method: &str,
    url: &str,
    headers: &[(&str, &str)],
    body: &[u8],
    time: SystemTime,
) -> Result<Vec<(String, String)>> {
    log::debug!(
        "Signing {method} {url} for {}/{} with key {}",
        scope.service,
        scope.region,
        mask_key_id(&credentials.access_key_id)
    );

    let identity = to_sdk_credentials(credentials).into();
    let signing_params = SigningParams::builder()
        .identity(&identity)
        .region(scope.region)
        .name(scope.service)
        .time(time)
        .settings(SigningSettings::default())
        .build()
        .map_err(|e| signing_error(scope, e))?;

    let signable_request = SignableRequest::new(
        method,
        url,
        headers.iter().copied(),
        SignableBody::Bytes(body),
    )
    .map_err(|e| signing_error(scope, e))?;

    let (instructions, _signature) =
        aws_sigv4::http_request::sign(signable_request, &signing_params.into())
            .map_err(|e| signing_error(scope, e))?
            .into_parts();

    Ok(instructions
        .headers()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect())
}
