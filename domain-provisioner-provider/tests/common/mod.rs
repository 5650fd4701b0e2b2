//! Shared helpers for the live AWS integration tests

#![allow(dead_code)]

use std::env;

use domain_provisioner_provider::{
    AwsCredentials, AwsProviders, DnsRecord, DnsRecordType, create_providers,
};

/// Return early when a required environment variable is missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Assert an `Option` is `Some` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Assert a `Result` is `Ok` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Unique label for throwaway records.
pub fn generate_test_record_name() -> String {
    format!("_test-{}", chrono::Utc::now().timestamp_millis())
}

/// Live test context: both providers plus a domain whose hosted zone already exists.
pub struct TestContext {
    pub providers: AwsProviders,
    pub domain: String,
    pub zone_id: Option<String>,
}

impl TestContext {
    /// Build from `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`,
    /// optional `AWS_SESSION_TOKEN` and `TEST_DOMAIN`.
    pub fn from_env() -> Option<Self> {
        let access_key_id = env::var("AWS_ACCESS_KEY_ID").ok()?;
        let secret_access_key = env::var("AWS_SECRET_ACCESS_KEY").ok()?;
        let domain = env::var("TEST_DOMAIN").ok()?;

        let mut credentials = AwsCredentials::new(access_key_id, secret_access_key);
        if let Ok(token) = env::var("AWS_SESSION_TOKEN") {
            credentials = credentials.with_session_token(token);
        }

        Some(Self {
            providers: create_providers(&credentials),
            domain,
            zone_id: None,
        })
    }

    /// Find the hosted zone id of the test domain (exact name match).
    pub async fn find_zone_id(&mut self) -> Option<String> {
        if self.zone_id.is_some() {
            return self.zone_id.clone();
        }

        let fqdn = format!("{}.", self.domain.trim_end_matches('.'));
        let zones = self
            .providers
            .zones
            .list_zones_by_name(&self.domain, 1)
            .await
            .ok()?;

        let zone = zones.into_iter().find(|z| z.name == fqdn)?;
        self.zone_id = Some(zone.id.clone());
        Some(zone.id)
    }

    /// A throwaway TXT record under the test domain.
    pub fn test_txt_record(&self, value: &str) -> DnsRecord {
        DnsRecord::new(
            DnsRecordType::Txt,
            format!("{}.{}", generate_test_record_name(), self.domain),
            value,
            60,
        )
    }
}
