//! Command-line entry point for the domain provisioner
//!
//! Results are printed to stdout as JSON; logs go to stderr so the output
//! can be piped.

mod cli;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use domain_provisioner_core::{CoreError, DomainSetupService, ServiceContext};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs on stderr, JSON results on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let expected = e
                .downcast_ref::<CoreError>()
                .is_some_and(CoreError::is_expected);
            if expected {
                tracing::warn!("{e:#}");
            } else {
                tracing::error!("{e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<String> {
    let config = cli.aws.to_config();
    let ctx = Arc::new(ServiceContext::from_config(&config));
    let service = DomainSetupService::new(ctx);

    match cli.command {
        Command::Setup { domain } => {
            tracing::info!("Setting up {domain}");
            let result = service
                .setup_with_default_cdn(&domain)
                .await
                .with_context(|| format!("Setup of {domain} failed"))?;
            to_json(&result)
        }
        Command::Status { domain } => {
            let report = service
                .get_domain_status(&domain)
                .await
                .with_context(|| format!("Status of {domain} unavailable"))?;
            to_json(&report)
        }
        Command::CertificateStatus { arn } => {
            let report = service
                .check_certificate_status(&arn)
                .await
                .with_context(|| format!("Certificate {arn} unavailable"))?;
            to_json(&report)
        }
        Command::ZoneChange { change_id } => {
            let status = service
                .get_zone_change_status(&change_id)
                .await
                .with_context(|| format!("Change {change_id} unavailable"))?;
            to_json(&serde_json::json!({ "changeId": change_id, "status": status }))
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("Serialize result")
}
