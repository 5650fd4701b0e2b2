//! Command line definition

use clap::{Args, Parser, Subcommand};
use domain_provisioner_core::ProvisionerConfig;
use domain_provisioner_provider::AwsCredentials;

/// Connect customer domains to a CloudFront distribution.
#[derive(Debug, Parser)]
#[command(name = "domain-provisioner", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub aws: AwsArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct AwsArgs {
    #[arg(long, env = "AWS_ACCESS_KEY_ID", default_value = "", hide_env_values = true)]
    pub access_key_id: String,

    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", default_value = "", hide_env_values = true)]
    pub secret_access_key: String,

    #[arg(long, env = "AWS_SESSION_TOKEN", hide_env_values = true)]
    pub session_token: Option<String>,

    /// Public domain of the distribution (`d111111abcdef8.cloudfront.net`)
    #[arg(long, env = "CLOUDFRONT_DOMAIN", default_value = "", global = true)]
    pub cloudfront_domain: String,

    /// Retries of throttled or failed requests (0 = attempt once)
    #[arg(long, env = "PROVISIONER_MAX_RETRIES", default_value_t = 0)]
    pub max_retries: u32,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the hosted zone, certificate and CDN aliases of a domain
    Setup {
        #[arg(long)]
        domain: String,
    },
    /// Report setup progress without changing anything
    Status {
        #[arg(long)]
        domain: String,
    },
    /// Poll a certificate by ARN
    CertificateStatus {
        #[arg(long)]
        arn: String,
    },
    /// Poll the propagation of a zone change
    ZoneChange {
        #[arg(long)]
        change_id: String,
    },
}

impl AwsArgs {
    pub fn to_config(&self) -> ProvisionerConfig {
        let mut credentials =
            AwsCredentials::new(self.access_key_id.as_str(), self.secret_access_key.as_str());
        if let Some(token) = self.session_token.as_deref().filter(|t| !t.is_empty()) {
            credentials = credentials.with_session_token(token);
        }

        ProvisionerConfig::new(credentials, self.cloudfront_domain.as_str())
            .with_max_retries(self.max_retries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("domain-provisioner").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn setup_takes_flags() {
        let cli = parse(&[
            "--access-key-id",
            "AKIDEXAMPLE",
            "--secret-access-key",
            "secret",
            "--cloudfront-domain",
            "d111111abcdef8.cloudfront.net",
            "--max-retries",
            "3",
            "setup",
            "--domain",
            "agent123.com",
        ]);

        assert!(matches!(&cli.command, Command::Setup { domain } if domain == "agent123.com"));

        let config = cli.aws.to_config();
        assert_eq!(config.credentials.access_key_id, "AKIDEXAMPLE");
        assert_eq!(config.cloudfront_domain, "d111111abcdef8.cloudfront.net");
        assert_eq!(config.max_retries, 3);
        assert!(config.missing_fields().is_empty());
    }

    #[test]
    fn empty_session_token_is_dropped() {
        let cli = parse(&["--session-token", "", "status", "--domain", "agent123.com"]);
        assert!(cli.aws.to_config().credentials.session_token.is_none());
    }

    #[test]
    fn subcommand_names_are_kebab_case() {
        let cli = parse(&["certificate-status", "--arn", "arn:aws:acm:us-east-1:1:certificate/x"]);
        assert!(matches!(cli.command, Command::CertificateStatus { .. }));

        let cli = parse(&["zone-change", "--change-id", "C2682N5HXP0BZ4"]);
        assert!(matches!(
            &cli.command,
            Command::ZoneChange { change_id } if change_id == "C2682N5HXP0BZ4"
        ));
    }

    #[test]
    fn domain_is_required() {
        assert!(Cli::try_parse_from(["domain-provisioner", "setup"]).is_err());
    }

    #[test]
    fn cloudfront_domain_accepted_after_subcommand() {
        let cli = parse(&[
            "setup",
            "--domain",
            "agent123.com",
            "--cloudfront-domain",
            "d111111abcdef8.cloudfront.net",
        ]);
        assert_eq!(cli.aws.cloudfront_domain, "d111111abcdef8.cloudfront.net");
    }
}
