use crate::cli::CredentialArgs;
use reddit_cm_client::{RedditClient, RedditEndpoints};
use reddit_cm_core::{CmResult, CredentialResolver, Credentials};

/// Resolved settings for one command run.
pub struct CliContext {
    pub credentials: Credentials,
    endpoints: RedditEndpoints,
}

impl CliContext {
    pub fn resolve(args: &CredentialArgs) -> CmResult<Self> {
        let credentials = CredentialResolver::new()
            .with_config_file(args.config.clone())
            .with_default_config(true)
            .resolve(args.overrides())?;

        let endpoints = RedditEndpoints::default()
            .with_auth_base(args.auth_base.clone())
            .with_api_base(args.api_base.clone());

        tracing::debug!("Resolved credentials: {:?}", credentials);
        Ok(Self {
            credentials,
            endpoints,
        })
    }

    pub fn username(&self) -> &str {
        &self.credentials.username
    }

    pub async fn connect(&self) -> CmResult<RedditClient> {
        RedditClient::authenticate(&self.credentials, &self.endpoints).await
    }
}
