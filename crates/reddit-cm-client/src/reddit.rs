use crate::models::{ErrorBody, Listing, MeResponse, SubredditData, Thing, TokenResponse};
use async_trait::async_trait;
use reddit_cm_core::{CmError, CmResult, Credentials, PlatformError, PlatformResult};
use reddit_cm_domain::{CommunityHandle, CommunityRecord, PlatformClient};
use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

const PAGE_SIZE: usize = 100;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedditEndpoints {
    /// Host serving the OAuth token endpoint.
    pub auth_base: String,
    /// Host serving authenticated API calls.
    pub api_base: String,
}

impl Default for RedditEndpoints {
    fn default() -> Self {
        Self {
            auth_base: "https://www.reddit.com".to_string(),
            api_base: "https://oauth.reddit.com".to_string(),
        }
    }
}

impl RedditEndpoints {
    pub fn with_auth_base(mut self, base: Option<String>) -> Self {
        if let Some(base) = base {
            self.auth_base = base;
        }
        self
    }

    pub fn with_api_base(mut self, base: Option<String>) -> Self {
        if let Some(base) = base {
            self.api_base = base;
        }
        self
    }
}

/// An authenticated session for one account.
pub struct RedditClient {
    http: reqwest::Client,
    api_base: Url,
    token: String,
    username: String,
}

impl RedditClient {
    /// Exchange the credentials for a bearer token and confirm the session
    /// by fetching the current user. Any failure is an authentication error.
    pub async fn authenticate(
        credentials: &Credentials,
        endpoints: &RedditEndpoints,
    ) -> CmResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(credentials.user_agent.clone())
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CmError::Authentication(e.to_string()))?;

        let api_base = Url::parse(&endpoints.api_base)
            .map_err(|e| CmError::Authentication(format!("invalid API base URL: {}", e)))?;
        let token_url = format!(
            "{}/api/v1/access_token",
            endpoints.auth_base.trim_end_matches('/')
        );

        tracing::debug!("Requesting access token for {}", credentials.username);
        let response = http
            .post(&token_url)
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .form(&[
                ("grant_type", "password"),
                ("username", credentials.username.as_str()),
                ("password", credentials.password.as_str()),
            ])
            .send()
            .await
            .map_err(|e| CmError::Authentication(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CmError::Authentication(format!(
                "token endpoint returned {}",
                status
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| CmError::Authentication(e.to_string()))?;
        let access_token = match (token.access_token, token.error) {
            (_, Some(error)) => return Err(CmError::Authentication(error)),
            (Some(access_token), None) => access_token,
            (None, None) => {
                return Err(CmError::Authentication(
                    "token endpoint returned no access token".to_string(),
                ))
            }
        };

        let mut client = Self {
            http,
            api_base,
            token: access_token,
            username: String::new(),
        };

        let me: MeResponse = client
            .get_json(&["api", "v1", "me"], &[])
            .await
            .map_err(|e| CmError::Authentication(e.to_string()))?;
        tracing::info!("Authenticated as {}", me.name);
        client.username = me.name;

        Ok(client)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    fn endpoint(&self, segments: &[&str]) -> PlatformResult<Url> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| PlatformError::Other(format!("invalid API base URL: {}", self.api_base)))?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut().append_pair("raw_json", "1");
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> PlatformResult<T> {
        let url = self.endpoint(segments)?;
        tracing::debug!("GET {}", url.path());

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await
            .map_err(transport)?;

        check_status(response)
            .await?
            .json()
            .await
            .map_err(transport)
    }

    async fn fetch_about(&self, name: &str) -> PlatformResult<SubredditData> {
        let about: Thing<serde_json::Value> = self.get_json(&["r", name, "about"], &[]).await?;

        // Unknown names may come back as a search listing instead of a 404.
        if about.kind != "t5" {
            return Err(PlatformError::NotFound(format!("r/{}", name)));
        }
        serde_json::from_value(about.data)
            .map_err(|e| PlatformError::Other(format!("unexpected response for r/{}: {}", name, e)))
    }
}

#[async_trait]
impl PlatformClient for RedditClient {
    async fn joined_communities(&self) -> PlatformResult<Vec<CommunityRecord>> {
        let mut communities = Vec::new();
        let mut after: Option<String> = None;

        loop {
            let mut query = vec![
                ("limit", PAGE_SIZE.to_string()),
                ("count", communities.len().to_string()),
            ];
            if let Some(cursor) = &after {
                query.push(("after", cursor.clone()));
            }

            let page: Listing<SubredditData> = self
                .get_json(&["subreddits", "mine", "subscriber"], &query)
                .await?;
            let fetched = page.data.children.len();
            communities.extend(page.data.children.into_iter().map(|c| c.data.into_record()));
            tracing::debug!("Fetched page of {} communities", fetched);

            match page.data.after {
                Some(next) if fetched > 0 && after.as_deref() != Some(next.as_str()) => {
                    after = Some(next)
                }
                _ => break,
            }
        }

        Ok(communities)
    }

    async fn resolve_community(&self, name: &str) -> PlatformResult<CommunityHandle> {
        self.fetch_about(name).await.map(SubredditData::into_handle)
    }

    async fn is_subscribed(&self, handle: &CommunityHandle) -> PlatformResult<bool> {
        if let Some(subscribed) = handle.subscribed {
            return Ok(subscribed);
        }
        let about = self.fetch_about(&handle.name).await?;
        Ok(about.user_is_subscriber.unwrap_or(false))
    }

    async fn subscribe(&self, handle: &CommunityHandle) -> PlatformResult<()> {
        let url = self.endpoint(&["api", "subscribe"])?;
        tracing::debug!("Subscribing to {} ({})", handle.name, handle.fullname);

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .form(&[
                ("action", "sub"),
                ("sr", handle.fullname.as_str()),
                ("skip_initial_defaults", "true"),
            ])
            .send()
            .await
            .map_err(transport)?;

        check_status(response).await.map(|_| ())
    }
}

fn transport(err: reqwest::Error) -> PlatformError {
    PlatformError::Transport(err.to_string())
}

/// Maps refusal statuses onto typed errors, keeping the body's reason text.
async fn check_status(response: Response) -> PlatformResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body: ErrorBody = response.json().await.unwrap_or_default();
    let detail = body
        .reason
        .clone()
        .or(body.message.clone())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("error").to_string());

    Err(match status {
        StatusCode::FORBIDDEN => PlatformError::Forbidden(detail),
        StatusCode::NOT_FOUND if body.reason.as_deref() == Some("banned") => {
            PlatformError::Banned(detail)
        }
        StatusCode::NOT_FOUND => PlatformError::NotFound(detail),
        _ => PlatformError::Http {
            status: status.as_u16(),
            message: detail,
        },
    })
}
