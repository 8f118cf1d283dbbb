use crate::error::{Result, StarButtonError};
use crate::types::{GitHubRepo, RepositoryIdentity};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

pub const API_BASE_URL: &str = "https://api.github.com";

#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("github-star-button/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(GitHubClient {
            client,
            base_url: Url::parse(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn make_request(&self, url: Url) -> Result<Response> {
        let response = self
            .client
            .get(url.clone())
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        match status {
            reqwest::StatusCode::NOT_FOUND => {
                Err(StarButtonError::NotFound(format!("Resource not found: {}", url)))
            }
            reqwest::StatusCode::FORBIDDEN if rate_limit_exhausted(&response) => {
                Err(StarButtonError::RateLimitExceeded(format!(
                    "Unauthenticated rate limit reached for {}",
                    url
                )))
            }
            status => {
                let error_text = response.text().await.unwrap_or_default();
                Err(StarButtonError::ApiError(format!(
                    "API request failed with status {}: {}",
                    status, error_text
                )))
            }
        }
    }

    pub async fn get_repository_info(&self, repository: &RepositoryIdentity) -> Result<GitHubRepo> {
        let url = repository.api_url(&self.base_url)?;
        let response = self.make_request(url).await?;
        let body = response.bytes().await?;
        let repo_data: GitHubRepo = serde_json::from_slice(&body)?;
        Ok(repo_data)
    }

    /// Star count for `repository`, or 0 when the lookup fails for any reason.
    pub async fn fetch_star_count(&self, repository: &RepositoryIdentity) -> u64 {
        match self.get_repository_info(repository).await {
            Ok(repo) => {
                debug!(
                    repository = %repository,
                    full_name = %repo.full_name,
                    stars = repo.stargazers_count,
                    "Fetched star count"
                );
                repo.stargazers_count
            }
            Err(e) => {
                error!(repository = %repository, "Failed to fetch star count: {}", e);
                0
            }
        }
    }
}

fn rate_limit_exhausted(response: &Response) -> bool {
    response
        .headers()
        .get("X-RateLimit-Remaining")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.parse::<u32>().ok())
        == Some(0)
}
