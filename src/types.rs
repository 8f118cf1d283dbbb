use crate::error::{Result, StarButtonError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

const GITHUB_WEB_URL: &str = "https://github.com";

// GitHub API response structures
#[derive(Debug, Deserialize)]
pub struct GitHubRepo {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub html_url: String,
    pub stargazers_count: u64,
}

/// Owner/name pair identifying the repository a button points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryIdentity {
    pub owner: String,
    pub name: String,
}

impl RepositoryIdentity {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let owner = owner.into();
        let name = name.into();

        for segment in [&owner, &name] {
            if segment.is_empty() || segment.contains('/') {
                return Err(StarButtonError::InvalidRepository(format!(
                    "Invalid repository segment {:?} in {}/{}",
                    segment, owner, name
                )));
            }
        }

        Ok(Self { owner, name })
    }

    /// `{api_base}/repos/{owner}/{name}`, with each segment percent-encoded.
    pub fn api_url(&self, api_base: &Url) -> Result<Url> {
        let mut url = api_base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                StarButtonError::InvalidRepository(format!(
                    "API base URL cannot take a path: {}",
                    api_base
                ))
            })?;
            segments
                .pop_if_empty()
                .extend(["repos", self.owner.as_str(), self.name.as_str()]);
        }
        Ok(url)
    }

    /// Link target for the rendered button.
    pub fn html_url(&self) -> String {
        format!("{}/{}/{}", GITHUB_WEB_URL, self.owner, self.name)
    }
}

impl fmt::Display for RepositoryIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepositoryIdentity {
    type Err = StarButtonError;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('/') {
            Some((owner, name)) => Self::new(owner, name),
            None => Err(StarButtonError::InvalidRepository(format!(
                "Invalid repository name format: {}",
                s
            ))),
        }
    }
}
