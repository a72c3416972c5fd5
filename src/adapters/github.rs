use crate::domain::model::{ProjectConfig, RepositoryHandle};
use crate::domain::ports::RepositoryHost;
use crate::utils::error::{BootstrapError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// GitHub REST adapter. One call per run: `POST /user/repos`.
pub struct GithubHost {
    client: Client,
    api_url: String,
}

impl GithubHost {
    pub fn new(api_url: impl Into<String>) -> Result<Self> {
        // GitHub rejects requests without a User-Agent.
        let client = Client::builder()
            .user_agent(concat!("ml-scaffold/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }
}

#[async_trait]
impl RepositoryHost for GithubHost {
    async fn create_repository(&self, config: &ProjectConfig) -> Result<RepositoryHandle> {
        let url = format!("{}/user/repos", self.api_url.trim_end_matches('/'));
        let body = serde_json::json!({
            "name": config.repo_name,
            "description": config.description,
            "auto_init": true,
            "private": false,
        });

        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("token {}", config.token))
            .header("Accept", "application/vnd.github+json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status.is_success() {
            Ok(RepositoryHandle::new(
                config.username.clone(),
                config.repo_name.clone(),
            ))
        } else {
            // Surface the provider's raw body; no retry, no schema parsing.
            let message = response.text().await.unwrap_or_default();
            Err(BootstrapError::RepoHostError {
                status: status.as_u16(),
                message,
            })
        }
    }
}
