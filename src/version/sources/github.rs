//! GitHub implementation of [`ReleaseSource`]

use tracing::{debug, warn};

use crate::config::{FLUX_PROJECT, UPSTREAM_ORG};
use crate::error::SourceError;
use crate::version::source::ReleaseSource;

/// Reads Flux releases from github.com and manifests from raw.githubusercontent.com
pub struct GitHubSource {
    client: reqwest::Client,
    github_base_url: String,
    raw_content_base_url: String,
    token: String,
}

impl GitHubSource {
    /// Creates a new GitHubSource with custom base URLs
    pub fn new(
        github_base_url: &str,
        raw_content_base_url: &str,
        token: &str,
    ) -> Result<Self, SourceError> {
        Ok(Self {
            client: reqwest::Client::builder()
                .user_agent("flux-versions")
                .build()?,
            github_base_url: github_base_url.trim_end_matches('/').to_string(),
            raw_content_base_url: raw_content_base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl ReleaseSource for GitHubSource {
    async fn latest_release_path(&self) -> Result<String, SourceError> {
        let url = format!(
            "{}/{}/{}/releases/latest",
            self.github_base_url, UPSTREAM_ORG, FLUX_PROJECT
        );

        // The client follows the redirect to the release tag page
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("GitHub returned status {}: {}", status, url);
            return Err(SourceError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let path = response.url().path().to_string();
        debug!("Latest Flux release resolved to {}", path);
        Ok(path)
    }

    async fn fetch_manifest(&self, repo: &str, git_ref: &str) -> Result<String, SourceError> {
        let url = format!(
            "{}/{}/{}/{}/go.mod",
            self.raw_content_base_url, UPSTREAM_ORG, repo, git_ref
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(url));
        }

        if !status.is_success() {
            warn!("Raw content host returned status {}: {}", status, url);
            return Err(SourceError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        response.text().await.map_err(|e| {
            warn!("Failed to read go.mod response: {}", e);
            SourceError::InvalidResponse(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    const GO_MOD: &str = "module github.com/influxdata/influxdb/v2\n\nrequire (\n\tgithub.com/influxdata/flux v0.194.1\n)\n";

    #[tokio::test]
    async fn latest_release_path_follows_redirect_to_tag() {
        let mut server = Server::new_async().await;

        let latest = server
            .mock("GET", "/influxdata/flux/releases/latest")
            .with_status(302)
            .with_header("location", "/influxdata/flux/releases/tag/v0.194.1")
            .create_async()
            .await;
        let tag = server
            .mock("GET", "/influxdata/flux/releases/tag/v0.194.1")
            .with_status(200)
            .with_body("<html></html>")
            .create_async()
            .await;

        let source = GitHubSource::new(&server.url(), &server.url(), "token").unwrap();
        let result = source.latest_release_path().await.unwrap();

        latest.assert_async().await;
        tag.assert_async().await;
        assert_eq!(result, "/influxdata/flux/releases/tag/v0.194.1");
    }

    #[tokio::test]
    async fn latest_release_path_returns_invalid_response_for_server_error() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/influxdata/flux/releases/latest")
            .with_status(500)
            .create_async()
            .await;

        let source = GitHubSource::new(&server.url(), &server.url(), "token").unwrap();
        let result = source.latest_release_path().await;

        mock.assert_async().await;
        assert!(matches!(result, Err(SourceError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_manifest_sends_bearer_token_and_returns_body() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/influxdata/influxdb/2.7/go.mod")
            .match_header("authorization", "Bearer secret")
            .with_status(200)
            .with_header("content-type", "text/plain")
            .with_body(GO_MOD)
            .create_async()
            .await;

        let source = GitHubSource::new(&server.url(), &server.url(), "secret").unwrap();
        let result = source.fetch_manifest("influxdb", "2.7").await.unwrap();

        mock.assert_async().await;
        assert_eq!(result, GO_MOD);
    }

    #[tokio::test]
    async fn fetch_manifest_returns_not_found_for_missing_ref() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/influxdata/plutonium/1.12/go.mod")
            .with_status(404)
            .with_body("404: Not Found")
            .create_async()
            .await;

        let source = GitHubSource::new(&server.url(), &server.url(), "secret").unwrap();
        let result = source.fetch_manifest("plutonium", "1.12").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(SourceError::NotFound(_))));
    }

    #[tokio::test]
    async fn fetch_manifest_returns_invalid_response_for_unauthorized() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/influxdata/plutonium/1.11/go.mod")
            .with_status(401)
            .create_async()
            .await;

        let source = GitHubSource::new(&server.url(), &server.url(), "expired").unwrap();
        let result = source.fetch_manifest("plutonium", "1.11").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(SourceError::InvalidResponse(_))));
    }
}
