//! Source trait for fetching release metadata and manifests

#[cfg(test)]
use mockall::automock;

use crate::error::SourceError;

/// Trait for reading Flux release data and InfluxDB manifests from a remote host
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Follows the Flux `releases/latest` redirect
    ///
    /// # Returns
    /// * `Ok(String)` - Path of the final request (e.g., "/influxdata/flux/releases/tag/v0.194.1")
    /// * `Err(SourceError)` - If the request fails or returns a non-success status
    async fn latest_release_path(&self) -> Result<String, SourceError>;

    /// Fetches the go.mod of `repo` at `git_ref`
    ///
    /// # Arguments
    /// * `repo` - Repository under the upstream organization (e.g., "influxdb")
    /// * `git_ref` - Branch or tag (e.g., "2.7" or "master")
    async fn fetch_manifest(&self, repo: &str, git_ref: &str) -> Result<String, SourceError>;
}
