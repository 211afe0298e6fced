//! Test helpers for running the full update against a mock GitHub

use mockito::{Mock, ServerGuard};
use tempfile::TempDir;

use flux_versions::config::Config;

pub const TOKEN: &str = "test-token";

/// Writes `products.yml` into a fresh directory and returns a config pointing
/// both hosts at `server`.
pub fn create_test_config(server: &ServerGuard, products: &str) -> (TempDir, Config) {
    let temp_dir = TempDir::new().unwrap();
    let products_path = temp_dir.path().join("products.yml");
    std::fs::write(&products_path, products).unwrap();

    let config = Config {
        token: TOKEN.to_string(),
        products_path,
        output_path: temp_dir.path().join("flux_influxdb_versions.yml"),
        github_base_url: server.url(),
        raw_content_base_url: server.url(),
    };
    (temp_dir, config)
}

/// Mocks the `releases/latest` redirect and the tag page it lands on
pub async fn mock_latest_release(server: &mut ServerGuard, version: &str) -> Vec<Mock> {
    let tag_path = format!("/influxdata/flux/releases/tag/v{}", version);
    let latest = server
        .mock("GET", "/influxdata/flux/releases/latest")
        .with_status(302)
        .with_header("location", &tag_path)
        .create_async()
        .await;
    let tag = server
        .mock("GET", tag_path.as_str())
        .with_status(200)
        .with_body("<html></html>")
        .create_async()
        .await;
    vec![latest, tag]
}

/// Mocks an authenticated go.mod pinning `flux`
pub async fn mock_go_mod(
    server: &mut ServerGuard,
    repo: &str,
    git_ref: &str,
    flux: &str,
) -> Mock {
    server
        .mock("GET", format!("/influxdata/{}/{}/go.mod", repo, git_ref).as_str())
        .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body(format!(
            "module github.com/influxdata/{}\n\ngo 1.21\n\nrequire (\n\tgithub.com/influxdata/flux v{}\n)\n",
            repo, flux
        ))
        .create_async()
        .await
}

pub fn read_output(config: &Config) -> String {
    std::fs::read_to_string(&config.output_path).unwrap()
}
