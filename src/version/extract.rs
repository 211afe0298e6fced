//! Version patterns applied to fetched content

use std::sync::LazyLock;

use regex::Regex;

/// Flux requirement line in an InfluxDB go.mod: `github.com/influxdata/flux v0.194.1`
static FLUX_REQUIREMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"github\.com/influxdata/flux v(\d+\.\d+\.\d+)").unwrap());

/// Trailing `/v<version>` of a release tag path
static RELEASE_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/v(\d.*)$").unwrap());

/// Extracts the pinned Flux version from a go.mod body
pub fn flux_version(manifest: &str) -> Option<&str> {
    FLUX_REQUIREMENT_RE
        .captures(manifest)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extracts the release version from the path a `releases/latest` request ends on
pub fn release_version(path: &str) -> Option<&str> {
    RELEASE_TAG_RE
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
