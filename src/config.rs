use std::path::PathBuf;

use crate::error::ConfigError;

// =============================================================================
// Version policy
// =============================================================================

/// Oldest open source release whose go.mod pins Flux
pub const OSS_VERSION_FLOOR: f64 = 1.7;

/// Oldest enterprise release looked up from the enterprise repository
pub const ENTERPRISE_VERSION_FLOOR: f64 = 1.9;

/// Branch resolved for `oss.nightly` and `cloud.current`
pub const DEVELOPMENT_BRANCH: &str = "master";

/// Enterprise releases older than the floor, resolved by literal ref
pub const LEGACY_ENTERPRISE_VERSIONS: [&str; 2] = ["1.8", "1.7"];

// =============================================================================
// Remote endpoints
// =============================================================================

pub const DEFAULT_GITHUB_BASE_URL: &str = "https://github.com";

pub const DEFAULT_RAW_CONTENT_BASE_URL: &str = "https://raw.githubusercontent.com";

/// GitHub organization owning every repository we read from
pub const UPSTREAM_ORG: &str = "influxdata";

pub const FLUX_PROJECT: &str = "flux";

// =============================================================================
// Local files
// =============================================================================

pub const DEFAULT_PRODUCTS_PATH: &str = "data/products.yml";

pub const DEFAULT_OUTPUT_PATH: &str = "data/flux_influxdb_versions.yml";

pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Printed when the token is missing; the run is skipped rather than failed
pub const MISSING_TOKEN_MESSAGE: &str = "
A GitHub token is required for this operation. Please set a GITHUB_TOKEN environment variable.
Use the GitHub token stored in the Docs Team vault in 1Password.
";

/// Settings for a single run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub token: String,
    pub products_path: PathBuf,
    pub output_path: PathBuf,
    pub github_base_url: String,
    pub raw_content_base_url: String,
}

impl Config {
    /// Builds the default configuration with the token read from `GITHUB_TOKEN`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(std::env::var(TOKEN_ENV_VAR).ok())
    }

    fn from_env_with(token: Option<String>) -> Result<Self, ConfigError> {
        let token = token.ok_or(ConfigError::MissingToken(TOKEN_ENV_VAR))?;

        Ok(Self {
            token,
            products_path: PathBuf::from(DEFAULT_PRODUCTS_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            github_base_url: DEFAULT_GITHUB_BASE_URL.to_string(),
            raw_content_base_url: DEFAULT_RAW_CONTENT_BASE_URL.to_string(),
        })
    }
}
