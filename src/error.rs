use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable {0} is not set")]
    MissingToken(&'static str),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read product catalog {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse product catalog: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Failed to fetch the latest Flux release: {0}")]
    LatestRelease(#[source] SourceError),

    #[error("Latest release path has no version suffix: {0}")]
    UnrecognizedReleasePath(String),

    #[error("No Flux requirement in go.mod of influxdata/{repo}@{git_ref}")]
    MissingFluxRequirement { repo: String, git_ref: String },
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize Flux versions: {0}")]
    Serialize(#[from] serde_yaml::Error),

    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Any error that aborts a run
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Output(#[from] OutputError),
}
