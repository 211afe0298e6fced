//! Resolution of Flux versions through a [`ReleaseSource`]

use futures::{StreamExt, TryStreamExt, stream};
use indexmap::IndexMap;
use tracing::{info, warn};

use crate::catalog::ProductLine;
use crate::error::{ResolveError, SourceError};
use crate::version::extract;
use crate::version::source::ReleaseSource;

/// InfluxDB version -> Flux version, `None` when the lookup failed
pub type VersionMap = IndexMap<String, Option<String>>;

/// Outcome of a single go.mod lookup that did not abort the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyLookup {
    Resolved(String),
    Unresolved { reason: String },
}

impl DependencyLookup {
    pub fn into_version(self) -> Option<String> {
        match self {
            DependencyLookup::Resolved(version) => Some(version),
            DependencyLookup::Unresolved { .. } => None,
        }
    }
}

/// Resolves the version of the latest Flux release
///
/// Any failure is fatal: the release pointer has no fallback value.
pub async fn resolve_latest_tag(source: &dyn ReleaseSource) -> Result<String, ResolveError> {
    let path = source
        .latest_release_path()
        .await
        .map_err(ResolveError::LatestRelease)?;

    extract::release_version(&path)
        .map(str::to_string)
        .ok_or(ResolveError::UnrecognizedReleasePath(path))
}

/// Resolves the Flux version pinned in `git_ref` of a product line's repository
///
/// A failed request degrades to [`DependencyLookup::Unresolved`]; a manifest
/// that was fetched but has no Flux requirement aborts the run.
pub async fn resolve_dependency_version(
    source: &dyn ReleaseSource,
    git_ref: &str,
    line: ProductLine,
) -> Result<DependencyLookup, ResolveError> {
    let manifest = match source.fetch_manifest(line.repo(), git_ref).await {
        Ok(manifest) => manifest,
        Err(e) => {
            return Ok(DependencyLookup::Unresolved {
                reason: describe(&e),
            });
        }
    };

    match extract::flux_version(&manifest) {
        Some(version) => {
            info!("InfluxDB {} ({}) uses Flux {}", git_ref, line.label(), version);
            Ok(DependencyLookup::Resolved(version.to_string()))
        }
        None => Err(ResolveError::MissingFluxRequirement {
            repo: line.repo().to_string(),
            git_ref: git_ref.to_string(),
        }),
    }
}

/// Resolves one lookup and returns the value recorded in the output
pub async fn resolve_entry(
    source: &dyn ReleaseSource,
    git_ref: &str,
    line: ProductLine,
) -> Result<Option<String>, ResolveError> {
    let lookup = resolve_dependency_version(source, git_ref, line).await?;
    if let DependencyLookup::Unresolved { reason } = &lookup {
        warn!(
            "Could not find flux version for {} ({}): {}",
            git_ref,
            line.label(),
            reason
        );
    }
    Ok(lookup.into_version())
}

/// Resolves every version of a line one after another, keeping their order
pub async fn resolve_product_line(
    source: &dyn ReleaseSource,
    versions: &[String],
    line: ProductLine,
) -> Result<VersionMap, ResolveError> {
    stream::iter(versions)
        .then(|version| async move {
            let flux = resolve_entry(source, version, line).await?;
            Ok::<_, ResolveError>((version.clone(), flux))
        })
        .try_collect()
        .await
}

fn describe(e: &SourceError) -> String {
    match e {
        SourceError::NotFound(url) => format!("{} does not exist", url),
        other => other.to_string(),
    }
}
