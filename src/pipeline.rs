//! Catalog -> filter -> resolve -> write

use tracing::info;

use crate::catalog::{ProductCatalog, ProductLine};
use crate::config::{Config, DEVELOPMENT_BRANCH, LEGACY_ENTERPRISE_VERSIONS};
use crate::error::{Error, ResolveError};
use crate::output::{self, CloudRelease, FluxRelease, FluxVersions};
use crate::version::filter::eligible_versions;
use crate::version::resolver::{resolve_entry, resolve_latest_tag, resolve_product_line};
use crate::version::source::ReleaseSource;
use crate::version::sources::GitHubSource;

/// Resolves every Flux version for the catalog, one request at a time
pub async fn collect_flux_versions(
    source: &dyn ReleaseSource,
    catalog: &ProductCatalog,
) -> Result<FluxVersions, ResolveError> {
    let oss_versions =
        eligible_versions(catalog.versions(ProductLine::Oss), ProductLine::Oss.floor());
    let enterprise_versions = eligible_versions(
        catalog.versions(ProductLine::Enterprise),
        ProductLine::Enterprise.floor(),
    );

    let mut oss = resolve_product_line(source, &oss_versions, ProductLine::Oss).await?;
    let mut enterprise =
        resolve_product_line(source, &enterprise_versions, ProductLine::Enterprise).await?;

    let nightly = resolve_entry(source, DEVELOPMENT_BRANCH, ProductLine::Oss).await?;
    oss.insert("nightly".to_string(), nightly.clone());

    // Legacy enterprise releases share the open source go.mod
    for version in LEGACY_ENTERPRISE_VERSIONS {
        let flux = resolve_entry(source, version, ProductLine::Oss).await?;
        enterprise.insert(version.to_string(), flux);
    }

    let latest = resolve_latest_tag(source).await?;

    Ok(FluxVersions {
        flux: FluxRelease { latest },
        cloud: CloudRelease { current: nightly },
        oss,
        enterprise,
    })
}

/// Runs the whole update and writes the data file
pub async fn run(config: &Config) -> Result<(), Error> {
    let catalog = ProductCatalog::load(&config.products_path)?;
    let source = GitHubSource::new(
        &config.github_base_url,
        &config.raw_content_base_url,
        &config.token,
    )?;

    let versions = collect_flux_versions(&source, &catalog).await?;
    output::write(&config.output_path, &versions)?;

    info!("Flux versions updated!");
    Ok(())
}
