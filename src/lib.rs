//! Generates `data/flux_influxdb_versions.yml`, the Flux version pinned in
//! each InfluxDB release, for the documentation site.

pub mod catalog;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod version;

pub use pipeline::run;
