//! Flux version data file written for the documentation site

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::OutputError;
use crate::version::resolver::VersionMap;

/// Comment block placed above the generated YAML
pub const HEADER: &str = "\
# This file is auto-generated by flux-versions.
# It is used to identify what versions of Flux are installed with each version
# of InfluxDB. You are welcome to make changes to this file, but they will be
# overwritten whenever flux-versions runs in the build/deploy process.
";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FluxRelease {
    pub latest: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CloudRelease {
    pub current: Option<String>,
}

/// Root of the generated file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FluxVersions {
    pub flux: FluxRelease,
    pub cloud: CloudRelease,
    pub oss: VersionMap,
    pub enterprise: VersionMap,
}

/// Renders the header, a blank line, then the YAML document
pub fn render(versions: &FluxVersions) -> Result<String, OutputError> {
    let yaml = serde_yaml::to_string(versions)?;
    Ok(format!("{}\n{}", HEADER, yaml))
}

/// Overwrites `path` with the rendered file
pub fn write(path: &Path, versions: &FluxVersions) -> Result<(), OutputError> {
    let content = render(versions)?;
    std::fs::write(path, content).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}
