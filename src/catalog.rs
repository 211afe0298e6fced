//! Product catalog loaded from `data/products.yml`
//!
//! Only the version lists of the two InfluxDB product lines are read; every
//! other key in the file is ignored.

use std::path::Path;

use serde::Deserialize;

use crate::config::{ENTERPRISE_VERSION_FLOOR, OSS_VERSION_FLOOR};
use crate::error::CatalogError;

/// InfluxDB distribution with its own version catalog and repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductLine {
    Oss,
    Enterprise,
}

impl ProductLine {
    /// Repository under the upstream organization holding this line's go.mod
    pub fn repo(&self) -> &'static str {
        match self {
            ProductLine::Oss => "influxdb",
            ProductLine::Enterprise => "plutonium",
        }
    }

    /// Minimum version looked up for this line
    pub fn floor(&self) -> f64 {
        match self {
            ProductLine::Oss => OSS_VERSION_FLOOR,
            ProductLine::Enterprise => ENTERPRISE_VERSION_FLOOR,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductLine::Oss => "oss",
            ProductLine::Enterprise => "enterprise",
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Product {
    pub versions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProductCatalog {
    pub influxdb: Product,
    pub enterprise_influxdb: Product,
}

impl ProductCatalog {
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, CatalogError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Version tags for a product line, in catalog order
    pub fn versions(&self, line: ProductLine) -> &[String] {
        match line {
            ProductLine::Oss => &self.influxdb.versions,
            ProductLine::Enterprise => &self.enterprise_influxdb.versions,
        }
    }
}
