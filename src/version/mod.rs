//! Version lookup layer
//!
//! # Modules
//!
//! - [`filter`]: Selects the catalog versions that are looked up
//! - [`extract`]: Version patterns for go.mod bodies and release paths
//! - [`source`]: `ReleaseSource` trait for fetching remote data
//! - [`sources`]: Concrete source implementations (GitHub)
//! - [`resolver`]: Turns fetched data into Flux versions

pub mod extract;
pub mod filter;
pub mod resolver;
pub mod source;
pub mod sources;
