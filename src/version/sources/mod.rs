//! Source implementations for fetching release data

pub mod github;

pub use github::GitHubSource;
