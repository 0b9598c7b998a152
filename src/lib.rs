//! Kagami: a single-site mirroring crawler
//!
//! This crate crawls one website starting from its root URL, rewrites each
//! page's internal links to locally-served paths, and persists the rewritten
//! pages under a mirror directory that can later be served as static content.
//! It is a one-shot, bounded batch job rather than a long-running service.

pub mod config;
pub mod crawler;
pub mod mirror;
pub mod url;

use thiserror::Error;

/// Main error type for kagami operations
#[derive(Debug, Error)]
pub enum KagamiError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("URL has no host: {0}")]
    MissingHost(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for kagami operations
pub type Result<T> = std::result::Result<T, KagamiError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, CrawlReport};
pub use mirror::{link_path, storage_path};
pub use crate::url::normalize;
