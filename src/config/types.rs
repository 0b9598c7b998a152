use serde::Deserialize;

/// Main configuration structure for kagami
///
/// Every field carries a default so an empty (or absent) config file still
/// yields a runnable configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub origin: OriginConfig,
    pub crawler: CrawlerConfig,
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin: OriginConfig::default(),
            crawler: CrawlerConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// The single site the crawl is restricted to
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OriginConfig {
    /// Root URL the crawl starts from; its host bounds the whole crawl
    #[serde(rename = "base-url")]
    pub base_url: String,
}

impl Default for OriginConfig {
    fn default() -> Self {
        Self {
            base_url: "https://example.com/".to_string(),
        }
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Page budget: the crawl stops claiming work once this many URLs
    /// have been popped from the frontier
    #[serde(rename = "max-pages")]
    pub max_pages: usize,

    /// Number of concurrent fetch workers
    pub concurrency: usize,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_pages: 500,
            concurrency: 5,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the mirrored page tree is written under
    #[serde(rename = "mirror-root")]
    pub mirror_root: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            mirror_root: "./mirror".to_string(),
        }
    }
}
