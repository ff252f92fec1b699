use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Placeholder substituted with the looked-up word in a site URL template.
pub const WORD_PLACEHOLDER: &str = "{word}";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no sites configured")]
    NoSites,

    #[error("site '{0}': URL template does not contain the {WORD_PLACEHOLDER} placeholder")]
    MissingPlaceholder(String),

    #[error("site '{0}': marker pattern is empty")]
    EmptyMarkerPattern(String),

    #[error("checkpoint interval must be at least 1")]
    ZeroCheckpointInterval,
}

/// How a site's transcription is pulled out of the fetched document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractMode {
    /// The marker pattern has one capture group holding the transcription.
    Capture,
    /// The marker pattern locates an opening tag; the fragment scanner
    /// recovers the text from that offset.
    Scan,
}

/// One dictionary site: where to look and how to extract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub url_template: String,
    /// Fixed headers sent with every request to this site. Some sites
    /// reject requests that don't look like a browser.
    #[serde(default)]
    pub headers: Vec<(String, String)>,
    pub marker_pattern: String,
    pub extract_mode: ExtractMode,
}

/// Full pipeline configuration. Loadable from JSON; the compiled-in
/// default reproduces the two-site Oxford + Longman setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub input_path: String,
    pub output_path: String,
    /// Save the output sheet after every this many processed words.
    pub checkpoint_interval: usize,
    pub sites: Vec<SiteConfig>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: "input.xlsx".to_string(),
            output_path: "output.xlsx".to_string(),
            checkpoint_interval: 10,
            sites: vec![oxford_site(), longman_site()],
        }
    }
}

impl PipelineConfig {
    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sites.is_empty() {
            return Err(ConfigError::NoSites);
        }
        if self.checkpoint_interval == 0 {
            return Err(ConfigError::ZeroCheckpointInterval);
        }
        for site in &self.sites {
            if !site.url_template.contains(WORD_PLACEHOLDER) {
                return Err(ConfigError::MissingPlaceholder(site.name.clone()));
            }
            if site.marker_pattern.is_empty() {
                return Err(ConfigError::EmptyMarkerPattern(site.name.clone()));
            }
        }
        Ok(())
    }
}

fn oxford_site() -> SiteConfig {
    SiteConfig {
        name: "oxford".to_string(),
        url_template: format!("https://en.oxforddictionaries.com/definition/{WORD_PLACEHOLDER}"),
        headers: Vec::new(),
        marker_pattern: r#"<span class="phoneticspelling">(.*?)</span>"#.to_string(),
        extract_mode: ExtractMode::Capture,
    }
}

fn longman_site() -> SiteConfig {
    SiteConfig {
        name: "longman".to_string(),
        url_template: format!("https://www.ldoceonline.com/dictionary/{WORD_PLACEHOLDER}"),
        headers: browser_headers("www.ldoceonline.com"),
        marker_pattern: r#"<span class="PRON">"#.to_string(),
        extract_mode: ExtractMode::Scan,
    }
}

/// Static browser-impersonating header bundle. ldoceonline.com serves an
/// empty shell to clients without these.
fn browser_headers(host: &str) -> Vec<(String, String)> {
    vec![
        ("Host".to_string(), host.to_string()),
        ("Connection".to_string(), "keep-alive".to_string()),
        ("Cache-Control".to_string(), "max-age=0".to_string()),
        ("Upgrade-Insecure-Requests".to_string(), "1".to_string()),
        (
            "User-Agent".to_string(),
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_13_1) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/67.0.3396.99 Safari/537.36"
                .to_string(),
        ),
        (
            "Accept".to_string(),
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8"
                .to_string(),
        ),
        ("Accept-Encoding".to_string(), "gzip, deflate, br".to_string()),
        ("Accept-Language".to_string(), "en-US,en;q=0.9".to_string()),
        (
            "Cookie".to_string(),
            "_ga=GA1.3.31325880.1530860210; _gid=GA1.3.70998704.1530860210; _gat=1; \
             __qca=P0-418125505-1530860209666; __gads=ID=3934ca0d8c0095e6:T=1530860209:\
             S=ALNI_MZJ-NqmC-EibvJLX6nemhGl3t7Q6g"
                .to_string(),
        ),
    ]
}
