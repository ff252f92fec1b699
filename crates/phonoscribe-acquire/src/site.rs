use anyhow::{Context, Result};
use phonoscribe_model::{ExtractMode, SiteConfig, Transcription, WORD_PLACEHOLDER};
use regex::Regex;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::scan;

/// A dictionary site ready for lookups: compiled marker pattern,
/// prebuilt header bundle, validated URL template.
pub struct Site {
    name: String,
    url_template: String,
    headers: HeaderMap,
    marker: Regex,
    extract_mode: ExtractMode,
}

impl Site {
    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        anyhow::ensure!(
            config.url_template.contains(WORD_PLACEHOLDER),
            "Site '{}': URL template has no {WORD_PLACEHOLDER} placeholder",
            config.name
        );

        let marker = Regex::new(&config.marker_pattern)
            .with_context(|| format!("Site '{}': invalid marker pattern", config.name))?;
        if config.extract_mode == ExtractMode::Capture {
            anyhow::ensure!(
                marker.captures_len() >= 2,
                "Site '{}': capture mode needs one capture group in the marker pattern",
                config.name
            );
        }

        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let name: HeaderName = name
                .parse()
                .with_context(|| format!("Site '{}': bad header name '{name}'", config.name))?;
            let value: HeaderValue = value
                .parse()
                .with_context(|| format!("Site '{}': bad header value for '{name:?}'", config.name))?;
            headers.insert(name, value);
        }

        Ok(Self {
            name: config.name.clone(),
            url_template: config.url_template.clone(),
            headers,
            marker,
            extract_mode: config.extract_mode,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lookup_url(&self, word: &str) -> String {
        self.url_template.replace(WORD_PLACEHOLDER, word)
    }

    /// Fetch this site's page for `word` and extract the transcription.
    ///
    /// A non-success status is logged and the body searched anyway; an
    /// absent marker yields `NotFound`. Only transport-level failures
    /// (and an unbalanced scan) are errors.
    pub async fn lookup(&self, client: &reqwest::Client, word: &str) -> Result<Transcription> {
        let url = self.lookup_url(word);
        tracing::debug!(site = %self.name, url = %url, "Fetching");

        let response = client
            .get(&url)
            .headers(self.headers.clone())
            .send()
            .await
            .with_context(|| format!("Request to {url} failed"))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(site = %self.name, word = %word, status = %status, "Non-success status");
        }

        let body = response
            .text()
            .await
            .context("Failed to read response body")?;
        tracing::debug!(site = %self.name, bytes = body.len(), "Received HTML");

        self.extract(&body)
    }

    /// Apply the marker pattern to a fetched document.
    pub fn extract(&self, body: &str) -> Result<Transcription> {
        match self.extract_mode {
            ExtractMode::Capture => match self.marker.captures(body) {
                Some(caps) => {
                    let text = caps.get(1).map_or("", |g| g.as_str());
                    Ok(Transcription::Found(text.to_string()))
                }
                None => Ok(Transcription::NotFound),
            },
            ExtractMode::Scan => match self.marker.find(body) {
                Some(m) => {
                    let text = scan::scan_fragment(body, m.start()).with_context(|| {
                        format!("Site '{}': fragment scan failed", self.name)
                    })?;
                    Ok(Transcription::Found(text))
                }
                None => Ok(Transcription::NotFound),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn capture_site(url_template: &str) -> Site {
        Site::from_config(&SiteConfig {
            name: "oxford".into(),
            url_template: url_template.into(),
            headers: Vec::new(),
            marker_pattern: r#"<span class="phoneticspelling">(.*?)</span>"#.into(),
            extract_mode: ExtractMode::Capture,
        })
        .unwrap()
    }

    fn scan_site(url_template: &str, headers: Vec<(String, String)>) -> Site {
        Site::from_config(&SiteConfig {
            name: "longman".into(),
            url_template: url_template.into(),
            headers,
            marker_pattern: r#"<span class="PRON">"#.into(),
            extract_mode: ExtractMode::Scan,
        })
        .unwrap()
    }

    #[test]
    fn test_lookup_url_substitution() {
        let site = capture_site("https://example.com/definition/{word}");
        assert_eq!(site.lookup_url("run"), "https://example.com/definition/run");
    }

    #[test]
    fn test_capture_extracts_group() {
        let site = capture_site("https://example.com/{word}");
        let body = r#"<html><span class="phoneticspelling">/rʌn/</span></html>"#;
        assert_eq!(
            site.extract(body).unwrap(),
            Transcription::Found("/rʌn/".into())
        );
    }

    #[test]
    fn test_missing_marker_is_not_found() {
        let site = capture_site("https://example.com/{word}");
        assert_eq!(
            site.extract("<html>no pronunciation here</html>").unwrap(),
            Transcription::NotFound
        );
    }

    #[test]
    fn test_scan_mode_recovers_nested_text() {
        let site = scan_site("https://example.com/{word}", Vec::new());
        let body = r#"<html><span class="PRON">rʌn<small>¹</small></span></html>"#;
        assert_eq!(
            site.extract(body).unwrap(),
            Transcription::Found("/rʌn¹/".into())
        );
    }

    #[test]
    fn test_scan_mode_unbalanced_is_error() {
        let site = scan_site("https://example.com/{word}", Vec::new());
        let body = r#"<html><span class="PRON">rʌn"#;
        assert!(site.extract(body).is_err());
    }

    #[test]
    fn test_capture_mode_requires_group() {
        let result = Site::from_config(&SiteConfig {
            name: "bad".into(),
            url_template: "https://example.com/{word}".into(),
            headers: Vec::new(),
            marker_pattern: "no groups here".into(),
            extract_mode: ExtractMode::Capture,
        });
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_lookup_sends_configured_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/dictionary/run"))
            .and(header("Upgrade-Insecure-Requests", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<span class="PRON">rʌn</span>"#,
            ))
            .mount(&server)
            .await;

        let headers = vec![("Upgrade-Insecure-Requests".to_string(), "1".to_string())];
        let site = scan_site(&format!("{}/dictionary/{{word}}", server.uri()), headers);
        let client = crate::build_client().unwrap();

        let result = site.lookup(&client, "run").await.unwrap();
        assert_eq!(result, Transcription::Found("/rʌn/".into()));
    }

    #[tokio::test]
    async fn test_lookup_searches_body_on_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/definition/run"))
            .respond_with(ResponseTemplate::new(404).set_body_string(
                r#"<span class="phoneticspelling">/rʌn/</span>"#,
            ))
            .mount(&server)
            .await;

        let site = capture_site(&format!("{}/definition/{{word}}", server.uri()));
        let client = crate::build_client().unwrap();

        let result = site.lookup(&client, "run").await.unwrap();
        assert_eq!(result, Transcription::Found("/rʌn/".into()));
    }
}
