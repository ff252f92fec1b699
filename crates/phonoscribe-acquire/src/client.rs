use anyhow::{Context, Result};

/// Build the shared HTTP client used for every site lookup.
///
/// No timeout is configured: lookups are strictly sequential and block
/// until the remote responds. Response decompression (gzip/deflate/br)
/// is handled by reqwest, so the browser header bundle can advertise it.
pub fn build_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent("phonoscribe/0.1 (phonetics lookup tool)")
        .build()
        .context("Failed to build HTTP client")
}
