use reqwest::blocking::Client;
use tracing::info;

use crate::error::BuildError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Download the sample listing page. Any transport error or non-2xx status is fatal.
pub fn fetch_page(url: &str) -> Result<String, BuildError> {
    let network = |source| BuildError::Network {
        url: url.to_string(),
        source,
    };

    let client = Client::builder().user_agent(USER_AGENT).build().map_err(network)?;

    info!("Fetching sample listing: {}", url);
    let html = client
        .get(url)
        .send()
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.text())
        .map_err(network)?;

    info!("Fetched {} bytes", html.len());
    Ok(html)
}
