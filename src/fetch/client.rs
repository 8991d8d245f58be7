// Fragment fetching over HTTP - one GET per navigation, no retries,
// no caching

use crate::error::NavError;
use std::time::Duration;

pub fn build_client(timeout_secs: u64) -> Result<reqwest::blocking::Client, NavError> {
    reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(NavError::transport)
}

/// Fetch raw fragment markup. Non-success status codes are surfaced with
/// the failing URL so the error placeholder can name the resource.
pub fn fetch_fragment(client: &reqwest::blocking::Client, url: &str) -> Result<String, NavError> {
    let response = client.get(url).send().map_err(NavError::transport)?;
    let status = response.status();
    if !status.is_success() {
        return Err(NavError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    response.text().map_err(NavError::transport)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_names_the_resource() {
        let err = NavError::Status {
            status: 404,
            url: "https://example.com/views/blog.html".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("views/blog.html"));
    }

    #[test]
    fn test_client_builds_with_timeout() {
        assert!(build_client(30).is_ok());
    }
}
