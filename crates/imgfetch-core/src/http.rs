//! Blocking HTTP GET via libcurl's easy interface.
//!
//! The whole body is collected in memory; callers write it out only after
//! the transfer succeeded.

use crate::config::HttpConfig;
use crate::error::FetchError;

/// A completed 2xx response.
#[derive(Debug, Clone)]
pub struct FetchedBody {
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// Issues one GET for `url` and returns the body of the final response.
///
/// Transport failures map to `FetchError::Request`, a non-2xx final status to
/// `FetchError::Status`.
pub fn get(url: &str, http: &HttpConfig) -> Result<FetchedBody, FetchError> {
    let request_err = |source: curl::Error| FetchError::Request {
        url: url.to_string(),
        source,
    };

    let mut body = Vec::new();
    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(request_err)?;
    easy.get(true).map_err(request_err)?;
    easy.follow_location(http.follow_redirects).map_err(request_err)?;
    if http.follow_redirects {
        easy.max_redirections(http.max_redirections).map_err(request_err)?;
    }
    if let Some(agent) = &http.user_agent {
        easy.useragent(agent).map_err(request_err)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(request_err)?;
        transfer.perform().map_err(request_err)?;
    }

    let status = easy.response_code().map_err(request_err)?;
    if !(200..300).contains(&status) {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let content_type = easy
        .content_type()
        .map_err(request_err)?
        .map(str::to_string);

    tracing::debug!(
        url,
        status,
        bytes = body.len(),
        content_type = content_type.as_deref().unwrap_or("-"),
        "GET complete"
    );

    Ok(FetchedBody { content_type, body })
}
