use thiserror::Error;

/// Errors talking to the NWS API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the response could not be read.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("NWS API returned {status}: {title}{}", detail_suffix(.detail))]
    Status {
        status: u16,
        title: String,
        detail: Option<String>,
    },
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|detail| format!(" ({})", detail))
        .unwrap_or_default()
}
