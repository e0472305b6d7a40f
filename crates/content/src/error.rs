/// Reasons a page could not use remote content.
///
/// Every variant leads to the same outcome: the page keeps its default
/// document. The variants exist for logging.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The HTTP request itself failed (network, DNS, TLS, body read).
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The content API returned a non-2xx status code.
    #[error("Content API returned HTTP {0}")]
    HttpStatus(u16),

    /// The envelope reported `success: false`.
    #[error("Content API reported failure: {message}")]
    Envelope { message: String },

    /// The body was not valid JSON or did not fit the page schema.
    #[error("Malformed content: {0}")]
    Parse(#[from] serde_json::Error),

    /// The body was valid JSON but not a page object.
    #[error("Unexpected content shape: {0}")]
    Shape(String),
}
