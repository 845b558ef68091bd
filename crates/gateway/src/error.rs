use creel_core::types::LogId;

/// Errors from the fishing-log API layer.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// No usable session token was available, or the server refused the
    /// presented one. Never a silent empty result.
    #[error("Not signed in: {0}")]
    Unauthenticated(String),

    /// The server does not know the requested record.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: LogId },

    /// The server rejected the submitted payload (server-side validation).
    #[error("The server rejected the request: {message}")]
    Rejected {
        /// HTTP status code (400 or 422).
        status: u16,
        /// Raw response body, for display and debugging.
        message: String,
    },

    /// Any other non-2xx status code.
    #[error("Fishing-log API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}
