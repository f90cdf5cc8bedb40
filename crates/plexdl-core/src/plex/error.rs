//! Remote-API failure classes.

use thiserror::Error;

/// Error from the Plex account or server API. Each variant maps to one of the
/// failure classes the driver reports: bad credentials, unknown or
/// unreachable server, missing playlist, or a transport/decode problem.
#[derive(Debug, Error)]
pub enum PlexError {
    /// plex.tv rejected the username/password pair.
    #[error("plex.tv rejected the credentials (HTTP {0})")]
    AuthRejected(u32),

    /// A request completed with a non-2xx status.
    #[error("HTTP {code} from {url}")]
    Status { code: u32, url: String },

    /// The account has no server resource with the requested name.
    #[error("no server named {0:?} on this account")]
    ResourceNotFound(String),

    /// The named server exists but none of its advertised connections answered.
    #[error("no reachable connection for server {0:?}")]
    Unreachable(String),

    /// The server has no playlist with the requested name.
    #[error("no playlist named {0:?}")]
    PlaylistNotFound(String),

    /// libcurl reported a transport error (DNS, TLS, timeout, ...).
    #[error("transport: {0}")]
    Curl(#[from] curl::Error),

    /// A response body did not decode as the expected JSON shape.
    #[error("decode {context}: {source}")]
    Decode {
        context: &'static str,
        source: serde_json::Error,
    },
}
