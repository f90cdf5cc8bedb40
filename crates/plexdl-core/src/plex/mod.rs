//! Plex account and server API.
//!
//! The remote surface is deliberately narrow: sign in to plex.tv, resolve a
//! named server resource to a reachable base URL, and fetch one playlist with
//! the file locations of its items. Nothing else the Plex API offers is used.

mod auth;
mod error;
mod playlist;
mod resources;

pub use auth::{sign_in, AuthToken};
pub use error::PlexError;
pub use resources::connect;

/// Product name sent in `X-Plex-Product`.
pub const PRODUCT: &str = "plexdl";
/// Client identifier sent in `X-Plex-Client-Identifier`. Plex only requires
/// that it is consistent within a session.
pub const CLIENT_IDENTIFIER: &str = "plexdl-cli";

/// An open session against one Plex Media Server: a reachable base URL plus
/// the account token. Obtained via [`connect`].
#[derive(Debug, Clone)]
pub struct PlexServer {
    pub(crate) base_url: String,
    pub(crate) token: String,
}

/// A named, ordered collection of media entries on the server.
#[derive(Debug, Clone)]
pub struct Playlist {
    pub title: String,
    pub items: Vec<PlaylistItem>,
}

/// One playlist entry with its candidate storage locations, in server order.
/// Only the first location is consumed by the copy loop.
#[derive(Debug, Clone)]
pub struct PlaylistItem {
    pub title: String,
    pub locations: Vec<String>,
}

/// Playlist lookup seam. The copy loop depends on this trait instead of the
/// live server so tests can supply fixed playlist data.
pub trait PlaylistSource {
    /// Fetch the playlist with exactly this name and its ordered item list.
    fn playlist(&self, name: &str) -> Result<Playlist, PlexError>;
}

/// Headers sent on every Plex request.
pub(crate) fn default_headers(token: Option<&str>) -> Vec<(String, String)> {
    let mut headers = vec![
        ("Accept".to_string(), "application/json".to_string()),
        ("X-Plex-Product".to_string(), PRODUCT.to_string()),
        (
            "X-Plex-Version".to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        ),
        (
            "X-Plex-Client-Identifier".to_string(),
            CLIENT_IDENTIFIER.to_string(),
        ),
    ];
    if let Some(token) = token {
        headers.push(("X-Plex-Token".to_string(), token.to_string()));
    }
    headers
}
