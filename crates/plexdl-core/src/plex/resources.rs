//! Server resource discovery and connection.
//!
//! plex.tv lists every device on the account; a media server shows up with
//! `provides` containing "server" and one or more candidate connection URIs
//! (local, remote, relay). We match the resource by exact name, then probe the
//! candidates in order until one answers `/identity`.

use serde::Deserialize;

use crate::http;

use super::{default_headers, AuthToken, PlexError, PlexServer};

const RESOURCES_URL: &str = "https://plex.tv/api/v2/resources";

#[derive(Debug, Deserialize)]
struct Resource {
    #[serde(default)]
    name: String,
    #[serde(default)]
    provides: String,
    #[serde(default)]
    connections: Vec<Connection>,
}

#[derive(Debug, Deserialize)]
struct Connection {
    uri: String,
    #[serde(default)]
    relay: bool,
}

impl Resource {
    fn is_server(&self) -> bool {
        self.provides.split(',').any(|p| p.trim() == "server")
    }
}

/// Resolve the named server resource and open a connection to it.
pub fn connect(token: &AuthToken, server_name: &str) -> Result<PlexServer, PlexError> {
    let headers = default_headers(Some(&token.0));
    let body = http::get(RESOURCES_URL, &headers)?;
    let resources: Vec<Resource> =
        serde_json::from_slice(&body).map_err(|source| PlexError::Decode {
            context: "resource listing",
            source,
        })?;

    let resource = pick_server(resources, server_name)?;

    for conn in ordered_connections(resource.connections) {
        let base_url = conn.uri.trim_end_matches('/').to_string();
        let identity_url = format!("{base_url}/identity");
        match http::get(&identity_url, &headers) {
            Ok(_) => {
                tracing::info!("connected to {server_name} at {base_url}");
                return Ok(PlexServer {
                    base_url,
                    token: token.0.clone(),
                });
            }
            Err(err) => {
                tracing::debug!("connection {base_url} did not answer: {err}");
            }
        }
    }

    Err(PlexError::Unreachable(server_name.to_string()))
}

/// Exact-name match among resources that provide a media server.
fn pick_server(resources: Vec<Resource>, name: &str) -> Result<Resource, PlexError> {
    resources
        .into_iter()
        .filter(Resource::is_server)
        .find(|r| r.name == name)
        .ok_or_else(|| PlexError::ResourceNotFound(name.to_string()))
}

/// Keep server order but push relay connections to the back; relays are the
/// slow path and only worth trying when nothing direct answers.
fn ordered_connections(mut connections: Vec<Connection>) -> Vec<Connection> {
    connections.sort_by_key(|c| c.relay);
    connections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<Resource> {
        let json = r#"[
            {
                "name": "sunplex",
                "provides": "server",
                "connections": [
                    {"uri": "https://1-2-3-4.plex.direct:32400", "relay": true},
                    {"uri": "http://192.168.1.10:32400", "local": true},
                    {"uri": "https://sunplex.example:32400"}
                ]
            },
            {
                "name": "Living Room TV",
                "provides": "client,player",
                "connections": [{"uri": "http://192.168.1.20:3005"}]
            }
        ]"#;
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn pick_server_matches_exact_name() {
        let r = pick_server(fixture(), "sunplex").unwrap();
        assert_eq!(r.name, "sunplex");
        assert_eq!(r.connections.len(), 3);
    }

    #[test]
    fn pick_server_ignores_non_server_devices() {
        // The TV matches by name but does not provide "server".
        let err = pick_server(fixture(), "Living Room TV").unwrap_err();
        assert!(matches!(err, PlexError::ResourceNotFound(_)));
    }

    #[test]
    fn pick_server_unknown_name() {
        let err = pick_server(fixture(), "moonplex").unwrap_err();
        assert!(matches!(err, PlexError::ResourceNotFound(_)));
    }

    #[test]
    fn relay_connections_tried_last() {
        let r = pick_server(fixture(), "sunplex").unwrap();
        let ordered = ordered_connections(r.connections);
        let uris: Vec<&str> = ordered.iter().map(|c| c.uri.as_str()).collect();
        assert_eq!(
            uris,
            [
                "http://192.168.1.10:32400",
                "https://sunplex.example:32400",
                "https://1-2-3-4.plex.direct:32400",
            ]
        );
    }
}
