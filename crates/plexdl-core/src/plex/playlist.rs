//! Playlist lookup and item enumeration against a live server.
//!
//! Minimal serde mirror of the `MediaContainer` JSON the server returns for
//! `/playlists` and `/playlists/{id}/items`. An item's candidate locations are
//! the `Media[].Part[].file` paths, flattened in server order.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::http;

use super::{default_headers, Playlist, PlaylistItem, PlaylistSource, PlexError, PlexServer};

#[derive(Debug, Deserialize)]
struct Wrapped<T> {
    #[serde(rename = "MediaContainer")]
    media_container: T,
}

#[derive(Debug, Deserialize)]
struct PlaylistContainer {
    #[serde(default, rename = "Metadata")]
    metadata: Vec<PlaylistEntry>,
}

#[derive(Debug, Deserialize)]
struct PlaylistEntry {
    #[serde(default, rename = "ratingKey")]
    rating_key: String,
    /// Item endpoint for this playlist, e.g. `/playlists/123/items`.
    #[serde(default)]
    key: String,
    #[serde(default)]
    title: String,
}

#[derive(Debug, Deserialize)]
struct ItemContainer {
    #[serde(default, rename = "Metadata")]
    metadata: Vec<ItemEntry>,
}

#[derive(Debug, Deserialize)]
struct ItemEntry {
    #[serde(default)]
    title: String,
    #[serde(default, rename = "Media")]
    media: Vec<MediaEntry>,
}

#[derive(Debug, Deserialize)]
struct MediaEntry {
    #[serde(default, rename = "Part")]
    part: Vec<PartEntry>,
}

#[derive(Debug, Deserialize)]
struct PartEntry {
    #[serde(default)]
    file: String,
}

impl ItemEntry {
    fn into_item(self) -> PlaylistItem {
        let locations = self
            .media
            .into_iter()
            .flat_map(|m| m.part)
            .map(|p| p.file)
            .filter(|f| !f.is_empty())
            .collect();
        PlaylistItem {
            title: self.title,
            locations,
        }
    }
}

impl PlaylistEntry {
    fn item_key(&self) -> String {
        if self.key.is_empty() {
            format!("/playlists/{}/items", self.rating_key)
        } else {
            self.key.clone()
        }
    }
}

impl PlexServer {
    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        context: &'static str,
    ) -> Result<T, PlexError> {
        let url = format!("{}{}", self.base_url, path);
        let body = http::get(&url, &default_headers(Some(&self.token)))?;
        serde_json::from_slice(&body).map_err(|source| PlexError::Decode { context, source })
    }
}

impl PlaylistSource for PlexServer {
    fn playlist(&self, name: &str) -> Result<Playlist, PlexError> {
        let listing: Wrapped<PlaylistContainer> = self.get_json("/playlists", "playlist listing")?;
        let entry = listing
            .media_container
            .metadata
            .into_iter()
            .find(|p| p.title == name)
            .ok_or_else(|| PlexError::PlaylistNotFound(name.to_string()))?;

        let items: Wrapped<ItemContainer> = self.get_json(&entry.item_key(), "playlist items")?;
        tracing::debug!(
            "playlist {:?} has {} item(s)",
            entry.title,
            items.media_container.metadata.len()
        );

        Ok(Playlist {
            title: entry.title,
            items: items
                .media_container
                .metadata
                .into_iter()
                .map(ItemEntry::into_item)
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playlist_listing_decodes() {
        let json = r#"{
            "MediaContainer": {
                "size": 2,
                "Metadata": [
                    {"ratingKey": "101", "key": "/playlists/101/items",
                     "title": "Road Trip", "playlistType": "audio"},
                    {"ratingKey": "102", "key": "/playlists/102/items",
                     "title": "Chores", "playlistType": "audio"}
                ]
            }
        }"#;
        let wrapped: Wrapped<PlaylistContainer> = serde_json::from_str(json).unwrap();
        let titles: Vec<&str> = wrapped
            .media_container
            .metadata
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, ["Road Trip", "Chores"]);
        assert_eq!(
            wrapped.media_container.metadata[0].item_key(),
            "/playlists/101/items"
        );
    }

    #[test]
    fn item_key_falls_back_to_rating_key() {
        let entry = PlaylistEntry {
            rating_key: "77".to_string(),
            key: String::new(),
            title: "X".to_string(),
        };
        assert_eq!(entry.item_key(), "/playlists/77/items");
    }

    #[test]
    fn items_flatten_media_parts_in_order() {
        let json = r#"{
            "MediaContainer": {
                "Metadata": [
                    {"title": "a", "Media": [
                        {"Part": [{"file": "/data/music/a.mp3"}]}
                    ]},
                    {"title": "b", "Media": [
                        {"Part": [{"file": "/data/music/b.mp3"},
                                  {"file": "/data/music/b-alt.mp3"}]}
                    ]}
                ]
            }
        }"#;
        let wrapped: Wrapped<ItemContainer> = serde_json::from_str(json).unwrap();
        let items: Vec<PlaylistItem> = wrapped
            .media_container
            .metadata
            .into_iter()
            .map(ItemEntry::into_item)
            .collect();
        assert_eq!(items[0].locations, ["/data/music/a.mp3"]);
        assert_eq!(
            items[1].locations,
            ["/data/music/b.mp3", "/data/music/b-alt.mp3"]
        );
    }

    #[test]
    fn item_without_media_has_no_locations() {
        let json = r#"{"MediaContainer": {"Metadata": [{"title": "ghost"}]}}"#;
        let wrapped: Wrapped<ItemContainer> = serde_json::from_str(json).unwrap();
        let item = wrapped.media_container.metadata.into_iter().next().unwrap();
        assert!(item.into_item().locations.is_empty());
    }

    #[test]
    fn empty_container_decodes() {
        let json = r#"{"MediaContainer": {"size": 0}}"#;
        let wrapped: Wrapped<PlaylistContainer> = serde_json::from_str(json).unwrap();
        assert!(wrapped.media_container.metadata.is_empty());
    }
}
