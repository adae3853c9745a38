use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::episode::Episode;
use crate::error::UnknownSorting;

/// One page of a podcast's episode list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    #[serde(rename = "playlist")]
    pub episodes: Vec<Episode>,
}

impl Playlist {
    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }
}

/// Order of the episodes in a playlist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaylistSorting {
    /// Sort by publish date, most recent first
    #[default]
    #[serde(rename = "default")]
    PublishDate,
    /// Sort by episode number in ascending order
    #[serde(rename = "numeric")]
    EpisodeNumber,
}

impl PlaylistSorting {
    /// Token sent as the `playlist_order` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PublishDate => "default",
            Self::EpisodeNumber => "numeric",
        }
    }
}

impl fmt::Display for PlaylistSorting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaylistSorting {
    type Err = UnknownSorting;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::PublishDate),
            "numeric" => Ok(Self::EpisodeNumber),
            other => Err(UnknownSorting(other.to_string())),
        }
    }
}

/// Options for requesting a playlist page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaylistOptions {
    /// Maximum number of episodes on the page, must be positive
    pub page_size: i64,
    /// Number of episodes to skip, must not be negative
    pub offset: i64,
    pub sort_by: PlaylistSorting,
}

impl Default for PlaylistOptions {
    fn default() -> Self {
        Self {
            page_size: 10,
            offset: 0,
            sort_by: PlaylistSorting::PublishDate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playlist_decodes_episodes_in_order() {
        let json = r#"{"playlist": [
            {"title": "Two", "published_at": "2020-02-01T08:00:00Z",
             "media": {"mp3": "https://cdn.example.com/2.mp3"}},
            {"title": "One", "published_at": "2020-01-01T08:00:00Z",
             "media": {"mp3": "https://cdn.example.com/1.mp3"}}
        ]}"#;
        let playlist: Playlist = serde_json::from_str(json).unwrap();

        assert_eq!(playlist.len(), 2);
        let titles: Vec<&str> = playlist.episodes.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Two", "One"]);
    }

    #[test]
    fn playlist_rejects_null_entries() {
        let json = r#"{"playlist": [null]}"#;
        assert!(serde_json::from_str::<Playlist>(json).is_err());
    }

    #[test]
    fn empty_playlist_decodes() {
        let playlist: Playlist = serde_json::from_str(r#"{"playlist": []}"#).unwrap();
        assert!(playlist.is_empty());
    }

    #[test]
    fn sorting_wire_tokens() {
        assert_eq!(PlaylistSorting::default(), PlaylistSorting::PublishDate);
        assert_eq!(PlaylistSorting::PublishDate.to_string(), "default");
        assert_eq!(PlaylistSorting::EpisodeNumber.as_str(), "numeric");
        assert_eq!(
            serde_json::to_string(&PlaylistSorting::EpisodeNumber).unwrap(),
            r#""numeric""#
        );
        assert_eq!(
            "numeric".parse::<PlaylistSorting>(),
            Ok(PlaylistSorting::EpisodeNumber)
        );

        let err = "alphabetical".parse::<PlaylistSorting>().unwrap_err();
        assert_eq!(err, UnknownSorting("alphabetical".to_string()));
        assert_eq!(
            err.to_string(),
            "Unknown playlist order 'alphabetical', expected 'default' or 'numeric'"
        );
    }

    #[test]
    fn options_default_to_first_page_of_ten() {
        let options = PlaylistOptions::default();

        assert_eq!(options.page_size, 10);
        assert_eq!(options.offset, 0);
        assert_eq!(options.sort_by, PlaylistSorting::PublishDate);
    }
}
