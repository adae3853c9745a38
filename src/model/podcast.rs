// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use url::Url;

use super::episode::Episode;

/// Descriptive metadata about a podcast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Podcast {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed: Option<Url>,
}

/// A podcast together with its most recent or requested episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PodcastEmbed {
    pub podcast: Podcast,
    /// Absent when the podcast has no published episodes or the requested
    /// episode does not exist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode: Option<Episode>,
}
