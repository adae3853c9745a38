// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::EmbedError;
use crate::event::{ClientEvent, NoopReporter, SharedEventReporter};
use crate::http::{HttpClient, ReqwestClient};
use crate::model::{Playlist, PlaylistOptions, PodcastEmbed};
use crate::request::{embed_url, playlist_url};

const ACCEPT_JSON: &str = "application/json";

/// Client for podcast embed data and episode playlists
///
/// Every call performs at most one GET request and resolves exactly once.
/// The client keeps no state between calls, so it can be shared freely
/// between concurrent tasks.
pub struct EmbedClient<C: HttpClient = ReqwestClient> {
    http: C,
    reporter: SharedEventReporter,
}

impl EmbedClient {
    /// Create a client backed by a default reqwest client
    pub fn new() -> Self {
        Self::with_http_client(ReqwestClient::new())
    }
}

impl Default for EmbedClient {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: HttpClient> EmbedClient<C> {
    /// Create a client on top of a custom transport
    pub fn with_http_client(http: C) -> Self {
        Self {
            http,
            reporter: NoopReporter::shared(),
        }
    }

    /// Report request activity to `reporter`
    pub fn with_reporter(mut self, reporter: SharedEventReporter) -> Self {
        self.reporter = reporter;
        self
    }

    /// Fetch embed data for a podcast
    ///
    /// Contains the podcast and its most recent episode, or the episode at
    /// `episode_path` (e.g. `63-bbc-sound-sammlung`) when given.
    pub async fn fetch_embed(
        &self,
        domain: &str,
        episode_path: Option<&str>,
    ) -> Result<PodcastEmbed, EmbedError> {
        let url = embed_url(domain, episode_path)?;
        self.get_json(url).await
    }

    /// Fetch one page of a podcast's episode playlist
    ///
    /// Page size and offset are validated before any request is made.
    pub async fn fetch_playlist(
        &self,
        domain: &str,
        options: &PlaylistOptions,
    ) -> Result<Playlist, EmbedError> {
        let page_size = u64::try_from(options.page_size)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(EmbedError::InvalidPageSize(options.page_size))?;
        let offset =
            u64::try_from(options.offset).map_err(|_| EmbedError::InvalidOffset(options.offset))?;

        let url = playlist_url(domain, page_size, offset, options.sort_by)?;
        self.get_json(url).await
    }

    /// GET `url` and decode the body, whatever the status code
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, EmbedError> {
        self.reporter.report(ClientEvent::RequestStarting {
            url: url.to_string(),
        });

        let response = match self.http.get(&url, ACCEPT_JSON).await {
            Ok(response) => response,
            Err(e) => {
                self.reporter.report(ClientEvent::RequestFailed {
                    url: url.to_string(),
                    error: e.to_string(),
                });
                return Err(EmbedError::Transport {
                    url: url.to_string(),
                    source: e,
                });
            }
        };

        self.reporter.report(ClientEvent::ResponseReceived {
            url: url.to_string(),
            status: response.status,
            body_length: response.body.as_ref().map(|b| b.len()),
        });

        let body = response.body.ok_or_else(|| EmbedError::Unknown {
            url: url.to_string(),
        })?;

        serde_json::from_slice(&body).map_err(|e| EmbedError::DecodingFailed {
            url: url.to_string(),
            source: e,
        })
    }
}
