// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use url::Url;

/// Placeholder replaced by the requested pixel width in coverart templates
const WIDTH_PLACEHOLDER: &str = "{width}";

/// A single podcast episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    /// Duration in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    /// Web page of the episode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,
    /// ISO-8601 publish timestamp
    pub published_at: DateTime<FixedOffset>,
    pub media: Media,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverart: Option<Coverart>,
}

impl Episode {
    /// URL of the coverart image for a view `width` pixels wide
    ///
    /// Returns `None` when the episode has no coverart.
    pub fn coverart_url_for(&self, width: u32) -> Option<Url> {
        self.coverart.as_ref().and_then(|c| c.url_for(width))
    }
}

/// Audio files of an episode, one per encoding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub mp3: Url,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub m4a: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ogg: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opus: Option<Url>,
}

impl Media {
    /// The audio URL every player can handle
    pub fn playable_url(&self) -> &Url {
        &self.mp3
    }

    /// All available audio URLs, most compatible first
    pub fn urls(&self) -> Vec<&Url> {
        std::iter::once(&self.mp3)
            .chain(self.m4a.as_ref())
            .chain(self.opus.as_ref())
            .chain(self.ogg.as_ref())
            .collect()
    }
}

/// Episode artwork that can be requested at different pixel widths.
///
/// On the wire this is either a URL template containing `{width}` (a plain
/// URL is a template without a placeholder) or an object mapping widths to
/// pre-sized image URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoverart", into = "RawCoverart")]
pub struct Coverart {
    source: CoverartSource,
}

#[derive(Debug, Clone, PartialEq)]
enum CoverartSource {
    Template(String),
    /// Never empty
    Sized(BTreeMap<u32, Url>),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawCoverart {
    Template(String),
    Sized(BTreeMap<String, Url>),
}

impl Coverart {
    /// Coverart URL for the requested width.
    ///
    /// Templates get the width substituted. Pre-sized variants resolve to the
    /// smallest image at least `width` wide, or the largest one when none is
    /// wide enough. A width of 0 is treated as 1.
    pub fn url_for(&self, width: u32) -> Option<Url> {
        let width = width.max(1);
        match &self.source {
            CoverartSource::Template(template) => render_template(template, width).ok(),
            CoverartSource::Sized(variants) => variants
                .range(width..)
                .next()
                .or_else(|| variants.iter().next_back())
                .map(|(_, url)| url.clone()),
        }
    }
}

fn render_template(template: &str, width: u32) -> Result<Url, url::ParseError> {
    Url::parse(&template.replace(WIDTH_PLACEHOLDER, &width.to_string()))
}

impl TryFrom<RawCoverart> for Coverart {
    type Error = String;

    fn try_from(raw: RawCoverart) -> Result<Self, Self::Error> {
        let source = match raw {
            RawCoverart::Template(template) => {
                // Both extremes must render so every width in between does too
                for width in [1, u32::MAX] {
                    render_template(&template, width).map_err(|e| {
                        format!("invalid coverart template '{template}': {e}")
                    })?;
                }
                CoverartSource::Template(template)
            }
            RawCoverart::Sized(variants) => {
                let variants = variants
                    .into_iter()
                    .map(|(width, url)| {
                        width
                            .parse::<u32>()
                            .map(|w| (w, url))
                            .map_err(|_| format!("invalid coverart width '{width}'"))
                    })
                    .collect::<Result<BTreeMap<_, _>, _>>()?;
                if variants.is_empty() {
                    return Err("coverart has no sizes".to_string());
                }
                CoverartSource::Sized(variants)
            }
        };
        Ok(Self { source })
    }
}

impl From<Coverart> for RawCoverart {
    fn from(coverart: Coverart) -> Self {
        match coverart.source {
            CoverartSource::Template(template) => RawCoverart::Template(template),
            CoverartSource::Sized(variants) => RawCoverart::Sized(
                variants
                    .into_iter()
                    .map(|(width, url)| (width.to_string(), url))
                    .collect(),
            ),
        }
    }
}
