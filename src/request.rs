// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use url::{Host, Url};

use crate::error::EmbedError;
use crate::model::PlaylistSorting;

/// Start an `https` URL with `domain` as its host
fn base_url(domain: &str) -> Result<Url, EmbedError> {
    let invalid = |source| EmbedError::InvalidDomain {
        domain: domain.to_string(),
        source,
    };

    let host = Host::parse(domain).map_err(invalid)?;
    // Shorthand like `1.2.3` parses but serializes as a different address
    if matches!(host, Host::Ipv4(_)) && host.to_string() != domain {
        return Err(invalid(url::ParseError::InvalidIpv4Address));
    }
    let mut url = Url::parse(&format!("https://{host}/")).map_err(invalid)?;
    url.query_pairs_mut().append_pair("context", "external");
    Ok(url)
}

/// Build the embed URL for a podcast, optionally for a specific episode
///
/// `https://{domain}/embed?context=external` or
/// `https://{domain}/{episode_path}/embed?context=external`.
pub fn embed_url(domain: &str, episode_path: Option<&str>) -> Result<Url, EmbedError> {
    let mut url = base_url(domain)?;

    // https URLs always have path segments
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty();
        if let Some(path) = episode_path {
            segments.extend(path.split('/').filter(|s| !s.is_empty()));
        }
        segments.push("embed");
    }

    Ok(url)
}

/// Build the URL for one page of a podcast's episode playlist
pub fn playlist_url(
    domain: &str,
    page_size: u64,
    offset: u64,
    sort_by: PlaylistSorting,
) -> Result<Url, EmbedError> {
    let mut url = base_url(domain)?;
    url.set_path("/embed/playlist");
    url.query_pairs_mut()
        .append_pair("page_size", &page_size.to_string())
        .append_pair("offset", &offset.to_string())
        .append_pair("playlist_order", sort_by.as_str());
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_url_for_latest_episode() {
        let url = embed_url("bananaland.podigee.io", None).unwrap();

        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("bananaland.podigee.io"));
        assert_eq!(url.path(), "/embed");
        assert_eq!(url.query(), Some("context=external"));
    }

    #[test]
    fn embed_url_puts_episode_path_before_embed() {
        let url = embed_url("bananaland.podigee.io", Some("63-bbc-sound-sammlung")).unwrap();

        assert_eq!(
            url.as_str(),
            "https://bananaland.podigee.io/63-bbc-sound-sammlung/embed?context=external"
        );
    }

    #[test]
    fn embed_url_splits_nested_episode_paths() {
        let url = embed_url("example.com", Some("/season-2/ep-3/")).unwrap();
        assert_eq!(url.path(), "/season-2/ep-3/embed");
    }

    #[test]
    fn embed_url_treats_empty_episode_path_as_absent() {
        let url = embed_url("example.com", Some("")).unwrap();
        assert_eq!(url.path(), "/embed");
    }

    #[test]
    fn embed_url_encodes_unsafe_segment_characters() {
        let url = embed_url("example.com", Some("a b?c")).unwrap();
        assert_eq!(url.path(), "/a%20b%3Fc/embed");
        assert_eq!(url.query(), Some("context=external"));
    }

    #[test]
    fn playlist_url_has_stable_query_order() {
        let url = playlist_url("x.example.com", 5, 20, PlaylistSorting::EpisodeNumber).unwrap();

        assert_eq!(
            url.as_str(),
            "https://x.example.com/embed/playlist?context=external&page_size=5&offset=20&playlist_order=numeric"
        );

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("context".to_string(), "external".to_string()),
                ("page_size".to_string(), "5".to_string()),
                ("offset".to_string(), "20".to_string()),
                ("playlist_order".to_string(), "numeric".to_string()),
            ]
        );
    }

    #[test]
    fn playlist_url_uses_default_order_token() {
        let url = playlist_url("x.example.com", 10, 0, PlaylistSorting::PublishDate).unwrap();
        assert!(url.as_str().ends_with("playlist_order=default"));
    }

    #[test]
    fn domain_names_are_lowercased() {
        let url = embed_url("Podcast-News.Podigee.io", None).unwrap();
        assert_eq!(url.host_str(), Some("podcast-news.podigee.io"));
    }

    #[test]
    fn ipv4_hosts_must_be_written_in_full() {
        let url = embed_url("192.168.1.20", None).unwrap();
        assert_eq!(url.host_str(), Some("192.168.1.20"));

        for domain in ["1.2.3", "0x7f.1", "127.000.0.1"] {
            match embed_url(domain, None) {
                Err(EmbedError::InvalidDomain { source, .. }) => {
                    assert_eq!(source, url::ParseError::InvalidIpv4Address)
                }
                other => panic!("Expected InvalidDomain for {domain:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn invalid_domains_are_rejected() {
        for domain in ["", "has space.com", "evil.com/path", "host:8080", "a#b"] {
            match embed_url(domain, None) {
                Err(EmbedError::InvalidDomain { domain: d, .. }) => assert_eq!(d, domain),
                other => panic!("Expected InvalidDomain for {domain:?}, got {other:?}"),
            }
            assert!(matches!(
                playlist_url(domain, 10, 0, PlaylistSorting::PublishDate),
                Err(EmbedError::InvalidDomain { .. })
            ));
        }
    }
}
