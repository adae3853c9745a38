pub mod client;
pub mod error;
pub mod event;
pub mod http;
pub mod model;
pub mod request;

// Re-export main types for convenience
pub use client::EmbedClient;
pub use error::{EmbedError, TransportError, UnknownSorting};
pub use event::{ClientEvent, EventReporter, NoopReporter, SharedEventReporter};
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use model::{
    Coverart, Episode, Media, Playlist, PlaylistOptions, PlaylistSorting, Podcast, PodcastEmbed,
};
pub use request::{embed_url, playlist_url};
