mod episode;
mod playlist;
mod podcast;

pub use episode::{Coverart, Episode, Media};
pub use playlist::{Playlist, PlaylistOptions, PlaylistSorting};
pub use podcast::{Podcast, PodcastEmbed};
