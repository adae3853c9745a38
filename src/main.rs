use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use console::Emoji;
use html_escape::decode_html_entities;
use indicatif::{ProgressBar, ProgressStyle};

use podembed::{
    ClientEvent, EmbedClient, Episode, EventReporter, NoopReporter, Playlist, PlaylistOptions,
    PlaylistSorting, PodcastEmbed, ReqwestClient, SharedEventReporter,
};

// Emoji with fallback for terminals without Unicode support
static MICROPHONE: Emoji<'_, '_> = Emoji("🎙️  ", "");
static SEARCH: Emoji<'_, '_> = Emoji("🔍 ", "[~] ");
static HEADPHONES: Emoji<'_, '_> = Emoji("🎧 ", "[i] ");
static PICTURE: Emoji<'_, '_> = Emoji("🖼️  ", "[c] ");
static SPEAKER: Emoji<'_, '_> = Emoji("🔊 ", "[>] ");
static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
static EMPTY: Emoji<'_, '_> = Emoji("📭 ", "[-] ");

/// Show podcast embed data and episode playlists
#[derive(Parser, Debug)]
#[command(name = "podembed")]
#[command(about = "Show podcast embed data and episode playlists")]
#[command(version)]
struct Args {
    /// Domain of the podcast, e.g. bananaland.podigee.io
    domain: String,

    /// URL path of a specific episode, e.g. 63-bbc-sound-sammlung
    #[arg(short, long, conflicts_with = "playlist")]
    episode: Option<String>,

    /// Show a page of the episode playlist instead of a single episode
    #[arg(short, long)]
    playlist: bool,

    /// Number of episodes per playlist page
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    page_size: i64,

    /// Number of episodes to skip in the playlist
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    offset: i64,

    /// Playlist order
    #[arg(long, value_enum, default_value_t = SortOrder::Date)]
    sort: SortOrder,

    /// Width in pixels to request coverart for
    #[arg(short, long, default_value_t = 300)]
    width: u32,

    /// Print the decoded response as JSON
    #[arg(long)]
    json: bool,

    /// Quiet mode - suppress progress output
    #[arg(short, long)]
    quiet: bool,

    /// Request timeout in seconds
    #[arg(short, long, default_value_t = 30)]
    timeout: u64,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SortOrder {
    /// Most recently published first
    Date,
    /// Ascending episode number
    Number,
}

impl From<SortOrder> for PlaylistSorting {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Date => PlaylistSorting::PublishDate,
            SortOrder::Number => PlaylistSorting::EpisodeNumber,
        }
    }
}

/// Spinner shown while a request is in flight
struct SpinnerReporter {
    spinner: ProgressBar,
}

impl SpinnerReporter {
    fn new() -> Result<Self> {
        let style = ProgressStyle::default_spinner().template("{spinner:.green} {wide_msg}")?;
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        Ok(Self { spinner })
    }
}

impl EventReporter for SpinnerReporter {
    fn report(&self, event: ClientEvent) {
        match event {
            ClientEvent::RequestStarting { url } => {
                self.spinner.enable_steady_tick(Duration::from_millis(100));
                self.spinner
                    .set_message(format!("{SEARCH}Fetching {}", url.cyan()));
            }

            ClientEvent::ResponseReceived { status, .. } => {
                self.spinner.finish_and_clear();
                if status >= 400 {
                    eprintln!(
                        "{WARNING}{}",
                        format!("Server answered with HTTP {status}").yellow()
                    );
                }
            }

            ClientEvent::RequestFailed { .. } => {
                self.spinner.finish_and_clear();
            }
        }
    }
}

fn print_embed(embed: &PodcastEmbed, width: u32) {
    let podcast = &embed.podcast;
    println!(
        "\n{MICROPHONE}{}",
        decode_html_entities(&podcast.title).bold().magenta()
    );
    if let Some(author) = &podcast.author {
        println!("   {}", format!("by {}", decode_html_entities(author)).dimmed());
    }

    match &embed.episode {
        Some(episode) => print_episode(episode, width),
        None => println!("\n{EMPTY}{}", "No published episodes".yellow()),
    }
    println!();
}

fn print_episode(episode: &Episode, width: u32) {
    println!(
        "\n{HEADPHONES}{} {} {}",
        decode_html_entities(&episode.title).bold().green(),
        "•".dimmed(),
        episode.published_at.format("%Y-%m-%d").to_string().cyan()
    );
    if let Some(subtitle) = &episode.subtitle {
        println!("   {}", decode_html_entities(subtitle).dimmed());
    }
    if let Some(coverart) = episode.coverart_url_for(width) {
        println!("{PICTURE}{}", coverart.to_string().blue());
    }
    println!("{SPEAKER}{}", episode.media.playable_url().to_string().blue());
}

/// One-based position of the `index`-th episode on a page starting at `offset`
fn playlist_position(offset: i64, index: usize) -> i64 {
    let index = i64::try_from(index).unwrap_or(i64::MAX);
    offset.saturating_add(index).saturating_add(1)
}

fn print_playlist(domain: &str, playlist: &Playlist, options: &PlaylistOptions) {
    if playlist.is_empty() {
        println!(
            "\n{EMPTY}{} {}\n",
            domain.bold().magenta(),
            "- no episodes on this page".yellow()
        );
        return;
    }

    println!(
        "\n{MICROPHONE}{} {}",
        domain.bold().magenta(),
        format!(
            "- episodes {}-{} by {}",
            playlist_position(options.offset, 0),
            playlist_position(options.offset, playlist.len() - 1),
            options.sort_by
        )
        .dimmed()
    );

    println!();
    for (index, episode) in playlist.episodes.iter().enumerate() {
        let position = playlist_position(options.offset, index);
        println!(
            "  {} {}  {}",
            format!("[{position}]").cyan(),
            episode.published_at.format("%Y-%m-%d").to_string().dimmed(),
            decode_html_entities(&episode.title).bold()
        );
        println!(
            "      {}",
            episode.media.playable_url().to_string().blue()
        );
    }
    println!();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(args.timeout))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to create HTTP client")?;

    let reporter: SharedEventReporter = if args.quiet || args.json {
        NoopReporter::shared()
    } else {
        Arc::new(SpinnerReporter::new()?)
    };

    let client =
        EmbedClient::with_http_client(ReqwestClient::with_client(http)).with_reporter(reporter);

    if args.playlist {
        let options = PlaylistOptions {
            page_size: args.page_size,
            offset: args.offset,
            sort_by: args.sort.into(),
        };

        let playlist = client
            .fetch_playlist(&args.domain, &options)
            .await
            .with_context(|| format!("Failed to fetch playlist for {}", args.domain))?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&playlist)?);
        } else {
            print_playlist(&args.domain, &playlist, &options);
        }
    } else {
        let embed = client
            .fetch_embed(&args.domain, args.episode.as_deref())
            .await
            .with_context(|| format!("Failed to fetch embed data for {}", args.domain))?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&embed)?);
        } else {
            print_embed(&embed, args.width);
        }
    }

    Ok(())
}
