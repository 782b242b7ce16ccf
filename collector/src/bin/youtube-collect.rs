use clap::{Parser, Subcommand, ValueEnum};
use eyre::Context;
use std::io::{IsTerminal, Write};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use youtube_data_collector::{
    Record, Table, YouTubeClient, get_channel_info, get_playlist_info, get_video_comments,
    get_video_details,
};

/// Fetch YouTube metadata and print it as a table.
#[derive(Parser, Debug)]
#[command(name = "youtube-collect", version, about, long_about = None)]
struct Args {
    /// YouTube Data API key.
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Statistics and uploads playlist of channels.
    Channels {
        #[arg(required = true)]
        channel_ids: Vec<String>,
    },
    /// Every video in the given playlists.
    Playlists {
        #[arg(required = true)]
        playlist_ids: Vec<String>,
    },
    /// Details and statistics of videos.
    Videos {
        #[arg(required = true)]
        video_ids: Vec<String>,
    },
    /// Top-level comments on videos.
    Comments {
        #[arg(required = true)]
        video_ids: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Json,
}

fn emit<R: Record>(table: &Table<R>, format: Format) -> eyre::Result<()> {
    let mut stdout = std::io::stdout().lock();
    match format {
        Format::Csv => table.write_csv(&mut stdout)?,
        Format::Json => {
            table.write_json(&mut stdout)?;
            writeln!(stdout).context("write to stdout")?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // A missing .env is fine; the key may come from the flag or the real environment.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let args = Args::parse();
    let yt = YouTubeClient::new(args.api_key, reqwest::Client::new());

    match args.command {
        Command::Channels { channel_ids } => {
            let table = get_channel_info(&yt, &channel_ids)
                .await
                .context("collect channels")?;
            emit(&table, args.format)
        }
        Command::Playlists { playlist_ids } => {
            let table = get_playlist_info(&yt, &playlist_ids)
                .await
                .context("collect playlist items")?;
            emit(&table, args.format)
        }
        Command::Videos { video_ids } => {
            let table = get_video_details(&yt, &video_ids)
                .await
                .context("collect videos")?;
            emit(&table, args.format)
        }
        Command::Comments { video_ids } => {
            let table = get_video_comments(&yt, &video_ids)
                .await
                .context("collect comments")?;
            emit(&table, args.format)
        }
    }
}
