use std::{path::PathBuf, sync::Arc};

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotmood::{
    cli, config, error,
    mood::Mood,
    spotify::tracks::TimeRange,
    types::PkceToken,
    utils, warning,
};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Analyze the mood of a playlist
    Analyze(AnalyzeOptions),

    /// Create a playlist for a mood
    Create(CreateOptions),

    /// Plot valence and energy of your top tracks
    Visualize(VisualizeOptions),

    /// List the available moods and their profiles
    Moods,

    /// Connect, analyze, create a playlist and plot in one go
    Run(RunOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AnalyzeOptions {
    /// Playlist id to analyze (defaults to your first playlist)
    #[clap(long)]
    pub playlist: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CreateOptions {
    /// Mood of the playlist: happy, sad, energetic or calm
    #[clap(long, default_value = "happy", value_parser = utils::parse_mood)]
    pub mood: Mood,

    /// Create the playlist as private
    #[clap(long)]
    pub private: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct VisualizeOptions {
    /// Output file (defaults to MOOD_PLOT_PATH or mood_distribution.svg)
    #[clap(long)]
    pub output: Option<PathBuf>,

    /// Number of top tracks to plot (1-50)
    #[clap(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..=50))]
    pub limit: u32,

    /// Time range of the top tracks
    #[clap(long, value_enum, default_value_t = TimeRange::Medium)]
    pub time_range: TimeRange,
}

#[derive(Parser, Debug, Clone)]
pub struct RunOptions {
    /// Mood of the playlist to create
    #[clap(long, default_value = "happy", value_parser = utils::parse_mood)]
    pub mood: Mood,

    /// Create the playlist as private
    #[clap(long)]
    pub private: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            if let Err(e) = config::spotify_client_id() {
                error!("{}", e);
            }
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Analyze(opt) => cli::analyze(opt.playlist).await,
        Command::Create(opt) => cli::create(opt.mood, !opt.private).await,
        Command::Visualize(opt) => cli::visualize(opt.output, opt.limit, opt.time_range).await,
        Command::Moods => cli::moods(),
        Command::Run(opt) => cli::run(opt.mood, !opt.private).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
