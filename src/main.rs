use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use playforge::{cli, config::Config, error};

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

    /// Expand a source playlist into a new playlist of recommendations
    Expand(ExpandOptions),

    /// Manage the log of generated playlists
    Records(RecordsOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ExpandOptions {
    /// Source playlist id or open.spotify.com URL
    #[clap(long)]
    playlist: String,

    /// Name of the playlist to create
    #[clap(long)]
    name: String,
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Manage the log of generated playlists",
    args_conflicts_with_subcommands = true
)]
pub struct RecordsOptions {
    /// Subcommands under `records` (e.g., `delete`, `rate`)
    #[command(subcommand)]
    pub command: Option<RecordsSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum RecordsSubcommand {
    /// Delete a recorded playlist
    Delete(DeleteOpts),

    /// Rate a recorded playlist
    Rate(RateOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteOpts {
    /// Record id
    id: i64,
}

#[derive(Parser, Debug, Clone)]
pub struct RateOpts {
    /// Record id
    id: i64,

    /// Rating between 0 and 10
    rating: i64,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let config = match Config::load().await {
        Ok(config) => Arc::new(config),
        Err(e) => error!("Cannot load environment. Err: {}", e),
    };

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => cli::auth(config).await,
        Command::Expand(opt) => cli::expand(config, &opt.playlist, &opt.name).await,
        Command::Records(opt) => match opt.command {
            Some(RecordsSubcommand::Delete(d)) => cli::delete_record(config, d.id).await,
            Some(RecordsSubcommand::Rate(r)) => cli::rate_record(config, r.id, r.rating).await,
            None => cli::list_records(config).await,
        },
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
