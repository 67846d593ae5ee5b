//! Command line client for the Arena API.
//!
//! Prints fully aggregated entities as pretty JSON on stdout; logs go to
//! stderr.
//!
//! # Usage
//!
//! ```bash
//! export ARENA_API_URL="http://localhost:8080/api"
//!
//! arena tournament 2
//! arena registration 7
//! arena tournaments --game Chess --page 1
//! arena registrations --user uid-3
//! arena games --mode 1v1
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use arena_client::application::services::AccountService;
use arena_client::client::ArenaClient;
use arena_client::config::{self, Config};
use arena_client::infrastructure::identity::AnonymousIdentity;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Browse tournaments, registrations, games and users.
#[derive(Parser)]
#[command(name = "arena")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a tournament with its game and admin
    Tournament { id: i64 },

    /// Show a registration with its user and tournament
    Registration { id: i64 },

    /// Show a user's public profile
    User { id: String },

    /// Show a game
    Game { name: String },

    /// List games
    Games {
        #[command(flatten)]
        filter: GameFilter,

        #[arg(short, long, default_value_t = 0)]
        page: u32,
    },

    /// List tournaments
    Tournaments {
        #[command(flatten)]
        filter: TournamentFilter,

        /// Restrict a --title search to one game id
        #[arg(long, requires = "title")]
        game_id: Option<String>,

        #[arg(short, long, default_value_t = 0)]
        page: u32,
    },

    /// List registrations of a tournament or of a user
    Registrations {
        #[command(flatten)]
        filter: RegistrationFilter,

        #[arg(short, long, default_value_t = 0)]
        page: u32,
    },

    /// Show the signed-in user
    Whoami,
}

#[derive(Args)]
#[group(multiple = false)]
struct GameFilter {
    /// Games offering this mode
    #[arg(long)]
    mode: Option<String>,

    /// Games whose name contains this text
    #[arg(long)]
    name: Option<String>,

    /// Games matched by the API's name search
    #[arg(long)]
    search: Option<String>,
}

#[derive(Args)]
#[group(multiple = false)]
struct TournamentFilter {
    /// Featured tournaments
    #[arg(long)]
    showcase: bool,

    /// Tournaments of a game, by name
    #[arg(long)]
    game: Option<String>,

    #[arg(long)]
    mode: Option<String>,

    /// Tournaments administered by a user id
    #[arg(long)]
    user: Option<String>,

    /// Tournaments whose title contains this text
    #[arg(long)]
    title: Option<String>,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct RegistrationFilter {
    /// Registrations of a tournament id
    #[arg(long)]
    tournament: Option<i64>,

    /// Registrations of a user id
    #[arg(long)]
    user: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    init_tracing(&config)?;
    config.print_summary();

    let client = ArenaClient::from_config(&config)?;

    if let Err(e) = run(cli.command, &client).await {
        tracing::warn!("Request failed: {e:#}");
        return Err(e);
    }

    Ok(())
}

fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("RUST_LOG is not a valid filter: '{}'", config.log_level))?;

    if config.is_json_logging() {
        tracing_subscriber::fmt()
            .with_ansi(false)
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .flatten_event(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}

/// Dispatches one command and prints its result.
async fn run(command: Commands, client: &ArenaClient) -> Result<()> {
    match command {
        Commands::Tournament { id } => print(&client.tournaments.get_tournament_by_id(id).await?),
        Commands::Registration { id } => {
            print(&client.registrations.get_registration_by_id(id).await?)
        }
        Commands::User { id } => print(&client.users.get_user_by_id(&id).await?),
        Commands::Game { name } => print(&client.games.get_game_by_name(&name).await?),
        Commands::Games { filter, page } => {
            let games = &client.games;
            let result = match filter {
                GameFilter { mode: Some(mode), .. } => games.get_games_by_mode(&mode, page).await,
                GameFilter { name: Some(name), .. } => {
                    games.get_games_containing_name(&name, page).await
                }
                GameFilter { search: Some(name), .. } => games.search_games_by_name(&name, page).await,
                _ => games.get_all_games(page).await,
            };
            print(&result?)
        }
        Commands::Tournaments {
            filter,
            game_id,
            page,
        } => {
            let tournaments = &client.tournaments;
            let result = match filter {
                TournamentFilter { showcase: true, .. } => {
                    tournaments.get_showcase_tournaments(page).await
                }
                TournamentFilter { game: Some(game), .. } => {
                    tournaments.get_tournaments_by_game(&game, page).await
                }
                TournamentFilter { mode: Some(mode), .. } => {
                    tournaments.get_tournaments_by_mode(&mode, page).await
                }
                TournamentFilter { user: Some(user), .. } => {
                    tournaments.get_tournaments_by_user(&user, page).await
                }
                TournamentFilter { title: Some(title), .. } => match game_id {
                    Some(game_id) => {
                        tournaments
                            .search_tournaments(&title, page, Some(&game_id))
                            .await
                    }
                    None => tournaments.get_tournaments_containing_title(&title, page).await,
                },
                _ => tournaments.get_showcase_tournaments(page).await,
            };
            print(&result?)
        }
        Commands::Registrations { filter, page } => {
            let registrations = &client.registrations;
            let result = match (filter.tournament, filter.user) {
                (Some(id), _) => registrations.get_registrations_by_tournament(id, page).await,
                (None, Some(user)) => registrations.get_registrations_by_user(&user, page).await,
                (None, None) => anyhow::bail!("either --tournament or --user is required"),
            };
            print(&result?)
        }
        Commands::Whoami => {
            let identity = Arc::new(AnonymousIdentity::new());
            let account = AccountService::new(identity.clone(), identity);
            print(&account.get_current_user().await?)
        }
    }
}

fn print<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
