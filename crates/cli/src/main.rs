//! roomdeck CLI — the main entry point.
//!
//! Commands:
//! - `groups`   — Group a room feed into lobby cards
//! - `tile`     — Compute tile dimensions for a viewport
//! - `entries`  — Inspect how media entries render as tiles
//! - `nav`      — Show header and footer navigation
//! - `config`   — Show, validate or locate the configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "roomdeck",
    about = "roomdeck — conference lobby and media tile inspector",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Group a room feed (JSON) into lobby cards
    Groups {
        /// Path to the room feed
        file: PathBuf,

        /// Expand a collapsed group by slug (repeatable)
        #[arg(long = "expand", value_name = "SLUG")]
        expand: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Compute tile dimensions
    Tile {
        /// Viewport width in pixels
        #[arg(short, long)]
        width: u32,

        /// Size as an image result
        #[arg(long, requires = "aspect")]
        image: bool,

        /// Size as an avatar
        #[arg(long)]
        avatar: bool,

        /// Source width / height, for image results
        #[arg(long)]
        aspect: Option<f64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Inspect how a media feed (JSON) renders as tiles
    Entries {
        /// Path to the entry feed
        file: PathBuf,

        /// Viewport width in pixels
        #[arg(short, long, default_value_t = 1280)]
        width: u32,

        /// Listing the feed belongs to (avatars, scenes, rooms, ...)
        #[arg(long)]
        source: Option<String>,

        /// The page has no room-info handler
        #[arg(long)]
        no_info_handler: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show header and footer navigation
    Nav {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Validate the configuration file
    Validate,
    /// Print the configuration file path
    Path,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Groups { file, expand, json } => commands::groups::run(&file, &expand, json)?,
        Commands::Tile {
            width,
            image,
            avatar,
            aspect,
            json,
        } => commands::tile::run(width, image, avatar, aspect, json)?,
        Commands::Entries {
            file,
            width,
            source,
            no_info_handler,
            json,
        } => commands::entries::run(&file, width, source.as_deref(), !no_info_handler, json)?,
        Commands::Nav { json } => commands::nav::run(json)?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_cmd::show()?,
            ConfigAction::Validate => commands::config_cmd::validate()?,
            ConfigAction::Path => commands::config_cmd::path()?,
        },
    }

    Ok(())
}
