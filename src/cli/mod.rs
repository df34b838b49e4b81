//! CLI command definitions and dispatch

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod context;
pub mod handlers;
pub mod status;

pub use context::CommandContext;

/// AgroHub CLI - browse the AgroHub community from the terminal
#[derive(Parser, Debug)]
#[command(name = "agrohub")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Override config file location
    #[arg(long, global = true, env = "AGROHUB_CONFIG", hide_env = true)]
    pub config: Option<PathBuf>,

    /// Override the backend base URL
    #[arg(long, global = true, env = "AGROHUB_BASE_URL", hide_env = true)]
    pub base_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "AGROHUB_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show configuration and session status
    Status,

    /// Sign in and store the session
    Login {
        /// Email address or username
        identifier: String,

        /// Account password
        #[arg(long, env = "AGROHUB_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the personalized feed
    Feed {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Look up user profiles
    #[command(subcommand)]
    User(UserCommands),

    /// Read posts
    #[command(subcommand)]
    Post(PostCommands),

    /// List comments on a post
    Comments {
        /// Post ID
        post_id: i64,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List notifications
    Notifications {
        /// Only unread notifications
        #[arg(long)]
        unread: bool,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Seven-day forecast for a location
    Weather {
        /// City name, postcode or "lat,lon"
        location: String,
    },
}

/// User lookup subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Show a user by ID
    Get {
        /// User ID
        id: i64,
    },

    /// Show the signed-in user
    Me,

    /// Search users by name or username
    Search {
        /// Search text
        query: String,

        #[command(flatten)]
        page: PageArgs,
    },
}

/// Post subcommands
#[derive(Subcommand, Debug)]
pub enum PostCommands {
    /// Show a post by ID
    Get {
        /// Post ID
        id: i64,
    },

    /// List a user's posts
    List {
        /// Author's user ID
        user_id: i64,

        #[command(flatten)]
        page: PageArgs,
    },
}

/// Shared pagination arguments for list commands
#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
    /// Page number (0-indexed)
    #[arg(long, short = 'p', default_value_t = 0)]
    pub page: u32,

    /// Results per page
    #[arg(long, short = 'n', default_value_t = 20)]
    pub size: u32,
}

/// Run the parsed command
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.as_deref();
    let base_url = cli.base_url.as_deref();

    match cli.command {
        Commands::Status => status::run(config_path),
        Commands::Login {
            identifier,
            password,
        } => handlers::login(&CommandContext::new(config_path, base_url)?, &identifier, &password).await,
        Commands::Logout => handlers::logout(&CommandContext::new(config_path, base_url)?).await,
        Commands::Feed { page } => {
            handlers::feed(&CommandContext::authenticated(config_path, base_url).await?, page).await
        }
        Commands::User(cmd) => {
            let ctx = CommandContext::authenticated(config_path, base_url).await?;
            match cmd {
                UserCommands::Get { id } => handlers::user_get(&ctx, id).await,
                UserCommands::Me => handlers::user_me(&ctx).await,
                UserCommands::Search { query, page } => {
                    handlers::user_search(&ctx, &query, page).await
                }
            }
        }
        Commands::Post(cmd) => {
            let ctx = CommandContext::authenticated(config_path, base_url).await?;
            match cmd {
                PostCommands::Get { id } => handlers::post_get(&ctx, id).await,
                PostCommands::List { user_id, page } => {
                    handlers::post_list(&ctx, user_id, page).await
                }
            }
        }
        Commands::Comments { post_id, page } => {
            let ctx = CommandContext::authenticated(config_path, base_url).await?;
            handlers::comments(&ctx, post_id, page).await
        }
        Commands::Notifications { unread, page } => {
            let ctx = CommandContext::authenticated(config_path, base_url).await?;
            handlers::notifications(&ctx, unread, page).await
        }
        Commands::Weather { location } => {
            handlers::weather(&CommandContext::new(config_path, base_url)?, &location).await
        }
    }
}
