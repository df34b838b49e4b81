//! Status command implementation

use std::path::Path;

use chrono::Utc;
use colored::Colorize;

use agrohub::config::Config;

/// Display configuration and session status
pub fn run(config_path: Option<&Path>) -> anyhow::Result<()> {
    println!("{}\n", "AgroHub Status".bold());

    let path = Config::resolve_path(config_path)?;
    let exists = path.exists();
    let config = Config::load_at(&path)?;

    if exists {
        println!("Config file: {}", path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            path.display().to_string().cyan(),
            "(not created yet, using defaults)".dimmed()
        );
    }
    println!("Backend: {}", config.base_url);
    println!();

    match &config.session {
        Some(session) if session.is_expired() => {
            println!(
                "{} Session expired (will refresh on next command)",
                "⚠".yellow()
            );
        }
        Some(session) => {
            let remaining = session.expires_at.signed_duration_since(Utc::now());
            println!(
                "{} Signed in (token expires in {}h {}m)",
                "✓".green(),
                remaining.num_hours(),
                remaining.num_minutes() % 60
            );
        }
        None => {
            println!("{} Not signed in", "○".dimmed());
            println!("  → Run 'agrohub login <email-or-username>' to sign in");
        }
    }

    if config.weather.api_key.is_some() {
        println!("{} Weather API key configured", "✓".green());
    } else {
        println!("{} Weather API key not configured", "✗".red());
        println!("  → Set weather.api_key in the config file");
    }

    println!(
        "{} Cache: {} users / {}s, {} feed pages / {}s",
        "○".dimmed(),
        config.cache.users.max_entries,
        config.cache.users.ttl_secs,
        config.cache.feed.max_entries,
        config.cache.feed.ttl_secs
    );
    println!();

    Ok(())
}
