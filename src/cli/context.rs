//! Command execution context
//!
//! Loads configuration, restores the stored session and wires the
//! repositories so handlers only deal with domain calls.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

use agrohub::config::Config;
use agrohub::repository::Repositories;
use agrohub::session::TokenStore;

/// Context for command execution containing config, tokens and repositories.
pub struct CommandContext {
    pub config: Config,
    pub config_path: PathBuf,
    pub tokens: Arc<TokenStore>,
    pub repos: Repositories,
}

impl CommandContext {
    /// Load config (or defaults) and build the repositories.
    pub fn new(config_path: Option<&Path>, base_url_override: Option<&str>) -> anyhow::Result<Self> {
        let config_path = Config::resolve_path(config_path)?;
        let mut config = Config::load_at(&config_path)
            .with_context(|| format!("Failed to load {}", config_path.display()))?;

        if let Some(base_url) = base_url_override {
            config.base_url = base_url.to_string();
        }

        let tokens = Arc::new(TokenStore::with_session(config.session.clone()));
        let repos = Repositories::from_config(&config, tokens.clone())?;

        Ok(Self {
            config,
            config_path,
            tokens,
            repos,
        })
    }

    /// Like [`CommandContext::new`], refreshing an expired access token first.
    ///
    /// Commands still run without a session; the backend decides whether
    /// they need one.
    pub async fn authenticated(
        config_path: Option<&Path>,
        base_url_override: Option<&str>,
    ) -> anyhow::Result<Self> {
        let ctx = Self::new(config_path, base_url_override)?;

        if ctx.config.session.is_some() && !ctx.tokens.is_access_token_valid().await {
            log::info!("Access token expired, refreshing");
            let refreshed = ctx.repos.auth.refresh_token().await;
            // A failed refresh clears the session; persist either outcome.
            ctx.persist_session().await?;
            refreshed?;
        }

        Ok(ctx)
    }

    /// Write the current session back to the config file.
    ///
    /// The file is re-read so command-line overrides are not persisted.
    pub async fn persist_session(&self) -> anyhow::Result<()> {
        let mut config = Config::load_at(&self.config_path)?;
        config.session = self.tokens.session().await;
        config
            .save_to(&self.config_path)
            .with_context(|| format!("Failed to save {}", self.config_path.display()))?;
        Ok(())
    }
}
