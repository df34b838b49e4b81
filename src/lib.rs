//! AgroHub data-access layer
//!
//! Mediates between caller state and the AgroHub backend. Every operation
//! returns [`error::Result`], built on two shared pieces:
//! - [`cache::BoundedTtlCache`] - bounded, time-boxed in-memory cache
//! - [`classify::classify`] - total mapping from transport failures to [`error::AppError`]
//!
//! The nine repositories in [`repository`] compose both with a [`transport::Transport`].

pub mod api;
pub mod cache;
pub mod classify;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod session;
pub mod transport;

pub use error::{AppError, ConfigError, Result, TransportFailure};
