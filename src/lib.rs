//! MLB Player Evaluation Client Library
//!
//! Typed async client for the player evaluation backend, which computes
//! WAR-based valuations, surplus value, and trade analysis. This crate only
//! moves data: every call is a single request/response with no retries,
//! caching, or computation on the returned values.
//!
//! ## Features
//!
//! - **Season Listing**: Every player's valuation for a season
//! - **Filtered Search**: Query by year, team, position, or name, sorted by WAR or value
//! - **Player Details**: Multi-year projections with hitting or pitching metrics
//! - **Trade Analysis**: Backend comparison of two sides of a trade
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mlb_player_eval::{api::ApiClient, PlayerFilter, Season, SortBy};
//!
//! # async fn example() -> mlb_player_eval::Result<()> {
//! let client = ApiClient::new();
//!
//! let players = client.get_players(Season::new(2024)).await?;
//! println!("{} players", players.len());
//!
//! let filter = PlayerFilter {
//!     year: Some(Season::new(2024)),
//!     sort_by: Some(SortBy::War),
//!     ..Default::default()
//! };
//! let response = client.filter_players(&filter).await?;
//! println!("{} matches", response.count);
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! Failures are reported through `tracing` before being returned. The library
//! never installs a subscriber; the `mlb-eval` binary does.

pub mod api;
pub mod cli;
pub mod commands;
pub mod error;

// Re-export commonly used types
pub use api::{
    ApiClient, Player, PlayerFilter, PlayerResponse, PlayerStats, TradeAnalysis, API_BASE,
};
pub use cli::types::{Season, SortBy};
pub use error::{EvalError, Result};
