//! Client for the player evaluation backend REST API.
//!
//! - `http`: request plumbing and the four endpoint operations
//! - `types`: typed response bodies

pub mod http;
pub mod types;

pub use http::{
    analyze_trade, filter_players, get_player_details, get_players, ApiClient, Operation,
    API_BASE,
};
pub use types::{
    HittingMetrics, PitchingMetrics, Player, PlayerFilter, PlayerResponse, PlayerStats,
    PlayerSummary, Projection, ProjectionRole, TradeAnalysis, TradePlayer, TradeRequest,
    TradeSide, TradeYear, ValueBreakdown,
};
