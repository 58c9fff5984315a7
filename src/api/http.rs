use std::fmt;
use std::sync::LazyLock;

use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, info};

use super::types::{
    PlayerFilter, PlayerResponse, PlayerStats, Player, PlayersEnvelope, TradeAnalysis,
    TradeRequest,
};
use crate::{EvalError, Result, Season};


/// Base path of the player evaluation backend.
pub const API_BASE: &str = "http://localhost:8000/api";

static DEFAULT_CLIENT: LazyLock<ApiClient> = LazyLock::new(ApiClient::new);

/// The four backend calls, used to label failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    FetchPlayers,
    FilterPlayers,
    AnalyzeTrade,
    FetchPlayerDetails,
}

impl Operation {
    /// Fixed message surfaced to callers when the backend rejects the request.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::FetchPlayers | Operation::FilterPlayers => "Failed to fetch players",
            Operation::AnalyzeTrade => "Failed to analyze trade",
            Operation::FetchPlayerDetails => "Failed to fetch player details",
        }
    }

    /// Context attached to the diagnostic log line on any failure.
    pub fn log_context(&self) -> &'static str {
        match self {
            Operation::FetchPlayers | Operation::FilterPlayers => "Error fetching players",
            Operation::AnalyzeTrade => "Error analyzing trade",
            Operation::FetchPlayerDetails => "Error fetching player details",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.failure_message())
    }
}

/// Stateless client for the backend endpoints.
///
/// Each call is one request/response exchange: no retries, no caching.
/// Cloning is cheap and clones share the underlying connection handling.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Client bound to [`API_BASE`].
    pub fn new() -> Self {
        Self::with_base_url(API_BASE)
    }

    /// Client bound to another backend root, e.g. a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent(concat!("mlb-player-eval/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /players?year={year}`, unwrapped to the `players` array.
    pub async fn get_players(&self, year: Season) -> Result<Vec<Player>> {
        let query = [("year", year.to_string())];
        let envelope: PlayersEnvelope = self
            .request(
                Operation::FetchPlayers,
                Method::GET,
                &["players"],
                Some(&query[..]),
                None,
            )
            .await?;
        Ok(envelope.players)
    }

    /// `GET /players/?{query}` with only the filters that are set.
    pub async fn filter_players(&self, filters: &PlayerFilter) -> Result<PlayerResponse> {
        let query = filters.query_pairs();
        self.request(
            Operation::FilterPlayers,
            Method::GET,
            &["players", ""],
            Some(query.as_slice()),
            None,
        )
        .await
    }

    /// `POST /trades/analyze` comparing two lists of player names.
    pub async fn analyze_trade(
        &self,
        team1_players: &[String],
        team2_players: &[String],
    ) -> Result<TradeAnalysis> {
        let body = TradeRequest {
            team1_players,
            team2_players,
        };
        self.request(
            Operation::AnalyzeTrade,
            Method::POST,
            &["trades", "analyze"],
            None,
            Some(&body),
        )
        .await
    }

    /// `GET /players/{name}/details`; the name is percent-encoded as one path segment.
    pub async fn get_player_details(&self, player_name: &str) -> Result<PlayerStats> {
        info!("Fetching details for player: {player_name}");
        self.request(
            Operation::FetchPlayerDetails,
            Method::GET,
            &["players", player_name, "details"],
            None,
            None,
        )
        .await
    }

    /// Shared send/check/parse sequence. Every failure is logged with the
    /// operation's context and then returned unchanged.
    async fn request<T>(
        &self,
        operation: Operation,
        method: Method,
        path: &[&str],
        query: Option<&[(&'static str, String)]>,
        body: Option<&TradeRequest<'_>>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let result = self.execute(operation, method, path, query, body).await;
        if let Err(e) = &result {
            error!(?operation, error = %e, "{}", operation.log_context());
        }
        result
    }

    async fn execute<T>(
        &self,
        operation: Operation,
        method: Method,
        path: &[&str],
        query: Option<&[(&'static str, String)]>,
        body: Option<&TradeRequest<'_>>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path, query)?;
        debug!(%method, %url, "Sending API request");

        let mut builder = self.client.request(method, url);
        if let Some(body) = body {
            // Sets `Content-Type: application/json`.
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "API error: {status}");
            return Err(EvalError::Status { operation, status });
        }

        let bytes = response.bytes().await?;
        let raw: Value = serde_json::from_slice(&bytes)?;
        debug!(response = %raw, "API response");

        Ok(serde_json::from_value(raw)?)
    }

    /// Resolve path segments and query pairs against the base URL.
    ///
    /// Segments are percent-encoded individually, so a `/` inside a player
    /// name stays part of that segment. An empty trailing segment yields a
    /// trailing slash.
    fn endpoint(&self, path: &[&str], query: Option<&[(&'static str, String)]>) -> Result<Url> {
        let invalid = |message: String| EvalError::InvalidBaseUrl {
            url: self.base_url.clone(),
            message,
        };

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(path);

        if let Some(pairs) = query {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(url)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Season listing from the default backend. See [`ApiClient::get_players`].
pub async fn get_players(year: Season) -> Result<Vec<Player>> {
    DEFAULT_CLIENT.get_players(year).await
}

/// Filtered search against the default backend. See [`ApiClient::filter_players`].
pub async fn filter_players(filters: &PlayerFilter) -> Result<PlayerResponse> {
    DEFAULT_CLIENT.filter_players(filters).await
}

/// Trade analysis against the default backend. See [`ApiClient::analyze_trade`].
pub async fn analyze_trade(
    team1_players: &[String],
    team2_players: &[String],
) -> Result<TradeAnalysis> {
    DEFAULT_CLIENT.analyze_trade(team1_players, team2_players).await
}

/// Player details from the default backend. See [`ApiClient::get_player_details`].
pub async fn get_player_details(player_name: &str) -> Result<PlayerStats> {
    DEFAULT_CLIENT.get_player_details(player_name).await
}
