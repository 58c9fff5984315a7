use crate::cli::types::{Season, SortBy};
use serde::{Deserialize, Serialize};


/// Season-level valuation record from `GET /players?year=`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Player {
    pub name: String,
    pub team: String,
    /// Contract status (e.g. "Arb", "FA"); the backend sends `null` when unknown.
    #[serde(default)]
    pub status: Option<String>,
    pub year: Season,
    pub war: f64,
    pub base_value: f64,
    pub contract_value: f64,
    pub surplus_value: f64,
}

/// Envelope for the season listing; only `players` is kept.
#[derive(Deserialize)]
pub(crate) struct PlayersEnvelope {
    pub players: Vec<Player>,
}

/// Query parameters for a filtered player search.
///
/// Every field is optional. Absent fields are left out of the query string
/// entirely rather than sent empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerFilter {
    pub year: Option<Season>,
    pub team: Option<String>,
    pub position: Option<String>,
    pub sort_by: Option<SortBy>,
    pub search: Option<String>,
}

impl PlayerFilter {
    /// Key/value pairs for the query string, in backend parameter order.
    ///
    /// Empty strings and year 0 count as absent.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let non_empty = |v: &Option<String>| {
            v.as_deref()
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        };

        let mut pairs = Vec::new();
        if let Some(year) = self.year.filter(|y| y.as_u16() != 0) {
            pairs.push(("year", year.to_string()));
        }
        if let Some(team) = non_empty(&self.team) {
            pairs.push(("team", team));
        }
        if let Some(position) = non_empty(&self.position) {
            pairs.push(("position", position));
        }
        if let Some(sort_by) = self.sort_by {
            pairs.push(("sort_by", sort_by.as_str().to_string()));
        }
        if let Some(search) = non_empty(&self.search) {
            pairs.push(("search", search));
        }
        pairs
    }
}

/// Player row inside a filtered search result.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerSummary {
    pub name: String,
    pub team: String,
    pub position: String,
    pub war: f64,
    pub base_value: f64,
    pub contract_value: f64,
    pub surplus_value: f64,
}

/// Result set of `GET /players/?...`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerResponse {
    pub count: usize,
    #[serde(default)]
    pub players: Vec<PlayerSummary>,
}

/// Body of `POST /trades/analyze`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TradeRequest<'a> {
    pub team1_players: &'a [String],
    pub team2_players: &'a [String],
}

/// Backend comparison of two sides of a proposed trade.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TradeAnalysis {
    pub team1: TradeSide,
    pub team2: TradeSide,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TradeSide {
    pub total_value: f64,
    #[serde(default)]
    pub players: Vec<TradePlayer>,
}

/// One player's valuation inside a trade.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TradePlayer {
    pub name: String,
    pub team: String,
    /// Contract status; `None` when the backend has no status on file.
    #[serde(default)]
    pub status: Option<String>,
    pub total_surplus: f64,
    pub total_contract: f64,
    #[serde(default)]
    pub yearly_projections: Vec<TradeYear>,
}

/// A single projected season of a traded player.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TradeYear {
    pub year: Season,
    pub war: f64,
    pub base_value: f64,
    pub contract_value: f64,
    pub surplus_value: f64,
    #[serde(default)]
    pub status: Option<String>,
}

/// Multi-year projection detail from `GET /players/{name}/details`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerStats {
    pub name: String,
    pub team: String,
    pub position: String,
    #[serde(default)]
    pub projections: Vec<Projection>,
}

/// One projected season.
///
/// The backend projects a player as either a hitter or a pitcher for a given
/// year, so at most one of `hitting` / `pitching` is expected. This is not
/// checked; use [`Projection::role`] and handle `None`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Projection {
    pub year: Season,
    pub war: f64,
    pub value: ValueBreakdown,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hitting: Option<HittingMetrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitching: Option<PitchingMetrics>,
}

impl Projection {
    /// Which metrics record this projection carries, if any.
    ///
    /// Hitting wins if the backend ever sends both.
    pub fn role(&self) -> Option<ProjectionRole<'_>> {
        match (&self.hitting, &self.pitching) {
            (Some(hitting), _) => Some(ProjectionRole::Hitter(hitting)),
            (None, Some(pitching)) => Some(ProjectionRole::Pitcher(pitching)),
            (None, None) => None,
        }
    }
}

/// Borrowed view of a projection's metrics record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectionRole<'a> {
    Hitter(&'a HittingMetrics),
    Pitcher(&'a PitchingMetrics),
}

/// Dollar valuation for a projected season, in millions.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ValueBreakdown {
    pub base: f64,
    pub contract: f64,
    pub surplus: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct HittingMetrics {
    pub age: f64,
    pub bb_pct: f64,
    pub k_pct: f64,
    pub avg: f64,
    pub obp: f64,
    pub slg: f64,
    pub woba: f64,
    pub wrc_plus: f64,
    /// Average exit velocity
    pub ev: f64,
    /// Offensive runs above average
    pub off: f64,
    /// Base running runs
    pub bsr: f64,
    /// Defensive runs
    pub def: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PitchingMetrics {
    pub age: f64,
    pub fip: f64,
    pub siera: f64,
    pub k_pct: f64,
    pub bb_pct: f64,
    pub gb_pct: f64,
    pub fb_pct: f64,
    pub stuff_plus: f64,
    pub location_plus: f64,
    pub pitching_plus: f64,
    /// Fastball velocity
    pub fbv: f64,
}
