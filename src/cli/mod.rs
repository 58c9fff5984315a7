//! CLI argument definitions and parsing.

pub mod types;

use crate::api::{PlayerFilter, API_BASE};
use clap::{Args, Parser, Subcommand};
use types::{LogLevel, Season, SortBy};


/// Filters for a player search; any subset may be given.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Season year (e.g. 2024).
    #[clap(long, short)]
    pub year: Option<Season>,

    /// Team abbreviation (e.g. NYY).
    #[clap(long, short)]
    pub team: Option<String>,

    /// Position (e.g. SS, SP).
    #[clap(long, short)]
    pub position: Option<String>,

    /// Sort results by WAR or surplus value.
    #[clap(long, value_enum)]
    pub sort_by: Option<SortBy>,

    /// Player name search (substring match on the backend).
    #[clap(long, short = 'n')]
    pub search: Option<String>,
}

impl From<FilterArgs> for PlayerFilter {
    fn from(args: FilterArgs) -> Self {
        PlayerFilter {
            year: args.year,
            team: args.team,
            position: args.position,
            sort_by: args.sort_by,
            search: args.search,
        }
    }
}

#[derive(Debug, Parser)]
#[clap(name = "mlb-eval", about = "MLB player evaluation client")]
pub struct MlbEval {
    /// Backend API root.
    #[clap(long, global = true, default_value = API_BASE)]
    pub base_url: String,

    /// Log level (`RUST_LOG` takes precedence).
    #[clap(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List season-level valuations for every player.
    Players {
        /// Season year (e.g. 2024).
        #[clap(long, short, default_value_t = Season::default())]
        year: Season,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Search players by year, team, position, or name.
    Filter {
        #[clap(flatten)]
        filters: FilterArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Compare the value of two sides of a trade.
    ///
    /// Repeat the flag for each player: `--team1 "Juan Soto" --team2 "Jackson Holliday" --team2 "Colton Cowser"`.
    Trade {
        /// Player sent by the first team (repeatable).
        #[clap(long = "team1")]
        team1: Vec<String>,

        /// Player sent by the second team (repeatable).
        #[clap(long = "team2")]
        team2: Vec<String>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show multi-year projections for one player.
    Details {
        /// Full player name, e.g. "Ronald Acuña Jr.".
        name: String,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
