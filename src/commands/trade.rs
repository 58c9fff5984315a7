//! Trade analysis command

use crate::{
    api::{ApiClient, TradePlayer, TradeSide},
    Result,
};

use super::common::{format_money, format_status, print_json};

/// Text block for one side of a trade: a header, then each player and their
/// yearly projections indented beneath.
pub fn format_trade_side(label: &str, side: &TradeSide) -> Vec<String> {
    let mut lines = vec![format!(
        "{}: total value {} ({} players)",
        label,
        format_money(side.total_value),
        side.players.len()
    )];

    for player in &side.players {
        lines.push(format_trade_player(player));
        for year in &player.yearly_projections {
            lines.push(format!(
                "    {}{} WAR {:.1} base {} contract {} surplus {}",
                year.year,
                format_status(year.status.as_deref()),
                year.war,
                format_money(year.base_value),
                format_money(year.contract_value),
                format_money(year.surplus_value),
            ));
        }
    }

    lines
}

fn format_trade_player(player: &TradePlayer) -> String {
    format!(
        "  {} ({}){} surplus {} contract {}",
        player.name,
        player.team,
        format_status(player.status.as_deref()),
        format_money(player.total_surplus),
        format_money(player.total_contract),
    )
}

/// Handle the trade command
pub async fn handle_trade(
    client: &ApiClient,
    team1: &[String],
    team2: &[String],
    as_json: bool,
) -> Result<()> {
    let analysis = client.analyze_trade(team1, team2).await?;

    if as_json {
        return print_json(&analysis);
    }

    for line in format_trade_side("Team 1", &analysis.team1)
        .into_iter()
        .chain(format_trade_side("Team 2", &analysis.team2))
    {
        println!("{}", line); // tarpaulin::skip
    }

    Ok(())
}
