//! Filtered player search command

use crate::{
    api::{ApiClient, PlayerFilter, PlayerSummary},
    Result,
};

use super::common::{format_money, print_json};

pub fn format_summary_line(player: &PlayerSummary) -> String {
    format!(
        "{} ({}, {}) WAR {:.1} base {} contract {} surplus {}",
        player.name,
        player.team,
        player.position,
        player.war,
        format_money(player.base_value),
        format_money(player.contract_value),
        format_money(player.surplus_value),
    )
}

/// Handle the filter command
pub async fn handle_filter(client: &ApiClient, filters: &PlayerFilter, as_json: bool) -> Result<()> {
    let response = client.filter_players(filters).await?;

    if as_json {
        return print_json(&response);
    }

    println!("{} matching players", response.count);
    for player in &response.players {
        println!("{}", format_summary_line(player)); // tarpaulin::skip
    }

    Ok(())
}
