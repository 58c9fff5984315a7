//! Season player listing command

use crate::{api::ApiClient, api::Player, Result, Season};

use super::common::{format_money, format_status, print_json};

/// One text line per player.
pub fn format_player_line(player: &Player) -> String {
    format!(
        "{} ({}) {} WAR {:.1} base {} contract {} surplus {}{}",
        player.name,
        player.team,
        player.year,
        player.war,
        format_money(player.base_value),
        format_money(player.contract_value),
        format_money(player.surplus_value),
        format_status(player.status.as_deref()),
    )
}

/// Handle the players command
pub async fn handle_players(client: &ApiClient, year: Season, as_json: bool) -> Result<()> {
    let players = client.get_players(year).await?;

    if as_json {
        return print_json(&players);
    }

    println!("{} players for {}", players.len(), year);
    for player in &players {
        println!("{}", format_player_line(player)); // tarpaulin::skip
    }

    Ok(())
}
