//! Player projection details command

use crate::{
    api::{ApiClient, Projection, ProjectionRole},
    Result,
};

use super::common::{format_money, print_json};

/// One line per projected season, followed by the hitter or pitcher
/// metrics that the backend sent (if any).
pub fn format_projection_line(projection: &Projection) -> String {
    let value = &projection.value;
    let head = format!(
        "{} WAR {:.1} base {} contract {} surplus {}",
        projection.year,
        projection.war,
        format_money(value.base),
        format_money(value.contract),
        format_money(value.surplus),
    );

    match projection.role() {
        Some(ProjectionRole::Hitter(h)) => format!(
            "{} | age {:.0} AVG {:.3} OBP {:.3} SLG {:.3} wOBA {:.3} wRC+ {:.0} BB% {:.1} K% {:.1}",
            head, h.age, h.avg, h.obp, h.slg, h.woba, h.wrc_plus, h.bb_pct, h.k_pct
        ),
        Some(ProjectionRole::Pitcher(p)) => format!(
            "{} | age {:.0} FIP {:.2} SIERA {:.2} K% {:.1} BB% {:.1} Stuff+ {:.0} FBv {:.1}",
            head, p.age, p.fip, p.siera, p.k_pct, p.bb_pct, p.stuff_plus, p.fbv
        ),
        None => head,
    }
}

/// Handle the details command
pub async fn handle_details(client: &ApiClient, name: &str, as_json: bool) -> Result<()> {
    let stats = client.get_player_details(name).await?;

    if as_json {
        return print_json(&stats);
    }

    println!("{} ({}, {})", stats.name, stats.team, stats.position);
    for projection in &stats.projections {
        println!("  {}", format_projection_line(projection)); // tarpaulin::skip
    }

    Ok(())
}
