//! Output helpers shared across commands.

use serde::Serialize;

use crate::Result;

/// Print any response as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?); // tarpaulin::skip
    Ok(())
}

/// Dollar amount in millions, sign in front: `$12.5M`, `-$3.0M`.
pub fn format_money(millions: f64) -> String {
    if millions < 0.0 {
        format!("-${:.1}M", -millions)
    } else {
        format!("${:.1}M", millions)
    }
}

/// Bracketed status suffix (` [Arb]`), or nothing when the status is unknown.
pub fn format_status(status: Option<&str>) -> String {
    status.map(|s| format!(" [{}]", s)).unwrap_or_default()
}
