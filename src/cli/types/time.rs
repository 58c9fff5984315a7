//! Season year type shared by requests and responses.

use crate::error::{EvalError, Result};
use serde::{de::Error, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Season years.
///
/// The backend stores years in a float column, so deserialization accepts
/// both `2024` and `2024.0`. Anything non-integral is rejected.
///
/// # Examples
///
/// ```rust
/// use mlb_player_eval::Season;
///
/// let season: Season = serde_json::from_str("2024.0").unwrap();
/// assert_eq!(season, Season::new(2024));
/// assert_eq!(season.to_string(), "2024");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2024)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

impl<'de> Deserialize<'de> for Season {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;
        if raw.fract() != 0.0 || !(0.0..=f64::from(u16::MAX)).contains(&raw) {
            return Err(D::Error::custom(format!("invalid season year: {raw}")));
        }
        Ok(Self(raw as u16))
    }
}
