//! Battle sides

use serde::{Deserialize, Serialize};

/// Which roster a trainer fields. Home always attacks first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "homeTeam")]
    Home,
    #[serde(rename = "awayTeam")]
    Away,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Home, Side::Away];

    /// The side facing this one
    pub fn opponent(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Home => "homeTeam",
            Side::Away => "awayTeam",
        }
    }

    /// Human readable label, e.g. for log lines
    pub fn label(&self) -> &'static str {
        match self {
            Side::Home => "home team",
            Side::Away => "away team",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Side::Home.opponent(), Side::Away);
        assert_eq!(Side::Away.opponent(), Side::Home);
        assert_eq!(Side::Home.opponent().opponent(), Side::Home);
    }

    #[test]
    fn test_side_serde() {
        assert_eq!(serde_json::to_string(&Side::Home).unwrap(), "\"homeTeam\"");
        assert_eq!(
            serde_json::from_str::<Side>("\"awayTeam\"").unwrap(),
            Side::Away
        );
    }
}
