//! Pokemon type enumeration

use serde::{Deserialize, Serialize};

/// Creature type, used both as an attacking type and as a weakness.
///
/// Variants are declared in the order validation messages list them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Grass,
    Poison,
    Fire,
    Fairy,
    Flying,
    Water,
    Bug,
    Normal,
    Electric,
    Ground,
    Fighting,
    Psychic,
    Rock,
    Ice,
    Ghost,
    Dragon,
    Dark,
    Steel,
}

impl Type {
    /// Every type, in message order
    pub const ALL: [Type; 18] = [
        Type::Grass,
        Type::Poison,
        Type::Fire,
        Type::Fairy,
        Type::Flying,
        Type::Water,
        Type::Bug,
        Type::Normal,
        Type::Electric,
        Type::Ground,
        Type::Fighting,
        Type::Psychic,
        Type::Rock,
        Type::Ice,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
    ];

    /// [`Type::ALL`] as a slice
    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Parse a roster type name. Matching is exact, so `"fire"` is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }

    /// Name as written in rosters and catalog records
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Grass => "Grass",
            Type::Poison => "Poison",
            Type::Fire => "Fire",
            Type::Fairy => "Fairy",
            Type::Flying => "Flying",
            Type::Water => "Water",
            Type::Bug => "Bug",
            Type::Normal => "Normal",
            Type::Electric => "Electric",
            Type::Ground => "Ground",
            Type::Fighting => "Fighting",
            Type::Psychic => "Psychic",
            Type::Rock => "Rock",
            Type::Ice => "Ice",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
        }
    }

    /// All type names joined with `", "`, as listed in validation messages
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(Type::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
