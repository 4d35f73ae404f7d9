//! Damage calculation
//!
//! ```text
//! raw     = 100 + Σ(multiplier × 20)
//! matched = |defender.weaknesses ∩ attacker.types|
//! damage  = round(raw × (1 + 1.1 × matched))
//! applied = min(damage, defender.health)
//! ```

use std::collections::HashSet;

use pokebattle_protocol::Type;

use crate::types::Combatant;

/// Damage of an attack before multipliers and weaknesses
pub const BASE_DAMAGE: f64 = 100.0;

/// Damage added per unit of attacker multiplier
pub const MULTIPLIER_WEIGHT: f64 = 20.0;

/// Fraction of raw damage added per matched weakness
pub const WEAKNESS_BONUS: f64 = 1.1;

/// Damage before weaknesses are taken into account
pub fn raw_damage(attacker: &Combatant) -> f64 {
    BASE_DAMAGE
        + attacker
            .multipliers
            .iter()
            .map(|m| m * MULTIPLIER_WEIGHT)
            .sum::<f64>()
}

/// Number of distinct attacker types the defender is weak to
pub fn matched_weaknesses(attacker: &Combatant, defender: &Combatant) -> usize {
    let attacking: HashSet<Type> = attacker.types.iter().copied().collect();
    let weaknesses: HashSet<Type> = defender.weaknesses.iter().copied().collect();
    attacking.intersection(&weaknesses).count()
}

/// Full damage of one attack, ignoring how much health the defender has left
pub fn damage(attacker: &Combatant, defender: &Combatant) -> u32 {
    let bonus = 1.0 + WEAKNESS_BONUS * matched_weaknesses(attacker, defender) as f64;
    (raw_damage(attacker) * bonus).round() as u32
}

/// Damage actually dealt: [`damage`] clamped to the defender's remaining health
pub fn calculate_damage(attacker: &Combatant, defender: &Combatant) -> u32 {
    damage(attacker, defender).min(defender.health)
}
