//! Lookup tables for resolving trainers, sides and combatants

use std::collections::HashMap;

use pokebattle_protocol::{Side, Trainer};

use crate::types::Combatant;

/// Owns every combatant of a battle and indexes it three ways:
/// trainer name → side, side → combatant ids (roster order), id → combatant.
///
/// Entries are added per team registration and never rebuilt.
#[derive(Debug, Clone, Default)]
pub struct LookupIndex {
    sides_by_trainer: HashMap<String, Side>,
    trainers: HashMap<Side, Trainer>,
    team_ids: HashMap<Side, Vec<String>>,
    combatants: HashMap<String, Combatant>,
}

impl LookupIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index one side's trainer and combatants. Does not validate.
    pub fn register_team(&mut self, side: Side, trainer: Trainer, combatants: Vec<Combatant>) {
        self.sides_by_trainer.insert(trainer.name.clone(), side);
        self.trainers.insert(side, trainer);

        let ids = combatants.iter().map(|c| c.id.clone()).collect();
        self.team_ids.insert(side, ids);

        for combatant in combatants {
            self.combatants.insert(combatant.id.clone(), combatant);
        }
    }

    /// Check if a side has been registered
    pub fn has_side(&self, side: Side) -> bool {
        self.trainers.contains_key(&side)
    }

    pub fn side_of(&self, trainer_name: &str) -> Option<Side> {
        self.sides_by_trainer.get(trainer_name).copied()
    }

    pub fn trainer(&self, side: Side) -> Option<&Trainer> {
        self.trainers.get(&side)
    }

    pub fn combatant(&self, id: &str) -> Option<&Combatant> {
        self.combatants.get(id)
    }

    pub fn combatant_mut(&mut self, id: &str) -> Option<&mut Combatant> {
        self.combatants.get_mut(id)
    }

    /// Combatants of a side in roster order (empty if the side is not registered)
    pub fn team(&self, side: Side) -> impl Iterator<Item = &Combatant> {
        self.team_ids
            .get(&side)
            .into_iter()
            .flatten()
            .filter_map(|id| self.combatants.get(id))
    }

    /// Owned copy of a side's combatants, for event payloads
    pub fn team_snapshot(&self, side: Side) -> Vec<Combatant> {
        self.team(side).cloned().collect()
    }

    /// The side's active pokemon: the first in roster order with health left
    pub fn first_alive(&self, side: Side) -> Option<&Combatant> {
        self.team(side).find(|c| c.is_alive())
    }

    /// Sum of remaining health on a side
    pub fn side_health(&self, side: Side) -> u32 {
        self.team(side).map(|c| c.health).sum()
    }

    pub fn alive_count(&self, side: Side) -> usize {
        self.team(side).filter(|c| c.is_alive()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokebattle_protocol::{RosterPokemon, Type};

    fn team(side: Side, trainer: &str) -> Vec<Combatant> {
        ["Bulbasaur", "Ivysaur", "Venusaur"]
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let pokemon =
                    RosterPokemon::new(i as u16 + 1, vec![Type::Grass]).with_name(*name);
                Combatant::from_roster(format!("{trainer}-{i}"), &pokemon, side, trainer)
            })
            .collect()
    }

    fn index() -> LookupIndex {
        let mut index = LookupIndex::new();
        index.register_team(Side::Home, Trainer::new("Ash"), team(Side::Home, "Ash"));
        index.register_team(Side::Away, Trainer::new("Gary"), team(Side::Away, "Gary"));
        index
    }

    #[test]
    fn test_side_of() {
        let index = index();
        assert_eq!(index.side_of("Ash"), Some(Side::Home));
        assert_eq!(index.side_of("Gary"), Some(Side::Away));
        assert_eq!(index.side_of("Misty"), None);
    }

    #[test]
    fn test_has_side() {
        let mut index = LookupIndex::new();
        assert!(!index.has_side(Side::Home));

        index.register_team(Side::Home, Trainer::new("Ash"), team(Side::Home, "Ash"));
        assert!(index.has_side(Side::Home));
        assert!(!index.has_side(Side::Away));
        assert_eq!(index.team(Side::Away).count(), 0);
    }

    #[test]
    fn test_team_keeps_roster_order() {
        let index = index();
        let names: Vec<&str> = index.team(Side::Home).map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bulbasaur", "Ivysaur", "Venusaur"]);
    }

    #[test]
    fn test_first_alive_skips_fainted() {
        let mut index = index();
        assert_eq!(index.first_alive(Side::Away).map(|c| c.id.as_str()), Some("Gary-0"));

        index.combatant_mut("Gary-0").unwrap().health = 0;
        assert_eq!(index.first_alive(Side::Away).map(|c| c.id.as_str()), Some("Gary-1"));
        assert_eq!(index.alive_count(Side::Away), 2);

        index.combatant_mut("Gary-1").unwrap().health = 0;
        index.combatant_mut("Gary-2").unwrap().health = 0;
        assert!(index.first_alive(Side::Away).is_none());
        assert_eq!(index.side_health(Side::Away), 0);
    }

    #[test]
    fn test_side_health() {
        let mut index = index();
        assert_eq!(index.side_health(Side::Home), 3000);

        index.combatant_mut("Ash-2").unwrap().take_damage(250);
        assert_eq!(index.side_health(Side::Home), 2750);
    }

    #[test]
    fn test_team_snapshot_is_detached() {
        let mut index = index();
        let snapshot = index.team_snapshot(Side::Home);

        index.combatant_mut("Ash-0").unwrap().health = 1;
        assert_eq!(snapshot[0].health, 1000);
    }
}
