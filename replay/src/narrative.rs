//! Human readable battle log

use pokebattle_battle::{BattleEvent, BattleSnapshot, Combatant, EventEnvelope};
use pokebattle_protocol::Side;

/// Log lines for one recorded event
pub fn narrate(envelope: &EventEnvelope) -> Vec<String> {
    match envelope.event() {
        BattleEvent::TeamJoined(joined) => vec![format!(
            "{} joined as the {} with {}",
            joined.trainer.name,
            joined.side.label(),
            join_names(&joined.pokemons)
        )],
        BattleEvent::Started(snapshot) => {
            let mut lines = vec!["The battle has started".to_string()];
            for side in Side::BOTH {
                if let Some(active) = first_alive(snapshot, side) {
                    lines.push(format!("{} sends out {}", active.trainer_name, active.name));
                }
            }
            lines
        }
        BattleEvent::Attacked(attacked) => {
            let attacker = &attacked.attacked_by_pokemon;
            let defender = &attacked.attacked_pokemon;

            let mut lines = vec![format!(
                "{}'s {} attacks {}'s {} for {} damage ({} health left)",
                attacker.trainer_name,
                attacker.name,
                defender.trainer_name,
                defender.name,
                attacked.damage,
                defender.health
            )];
            if attacked.is_knockout() {
                lines.push(format!("{}'s {} fainted", defender.trainer_name, defender.name));
            }
            lines
        }
        BattleEvent::Ended(snapshot) => {
            let winner = Side::BOTH
                .into_iter()
                .find(|side| first_alive(snapshot, side.opponent()).is_none())
                .and_then(|side| snapshot.team(side).first());

            match winner {
                Some(pokemon) => vec![format!("{} wins the battle", pokemon.trainer_name)],
                None => vec!["The battle has ended".to_string()],
            }
        }
    }
}

fn first_alive(snapshot: &BattleSnapshot, side: Side) -> Option<&Combatant> {
    snapshot.team(side).iter().find(|c| c.is_alive())
}

/// `"A"`, `"A and B"`, `"A, B and C"`
fn join_names(pokemons: &[Combatant]) -> String {
    let names: Vec<&str> = pokemons.iter().map(|c| c.name.as_str()).collect();
    match names.split_last() {
        None => String::new(),
        Some((last, [])) => last.to_string(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{finished_battle, started_battle};

    #[test]
    fn test_team_joined_line() {
        let battle = started_battle();
        let lines = narrate(&battle.events()[0]);

        assert_eq!(
            lines,
            vec!["Ash joined as the home team with Bulbasaur, Charmander and Squirtle"]
        );
    }

    #[test]
    fn test_started_lines() {
        let battle = started_battle();
        let lines = narrate(&battle.events()[2]);

        assert_eq!(
            lines,
            vec![
                "The battle has started",
                "Ash sends out Bulbasaur",
                "Gary sends out Pidgey",
            ]
        );
    }

    #[test]
    fn test_attacked_line() {
        let mut battle = started_battle();
        battle.attack(Side::Home).unwrap();

        let lines = narrate(battle.events().last().unwrap());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Ash's Bulbasaur attacks Gary's Pidgey for "));
        assert!(lines[0].ends_with(" health left)"));
    }

    #[test]
    fn test_knockout_and_ended_lines() {
        let battle = finished_battle();
        let events = battle.events();

        let knockout = events
            .iter()
            .filter_map(|e| e.event().as_attacked().map(|a| (e, a)))
            .find(|(_, a)| a.is_knockout())
            .map(|(e, _)| narrate(e))
            .unwrap();
        assert_eq!(knockout.len(), 2);
        assert!(knockout[1].ends_with(" fainted"));

        let winner = battle.winner().unwrap();
        let trainer = &battle.trainer(winner).unwrap().name;
        assert_eq!(
            narrate(events.last().unwrap()),
            vec![format!("{trainer} wins the battle")]
        );
    }

    #[test]
    fn test_join_names() {
        let battle = started_battle();
        let team: Vec<Combatant> = battle.team(Side::Home).cloned().collect();

        assert_eq!(join_names(&team[..1]), "Bulbasaur");
        assert_eq!(join_names(&team[..2]), "Bulbasaur and Charmander");
        assert_eq!(join_names(&[]), "");
    }
}
