//! Roster validation
//!
//! Rules run in a fixed order and the first failing rule wins. Each rule is
//! checked for every pokemon before the next rule starts, so a roster whose
//! first pokemon has bad types and whose last pokemon has a bad pokedexId
//! reports the pokedexId.

use serde_json::{Map, Value};

use crate::ValidationError;
use crate::pokemon_type::Type;
use crate::roster::{
    MAX_MULTIPLIER, MAX_POKEDEX_ID, MIN_POKEDEX_ID, Roster, RosterPokemon, TEAM_SIZE, Trainer,
};

type Object = Map<String, Value>;

/// Validate a raw roster candidate and convert it into a [`Roster`].
///
/// The trainer name is stored trimmed. Absent `weaknesses` and `multipliers`
/// become empty lists.
pub fn validate_roster(candidate: &Value) -> Result<Roster, ValidationError> {
    let team = candidate.as_object().ok_or(ValidationError::TeamNotObject)?;

    let trainer = team
        .get("trainer")
        .and_then(Value::as_object)
        .ok_or(ValidationError::TrainerNotObject)?;

    let trainer_name = trainer
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or(ValidationError::TrainerNameEmpty)?;

    let pokemons = team
        .get("pokemons")
        .and_then(Value::as_array)
        .ok_or(ValidationError::PokemonsNotArray)?;

    if pokemons.len() != TEAM_SIZE {
        return Err(ValidationError::TeamSize {
            found: pokemons.len(),
        });
    }

    let pokemons = pokemons
        .iter()
        .enumerate()
        .map(|(index, pokemon)| {
            pokemon
                .as_object()
                .ok_or(ValidationError::PokemonNotObject { index })
        })
        .collect::<Result<Vec<&Object>, _>>()?;

    let pokedex_ids = pokemons
        .iter()
        .enumerate()
        .map(|(index, pokemon)| {
            pokedex_id(pokemon).ok_or(ValidationError::PokedexIdOutOfRange { index })
        })
        .collect::<Result<Vec<u16>, _>>()?;

    let raw_types = pokemons
        .iter()
        .enumerate()
        .map(|(index, pokemon)| {
            pokemon
                .get("types")
                .and_then(Value::as_array)
                .ok_or(ValidationError::TypesNotArray { index })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(index) = raw_types.iter().position(|types| types.is_empty()) {
        return Err(ValidationError::TypesEmpty { index });
    }

    let types = raw_types
        .iter()
        .enumerate()
        .map(|(index, values)| {
            parse_types(values).map_err(|value| ValidationError::InvalidType { index, value })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let raw_weaknesses = pokemons
        .iter()
        .enumerate()
        .map(|(index, pokemon)| {
            optional_array(pokemon, "weaknesses")
                .ok_or(ValidationError::WeaknessesNotArray { index })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let weaknesses = raw_weaknesses
        .iter()
        .enumerate()
        .map(|(index, values)| {
            parse_types(values).map_err(|value| ValidationError::InvalidWeakness { index, value })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let raw_multipliers = pokemons
        .iter()
        .enumerate()
        .map(|(index, pokemon)| {
            optional_array(pokemon, "multipliers")
                .ok_or(ValidationError::MultipliersNotArray { index })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let multipliers = raw_multipliers
        .iter()
        .enumerate()
        .map(|(index, values)| {
            parse_multipliers(values)
                .map_err(|value| ValidationError::InvalidMultiplier { index, value })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let pokemons = pokemons
        .iter()
        .zip(pokedex_ids)
        .zip(types)
        .zip(weaknesses)
        .zip(multipliers)
        .map(
            |((((pokemon, pokedex_id), types), weaknesses), multipliers)| RosterPokemon {
                pokedex_id,
                name: pokemon
                    .get("name")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                types,
                weaknesses,
                multipliers,
            },
        )
        .collect();

    Ok(Roster::new(Trainer::new(trainer_name), pokemons))
}

/// Whole numbers in range only; `2.0` is accepted, `2.5` is not
fn pokedex_id(pokemon: &Object) -> Option<u16> {
    let id = pokemon.get("pokedexId")?.as_f64()?;
    if id.fract() != 0.0 || id < f64::from(MIN_POKEDEX_ID) || id > f64::from(MAX_POKEDEX_ID) {
        return None;
    }
    Some(id as u16)
}

/// `None` when the key holds something other than an array. A missing key
/// counts as an empty array; an explicit `null` does not.
fn optional_array<'a>(pokemon: &'a Object, key: &str) -> Option<&'a [Value]> {
    match pokemon.get(key) {
        None => Some(&[][..]),
        Some(value) => value.as_array().map(Vec::as_slice),
    }
}

/// Parse every element as a [`Type`], returning the first offending value on failure
fn parse_types(values: &[Value]) -> Result<Vec<Type>, String> {
    values
        .iter()
        .map(|value| value.as_str().and_then(Type::parse).ok_or_else(|| value.to_string()))
        .collect()
}

fn parse_multipliers(values: &[Value]) -> Result<Vec<f64>, String> {
    values
        .iter()
        .map(|value| {
            value
                .as_f64()
                .filter(|m| *m > 0.0 && *m <= MAX_MULTIPLIER)
                .ok_or_else(|| value.to_string())
        })
        .collect()
}
