//! Simulator configuration
use std::env;

/// Limits applied to every simulated battle
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Attacks after which an unfinished battle is abandoned
    pub max_turns: u32,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self { max_turns: 1000 }
    }
}

impl SimulatorConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `POKEBATTLE_MAX_TURNS` - Attack limit per battle (default: 1000, minimum: 1)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(max_turns) = read_env::<u32>("POKEBATTLE_MAX_TURNS") {
            config.max_turns = max_turns.max(1);
        }

        config
    }

    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns.max(1);
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
