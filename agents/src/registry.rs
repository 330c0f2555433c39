//! Strategy lookup by name, so callers can pick a bot from a string.

use crate::config::AgentsConfig;
use crate::error::ConfigError;
use crate::{
    GeneticMinimaxStrategy, GeneticStrategy, HillClimbingStrategy, MinimaxStrategy,
    RandomStrategy, Strategy,
};
use capture_core::Player;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Random,
    HillClimbing,
    Minimax,
    Genetic,
    GeneticMinimax,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::Random,
        StrategyKind::HillClimbing,
        StrategyKind::Minimax,
        StrategyKind::Genetic,
        StrategyKind::GeneticMinimax,
    ];

    /// Canonical command-line name.
    pub const fn name(self) -> &'static str {
        match self {
            StrategyKind::Random => "random",
            StrategyKind::HillClimbing => "hill",
            StrategyKind::Minimax => "minimax",
            StrategyKind::Genetic => "genetic",
            StrategyKind::GeneticMinimax => "genetic-minimax",
        }
    }

    /// Builds the strategy for `player`. Stochastic strategies use `seed`
    /// when given, entropy otherwise.
    pub fn build(self, player: Player, config: &AgentsConfig, seed: Option<u64>) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Random => {
                let s = match seed {
                    Some(seed) => RandomStrategy::with_seed(seed),
                    None => RandomStrategy::new(),
                };
                Box::new(s.with_player(player))
            }
            StrategyKind::HillClimbing => Box::new(
                HillClimbingStrategy::new(config.hill_climbing.clone()).with_player(player),
            ),
            StrategyKind::Minimax => {
                Box::new(MinimaxStrategy::new(config.minimax.clone()).with_player(player))
            }
            StrategyKind::Genetic => {
                let c = config.genetic.clone();
                let s = match seed {
                    Some(seed) => GeneticStrategy::with_seed(c, seed),
                    None => GeneticStrategy::new(c),
                };
                Box::new(s.with_player(player))
            }
            StrategyKind::GeneticMinimax => {
                let c = config.genetic_minimax.clone();
                let s = match seed {
                    Some(seed) => GeneticMinimaxStrategy::with_seed(c, seed),
                    None => GeneticMinimaxStrategy::new(c),
                };
                Box::new(s.with_player(player))
            }
        }
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "random" => Ok(StrategyKind::Random),
            "hill" | "hill-climbing" | "hillclimbing" => Ok(StrategyKind::HillClimbing),
            "minimax" => Ok(StrategyKind::Minimax),
            "genetic" => Ok(StrategyKind::Genetic),
            "genetic-minimax" | "hybrid" => Ok(StrategyKind::GeneticMinimax),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
