//! Tunable parameters for every strategy.
//!
//! Defaults are the standard strategy parameters. A TOML file may override any
//! subset; missing sections and fields keep their defaults:
//!
//! ```toml
//! [minimax]
//! max_depth = 2
//! move_time_ms = 500
//!
//! [genetic]
//! population_size = 50
//! ```

use crate::error::ConfigError;
use capture_core::CaptureRule;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Deepest minimax horizon accepted by validation.
pub const MAX_SEARCH_DEPTH: u8 = 6;

/// Common behaviour of configuration sections.
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), ConfigError>;
}

fn invalid<S: ConfigSection>(message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        section: S::section_name(),
        message: message.into(),
    }
}

fn check_depth<S: ConfigSection>(depth: u8) -> Result<(), ConfigError> {
    if depth == 0 || depth > MAX_SEARCH_DEPTH {
        return Err(invalid::<S>(format!(
            "max_depth must be between 1 and {MAX_SEARCH_DEPTH}, got {depth}"
        )));
    }
    Ok(())
}

fn check_genetic<S: ConfigSection>(population_size: usize, mutation_rate: f64) -> Result<(), ConfigError> {
    if population_size < 2 {
        return Err(invalid::<S>("population_size must be at least 2"));
    }
    if !(0.0..=1.0).contains(&mutation_rate) {
        return Err(invalid::<S>("mutation_rate must be between 0 and 1"));
    }
    Ok(())
}

/// How hill climbing scores a candidate cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// Apply the capture rule, then read the material score for the bot.
    #[default]
    Simulate,
    /// Count opponent pieces orthogonally adjacent to the cell.
    Adjacency,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HillClimbingConfig {
    pub heuristic: Heuristic,
    pub capture_rule: CaptureRule,
}

impl ConfigSection for HillClimbingConfig {
    fn section_name() -> &'static str {
        "hill_climbing"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimaxConfig {
    pub max_depth: u8,
    pub alpha_beta: bool,
    pub capture_rule: CaptureRule,
    pub move_time_ms: Option<u64>,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            alpha_beta: true,
            capture_rule: CaptureRule::Orthogonal,
            move_time_ms: None,
        }
    }
}

impl MinimaxConfig {
    pub fn move_time(&self) -> Option<Duration> {
        self.move_time_ms.map(Duration::from_millis)
    }
}

impl ConfigSection for MinimaxConfig {
    fn section_name() -> &'static str {
        "minimax"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_depth::<Self>(self.max_depth)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticConfig {
    pub population_size: usize,
    pub mutation_rate: f64,
    pub max_generations: usize,
    pub move_time_ms: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            mutation_rate: 0.1,
            max_generations: 2000,
            move_time_ms: None,
        }
    }
}

impl GeneticConfig {
    pub fn move_time(&self) -> Option<Duration> {
        self.move_time_ms.map(Duration::from_millis)
    }
}

impl ConfigSection for GeneticConfig {
    fn section_name() -> &'static str {
        "genetic"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_genetic::<Self>(self.population_size, self.mutation_rate)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticMinimaxConfig {
    pub population_size: usize,
    pub mutation_rate: f64,
    pub max_generations: usize,
    pub max_depth: u8,
    pub alpha_beta: bool,
    pub capture_rule: CaptureRule,
    pub move_time_ms: Option<u64>,
}

impl Default for GeneticMinimaxConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            mutation_rate: 0.1,
            max_generations: 100,
            max_depth: 3,
            alpha_beta: true,
            capture_rule: CaptureRule::Orthogonal,
            move_time_ms: None,
        }
    }
}

impl GeneticMinimaxConfig {
    pub fn move_time(&self) -> Option<Duration> {
        self.move_time_ms.map(Duration::from_millis)
    }
}

impl ConfigSection for GeneticMinimaxConfig {
    fn section_name() -> &'static str {
        "genetic_minimax"
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_genetic::<Self>(self.population_size, self.mutation_rate)?;
        check_depth::<Self>(self.max_depth)
    }
}

/// All strategy sections, as read from one TOML document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentsConfig {
    pub hill_climbing: HillClimbingConfig,
    pub minimax: MinimaxConfig,
    pub genetic: GeneticConfig,
    pub genetic_minimax: GeneticMinimaxConfig,
}

impl AgentsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.hill_climbing.validate()?;
        self.minimax.validate()?;
        self.genetic.validate()?;
        self.genetic_minimax.validate()
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
