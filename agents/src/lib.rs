pub mod budget;
pub mod config;
pub mod error;
pub mod evolution;
pub mod genetic;
pub mod genetic_minimax;
pub mod hill_climbing;
pub mod minimax;
pub mod random;
pub mod registry;
pub mod search;

use capture_core::{Board, Coordinate, GameError, Player};

/// Core trait for move-selection strategies
pub trait Strategy {
    /// Chooses an empty cell for this strategy's player, honouring `budget`.
    ///
    /// `rounds_left` is the number of placements the player still has and
    /// bounds how far ahead a search may look. A full board yields
    /// `GameError::NoLegalMove`.
    fn decide_within(
        &mut self,
        board: &Board,
        rounds_left: u32,
        budget: &Budget,
    ) -> Result<Coordinate, GameError>;

    /// Chooses a cell with no time or cancellation limit.
    fn decide(&mut self, board: &Board, rounds_left: u32) -> Result<Coordinate, GameError> {
        self.decide_within(board, rounds_left, &Budget::unlimited())
    }

    /// Get the strategy's name
    fn name(&self) -> &str;

    /// The seat this strategy plays.
    fn player(&self) -> Player;
}

pub use budget::{Budget, StopToken};
pub use config::{
    AgentsConfig, ConfigSection, GeneticConfig, GeneticMinimaxConfig, Heuristic,
    HillClimbingConfig, MinimaxConfig,
};
pub use error::ConfigError;
pub use genetic::GeneticStrategy;
pub use genetic_minimax::GeneticMinimaxStrategy;
pub use hill_climbing::HillClimbingStrategy;
pub use minimax::MinimaxStrategy;
pub use random::RandomStrategy;
pub use registry::StrategyKind;
pub use search::*;
