use crate::config::GeneticConfig;
use crate::evolution::{self, PERFECT_FITNESS};
use crate::random::sample_empty;
use crate::{Budget, Strategy};
use capture_core::{Board, Coordinate, GameError, Player};
use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Evolves candidate cells against the adjacency heuristic and stops as soon
/// as it finds an empty cell enclosed by the opponent on all four sides.
pub struct GeneticStrategy {
    name: String,
    player: Player,
    config: GeneticConfig,
    rng: StdRng,
}

impl GeneticStrategy {
    pub fn new(config: GeneticConfig) -> Self {
        Self::from_rng(config, StdRng::from_entropy())
    }

    pub fn with_seed(config: GeneticConfig, seed: u64) -> Self {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }

    fn from_rng(config: GeneticConfig, rng: StdRng) -> Self {
        GeneticStrategy {
            name: format!("Genetic(pop={})", config.population_size),
            player: Player::B,
            config,
            rng,
        }
    }

    pub fn with_player(mut self, player: Player) -> Self {
        self.player = player;
        self
    }
}

impl Default for GeneticStrategy {
    fn default() -> Self {
        Self::new(GeneticConfig::default())
    }
}

impl Strategy for GeneticStrategy {
    fn decide_within(
        &mut self,
        board: &Board,
        _rounds_left: u32,
        budget: &Budget,
    ) -> Result<Coordinate, GameError> {
        if board.is_full() {
            return Err(GameError::NoLegalMove);
        }

        let budget = budget.clone().with_move_time(self.config.move_time());
        let opponent = self.player.opponent();
        let size = self.config.population_size;
        let mut population = evolution::initial_population(board, size, &mut self.rng);

        for generation in 0..self.config.max_generations {
            if budget.is_exhausted() {
                warn!("{}: budget exhausted at generation {}", self.name, generation);
                break;
            }

            let fitness = evolution::adjacency_fitness(board, &population, opponent);
            let parents = evolution::select_parents(&population, &fitness, &mut self.rng);
            let offspring = evolution::breed(&parents, size, self.config.mutation_rate, &mut self.rng);
            let offspring_fitness = evolution::adjacency_fitness(board, &offspring, opponent);

            if let Some(best) = evolution::best_index(&offspring_fitness) {
                let candidate = offspring[best];
                trace!(
                    "{}: generation {} best {} fitness {}",
                    self.name,
                    generation,
                    candidate,
                    offspring_fitness[best]
                );
                if offspring_fitness[best] == PERFECT_FITNESS && board.is_empty(candidate) {
                    debug!("{} chose {} at generation {}", self.name, candidate, generation);
                    return Ok(candidate);
                }
            }

            population = offspring;
        }

        let fallback = sample_empty(board, &mut self.rng).ok_or(GameError::NoLegalMove)?;
        debug!("{}: no enclosed cell found, playing random {}", self.name, fallback);
        Ok(fallback)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn player(&self) -> Player {
        self.player
    }
}
