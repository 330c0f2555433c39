use crate::config::GeneticMinimaxConfig;
use crate::evolution;
use crate::random::sample_empty;
use crate::search::{evaluate_move, SearchOptions};
use crate::{Budget, Strategy};
use capture_core::{Board, Coordinate, GameError, Player};
use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Genetic search whose offspring are ranked by a bounded minimax lookahead.
///
/// Parent selection still uses the cheap adjacency fitness; only the
/// offspring of each generation pay for a search.
pub struct GeneticMinimaxStrategy {
    name: String,
    player: Player,
    config: GeneticMinimaxConfig,
    rng: StdRng,
}

impl GeneticMinimaxStrategy {
    pub fn new(config: GeneticMinimaxConfig) -> Self {
        Self::from_rng(config, StdRng::from_entropy())
    }

    pub fn with_seed(config: GeneticMinimaxConfig, seed: u64) -> Self {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }

    fn from_rng(config: GeneticMinimaxConfig, rng: StdRng) -> Self {
        GeneticMinimaxStrategy {
            name: format!(
                "GeneticMinimax(pop={}, depth={})",
                config.population_size, config.max_depth
            ),
            player: Player::B,
            config,
            rng,
        }
    }

    pub fn with_player(mut self, player: Player) -> Self {
        self.player = player;
        self
    }

    fn options(&self) -> SearchOptions {
        SearchOptions {
            max_depth: self.config.max_depth,
            alpha_beta: self.config.alpha_beta,
            capture_rule: self.config.capture_rule,
        }
    }
}

impl Default for GeneticMinimaxStrategy {
    fn default() -> Self {
        Self::new(GeneticMinimaxConfig::default())
    }
}

impl Strategy for GeneticMinimaxStrategy {
    fn decide_within(
        &mut self,
        board: &Board,
        rounds_left: u32,
        budget: &Budget,
    ) -> Result<Coordinate, GameError> {
        if board.is_full() {
            return Err(GameError::NoLegalMove);
        }

        let budget = budget.clone().with_move_time(self.config.move_time());
        let options = self.options();
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

            // Occupied targets score None and rank below every real score.
            let mut nodes = 0;
            let scores: Vec<Option<i32>> = offspring
                .iter()
                .map(|&child| {
                    let (score, searched) =
                        evaluate_move(board, child, self.player, rounds_left, options, &budget);
                    nodes += searched;
                    score
                })
                .collect();

            if let Some(best) = evolution::best_index(&scores) {
                let candidate = offspring[best];
                trace!(
                    "{}: generation {} best {} score {:?} ({} nodes)",
                    self.name,
                    generation,
                    candidate,
                    scores[best],
                    nodes
                );
                if scores[best].is_some() && board.is_empty(candidate) {
                    debug!(
                        "{} chose {} (score {:?}) at generation {}",
                        self.name, candidate, scores[best], generation
                    );
                    return Ok(candidate);
                }
            }

            population = offspring;
        }

        let fallback = sample_empty(board, &mut self.rng).ok_or(GameError::NoLegalMove)?;
        debug!("{}: no scored offspring, playing random {}", self.name, fallback);
        Ok(fallback)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn player(&self) -> Player {
        self.player
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::StopToken;
    use capture_core::Cell;

    fn at(row: u8, col: u8) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    fn shallow() -> GeneticMinimaxConfig {
        GeneticMinimaxConfig {
            max_depth: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_returns_empty_cell() {
        let board = Board::from_notation("AB6/1A6/8/3BA3/3AB3/8/8/8").unwrap();
        let mut strategy = GeneticMinimaxStrategy::with_seed(shallow(), 21);
        for _ in 0..5 {
            let choice = strategy.decide(&board, 4).unwrap();
            assert!(board.is_empty(choice));
        }
    }

    #[test]
    fn test_lookahead_beats_adjacency() {
        // (0, 0) touches two A pieces and (0, 4) only one, but taking (0, 0)
        // lets A answer at (0, 4) and flip two B pieces back. Crossover keeps
        // row 0, so every generation breeds both cells.
        let board = Board::from_notation(
            "1ABA1BBB/ABBBBBBB/BBBBBBBB/BBBBBBBB/BBBBBBBB/BBBBBBBB/BBBBBBBB/BBBBBBBB",
        )
        .unwrap();
        let config = GeneticMinimaxConfig {
            population_size: 40,
            ..Default::default()
        };

        for seed in 0..10 {
            let mut strategy = GeneticMinimaxStrategy::with_seed(config.clone(), seed);
            assert_eq!(strategy.decide(&board, 3), Ok(at(0, 4)), "seed {seed}");
        }
    }

    #[test]
    fn test_never_returns_occupied_offspring() {
        // Crossing (4, 0) with (0, 4) breeds (4, 4), a B piece enclosed by A
        // with the highest possible adjacency.
        let board = Board::from_notation(
            "BBBB1BBB/BBBBBBBB/BBBBBBBB/BBBBABBB/1BBABABB/BBBBABBB/BBBBBBBB/BBBBBBBB",
        )
        .unwrap();
        assert_eq!(board.local_adjacency(at(4, 4), Player::A), 4);

        for seed in 0..20 {
            let mut strategy = GeneticMinimaxStrategy::with_seed(GeneticMinimaxConfig::default(), seed);
            let choice = strategy.decide(&board, 3).unwrap();
            assert!(choice == at(4, 0) || choice == at(0, 4), "seed {seed} chose {choice}");
        }
    }

    #[test]
    fn test_single_empty_cell() {
        let mut board = Board::from_rows([[Cell::A; 8]; 8]);
        let hole = Coordinate::new(0, 5).unwrap();
        board.set(hole, Cell::Empty);

        let mut strategy = GeneticMinimaxStrategy::with_seed(GeneticMinimaxConfig::default(), 22);
        assert_eq!(strategy.decide(&board, 3), Ok(hole));
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_rows([[Cell::B; 8]; 8]);
        let mut strategy = GeneticMinimaxStrategy::with_seed(shallow(), 23);
        assert_eq!(strategy.decide(&board, 3), Err(GameError::NoLegalMove));
    }

    #[test]
    fn test_cancelled_falls_back() {
        let token = StopToken::new();
        token.stop();
        let budget = Budget::unlimited().with_stop(token);

        let board = Board::from_notation("8/8/8/3BA3/3AB3/8/8/8").unwrap();
        let mut strategy = GeneticMinimaxStrategy::with_seed(shallow(), 24);
        let choice = strategy.decide_within(&board, 3, &budget).unwrap();
        assert!(board.is_empty(choice));
    }
}
