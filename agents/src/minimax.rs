use crate::{
    config::MinimaxConfig,
    search::{search, SearchOptions, SearchResult},
    Budget, Strategy,
};
use capture_core::{Board, Coordinate, GameError, Player};
use log::{debug, warn};

pub struct MinimaxStrategy {
    name: String,
    player: Player,
    config: MinimaxConfig,
    last_result: Option<SearchResult>,
}

impl MinimaxStrategy {
    pub fn new(config: MinimaxConfig) -> Self {
        MinimaxStrategy {
            name: format!("Minimax(depth={})", config.max_depth),
            player: Player::B,
            config,
            last_result: None,
        }
    }

    pub fn depth(depth: u8) -> Self {
        Self::new(MinimaxConfig {
            max_depth: depth,
            ..Default::default()
        })
    }

    pub fn with_player(mut self, player: Player) -> Self {
        self.player = player;
        self
    }

    /// Statistics of the most recent search.
    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }

    fn options(&self) -> SearchOptions {
        SearchOptions {
            max_depth: self.config.max_depth,
            alpha_beta: self.config.alpha_beta,
            capture_rule: self.config.capture_rule,
        }
    }
}

impl Default for MinimaxStrategy {
    fn default() -> Self {
        Self::new(MinimaxConfig::default())
    }
}

impl Strategy for MinimaxStrategy {
    fn decide_within(
        &mut self,
        board: &Board,
        rounds_left: u32,
        budget: &Budget,
    ) -> Result<Coordinate, GameError> {
        let budget = budget.clone().with_move_time(self.config.move_time());
        let result = search(board, self.player, rounds_left, self.options(), &budget);

        debug!(
            "{} chose {:?} (score {:?}, {} nodes)",
            self.name, result.best_move, result.score, result.nodes
        );

        let choice = match result.best_move {
            Some(to) => {
                if result.stopped {
                    warn!("{}: budget exhausted, playing best move found so far", self.name);
                }
                Ok(to)
            }
            None if result.stopped => {
                warn!("{}: budget exhausted before any move was scored", self.name);
                board.empty_cells().next().ok_or(GameError::NoLegalMove)
            }
            None => Err(GameError::NoLegalMove),
        };

        self.last_result = Some(result);
        choice
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn player(&self) -> Player {
        self.player
    }
}
