use crate::{Budget, Strategy};
use capture_core::{Board, Coordinate, GameError, Player, BOARD_SIZE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws uniform coordinates until one lands on an empty cell.
/// Returns None for a full board instead of spinning forever.
pub fn sample_empty<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Coordinate> {
    if board.is_full() {
        return None;
    }

    loop {
        let c = Coordinate::wrapping(rng.gen_range(0..BOARD_SIZE), rng.gen_range(0..BOARD_SIZE));
        if board.is_empty(c) {
            return Some(c);
        }
    }
}

pub struct RandomStrategy {
    name: String,
    player: Player,
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        RandomStrategy {
            name: "Random".to_string(),
            player: Player::B,
            rng,
        }
    }

    pub fn with_player(mut self, player: Player) -> Self {
        self.player = player;
        self
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn decide_within(
        &mut self,
        board: &Board,
        _rounds_left: u32,
        _budget: &Budget,
    ) -> Result<Coordinate, GameError> {
        sample_empty(board, &mut self.rng).ok_or(GameError::NoLegalMove)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn player(&self) -> Player {
        self.player
    }
}
