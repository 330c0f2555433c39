use crate::config::{HillClimbingConfig, Heuristic};
use crate::{Budget, Strategy};
use capture_core::{Board, Coordinate, GameError, Move, Player};
use log::debug;

/// One-ply greedy strategy: scores every empty cell and takes the best.
pub struct HillClimbingStrategy {
    name: String,
    player: Player,
    config: HillClimbingConfig,
}

impl HillClimbingStrategy {
    pub fn new(config: HillClimbingConfig) -> Self {
        HillClimbingStrategy {
            name: format!("HillClimbing({:?})", config.heuristic),
            player: Player::B,
            config,
        }
    }

    pub fn with_player(mut self, player: Player) -> Self {
        self.player = player;
        self
    }

    fn score(&self, board: &Board, to: Coordinate) -> i32 {
        match self.config.heuristic {
            Heuristic::Simulate => board
                .apply_move_with(Move::new(to, self.player), self.config.capture_rule)
                .score_for(self.player),
            Heuristic::Adjacency => board.local_adjacency(to, self.player.opponent()),
        }
    }
}

impl Default for HillClimbingStrategy {
    fn default() -> Self {
        Self::new(HillClimbingConfig::default())
    }
}

impl Strategy for HillClimbingStrategy {
    fn decide_within(
        &mut self,
        board: &Board,
        _rounds_left: u32,
        _budget: &Budget,
    ) -> Result<Coordinate, GameError> {
        let mut best: Option<(Coordinate, i32)> = None;

        for to in board.empty_cells() {
            let score = self.score(board, to);
            // Strictly greater: the first cell scanned wins ties
            if best.map_or(true, |(_, b)| score > b) {
                best = Some((to, score));
            }
        }

        let (to, score) = best.ok_or(GameError::NoLegalMove)?;
        debug!("{} chose {} (score {})", self.name, to, score);
        Ok(to)
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
    use capture_core::{CaptureRule, Cell};

    fn at(row: u8, col: u8) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    fn adjacency() -> HillClimbingStrategy {
        HillClimbingStrategy::new(HillClimbingConfig {
            heuristic: Heuristic::Adjacency,
            ..Default::default()
        })
    }

    #[test]
    fn test_simulate_prefers_double_capture() {
        // (2, 4) sits between two A pieces.
        let board = Board::from_notation("8/4A3/8/4A3/8/8/8/8").unwrap();
        let mut strategy = HillClimbingStrategy::default();
        assert_eq!(strategy.decide(&board, 5), Ok(at(2, 4)));
    }

    #[test]
    fn test_empty_board_takes_first_cell() {
        let mut strategy = HillClimbingStrategy::default();
        assert_eq!(strategy.decide(&Board::empty(), 5), Ok(at(0, 0)));
        assert_eq!(adjacency().decide(&Board::empty(), 5), Ok(at(0, 0)));
    }

    #[test]
    fn test_adjacency_counts_opponents() {
        let board = Board::from_notation("8/8/8/4A3/3A1A2/4A3/8/8").unwrap();
        assert_eq!(adjacency().decide(&board, 5), Ok(at(4, 4)));
    }

    #[test]
    fn test_ties_keep_first_scanned() {
        let board = Board::from_notation("A1A5/8/8/8/8/8/8/8").unwrap();
        assert_eq!(adjacency().decide(&board, 5), Ok(at(0, 1)));

        // Four cells touch one A each; (6, 0) is scanned first.
        let board = Board::from_notation("8/8/8/8/8/8/8/A6A").unwrap();
        assert_eq!(adjacency().decide(&board, 5), Ok(at(6, 0)));
    }

    #[test]
    fn test_plays_for_its_own_seat() {
        let board = Board::from_notation("8/8/8/3B4/8/8/8/8").unwrap();
        let mut strategy = HillClimbingStrategy::default().with_player(Player::A);
        assert_eq!(strategy.player(), Player::A);
        assert_eq!(strategy.decide(&board, 5), Ok(at(2, 3)));
    }

    #[test]
    fn test_legacy_rule_claims_empty_neighbours() {
        let mut strategy = HillClimbingStrategy::new(HillClimbingConfig {
            heuristic: Heuristic::Simulate,
            capture_rule: CaptureRule::FlipAll,
        });
        // With the legacy rule any interior cell claims 5 cells; (1, 1) is the first.
        assert_eq!(strategy.decide(&Board::empty(), 5), Ok(at(1, 1)));
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_rows([[Cell::A; 8]; 8]);
        assert_eq!(HillClimbingStrategy::default().decide(&board, 1), Err(GameError::NoLegalMove));
    }
}
