/// Turn sequencing for a whole game: the authoritative board, whose turn it
/// is and how many rounds each player has left.
use crate::board::Board;
use crate::capture::CaptureRule;
use crate::error::{GameError, Result};
use crate::types::*;

/// Default number of placements per player.
pub const DEFAULT_ROUNDS: u32 = 10;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameState {
    /// The current board position
    pub board: Board,
    /// Which player places next
    pub turn: Player,
    /// Remaining placements, indexed by Player::index()
    rounds_left: [u32; 2],
    /// Rule used when applying moves
    pub capture_rule: CaptureRule,
    /// Moves played so far, oldest first
    pub history: Vec<Move>,
    start: Board,
    first: Player,
}

impl GameState {
    /// Creates a new game on an empty board with A to move.
    pub fn new(rounds_per_player: u32) -> Self {
        Self::from_board(Board::empty(), Player::A, rounds_per_player)
    }

    /// Creates a game from an arbitrary position.
    pub fn from_board(board: Board, turn: Player, rounds_per_player: u32) -> Self {
        Self {
            board,
            turn,
            rounds_left: [rounds_per_player; 2],
            capture_rule: CaptureRule::default(),
            history: Vec::new(),
            start: board,
            first: turn,
        }
    }

    pub fn with_capture_rule(mut self, rule: CaptureRule) -> Self {
        self.capture_rule = rule;
        self
    }

    pub fn rounds_left(&self, player: Player) -> u32 {
        self.rounds_left[player.index()]
    }

    /// The game ends when the board fills up or the player to move has no
    /// rounds left.
    pub fn is_over(&self) -> bool {
        self.board.is_full() || self.rounds_left(self.turn) == 0
    }

    /// Returns the leader by piece count, or None on a tie.
    pub fn winner(&self) -> Option<Player> {
        match self.board.global_score() {
            s if s > 0 => Some(Player::B),
            s if s < 0 => Some(Player::A),
            _ => None,
        }
    }

    /// Places the side to move's piece at `to`, applies the capture rule and
    /// passes the turn.
    pub fn play(&mut self, to: Coordinate) -> Result<Move> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.board.is_empty(to) {
            return Err(GameError::Occupied(to));
        }

        let mv = Move::new(to, self.turn);
        self.board = self.board.apply_move_with(mv, self.capture_rule);
        self.rounds_left[self.turn.index()] -= 1;
        self.turn = self.turn.opponent();
        self.history.push(mv);

        Ok(mv)
    }

    /// Takes back the last `n` moves (fewer if the history is shorter),
    /// refunding their rounds. Returns how many moves were undone.
    pub fn undo(&mut self, n: usize) -> usize {
        let keep = self.history.len().saturating_sub(n);
        let undone = self.history.split_off(keep);
        for mv in &undone {
            self.rounds_left[mv.player.index()] += 1;
        }

        self.board = self.start;
        self.turn = self.first;
        for mv in &self.history {
            self.board = self.board.apply_move_with(*mv, self.capture_rule);
            self.turn = mv.player.opponent();
        }

        undone.len()
    }
}
