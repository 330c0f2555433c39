use crate::budget::Budget;
use capture_core::{Board, CaptureRule, Coordinate, Move, Player};

pub const DEFAULT_DEPTH: u8 = 3;
const TIME_CHECK_INTERVAL: u64 = 256; // Read the clock every 256 nodes

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Plies searched after the root move
    pub max_depth: u8,
    /// Cut off siblings once beta <= alpha
    pub alpha_beta: bool,
    pub capture_rule: CaptureRule,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::depth(DEFAULT_DEPTH)
    }
}

impl SearchOptions {
    pub fn depth(max_depth: u8) -> Self {
        Self {
            max_depth,
            alpha_beta: true,
            capture_rule: CaptureRule::Orthogonal,
        }
    }

    /// Same search without pruning.
    pub fn exhaustive(self) -> Self {
        Self {
            alpha_beta: false,
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Coordinate>,
    /// Score of `best_move`; None when no root move was fully evaluated.
    pub score: Option<i32>,
    pub nodes: u64,
    pub stopped: bool,
}

struct SearchInfo<'a> {
    me: Player,
    options: SearchOptions,
    budget: &'a Budget,
    nodes: u64,
    stopped: bool,
}

impl<'a> SearchInfo<'a> {
    fn new(me: Player, options: SearchOptions, budget: &'a Budget) -> Self {
        Self {
            me,
            options,
            budget,
            nodes: 0,
            stopped: false,
        }
    }

    fn should_stop(&mut self) -> bool {
        if self.stopped {
            return true;
        }

        if self.budget.is_cancelled() {
            self.stopped = true;
            return true;
        }

        // Check time limit periodically
        if self.nodes % TIME_CHECK_INTERVAL == 0 && self.budget.is_expired() {
            self.stopped = true;
            return true;
        }

        false
    }
}

/// Searches every empty cell for `me` and returns the best one.
///
/// Each root move is scored by a minimax search starting at the opponent's
/// turn with a full window, so pruning never changes the root choice. Ties
/// keep the first cell in row-major order.
pub fn search(
    board: &Board,
    me: Player,
    rounds_left: u32,
    options: SearchOptions,
    budget: &Budget,
) -> SearchResult {
    let mut info = SearchInfo::new(me, options, budget);
    let mut best_move = None;
    let mut best_score: Option<i32> = None;

    for to in board.empty_cells() {
        let Some(score) = root_value(&mut info, board, to, rounds_left) else {
            break;
        };

        if best_score.map_or(true, |best| score > best) {
            best_score = Some(score);
            best_move = Some(to);
        }
    }

    SearchResult {
        best_move,
        score: best_score,
        nodes: info.nodes,
        stopped: info.stopped,
    }
}

/// Scores a single root move: `me` plays `to`, then the bounded search
/// continues from the opponent's turn.
///
/// Returns None if `to` is occupied or the budget ran out.
pub fn evaluate_move(
    board: &Board,
    to: Coordinate,
    me: Player,
    rounds_left: u32,
    options: SearchOptions,
    budget: &Budget,
) -> (Option<i32>, u64) {
    if !board.is_empty(to) {
        return (None, 0);
    }
    let mut info = SearchInfo::new(me, options, budget);
    let score = root_value(&mut info, board, to, rounds_left);
    (score, info.nodes)
}

fn root_value(info: &mut SearchInfo, board: &Board, to: Coordinate, rounds_left: u32) -> Option<i32> {
    let child = board.apply_move_with(Move::new(to, info.me), info.options.capture_rule);
    minimax(info, &child, 0, rounds_left, i32::MIN, i32::MAX, false)
}

/// Alternating max/min search over `score_for(me)`.
///
/// None means the node was not evaluated because the search was stopped; it
/// is never a stand-in for a score.
fn minimax(
    info: &mut SearchInfo,
    board: &Board,
    depth: u8,
    rounds_left: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> Option<i32> {
    info.nodes += 1;

    if info.should_stop() {
        return None;
    }

    if rounds_left == 0 || depth >= info.options.max_depth {
        return Some(board.score_for(info.me));
    }

    let mover = if maximizing { info.me } else { info.me.opponent() };
    let mut best: Option<i32> = None;

    for to in board.empty_cells() {
        let child = board.apply_move_with(Move::new(to, mover), info.options.capture_rule);
        let score = minimax(info, &child, depth + 1, rounds_left - 1, alpha, beta, !maximizing)?;

        if maximizing {
            best = Some(best.map_or(score, |b| b.max(score)));
            alpha = alpha.max(score);
        } else {
            best = Some(best.map_or(score, |b| b.min(score)));
            beta = beta.min(score);
        }

        // Cutoff ends the whole node
        if info.options.alpha_beta && beta <= alpha {
            break;
        }
    }

    // A full board is a finished game: its material score is exact.
    Some(best.unwrap_or_else(|| board.score_for(info.me)))
}
