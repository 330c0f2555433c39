//! Behavioural properties of the board and the strategies, checked on
//! generated positions with seeded random sources.

use capture_agents::evolution::roulette_wheel;
use capture_agents::{
    search, Budget, GeneticConfig, GeneticStrategy, MinimaxStrategy, RandomStrategy,
    SearchOptions, Strategy,
};
use capture_core::{positions, Board, CaptureRule, Cell, Coordinate, Move, Player};
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};

/// Random board with exactly `filled` occupied cells, A and B mixed.
fn random_board(rng: &mut StdRng, filled: usize) -> Board {
    let mut board = Board::empty();
    for index in sample(rng, 64, filled).into_iter() {
        let cell = if rng.gen_bool(0.5) { Cell::A } else { Cell::B };
        if let Some(c) = Coordinate::from_index(index) {
            board.set(c, cell);
        }
    }
    board
}

fn occupied(board: &Board) -> usize {
    64 - board.empty_count()
}

#[test]
fn test_capture_never_fills_empty_cells() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);

    for _ in 0..200 {
        let filled = rng.gen_range(0..64);
        let board = random_board(&mut rng, filled);

        for to in board.empty_cells() {
            for player in [Player::A, Player::B] {
                let next = board.apply_move(Move::new(to, player));
                assert_eq!(occupied(&next), occupied(&board) + 1);
                assert_eq!(next.get(to), player.cell());
                // Flips only ever help the mover.
                assert!(next.count(player) > board.count(player));
                assert!(next.count(player.opponent()) <= board.count(player.opponent()));
            }
        }
    }
}

#[test]
fn test_legacy_rule_can_fill_empty_cells() {
    let board = Board::empty();
    let to = Coordinate::new(4, 4).unwrap();
    let next = board.apply_move_with(Move::new(to, Player::B), CaptureRule::FlipAll);
    assert_eq!(occupied(&next), 5);
}

#[test]
fn test_scoring_is_pure() {
    let mut rng = StdRng::seed_from_u64(1);
    let board = random_board(&mut rng, 30);
    let snapshot = board;

    for c in Coordinate::all() {
        assert_eq!(board.local_adjacency(c, Player::A), board.local_adjacency(c, Player::A));
    }
    assert_eq!(board.global_score(), board.global_score());
    assert_eq!(board, snapshot);
}

fn assert_pruning_keeps_root_choice(seed: u64, cases: &[(usize, u8)]) {
    let mut rng = StdRng::seed_from_u64(seed);
    let budget = Budget::unlimited();

    for &(filled, depth) in cases {
        let board = random_board(&mut rng, filled);
        let options = SearchOptions::depth(depth);

        for me in [Player::B, Player::A] {
            let pruned = search(&board, me, 10, options, &budget);
            let full = search(&board, me, 10, options.exhaustive(), &budget);

            assert_eq!(pruned.best_move, full.best_move, "filled={filled} depth={depth} me={me}");
            assert_eq!(pruned.score, full.score, "filled={filled} depth={depth} me={me}");
            assert!(pruned.nodes <= full.nodes);
        }
    }
}

#[test]
fn test_pruning_keeps_root_choice() {
    // (filled cells, depth): the empty board only affords depth 2 unpruned
    // in a debug build.
    assert_pruning_keeps_root_choice(2024, &[(0, 2), (19, 3), (45, 3)]);
}

// Roughly 15 million unpruned nodes on the empty board; run with
// `cargo test --release -- --ignored`.
#[test]
#[ignore]
fn test_pruning_keeps_root_choice_default_depth() {
    assert_pruning_keeps_root_choice(2025, &[(0, 3), (19, 3), (45, 3)]);
}

#[test]
fn test_minimax_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(77);
    let board = random_board(&mut rng, 40);

    let first = MinimaxStrategy::default().decide(&board, 4).unwrap();
    for _ in 0..3 {
        assert_eq!(MinimaxStrategy::default().decide(&board, 4), Ok(first));
    }
}

#[test]
fn test_minimax_on_empty_board() {
    let board = Board::empty();
    let mut strategy = MinimaxStrategy::default();

    let first = strategy.decide(&board, 5).unwrap();
    assert!(board.is_empty(first));
    assert_eq!(strategy.decide(&board, 5), Ok(first));
}

#[test]
fn test_random_strategy_only_picks_empty_cells() {
    let mut rng = StdRng::seed_from_u64(10_000);
    let mut strategy = RandomStrategy::with_seed(3);

    for _ in 0..10_000 {
        let filled = rng.gen_range(0..64);
        let board = random_board(&mut rng, filled);
        let choice = strategy.decide(&board, 1).unwrap();
        assert!(board.is_empty(choice));
    }
}

#[test]
fn test_genetic_finds_enclosed_cell() {
    let hole = Coordinate::new(4, 4).unwrap();
    let mut board = Board::from_notation(positions::SURROUNDED_HOLE).unwrap();
    // Unrelated pieces elsewhere must not distract it.
    for (r, c, cell) in [(0, 0, Cell::B), (0, 1, Cell::A), (7, 7, Cell::A), (6, 2, Cell::B)] {
        board.set(Coordinate::new(r, c).unwrap(), cell);
    }

    for seed in 0..5 {
        let mut strategy = GeneticStrategy::with_seed(GeneticConfig::default(), seed);
        assert_eq!(strategy.decide(&board, 5), Ok(hole), "seed {seed}");
    }
}

/// Chi-square statistic of observed counts against a uniform expectation.
fn chi_square(counts: &[u32]) -> f64 {
    let total: u32 = counts.iter().sum();
    let expected = f64::from(total) / counts.len() as f64;
    counts
        .iter()
        .map(|&observed| {
            let diff = f64::from(observed) - expected;
            diff * diff / expected
        })
        .sum()
}

// 99.9th percentile of the chi-square distribution with 9 degrees of freedom.
const CHI_SQUARE_9_DF: f64 = 27.877;

#[test]
fn test_roulette_equal_fitness_is_uniform() {
    let mut rng = StdRng::seed_from_u64(42);
    let fitness = [2; 10];
    let mut counts = [0u32; 10];

    for _ in 0..100_000 {
        counts[roulette_wheel(&fitness, &mut rng)] += 1;
    }

    let stat = chi_square(&counts);
    assert!(stat < CHI_SQUARE_9_DF, "chi-square {stat} for {counts:?}");
}

#[test]
fn test_roulette_zero_fitness_is_uniform() {
    let mut rng = StdRng::seed_from_u64(43);
    let fitness = [0; 10];
    let mut counts = [0u32; 10];

    for _ in 0..100_000 {
        counts[roulette_wheel(&fitness, &mut rng)] += 1;
    }

    let stat = chi_square(&counts);
    assert!(stat < CHI_SQUARE_9_DF, "chi-square {stat} for {counts:?}");
}

#[test]
fn test_every_strategy_reports_full_board() {
    use capture_agents::{AgentsConfig, StrategyKind};
    use capture_core::GameError;

    let board = Board::from_rows([[Cell::A; 8]; 8]);
    let config = AgentsConfig::default();

    for kind in StrategyKind::ALL {
        let mut strategy = kind.build(Player::B, &config, Some(1));
        assert_eq!(strategy.decide(&board, 3), Err(GameError::NoLegalMove), "{kind}");
    }
}
