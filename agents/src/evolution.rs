//! Genetic operators over populations of candidate cells.

use crate::random::sample_empty;
use capture_core::{Board, Coordinate, Player, BOARD_SIZE};
use rand::Rng;

/// Adjacency fitness of a cell fully enclosed by the opponent.
pub const PERFECT_FITNESS: i32 = 4;

/// Random initial population of empty cells (duplicates allowed).
/// Empty if the board is full.
pub fn initial_population<R: Rng + ?Sized>(board: &Board, size: usize, rng: &mut R) -> Vec<Coordinate> {
    (0..size).map_while(|_| sample_empty(board, rng)).collect()
}

/// Local adjacency of each member against `opponent`.
pub fn adjacency_fitness(board: &Board, population: &[Coordinate], opponent: Player) -> Vec<i32> {
    population
        .iter()
        .map(|&c| board.local_adjacency(c, opponent))
        .collect()
}

/// Roulette wheel selection: probability proportional to fitness.
///
/// Negative fitness counts as zero. When the total is zero every index is
/// equally likely.
pub fn roulette_wheel<R: Rng + ?Sized>(fitness: &[i32], rng: &mut R) -> usize {
    let total: i64 = fitness.iter().map(|&f| i64::from(f.max(0))).sum();

    if total == 0 {
        return rng.gen_range(0..fitness.len());
    }

    let mut spin = rng.gen_range(0..total);

    for (i, &f) in fitness.iter().enumerate() {
        spin -= i64::from(f.max(0));
        if spin < 0 {
            return i;
        }
    }

    // Unreachable while spin < total
    fitness.len() - 1
}

/// Fills one parent slot per population member, two roulette draws at a time.
pub fn select_parents<R: Rng + ?Sized>(
    population: &[Coordinate],
    fitness: &[i32],
    rng: &mut R,
) -> Vec<Coordinate> {
    let mut parents = Vec::with_capacity(population.len() + 1);

    for _ in 0..population.len().div_ceil(2) {
        parents.push(population[roulette_wheel(fitness, rng)]);
        parents.push(population[roulette_wheel(fitness, rng)]);
    }

    parents.truncate(population.len());
    parents
}

/// Uniform crossover: each axis comes from either parent with equal chance.
pub fn crossover<R: Rng + ?Sized>(a: Coordinate, b: Coordinate, rng: &mut R) -> Coordinate {
    let row = if rng.gen_bool(0.5) { a.row() } else { b.row() };
    let col = if rng.gen_bool(0.5) { a.col() } else { b.col() };
    Coordinate::wrapping(row, col)
}

/// With probability `rate`, replaces both axes with fresh random values.
/// The new cell may be occupied.
///
/// Rates above 1 always mutate; zero, negative and NaN rates never do.
/// `ConfigSection::validate` rejects such rates before they get here.
pub fn mutate<R: Rng + ?Sized>(c: Coordinate, rate: f64, rng: &mut R) -> Coordinate {
    if rate > 0.0 && rng.gen_bool(rate.min(1.0)) {
        Coordinate::wrapping(rng.gen_range(0..BOARD_SIZE), rng.gen_range(0..BOARD_SIZE))
    } else {
        c
    }
}

/// Breeds `size` children from randomly paired parents, then mutates them.
pub fn breed<R: Rng + ?Sized>(
    parents: &[Coordinate],
    size: usize,
    mutation_rate: f64,
    rng: &mut R,
) -> Vec<Coordinate> {
    (0..size)
        .map(|_| {
            let a = parents[rng.gen_range(0..parents.len())];
            let b = parents[rng.gen_range(0..parents.len())];
            mutate(crossover(a, b, rng), mutation_rate, rng)
        })
        .collect()
}

/// Index of the first maximum.
pub fn best_index<T: Ord + Copy>(values: &[T]) -> Option<usize> {
    let mut best: Option<(usize, T)> = None;

    for (i, &v) in values.iter().enumerate() {
        if best.map_or(true, |(_, b)| v > b) {
            best = Some((i, v));
        }
    }

    best.map(|(i, _)| i)
}
