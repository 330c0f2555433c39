mod display;

use anyhow::{anyhow, bail, Context, Result};
use capture_agents::{AgentsConfig, Strategy, StrategyKind};
use capture_core::{
    positions, Board, Coordinate, GameError, GameState, Move, Player, DEFAULT_ROUNDS,
};
use log::info;
use std::env;
use std::io::{self, Write};
use std::time::Instant;

/// Flags accepted anywhere on the command line.
struct Options {
    config: AgentsConfig,
    seed: Option<u64>,
    args: Vec<String>,
}

fn parse_options(raw: impl Iterator<Item = String>) -> Result<Options> {
    let mut config = AgentsConfig::default();
    let mut seed = None;
    let mut args = Vec::new();
    let mut raw = raw;

    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--config" => {
                let path = raw.next().context("--config needs a file path")?;
                config = AgentsConfig::load(&path)
                    .with_context(|| format!("Failed to load config from {path}"))?;
                info!("Loaded strategy configuration from {}", path);
            }
            "--seed" => {
                let value = raw.next().context("--seed needs a number")?;
                seed = Some(value.parse().with_context(|| format!("Invalid seed: {value}"))?);
            }
            _ => args.push(arg),
        }
    }

    Ok(Options { config, seed, args })
}

fn parse_rounds(arg: Option<&String>) -> Result<u32> {
    match arg {
        Some(s) => s.parse().with_context(|| format!("Invalid round count: {s}")),
        None => Ok(DEFAULT_ROUNDS),
    }
}

fn parse_coordinate(input: &str) -> Option<Coordinate> {
    let mut parts = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Coordinate::new(row, col)
}

/// Bot against bot until the rounds run out or the board fills.
fn run_match(kind_b: StrategyKind, kind_a: StrategyKind, rounds: u32, opts: &Options) -> Result<()> {
    let mut bot_a = kind_a.build(Player::A, &opts.config, opts.seed);
    let mut bot_b = kind_b.build(Player::B, &opts.config, opts.seed.map(|s| s.wrapping_add(1)));
    let mut state = GameState::new(rounds);

    println!("{} (A) vs {} (B), {} rounds each", bot_a.name(), bot_b.name(), rounds);

    while !state.is_over() {
        let bot: &mut Box<dyn Strategy> = match state.turn {
            Player::A => &mut bot_a,
            Player::B => &mut bot_b,
        };

        let start = Instant::now();
        let to = bot.decide(&state.board, state.rounds_left(state.turn))?;
        let elapsed = start.elapsed();
        let mv = state.play(to)?;

        println!("{} plays {} ({:.3}s)", bot.name(), mv, elapsed.as_secs_f64());
        display::print_board(&state.board);
    }

    info!("Match finished after {} moves", state.history.len());
    display::print_result(&state);
    Ok(())
}

/// Human (A) against a bot (B) over stdin.
fn play_interactive(kind: StrategyKind, rounds: u32, opts: &Options) -> Result<()> {
    let mut bot = kind.build(Player::B, &opts.config, opts.seed);
    let mut state = GameState::new(rounds);

    println!("Capture grid - you are A, {} is B", bot.name());
    println!("Enter moves as 'row col' (e.g. 3 4)");
    println!("Commands: 'quit', 'undo', 'new', 'help'");

    while !state.is_over() {
        display::print_board(&state.board);
        display::print_status(&state);

        print!("Your move: ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(());
        }
        let input = input.trim();

        match input {
            "quit" => return Ok(()),
            "help" => {
                println!("Enter moves like '3 4' or '3,4'");
                println!("Commands: quit, undo, new, help");
                continue;
            }
            "new" => {
                state = GameState::new(rounds);
                println!("New game started!");
                continue;
            }
            "undo" => {
                if state.undo(2) > 0 {
                    println!("Undid last move");
                } else {
                    println!("Nothing to undo");
                }
                continue;
            }
            _ => {}
        }

        let Some(to) = parse_coordinate(input) else {
            println!("Invalid move. Try again (e.g. 3 4)");
            continue;
        };

        match state.play(to) {
            Ok(_) => {}
            Err(GameError::Occupied(c)) => {
                println!("{} is taken", c);
                continue;
            }
            Err(e) => return Err(e.into()),
        }

        if state.is_over() {
            break;
        }

        println!("{} thinking...", bot.name());
        let to = bot.decide(&state.board, state.rounds_left(Player::B))?;
        println!("{} plays {}", bot.name(), to);
        state.play(to)?;
    }

    display::print_result(&state);
    Ok(())
}

fn decide_once(kind: StrategyKind, board: &Board, rounds: u32, opts: &Options) -> Result<()> {
    let mut bot = kind.build(Player::B, &opts.config, opts.seed);
    display::print_board(board);

    let start = Instant::now();
    let to = bot.decide(board, rounds)?;
    let elapsed = start.elapsed();

    println!("\n{} chooses {}", bot.name(), to);
    println!("Time: {:.3}s", elapsed.as_secs_f64());
    let next = board.apply_move(Move::new(to, Player::B));
    println!("Resulting position: {}", next.to_notation());
    Ok(())
}

fn parse_strategy(arg: Option<&String>) -> Result<StrategyKind> {
    let name = arg.ok_or_else(|| anyhow!("Missing strategy name"))?;
    Ok(name.parse()?)
}

fn parse_board(arg: Option<&String>) -> Result<Board> {
    match arg {
        Some(text) => Board::from_notation(text).with_context(|| format!("Invalid board: {text}")),
        None => Ok(Board::empty()),
    }
}

fn print_usage() {
    println!("Capture grid engine");
    println!("Commands:");
    println!("  match <bot-b> <bot-a> [rounds]   - Let two strategies play each other");
    println!("  play <bot> [rounds]              - Play against a strategy");
    println!("  decide <bot> [board] [rounds]    - Ask a strategy for one move (as B)");
    println!("  eval [board]                     - Show a position and its score");
    println!("Options:");
    println!("  --config <file.toml>             - Strategy parameters");
    println!("  --seed <n>                       - Seed for stochastic strategies");
    println!("\nStrategies:");
    for kind in StrategyKind::ALL {
        println!("  {}", kind);
    }
    println!("\nBoard notation: rows top to bottom separated by '/', A/B pieces, digits for empty runs");
    println!("  Empty: {}", positions::EMPTY);
    println!("  Cross: {}", positions::CROSS);
}

fn main() -> Result<()> {
    env_logger::init();

    let opts = parse_options(env::args().skip(1))?;
    let args = &opts.args;

    match args.first().map(String::as_str) {
        Some("match") => {
            let kind_b = parse_strategy(args.get(1))?;
            let kind_a = parse_strategy(args.get(2))?;
            let rounds = parse_rounds(args.get(3))?;
            run_match(kind_b, kind_a, rounds, &opts)
        }
        Some("play") => {
            let kind = parse_strategy(args.get(1))?;
            let rounds = parse_rounds(args.get(2))?;
            play_interactive(kind, rounds, &opts)
        }
        Some("decide") => {
            let kind = parse_strategy(args.get(1))?;
            let board = parse_board(args.get(2))?;
            let rounds = parse_rounds(args.get(3))?;
            decide_once(kind, &board, rounds, &opts)
        }
        Some("eval") => {
            let board = parse_board(args.get(1))?;
            display::print_board(&board);
            println!("Notation: {}", board.to_notation());
            Ok(())
        }
        Some(other) => {
            print_usage();
            bail!("Unknown command: {other}")
        }
        None => {
            print_usage();
            Ok(())
        }
    }
}
