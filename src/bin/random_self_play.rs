//! Plays one game of uniformly random legal moves through the rules engine.
//!
//! Run with:
//! `cargo run --release --bin random_self_play`
//! `cargo run --release --bin random_self_play -- --seed 42 --max-plies 300 --verbose`
//!
//! Rule variants come from `PLUM_RULES_CASTLING` and `PLUM_RULES_PAWN_THREATS`;
//! logging from `RUST_LOG`.

use log::info;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use plum_rules::game::collaborators::{LogStatusSink, RandomPromotion};
use plum_rules::game::rules_engine::RulesEngine;
use plum_rules::game_state::rules_config::RulesConfig;
use plum_rules::utils::render_board::render_board;

struct SelfPlayArgs {
    seed: u64,
    max_plies: u32,
    verbose: bool,
}

impl Default for SelfPlayArgs {
    fn default() -> Self {
        SelfPlayArgs {
            seed: 1234,
            max_plies: 200,
            verbose: false,
        }
    }
}

fn parse_args() -> Result<SelfPlayArgs, String> {
    let mut parsed = SelfPlayArgs::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => parsed.seed = next_number(&mut args, "--seed")?,
            "--max-plies" => parsed.max_plies = next_number(&mut args, "--max-plies")?,
            "--verbose" | "-v" => parsed.verbose = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(parsed)
}

fn next_number<T: std::str::FromStr>(
    args: &mut impl Iterator<Item = String>,
    flag: &str,
) -> Result<T, String> {
    let value = args.next().ok_or_else(|| format!("{flag} needs a value"))?;
    value
        .parse()
        .map_err(|_| format!("{flag} expects a number, got {value}"))
}

fn main() -> Result<(), String> {
    env_logger::init();
    let args = parse_args()?;
    let config = RulesConfig::from_env().map_err(|e| e.to_string())?;
    info!("seed={} max_plies={} config={config:?}", args.seed, args.max_plies);

    let mut move_rng = StdRng::seed_from_u64(args.seed);
    let promotion_rng = StdRng::seed_from_u64(args.seed.wrapping_add(1));
    let mut engine =
        RulesEngine::with_config(config, RandomPromotion::new(promotion_rng), LogStatusSink);

    let mut plies = 0;
    while plies < args.max_plies && !engine.is_game_over() {
        let moves = engine.legal_moves();
        let Some(chosen) = moves.choose(&mut move_rng).copied() else {
            break;
        };
        let mover = engine.side_to_move();
        engine.select_piece(chosen.from);
        if !engine.move_piece(chosen.to) {
            return Err(format!("generated move {} -> {} was rejected", chosen.from, chosen.to));
        }
        plies += 1;
        if args.verbose {
            println!("{plies:>3}. {mover} {} -> {}", chosen.from, chosen.to);
            println!("{}", render_board(engine.board()));
        }
    }

    println!("{}", render_board(engine.board()));
    println!("plies: {plies}");
    println!("result: {}", engine.status());
    Ok(())
}
