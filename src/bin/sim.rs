use caro::{
    init_logging, Configuration, Difficulty, GameEngine, GameMode, Mark, MoveOutcome,
};
use clap::Parser;
use serde_json::json;

/// Play computer-vs-computer matches and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 10)]
    games: u32,
    #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
    x: Difficulty,
    #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
    o: Difficulty,
    #[arg(long, default_value_t = 3)]
    size: usize,
    #[arg(long, default_value_t = 3)]
    win: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let config = Configuration::new(args.size, args.win, Difficulty::default(), GameMode::HumanVsHuman)?;
    let mut engine = GameEngine::seeded(config, args.seed);

    let (mut x_wins, mut o_wins, mut draws) = (0u32, 0u32, 0u32);
    let mut total_moves = 0usize;
    for game in 0..args.games {
        engine.reset();
        loop {
            let difficulty = match engine.current_player() {
                Mark::X => args.x,
                Mark::O => args.o,
            };
            let pos = engine
                .compute_opponent_move(difficulty)
                .ok_or_else(|| anyhow::anyhow!("no move available in game {}", game))?;
            match engine.submit_move(pos.row, pos.col)? {
                MoveOutcome::Continued => continue,
                MoveOutcome::Won(Mark::X, _) => x_wins += 1,
                MoveOutcome::Won(Mark::O, _) => o_wins += 1,
                MoveOutcome::Drawn => draws += 1,
            }
            break;
        }
        total_moves += engine.history().len();
    }

    let result = json!({
        "games": args.games,
        "seed": args.seed,
        "board_size": args.size,
        "win_length": args.win,
        "x": args.x,
        "o": args.o,
        "x_wins": x_wins,
        "o_wins": o_wins,
        "draws": draws,
        "moves": total_moves,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
