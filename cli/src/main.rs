mod commands;
mod config;

use std::io;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use tictactoe_engine::tictactoe::{Difficulty, Mark, TicTacToeSession, TicTacToeSessionSettings};
use tictactoe_engine::{SessionRng, log, log_error, logger};

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report the winner and winning line of a board such as "XX.OO....".
    Evaluate { board: String },
    /// Print the cell the bot would take, or -1 on a full board.
    Select {
        board: String,
        #[arg(long, default_value = "hard")]
        difficulty: Difficulty,
        #[arg(long, value_enum, default_value_t = MarkArg::O)]
        bot_mark: MarkArg,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play against the bot in the terminal.
    Play {
        #[arg(long = "config")]
        config_path: Option<String>,
        #[arg(long)]
        difficulty: Option<Difficulty>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Pit two bots against each other and print the tally.
    Simulate {
        #[arg(long, default_value_t = 100)]
        games: u32,
        #[arg(long, default_value = "hard")]
        x_difficulty: Difficulty,
        #[arg(long, default_value = "hard")]
        o_difficulty: Difficulty,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum MarkArg {
    X,
    O,
}

impl From<MarkArg> for Mark {
    fn from(mark: MarkArg) -> Self {
        match mark {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

fn session_rng(seed: Option<u64>) -> SessionRng {
    match seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let result = run(args.command);
    if let Err(ref err) = result {
        log_error!("Command failed: {}", err);
    }
    result.map_err(Into::into)
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Evaluate { board } => {
            println!("{}", commands::evaluate::run_evaluate(&board)?);
        }
        Command::Select {
            board,
            difficulty,
            bot_mark,
            seed,
        } => {
            let index = commands::select::run_select(&board, difficulty, bot_mark.into(), seed)?;
            println!("{}", index);
        }
        Command::Play {
            config_path,
            difficulty,
            seed,
        } => {
            let mut game_config = config::get_config_manager(config_path.as_deref()).get_config()?;
            if let Some(difficulty) = difficulty {
                game_config.difficulty = difficulty;
            }

            let rng = session_rng(seed.or(game_config.seed));
            log!(
                "Starting match: difficulty {}, first player {:?}, seed {}",
                game_config.difficulty,
                game_config.first_player,
                rng.seed()
            );

            let mut session = TicTacToeSession::new(TicTacToeSessionSettings::from(&game_config), rng);
            let score = commands::play::run_play(
                &mut session,
                Duration::from_millis(game_config.bot_delay_ms),
                io::stdin().lock(),
                &mut io::stdout(),
            )?;

            log!(
                "Match finished: you {} - bot {} (draws {})",
                score.human_wins,
                score.bot_wins,
                score.draws
            );
        }
        Command::Simulate {
            games,
            x_difficulty,
            o_difficulty,
            seed,
        } => {
            let mut rng = session_rng(seed);
            log!(
                "Simulating {} games: X {} vs O {}, seed {}",
                games,
                x_difficulty,
                o_difficulty,
                rng.seed()
            );

            let tally = commands::simulate::run_simulation(games, x_difficulty, o_difficulty, &mut rng)?;
            println!(
                "X wins: {}\nO wins: {}\ndraws: {}",
                tally.x_wins, tally.o_wins, tally.draws
            );
        }
    }

    Ok(())
}
