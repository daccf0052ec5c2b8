use anyhow::Result;
use clap::{Parser, Subcommand};

use std::io::{stdin, stdout, Stdin, Write};

use connect4_minimax::{
    tournament::{self, TournamentConfig},
    *,
};

mod display;
use display::display;

#[derive(Parser)]
#[command(about = "Play Connect 4 against a depth-limited minimax agent")]
struct Cli {
    /// Log each decision's candidate count and leaf count
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play an interactive game (the default)
    Play {
        /// Search depth in plies
        #[arg(short, long, default_value_t = 6)]
        depth: u32,
        /// Fail on connected runs the heuristic table does not cover instead of clamping
        #[arg(long)]
        strict: bool,
    },
    /// Play two agents against each other from every opening
    Tournament {
        #[arg(long, default_value_t = 4)]
        depth_a: u32,
        #[arg(long, default_value_t = 2)]
        depth_b: u32,
        /// Number of opening moves to enumerate
        #[arg(long, default_value_t = 2)]
        plies: usize,
        #[arg(long)]
        strict: bool,
    },
}

fn policy(strict: bool) -> CoefficientPolicy {
    if strict {
        CoefficientPolicy::Strict
    } else {
        CoefficientPolicy::Saturate
    }
}

fn ask_yes_no(stdin: &Stdin, question: &str) -> Result<bool> {
    loop {
        let mut buffer = String::new();
        print!("{} y/n: ", question);
        stdout().flush()?;
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn player_number(color: Color) -> usize {
    if color == Color::Positive {
        1
    } else {
        2
    }
}

fn play(config: SearchConfig) -> Result<()> {
    let stdin = stdin();
    let mut board = GridBoard::new();
    let mut bot = Minimax::new(config);

    println!("Welcome to Connect 4\n");

    let ai_players = (
        ask_yes_no(&stdin, "Is player 1 AI controlled?")?,
        ask_yes_no(&stdin, "Is player 2 AI controlled?")?,
    );

    // game loop
    loop {
        display(&board)?;

        if let Some(winner) = board.winner() {
            println!("Player {} wins!", player_number(winner));
            break;
        }
        if board.legal_moves().is_empty() {
            println!("Draw!");
            break;
        }

        let mover = board.to_move();
        let column = if (mover == Color::Positive && ai_players.0)
            || (mover == Color::Negative && ai_players.1)
        {
            println!("AI is thinking...");
            stdout().flush()?;

            // slow down play if both players are AI
            if ai_players == (true, true) {
                std::thread::sleep(std::time::Duration::new(1, 0));
            }

            // the agent plays the positive color, so show it a swapped board when it moves second
            let selection = match mover {
                Color::Negative => bot.select_move(&board.inverted())?,
                _ => bot.select_move(&board)?,
            };
            println!(
                "Best move: {} (value {}, {} positions evaluated)",
                selection.mv + 1,
                selection.value,
                bot.last_leaf_count()
            );
            selection.mv
        } else {
            print!("Move input > ");
            stdout().flush()?;
            let mut input_str = String::new();
            stdin.read_line(&mut input_str)?;

            match input_str.trim().parse::<usize>() {
                Ok(column @ 1..=WIDTH) => column - 1,
                _ => {
                    println!("Invalid number: {}", input_str.trim());
                    continue;
                }
            }
        };

        if let Err(err) = board.apply_move(mover, column) {
            println!("{}", err);
            // try the move again
            continue;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.verbose { "debug" } else { "warn" }),
    )
    .init();

    match cli.command.unwrap_or(Command::Play {
        depth: SearchConfig::default().depth,
        strict: false,
    }) {
        Command::Play { depth, strict } => play(
            SearchConfig::default()
                .with_depth(depth)
                .with_coefficient_policy(policy(strict)),
        ),
        Command::Tournament {
            depth_a,
            depth_b,
            plies,
            strict,
        } => {
            let base = SearchConfig::default().with_coefficient_policy(policy(strict));
            let config = TournamentConfig {
                agent_a: base.with_depth(depth_a),
                agent_b: base.with_depth(depth_b),
                opening_plies: plies,
            };
            let result = tournament::run(&config, true)?;
            println!(
                "Depth {} vs depth {} over {} games: {} wins, {} losses, {} draws",
                depth_a,
                depth_b,
                result.games(),
                result.wins,
                result.losses,
                result.draws
            );
            Ok(())
        }
    }
}
