use clap::Parser;
use minefield::{
    config::{DEFAULT_MINES, DEFAULT_SIZE},
    Action, Game, GameConfig, GameError, GameStatus, Position,
};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Play minefield in the terminal")]
struct Args {
    /// Side length of the square board
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    size: u32,

    /// Number of mines to place
    #[arg(short, long, default_value_t = DEFAULT_MINES)]
    mines: u32,

    /// Seed for a reproducible mine layout
    #[arg(long)]
    seed: Option<u64>,
}

enum Command {
    Move(Position, Action),
    Quit,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut config = GameConfig::new(args.size, args.mines);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    match run_game(config) {
        Ok(_) => println!("Thanks for playing!"),
        Err(e) => eprintln!("Game error: {}", e),
    }
}

fn run_game(config: GameConfig) -> Result<(), GameError> {
    let mut game = Game::new(config)?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !game.is_finished() {
        print_board(&game);

        let Some(line) = prompt(&mut lines) else {
            return Ok(());
        };
        match parse_command(&line) {
            Some(Command::Move(pos, action)) => {
                if let Err(e) = game.perform_action(pos, action) {
                    println!("Error: {}", e);
                }
            }
            Some(Command::Quit) => return Ok(()),
            None => println!("Usage: x y [r/f], or q to quit"),
        }
    }

    print_board(&game);
    match game.status() {
        GameStatus::Won => println!("Congratulations! You won!"),
        GameStatus::Lost => println!("Game Over!"),
        GameStatus::InProgress => unreachable!(),
    }

    Ok(())
}

fn print_board(game: &Game) {
    let snapshot = game.snapshot();

    // Column numbers
    print!("   ");
    for x in 0..snapshot.size() {
        print!("{:>2}", x % 100);
    }
    println!();

    for (y, row) in snapshot.rows().enumerate() {
        print!("{:>2} ", y % 100);
        for cell in row {
            print!(" {}", cell.display.symbol());
        }
        println!();
    }
    println!("Mines remaining: {}", snapshot.mines_remaining());
}

fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<String> {
    print!("Enter command (x y [r/f]): ");
    io::stdout().flush().ok()?;
    lines.next()?.ok()
}

fn parse_command(input: &str) -> Option<Command> {
    let mut parts = input.split_whitespace();

    let first = parts.next()?;
    if first.eq_ignore_ascii_case("q") {
        return Some(Command::Quit);
    }

    let x = first.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    let action = match parts.next().and_then(|s| s.chars().next()).unwrap_or('r') {
        'r' => Action::Reveal,
        'f' => Action::Flag,
        _ => return None,
    };

    Some(Command::Move(Position::new(x, y), action))
}
