//! # Dungeon Escape Terminal Front End
//!
//! A thin stdin/stdout driver for the game core: it prints the rules,
//! forwards one action per typed line into the session, and re-renders the
//! snapshot after every turn. All game rules live in the library.

use clap::Parser;
use dungeon_escape::{
    Command, Dungeon, DungeonResult, GameSession, InputHandler, TextDisplay,
};
use log::info;
use std::io::{self, BufRead, Write};

/// Command line arguments for Dungeon Escape.
#[derive(Parser, Debug)]
#[command(name = "dungeon-escape")]
#[command(about = "A small turn-based dungeon-crawl")]
#[command(version)]
struct Args {
    /// Player name; prompted for when omitted
    #[arg(short, long)]
    name: Option<String>,

    /// Emit a JSON snapshot after every turn instead of text panels
    #[arg(long)]
    json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> DungeonResult<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .parse_filters(&args.log_level)
        .init();

    info!("Starting Dungeon Escape v{}", dungeon_escape::VERSION);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let name = match &args.name {
        Some(name) => name.clone(),
        None => prompt_name(&mut lines)?,
    };

    loop {
        run_session(&args, &name, &mut lines)?;

        print!("\nPlay again? (y/n): ");
        io::stdout().flush()?;
        match lines.next() {
            Some(line) => {
                if !line?.trim().eq_ignore_ascii_case("y") {
                    break;
                }
            }
            None => break,
        }
    }

    println!("Thanks for playing!");
    Ok(())
}

/// Runs one full session from the rules screen to the game-over summary.
fn run_session(
    args: &Args,
    name: &str,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> DungeonResult<()> {
    let handler = InputHandler::new();
    let display = TextDisplay::new();
    let mut session = GameSession::new(name);

    println!("{}", Dungeon::rules());
    println!("\n{}", session.last_message());

    while !session.is_over() {
        if args.json {
            println!("{}", serde_json::to_string(&session.snapshot())?);
        } else {
            println!("\n{}", display.status_panel(&session.snapshot()));
        }
        print!("{}", display.action_menu());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            // Input closed; treat it as quitting.
            session.resolve_turn(dungeon_escape::Action::Quit)?;
            break;
        };

        let report = match handler.parse(&line?) {
            Command::Play(action) => session.resolve_turn(action)?,
            Command::Help => {
                println!("\n{}", Dungeon::rules());
                continue;
            }
            Command::Unrecognized => session.waste_turn()?,
        };
        println!("\n{}", report.message);
    }

    if args.json {
        println!("{}", serde_json::to_string(&session.snapshot())?);
    } else {
        println!("\n{}", display.game_over(&session.snapshot()));
    }
    Ok(())
}

fn prompt_name(lines: &mut impl Iterator<Item = io::Result<String>>) -> DungeonResult<String> {
    print!("Enter your name: ");
    io::stdout().flush()?;
    let name = match lines.next() {
        Some(line) => line?.trim().to_string(),
        None => String::new(),
    };
    if name.is_empty() {
        Ok(String::from("Adventurer"))
    } else {
        Ok(name)
    }
}
