//! Command line front end for the hare hunt.
//!
//! Reads one command per line from stdin and redraws the board after every
//! change the engine reports.

mod command;
mod telemetry;
mod view;

use anyhow::{Context, Result};
use clap::Parser;
use command::Command;
use hare_core::{ScenarioConfig, DEFAULT_SCENARIO};
use hare_world::{GameEngine, StateChange};
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "hunter", version, about = "Shoot hares on a grid before they spread")]
struct Args {
    /// Built-in scenario to play
    #[arg(long, default_value = DEFAULT_SCENARIO)]
    scenario: String,

    /// TOML scenario file; takes precedence over --scenario
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print a JSON snapshot per change instead of the board
    #[arg(long)]
    json: bool,

    /// List built-in scenarios and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.list {
        for name in ScenarioConfig::builtin_names() {
            println!("{name}");
        }
        return Ok(());
    }

    telemetry::init_logging()?;

    let config = match &args.config {
        Some(path) => ScenarioConfig::load(path)
            .with_context(|| format!("loading scenario from {}", path.display()))?,
        None => ScenarioConfig::builtin(&args.scenario)?,
    };

    let mut engine = GameEngine::new(&config).context("starting game")?;
    let json = args.json;
    engine.subscribe(Box::new(move |engine: &GameEngine, _: &StateChange| {
        print_state(engine, json);
    }));
    print_state(&engine, json);

    run(&mut engine, json, io::stdin().lock())?;

    info!(
        moves = engine.history_len(),
        hares = engine.hares().len(),
        "Session ended"
    );
    Ok(())
}

fn run(engine: &mut GameEngine, json: bool, input: impl BufRead) -> Result<()> {
    for (index, line) in input.lines().enumerate() {
        let line = line.context("reading command")?;
        let command = match Command::parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!(line = index + 1, "{e}");
                continue;
            }
        };

        match command {
            Command::Toggle(node) => {
                if let Err(e) = engine.toggle_selection(node) {
                    warn!(line = index + 1, "{e}");
                }
            }
            Command::Finish => {
                engine.finish_move();
            }
            Command::Undo => {
                engine.undo();
            }
            Command::Redo => {
                engine.redo();
            }
            Command::Recall => {
                engine.recall_selection();
            }
            Command::Show => print_state(engine, json),
            Command::Quit => break,
        }
    }
    Ok(())
}

fn print_state(engine: &GameEngine, json: bool) {
    if json {
        match view::render_json(engine) {
            Ok(line) => println!("{line}"),
            Err(e) => warn!("Failed to serialize snapshot: {e}"),
        }
    } else {
        println!("{}\n", view::render_board(engine));
    }
}
