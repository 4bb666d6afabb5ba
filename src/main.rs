//! Simon Says entry point
//!
//! Parses the command, resolves configuration and dispatches to the game or
//! the high score store.

use std::io;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use crossterm::style::Stylize;

use simon_says::game::{self, RandomColors};
use simon_says::terminal::Terminal;
use simon_says::{Config, ScoreStore};

#[derive(Parser, Debug)]
#[command(name = "simon", version, about = "Simon Says color memory game")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start a new game
    Play,
    /// View high scores
    Highscore,
    /// Clear high scores
    Reset,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        println!("{}", "Use the \"play\" command to start the game!".cyan());
        return Ok(());
    };

    let config = Config::from_env().context("failed to load configuration")?;
    let store = ScoreStore::new(&config.highscore_path);
    log::debug!("High score file: {}", store.path().display());

    match command {
        Commands::Play => {
            let mut colors = match config.seed {
                Some(seed) => RandomColors::seeded(seed),
                None => RandomColors::from_entropy(),
            };
            log::debug!("Color seed: {}", colors.seed());
            let mut terminal = Terminal::new(config);
            game::run(&mut terminal, &mut colors, &store)?;
        }
        Commands::Highscore => store.show(&mut io::stdout())?,
        Commands::Reset => {
            store.reset()?;
            println!("{}", "High scores cleared!".green());
        }
    }

    Ok(())
}
