//! Simon Says - a color memory game for the terminal
//!
//! Core modules:
//! - `game`: Sequence state, round state machine, session driver
//! - `highscores`: Top-5 leaderboard persisted as JSON
//! - `config`: Paths and timings resolved from the environment
//! - `terminal`: Colored output and interactive prompts

pub mod config;
pub mod error;
pub mod game;
pub mod highscores;
pub mod terminal;

pub use config::Config;
pub use error::{Result, SimonError};
pub use highscores::{HighScores, ScoreEntry, ScoreStore};

/// Game configuration constants
pub mod consts {
    /// Number of colors in the palette
    pub const PALETTE_SIZE: usize = 4;

    /// Maximum number of entries kept in the high score table
    pub const MAX_HIGH_SCORES: usize = 5;

    /// High score file name, placed in the user's home directory
    pub const HIGHSCORE_FILE_NAME: &str = ".simon_highscores.json";

    /// Delay while each color of the sequence is shown (ms)
    pub const REVEAL_DELAY_MS: u64 = 1000;
    /// Pause after a completed round (ms)
    pub const ROUND_PAUSE_MS: u64 = 1000;

    /// Name used when the player doesn't enter one
    pub const DEFAULT_PLAYER_NAME: &str = "Player";
}
