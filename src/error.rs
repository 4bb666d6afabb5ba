//! Error types for the game and the score store

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimonError {
    #[error("failed to write high scores to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode high scores: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("terminal I/O error: {0}")]
    Terminal(#[from] io::Error),
    #[error("could not determine home directory; set SIMON_HIGHSCORE_FILE")]
    NoHomeDir,
    #[error("invalid value for {var}: '{value}'")]
    InvalidEnv { var: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, SimonError>;
