//! Game engine
//!
//! Pure round logic lives in `state`; randomness is injected through
//! `ColorSource` so a seeded or scripted source makes every game reproducible.
//! `session` drives a full game against an abstract player.

pub mod color;
pub mod session;
pub mod state;

pub use color::{Color, ColorSource, PALETTE, RandomColors, ScriptedColors};
pub use session::{SessionIo, SessionSummary, play, run};
pub use state::{Game, GamePhase, GuessOutcome, check_guess, new_round, score};
