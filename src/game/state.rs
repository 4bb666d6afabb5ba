//! Sequence state and the round state machine

use super::color::{Color, ColorSource};

/// Current phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Accepting guesses for the current round
    Playing,
    /// Every guess of the round matched, waiting for the next round
    RoundComplete,
    /// A guess missed; terminal
    GameOver,
}

/// Result of a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Matched, more guesses needed this round
    Correct,
    /// Matched the last color of the round
    RoundComplete,
    /// Missed; the game is over
    Mismatch,
}

/// Append one color from `source` to the sequence
pub fn new_round(sequence: &mut Vec<Color>, source: &mut impl ColorSource) {
    sequence.push(source.next_color());
}

/// True iff `guess` is the color at `index`
pub fn check_guess(sequence: &[Color], index: usize, guess: Color) -> bool {
    sequence.get(index) == Some(&guess)
}

/// Rounds fully completed: the last round doesn't count if it was failed
pub fn score(sequence: &[Color], failed: bool) -> u32 {
    let len = sequence.len() as u32;
    if failed { len.saturating_sub(1) } else { len }
}

/// A single game: the sequence plus the position of the next expected guess
#[derive(Debug, Clone)]
pub struct Game {
    sequence: Vec<Color>,
    cursor: usize,
    phase: GamePhase,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Empty game, ready for its first round
    pub fn new() -> Self {
        Self {
            sequence: Vec::new(),
            cursor: 0,
            // Nothing to guess yet; the first `new_round` starts play
            phase: GamePhase::RoundComplete,
        }
    }

    pub fn sequence(&self) -> &[Color] {
        &self.sequence
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Index of the next color the player must enter
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of rounds started so far (1-based once playing)
    pub fn round(&self) -> usize {
        self.sequence.len()
    }

    /// Grow the sequence and start accepting guesses from the beginning.
    /// No-op once the game is over.
    pub fn new_round(&mut self, source: &mut impl ColorSource) {
        if self.phase == GamePhase::GameOver {
            log::warn!("new_round called after game over; ignoring");
            return;
        }
        new_round(&mut self.sequence, source);
        self.cursor = 0;
        self.phase = GamePhase::Playing;
        log::debug!("Round {} started", self.sequence.len());
    }

    /// Feed the player's next guess. Returns `None` outside `Playing`.
    pub fn guess(&mut self, color: Color) -> Option<GuessOutcome> {
        if self.phase != GamePhase::Playing {
            return None;
        }

        if !check_guess(&self.sequence, self.cursor, color) {
            self.phase = GamePhase::GameOver;
            log::debug!(
                "Mismatch at position {} of round {}: expected {}, got {}",
                self.cursor + 1,
                self.sequence.len(),
                self.sequence[self.cursor],
                color
            );
            return Some(GuessOutcome::Mismatch);
        }

        self.cursor += 1;
        if self.cursor == self.sequence.len() {
            self.phase = GamePhase::RoundComplete;
            Some(GuessOutcome::RoundComplete)
        } else {
            Some(GuessOutcome::Correct)
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Rounds fully completed so far
    pub fn score(&self) -> u32 {
        match self.phase {
            GamePhase::RoundComplete => score(&self.sequence, false),
            GamePhase::Playing | GamePhase::GameOver => score(&self.sequence, true),
        }
    }
}
