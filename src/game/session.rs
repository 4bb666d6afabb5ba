//! Game session driver
//!
//! Runs rounds until the first mismatch, then hands the score to the store.
//! All player interaction goes through `SessionIo`.

use super::color::{Color, ColorSource};
use super::state::{Game, GamePhase, GuessOutcome};
use crate::consts::DEFAULT_PLAYER_NAME;
use crate::error::Result;
use crate::highscores::{ScoreEntry, ScoreStore};

/// Player-facing side of a game session
pub trait SessionIo {
    /// Welcome text before the first round
    fn intro(&mut self) -> Result<()>;
    /// Show the whole sequence for the current round
    fn reveal(&mut self, sequence: &[Color]) -> Result<()>;
    /// Ask for the color at `index` (0-based) of the sequence
    fn prompt_guess(&mut self, index: usize) -> Result<Color>;
    /// All guesses of the round matched
    fn round_complete(&mut self, round: usize) -> Result<()>;
    /// The player missed; `score` is final
    fn game_over(&mut self, score: u32) -> Result<()>;
    /// Ask for the name to store with the score
    fn prompt_name(&mut self, default: &str) -> Result<String>;
    /// The score was stored; `rank` is None if it didn't make the table
    fn score_saved(&mut self, rank: Option<usize>) -> Result<()>;
}

/// Result of a finished, saved session
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub entry: ScoreEntry,
    pub rank: Option<usize>,
}

/// Play rounds until the first mismatch. Returns the final score.
pub fn play(io: &mut impl SessionIo, colors: &mut impl ColorSource) -> Result<u32> {
    let mut game = Game::new();
    io.intro()?;

    loop {
        game.new_round(colors);
        io.reveal(game.sequence())?;

        while game.phase() == GamePhase::Playing {
            let guess = io.prompt_guess(game.cursor())?;
            match game.guess(guess) {
                Some(GuessOutcome::Correct) => {}
                Some(GuessOutcome::RoundComplete) => io.round_complete(game.round())?,
                Some(GuessOutcome::Mismatch) | None => break,
            }
        }

        if game.is_over() {
            let score = game.score();
            log::info!("Game over after {} rounds, score {}", game.round(), score);
            io.game_over(score)?;
            return Ok(score);
        }
    }
}

/// Play a game, ask for the player's name and save the score
pub fn run(
    io: &mut impl SessionIo,
    colors: &mut impl ColorSource,
    store: &ScoreStore,
) -> Result<SessionSummary> {
    let score = play(io, colors)?;

    let name = io.prompt_name(DEFAULT_PLAYER_NAME)?;
    let name = match name.trim() {
        "" => DEFAULT_PLAYER_NAME.to_string(),
        trimmed => trimmed.to_string(),
    };

    let entry = ScoreEntry::new(name, score);
    let rank = store.save(entry.clone())?;
    io.score_saved(rank)?;

    Ok(SessionSummary { entry, rank })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::color::{PALETTE, RandomColors, ScriptedColors};

    /// Repeats every revealed sequence correctly until `fail_round`
    /// (1-based), where the last color is answered wrong.
    struct ScriptedPlayer {
        fail_round: usize,
        name: String,
        sequence: Vec<Color>,
        reveals: Vec<usize>,
        completed: Vec<usize>,
        final_score: Option<u32>,
        saved_rank: Option<Option<usize>>,
    }

    impl ScriptedPlayer {
        fn new(fail_round: usize, name: &str) -> Self {
            Self {
                fail_round,
                name: name.to_string(),
                sequence: Vec::new(),
                reveals: Vec::new(),
                completed: Vec::new(),
                final_score: None,
                saved_rank: None,
            }
        }
    }

    impl SessionIo for ScriptedPlayer {
        fn intro(&mut self) -> Result<()> {
            Ok(())
        }

        fn reveal(&mut self, sequence: &[Color]) -> Result<()> {
            self.sequence = sequence.to_vec();
            self.reveals.push(sequence.len());
            Ok(())
        }

        fn prompt_guess(&mut self, index: usize) -> Result<Color> {
            let expected = self.sequence[index];
            let last = index + 1 == self.sequence.len();
            if self.sequence.len() == self.fail_round && last {
                Ok(PALETTE[(expected.index() + 1) % PALETTE.len()])
            } else {
                Ok(expected)
            }
        }

        fn round_complete(&mut self, round: usize) -> Result<()> {
            self.completed.push(round);
            Ok(())
        }

        fn game_over(&mut self, score: u32) -> Result<()> {
            self.final_score = Some(score);
            Ok(())
        }

        fn prompt_name(&mut self, _default: &str) -> Result<String> {
            Ok(self.name.clone())
        }

        fn score_saved(&mut self, rank: Option<usize>) -> Result<()> {
            self.saved_rank = Some(rank);
            Ok(())
        }
    }

    #[test]
    fn test_play_until_mismatch() {
        let mut player = ScriptedPlayer::new(4, "A");
        let mut colors = RandomColors::seeded(2024);

        let score = play(&mut player, &mut colors).unwrap();

        assert_eq!(score, 3);
        assert_eq!(player.reveals, vec![1, 2, 3, 4]);
        assert_eq!(player.completed, vec![1, 2, 3]);
        assert_eq!(player.final_score, Some(3));
    }

    #[test]
    fn test_first_round_miss() {
        let mut player = ScriptedPlayer::new(1, "A");
        let mut colors = ScriptedColors::new([Color::Blue]);
        assert_eq!(play(&mut player, &mut colors).unwrap(), 0);
        assert!(player.completed.is_empty());
    }

    #[test]
    fn test_reveal_shows_growing_prefix() {
        let mut player = ScriptedPlayer::new(3, "A");
        let mut colors = ScriptedColors::new([Color::Green, Color::Yellow, Color::Red]);
        play(&mut player, &mut colors).unwrap();
        assert_eq!(player.sequence, vec![Color::Green, Color::Yellow, Color::Red]);
    }

    #[test]
    fn test_run_saves_score() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("scores.json"));
        store.save(ScoreEntry::new("Old", 10)).unwrap();

        let mut player = ScriptedPlayer::new(3, "  Ada  ");
        let mut colors = RandomColors::seeded(9);
        let summary = run(&mut player, &mut colors, &store).unwrap();

        assert_eq!(summary.entry.name, "Ada");
        assert_eq!(summary.entry.score, 2);
        assert_eq!(summary.rank, Some(2));
        assert_eq!(player.saved_rank, Some(Some(2)));

        let scores = store.load();
        let saved: Vec<(&str, u32)> = scores.iter().map(|e| (e.name.as_str(), e.score)).collect();
        assert_eq!(saved, vec![("Old", 10), ("Ada", 2)]);
    }

    #[test]
    fn test_blank_name_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreStore::new(dir.path().join("scores.json"));

        let mut player = ScriptedPlayer::new(2, "   ");
        let mut colors = RandomColors::seeded(3);
        let summary = run(&mut player, &mut colors, &store).unwrap();

        assert_eq!(summary.entry.name, DEFAULT_PLAYER_NAME);
        assert_eq!(summary.rank, Some(1));
    }
}
