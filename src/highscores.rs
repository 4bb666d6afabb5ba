//! High score leaderboard system
//!
//! Persisted as a pretty-printed JSON array, tracks the top 5 scores.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use crossterm::style::Stylize;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_HIGH_SCORES;
use crate::error::{Result, SimonError};

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Player's name
    pub name: String,
    /// Rounds completed
    pub score: u32,
    /// When the game ended
    pub date: DateTime<Utc>,
}

impl ScoreEntry {
    /// Entry stamped with the current time
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
            date: Utc::now(),
        }
    }
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighScores {
    entries: Vec<ScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score would make it onto the leaderboard
    pub fn qualifies(&self, score: u32) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Append an entry, re-sort and trim to the top scores.
    /// Returns the rank achieved (1-indexed) or None if it was trimmed off.
    pub fn insert(&mut self, entry: ScoreEntry) -> Option<usize> {
        let score = entry.score;
        self.entries.push(entry);
        // Stable: the new entry lands after any equal scores
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        let rank = self.entries.iter().filter(|e| e.score >= score).count();
        self.entries.truncate(MAX_HIGH_SCORES);

        (rank <= MAX_HIGH_SCORES).then_some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoreEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }
}

/// File-backed high score table
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the table. A missing or unreadable file is an empty table.
    pub fn load(&self) -> HighScores {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No high score file at {}", self.path.display());
                return HighScores::new();
            }
            Err(e) => {
                log::warn!("Could not read {}: {}", self.path.display(), e);
                return HighScores::new();
            }
        };

        match serde_json::from_str::<HighScores>(&json) {
            Ok(scores) => {
                log::debug!("Loaded {} high scores", scores.len());
                scores
            }
            Err(e) => {
                log::warn!(
                    "Ignoring corrupt high score file {}: {}",
                    self.path.display(),
                    e
                );
                HighScores::new()
            }
        }
    }

    /// Add an entry and persist the trimmed table.
    /// Returns the rank achieved, or None if the score didn't make the cut.
    pub fn save(&self, entry: ScoreEntry) -> Result<Option<usize>> {
        let mut scores = self.load();
        let rank = scores.insert(entry);
        self.write(&scores)?;
        log::info!("High scores saved ({} entries)", scores.len());
        Ok(rank)
    }

    /// Overwrite the store with an empty table
    pub fn reset(&self) -> Result<()> {
        self.write(&HighScores::new())?;
        log::info!("High scores cleared at {}", self.path.display());
        Ok(())
    }

    /// Render the current table, or a notice when there is nothing to show
    pub fn show(&self, out: &mut impl Write) -> Result<()> {
        let scores = self.load();
        if scores.is_empty() {
            writeln!(out, "{}", "No high scores yet.".yellow())?;
            return Ok(());
        }

        writeln!(out, "{}", "High Scores:".blue())?;
        for (i, entry) in scores.iter().enumerate() {
            writeln!(
                out,
                "{}. {} - {} points ({})",
                i + 1,
                entry.name,
                entry.score,
                entry.date.format("%Y-%m-%d %H:%M UTC")
            )?;
        }
        Ok(())
    }

    fn write(&self, scores: &HighScores) -> Result<()> {
        let json = serde_json::to_string_pretty(scores)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| SimonError::Write {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }
        fs::write(&self.path, json).map_err(|source| SimonError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
