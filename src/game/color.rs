//! Palette colors and color sources

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::PALETTE_SIZE;

/// One of the four palette colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

/// The fixed palette, in prompt order
pub const PALETTE: [Color; PALETTE_SIZE] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
        }
    }

    /// Position of this color in `PALETTE`
    pub fn index(&self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
            Color::Green => 2,
            Color::Yellow => 3,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "red" | "r" => Some(Color::Red),
            "blue" | "b" => Some(Color::Blue),
            "green" | "g" => Some(Color::Green),
            "yellow" | "y" => Some(Color::Yellow),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of the color appended each round
pub trait ColorSource {
    fn next_color(&mut self) -> Color;
}

/// Uniform random colors from a PCG32 stream
#[derive(Debug, Clone)]
pub struct RandomColors {
    seed: u64,
    rng: Pcg32,
}

impl RandomColors {
    /// Reproducible stream for the given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Stream seeded from the thread RNG
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl ColorSource for RandomColors {
    fn next_color(&mut self) -> Color {
        PALETTE[self.rng.random_range(0..PALETTE.len())]
    }
}

/// Replays a fixed list of colors, wrapping around at the end.
/// An empty script always yields the first palette color.
#[derive(Debug, Clone, Default)]
pub struct ScriptedColors {
    colors: Vec<Color>,
    next: usize,
}

impl ScriptedColors {
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        Self {
            colors: colors.into_iter().collect(),
            next: 0,
        }
    }
}

impl ColorSource for ScriptedColors {
    fn next_color(&mut self) -> Color {
        if self.colors.is_empty() {
            return PALETTE[0];
        }
        let color = self.colors[self.next % self.colors.len()];
        self.next += 1;
        color
    }
}
