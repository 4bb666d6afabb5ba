//! Terminal front end
//!
//! Colored output and screen clearing via crossterm, interactive prompts via
//! dialoguer.

use std::io::{self, Stdout, Write};
use std::thread;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::{self, Stylize};
use crossterm::terminal::{Clear, ClearType};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::config::Config;
use crate::consts::MAX_HIGH_SCORES;
use crate::error::Result;
use crate::game::{Color, PALETTE, SessionIo};

/// Terminal color used to render a palette color
pub fn term_color(color: Color) -> style::Color {
    match color {
        Color::Red => style::Color::Red,
        Color::Blue => style::Color::Blue,
        Color::Green => style::Color::Green,
        Color::Yellow => style::Color::Yellow,
    }
}

/// Interactive session on stdout/stdin
pub struct Terminal {
    config: Config,
    theme: ColorfulTheme,
    out: Stdout,
}

impl Terminal {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            theme: ColorfulTheme::default(),
            out: io::stdout(),
        }
    }

    fn clear(&mut self) -> Result<()> {
        if self.config.clear_screen {
            execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}

impl SessionIo for Terminal {
    fn intro(&mut self) -> Result<()> {
        writeln!(self.out, "{}", "Welcome to Simon Says!".cyan())?;
        writeln!(
            self.out,
            "{}",
            "Memorize the sequence of colors and repeat it.".cyan()
        )?;
        Ok(())
    }

    fn reveal(&mut self, sequence: &[Color]) -> Result<()> {
        writeln!(self.out, "{}", "Watch the sequence...".cyan())?;
        for color in sequence {
            writeln!(
                self.out,
                "{}",
                style::style(color.as_str()).with(term_color(*color)).bold()
            )?;
            self.out.flush()?;
            thread::sleep(self.config.reveal_delay);
            self.clear()?;
        }
        writeln!(self.out, "{}", "Now repeat the sequence!".cyan())?;
        Ok(())
    }

    fn prompt_guess(&mut self, index: usize) -> Result<Color> {
        let items: Vec<&str> = PALETTE.iter().map(Color::as_str).collect();
        let choice = Select::with_theme(&self.theme)
            .with_prompt(format!("Enter color {}:", index + 1))
            .items(&items)
            .default(0)
            .interact()?;
        Ok(PALETTE[choice])
    }

    fn round_complete(&mut self, round: usize) -> Result<()> {
        log::debug!("Round {} complete", round);
        writeln!(self.out, "{}", "Correct! Next round...".green())?;
        self.out.flush()?;
        thread::sleep(self.config.round_pause);
        self.clear()
    }

    fn game_over(&mut self, score: u32) -> Result<()> {
        writeln!(self.out, "{}", "Game over! You got the sequence wrong.".red())?;
        writeln!(self.out, "{}", format!("Your score: {score}").red())?;
        Ok(())
    }

    fn prompt_name(&mut self, default: &str) -> Result<String> {
        let name = Input::<String>::with_theme(&self.theme)
            .with_prompt("Enter your name to save your score:")
            .default(default.to_string())
            .interact_text()?;
        Ok(name)
    }

    fn score_saved(&mut self, rank: Option<usize>) -> Result<()> {
        match rank {
            Some(rank) => writeln!(
                self.out,
                "{}",
                format!("New high score! You placed #{rank}.").green()
            )?,
            None => writeln!(
                self.out,
                "{}",
                format!("Score saved, but it didn't make the top {MAX_HIGH_SCORES}.").yellow()
            )?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_colors_are_distinct() {
        let colors: Vec<style::Color> = PALETTE.iter().map(|c| term_color(*c)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
