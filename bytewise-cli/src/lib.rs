//! # Bytewise CLI
//!
//! Argument parsing, logging setup and lesson dispatch shared by the
//! `bytewise` binary and the three single-lesson binaries.

pub mod logging;

use anyhow::Context;
use bytewise_core::RenderConfig;
use bytewise_lessons::{render, Lesson};
use clap::{Parser, Subcommand};
use std::io::Write;

#[derive(Debug, Parser)]
#[command(name = "bytewise")]
#[command(about = "Beginner lessons on data types, binary/hex and memory")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Leave the emoji off the closing banners
    #[arg(long, global = true)]
    pub no_emoji: bool,

    /// Width of the `=` rules framing each section
    #[arg(long, default_value_t = RenderConfig::DEFAULT.rule_width, global = true)]
    pub width: usize,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Data types and their sizes
    Types,
    /// Binary, hexadecimal and bitwise operations
    Binary,
    /// Addresses, aliasing and copies
    Memory,
    /// All three lessons in order (default)
    All,
}

impl Command {
    pub fn lessons(&self) -> Vec<Lesson> {
        match self {
            Command::Types => vec![Lesson::DataTypes],
            Command::Binary => vec![Lesson::BinaryHex],
            Command::Memory => vec![Lesson::Memory],
            Command::All => Lesson::ALL.to_vec(),
        }
    }
}

impl Cli {
    pub fn render_config(&self) -> anyhow::Result<RenderConfig> {
        RenderConfig::new(self.width, !self.no_emoji).context("invalid --width")
    }

    pub fn lessons(&self) -> Vec<Lesson> {
        self.command.unwrap_or(Command::All).lessons()
    }
}

/// Render `lessons` to `out`, separated by a blank line
pub fn run_lessons<W: Write>(
    lessons: &[Lesson],
    config: &RenderConfig,
    out: &mut W,
) -> anyhow::Result<()> {
    for (i, lesson) in lessons.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        let page = render(*lesson, config).with_context(|| format!("rendering {lesson} lesson"))?;
        out.write_all(page.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

/// Entry point of the `bytewise` binary
pub fn run(cli: Cli) -> anyhow::Result<()> {
    logging::init(cli.verbose);
    let config = cli.render_config()?;
    tracing::debug!(%config, lessons = ?cli.lessons(), "starting");
    run_lessons(&cli.lessons(), &config, &mut std::io::stdout().lock())
}

/// Entry point of a single-lesson binary: no arguments, default layout
pub fn run_standalone(lesson: Lesson) -> anyhow::Result<()> {
    logging::init(0);
    run_lessons(&[lesson], &RenderConfig::DEFAULT, &mut std::io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_lessons() {
        let cli = Cli::try_parse_from(["bytewise"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.lessons(), Lesson::ALL.to_vec());
        assert_eq!(cli.render_config().unwrap(), RenderConfig::DEFAULT);
    }

    #[test]
    fn test_subcommands() {
        let cli = Cli::try_parse_from(["bytewise", "binary"]).unwrap();
        assert_eq!(cli.lessons(), vec![Lesson::BinaryHex]);

        let cli = Cli::try_parse_from(["bytewise", "memory", "-vv"]).unwrap();
        assert_eq!(cli.lessons(), vec![Lesson::Memory]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_presentation_flags() {
        let cli = Cli::try_parse_from(["bytewise", "--no-emoji", "--width", "30", "types"]).unwrap();
        let config = cli.render_config().unwrap();
        assert_eq!(config.rule_width, 30);
        assert!(!config.emoji);
    }

    #[test]
    fn test_bad_width_is_reported() {
        let cli = Cli::try_parse_from(["bytewise", "--width", "5"]).unwrap();
        let err = cli.render_config().unwrap_err();
        assert!(format!("{err:#}").contains("rule_width must be in range"));
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["bytewise", "graphics"]).is_err());
    }

    #[test]
    fn test_run_lessons_writes_pages() {
        let mut out = Vec::new();
        run_lessons(&Lesson::ALL, &RenderConfig::DEFAULT, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("RUST DATA TYPES"));
        assert!(text.contains("BITWISE OPERATIONS"));
        assert!(text.contains("MEMORY SIZES"));
    }
}
