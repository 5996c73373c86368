//! Page layout shared by all lessons

use crate::error::Result;
use bytewise_core::RenderConfig;
use std::fmt::Write;

/// Lines are indented by this much under a numbered heading
pub const INDENT: &str = "   ";

/// Text page under construction
pub struct Page<'a> {
    out: String,
    config: &'a RenderConfig,
}

impl<'a> Page<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            out: String::new(),
            config,
        }
    }

    /// Rule, title, rule
    pub fn banner(&mut self, title: &str) -> Result<()> {
        let rule = self.config.rule();
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "{}", title)?;
        writeln!(self.out, "{}", rule)?;
        Ok(())
    }

    /// Banner preceded by a blank line
    pub fn section(&mut self, title: &str) -> Result<()> {
        self.blank()?;
        self.banner(title)
    }

    /// Numbered heading, e.g. `1. Integer:`
    pub fn heading(&mut self, number: usize, title: &str) -> Result<()> {
        writeln!(self.out, "\n{}. {}:", number, title)?;
        Ok(())
    }

    /// Unindented line
    pub fn line(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.out, "{}", text.as_ref())?;
        Ok(())
    }

    /// Line under a heading
    pub fn item(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.out, "{}{}", INDENT, text.as_ref())?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<()> {
        self.out.push('\n');
        Ok(())
    }

    /// Closing rule block, with the trailing emoji when enabled
    pub fn closing(&mut self, lines: &[&str], emoji: &str) -> Result<()> {
        let rule = self.config.rule();
        writeln!(self.out, "\n{}", rule)?;
        if let Some((last, rest)) = lines.split_last() {
            for line in rest {
                writeln!(self.out, "{}", line)?;
            }
            writeln!(self.out, "{}", self.config.decorate(last, emoji))?;
        }
        writeln!(self.out, "{}", rule)?;
        Ok(())
    }

    pub fn finish(self) -> String {
        self.out
    }
}
