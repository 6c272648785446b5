//! A rendered dashboard view: a title followed by an ordered list of blocks.

use crate::charts::{Chart, ChartTarget};
use polars::prelude::DataFrame;
use std::io::{self, Write};

/// One element of a [`Page`], in display order.
#[derive(Debug, Clone)]
pub enum Block {
    Subheader(String),
    /// A line of markdown, e.g. `**Kingdom:** Animalia`.
    Markdown(String),
    Text(String),
    Table(DataFrame),
    Chart(Chart),
    /// A failure shown in place of the section that could not be rendered.
    Error(String),
}

#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn subheader(&mut self, text: impl Into<String>) {
        self.blocks.push(Block::Subheader(text.into()));
    }

    pub fn markdown(&mut self, text: impl Into<String>) {
        self.blocks.push(Block::Markdown(text.into()));
    }

    pub fn text(&mut self, text: impl Into<String>) {
        self.blocks.push(Block::Text(text.into()));
    }

    pub fn table(&mut self, frame: DataFrame) {
        self.blocks.push(Block::Table(frame));
    }

    pub fn chart(&mut self, chart: Chart) {
        self.blocks.push(Block::Chart(chart));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.blocks.push(Block::Error(message.into()));
    }

    pub fn charts(&self) -> impl Iterator<Item = &Chart> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Chart(chart) => Some(chart),
            _ => None,
        })
    }

    pub fn tables(&self) -> impl Iterator<Item = &DataFrame> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(frame) => Some(frame),
            _ => None,
        })
    }

    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Error(message) => Some(message.as_str()),
            _ => None,
        })
    }

    pub fn subheaders(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Subheader(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Writes the page as plain text and draws its charts to `target`.
    ///
    /// Charts are drawn in page order, and each one is announced in the text output
    /// with the file it was written to.
    pub fn write_to(&self, out: &mut impl Write, target: &ChartTarget) -> io::Result<()> {
        writeln!(out, "{}", self.title)?;
        writeln!(out, "{}", "=".repeat(self.title.chars().count()))?;

        for block in &self.blocks {
            match block {
                Block::Subheader(text) => writeln!(out, "\n## {}", text)?,
                Block::Markdown(text) | Block::Text(text) => writeln!(out, "{}", text)?,
                Block::Table(frame) => writeln!(out, "{}", frame)?,
                Block::Chart(chart) => match chart.render(target)? {
                    Some(path) => writeln!(out, "[chart] {} -> {}", chart.title, path.display())?,
                    None => writeln!(out, "[chart] {} (opened in browser)", chart.title)?,
                },
                Block::Error(message) => writeln!(out, "Error: {}", message)?,
            }
        }
        Ok(())
    }
}
