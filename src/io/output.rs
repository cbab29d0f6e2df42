use crate::core::{AggregateEvent, Categories, Category, StageDocument};
use colored::*;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Result document JSON
    #[default]
    Json,
    /// One Markdown table per category
    Markdown,
    /// Plain text standings for the terminal
    Terminal,
}

/// A finished standings document, ready to be written.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Standings {
    /// Cumulative standings over several stages
    Aggregate(AggregateEvent),
    /// One event's results regrouped by course
    Courses(StageDocument),
}

impl Standings {
    pub fn categories(&self) -> &Categories {
        match self {
            Self::Aggregate(event) => &event.categories,
            Self::Courses(document) => &document.categories,
        }
    }

    /// Title line for human readable output.
    pub fn heading(&self) -> String {
        match self {
            Self::Aggregate(event) => {
                format!("{}, {} ({})", event.name, event.location, event.date)
            }
            Self::Courses(document) => {
                let field = |key: &str| document.extra.get(key).and_then(|v| v.as_str());
                match (field("name"), field("location")) {
                    (Some(name), Some(location)) => format!("{name}, {location} by course"),
                    (Some(name), None) => format!("{name} by course"),
                    _ => "Results by course".to_string(),
                }
            }
        }
    }
}

pub trait OutputWriter {
    fn write_standings(&mut self, standings: &Standings) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
    indent: usize,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W, indent: usize) -> Self {
        Self { writer, indent }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_standings(&mut self, standings: &Standings) -> anyhow::Result<()> {
        let indent = " ".repeat(self.indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(&mut self.writer, formatter);
        standings.serialize(&mut serializer)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
    top: Option<usize>,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W, top: Option<usize>) -> Self {
        Self { writer, top }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_standings(&mut self, standings: &Standings) -> anyhow::Result<()> {
        writeln!(self.writer, "# {}", standings.heading())?;
        for (key, category) in standings.categories() {
            writeln!(self.writer)?;
            self.write_category(key, category)?;
        }
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_category(&mut self, key: &str, category: &Category) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "## {} ({} km, {} m)",
            key, category.distance, category.climb
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Pos | Name | Club | Time |")?;
        writeln!(self.writer, "|----:|------|------|-----:|")?;
        for result in limited(category, self.top) {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                result.position,
                escape_cell(&result.name),
                escape_cell(&result.club),
                result.time.as_deref().unwrap_or("-")
            )?;
        }
        Ok(())
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    top: Option<usize>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, top: Option<usize>) -> Self {
        Self { writer, top }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_standings(&mut self, standings: &Standings) -> anyhow::Result<()> {
        let heading = standings.heading();
        writeln!(self.writer, "{}", heading.bold().blue())?;
        writeln!(self.writer, "{}", "=".repeat(heading.chars().count()).blue())?;

        for (key, category) in standings.categories() {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "{} {}",
                key.bold(),
                format!("{} km / {} m", category.distance, category.climb).dimmed()
            )?;

            let rows: Vec<_> = limited(category, self.top).collect();
            let name_width = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
            let club_width = rows.iter().map(|r| r.club.chars().count()).max().unwrap_or(0);
            for result in rows {
                writeln!(
                    self.writer,
                    "  {:>3}. {:<name_width$}  {:<club_width$}  {}",
                    result.position,
                    result.name,
                    result.club,
                    result.time.as_deref().unwrap_or("-")
                )?;
            }
            if category.results.is_empty() {
                writeln!(self.writer, "  {}", "no scored results".dimmed())?;
            }
        }
        Ok(())
    }
}

fn limited(category: &Category, top: Option<usize>) -> impl Iterator<Item = &crate::core::RaceResult> {
    category.results.iter().take(top.unwrap_or(usize::MAX))
}

/// Writer for `format`; `indent` only affects JSON and `top` only the
/// human readable formats.
pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    indent: usize,
    top: Option<usize>,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer, indent)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer, top)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, top)),
    }
}

/// Render fully in memory so a failure never leaves partial output behind.
pub fn render(
    standings: &Standings,
    format: OutputFormat,
    indent: usize,
    top: Option<usize>,
) -> anyhow::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    create_writer(format, &mut buffer, indent, top).write_standings(standings)?;
    Ok(buffer)
}
