pub mod courses;
pub mod init;
pub mod merge;

use crate::config::OutputConfig;
use crate::formatting::ColorMode;
use crate::io::{destination_for, render, OutputFormat, Standings};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Output choices from the command line; unset values fall back to config.
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub top: Option<usize>,
    pub color: ColorMode,
}

/// Render and write a finished document.
pub(crate) fn emit(
    standings: &Standings,
    options: OutputOptions,
    settings: &OutputConfig,
    default_indent: usize,
) -> Result<()> {
    let format = options
        .format
        .or(settings.default_format)
        .unwrap_or_default();
    let indent = settings.indent.unwrap_or(default_indent);
    let top = options.top.or(settings.top);

    let destination = destination_for(options.output);
    options.color.apply(destination.is_terminal());

    let rendered = render(standings, format, indent, top)?;
    log::debug!(
        "Writing {:?} output ({} bytes) to {}",
        format,
        rendered.len(),
        destination.description()
    );
    destination
        .write_bytes(&rendered)
        .with_context(|| format!("Failed to write {}", destination.description()))
}
