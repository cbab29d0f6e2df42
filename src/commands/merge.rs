use super::{emit, OutputOptions};
use crate::config::RacemergeConfig;
use crate::io::{read_stage_documents, Standings};
use crate::standings::aggregate;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Indent of merged JSON documents unless configured otherwise.
pub const MERGE_JSON_INDENT: usize = 4;

#[derive(Debug, Clone)]
pub struct MergeConfig {
    pub paths: Vec<PathBuf>,
    pub date: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub output: OutputOptions,
}

pub fn handle_merge(config: MergeConfig, settings: &RacemergeConfig) -> Result<()> {
    let info = settings
        .event()
        .resolve(config.date, config.name, config.location)?;

    let stages = read_stage_documents(&config.paths)?;
    log::info!("Merging {} stage document(s)", stages.len());

    let event = aggregate(info, stages).context("Failed to merge stage results")?;
    emit(
        &Standings::Aggregate(event),
        config.output,
        &settings.output(),
        MERGE_JSON_INDENT,
    )
}
