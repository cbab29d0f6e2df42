use super::{emit, OutputOptions};
use crate::config::RacemergeConfig;
use crate::io::{read_stage_document, Standings};
use crate::standings::regroup;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Indent of course documents unless configured otherwise.
pub const COURSES_JSON_INDENT: usize = 2;

#[derive(Debug, Clone)]
pub struct CoursesConfig {
    pub path: PathBuf,
    pub output: OutputOptions,
}

pub fn handle_courses(config: CoursesConfig, settings: &RacemergeConfig) -> Result<()> {
    let document = read_stage_document(&config.path)?;
    let regrouped = regroup(document)
        .with_context(|| format!("Failed to regroup {}", config.path.display()))?;
    emit(
        &Standings::Courses(regrouped),
        config.output,
        &settings.output(),
        COURSES_JSON_INDENT,
    )
}
