use serde::{Deserialize, Serialize};

use crate::core::{Error, EventInfo};
use crate::io::output::OutputFormat;

/// Root configuration structure for racemerge
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RacemergeConfig {
    /// Default metadata for aggregate documents
    #[serde(default)]
    pub event: Option<EventConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct EventConfig {
    pub date: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    pub default_format: Option<OutputFormat>,
    /// JSON indent width, overriding the per-command default
    pub indent: Option<usize>,
    /// Rows per category in human readable output
    pub top: Option<usize>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl RacemergeConfig {
    pub fn event(&self) -> EventConfig {
        self.event.clone().unwrap_or_default()
    }

    pub fn output(&self) -> OutputConfig {
        self.output.clone().unwrap_or_default()
    }
}

impl EventConfig {
    /// Fill metadata from command line values first, then this config.
    pub fn resolve(
        &self,
        date: Option<String>,
        name: Option<String>,
        location: Option<String>,
    ) -> Result<EventInfo, Error> {
        Ok(EventInfo {
            date: pick("date", date, &self.date)?,
            name: pick("name", name, &self.name)?,
            location: pick("location", location, &self.location)?,
        })
    }
}

fn pick(field: &str, flag: Option<String>, configured: &Option<String>) -> Result<String, Error> {
    flag.or_else(|| configured.clone()).ok_or_else(|| {
        Error::configuration(format!(
            "no event {field}: pass --{field} or set it under [event] in .racemerge.toml"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let config = EventConfig {
            date: Some("2024-01-01".into()),
            name: Some("Winter cup".into()),
            location: Some("Mol".into()),
        };
        let info = config
            .resolve(Some("2024-02-02".into()), None, None)
            .unwrap();
        assert_eq!(info.date, "2024-02-02");
        assert_eq!(info.name, "Winter cup");
        assert_eq!(info.location, "Mol");
    }

    #[test]
    fn test_missing_field_names_it() {
        let err = EventConfig::default()
            .resolve(Some("d".into()), Some("n".into()), None)
            .unwrap_err();
        assert!(err.to_string().contains("--location"));
    }
}
