//! Where rendered standings end up: a file or stdout.

use crate::core::Error;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;

/// Receiver of a fully rendered document.
pub trait OutputDestination {
    fn write_bytes(&self, content: &[u8]) -> Result<(), Error>;

    /// Short label for log and error messages.
    fn description(&self) -> String;

    /// Whether the bytes end up on an interactive terminal.
    fn is_terminal(&self) -> bool;
}

#[derive(Debug, Clone)]
pub struct FileDestination {
    path: PathBuf,
}

impl FileDestination {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl OutputDestination for FileDestination {
    fn write_bytes(&self, content: &[u8]) -> Result<(), Error> {
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("file:{}", self.path.display())
    }

    fn is_terminal(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutDestination;

impl OutputDestination for StdoutDestination {
    fn write_bytes(&self, content: &[u8]) -> Result<(), Error> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(content)?;
        stdout.flush()?;
        Ok(())
    }

    fn description(&self) -> String {
        "stdout".to_string()
    }

    fn is_terminal(&self) -> bool {
        std::io::stdout().is_terminal()
    }
}

/// File destination when a path is given, stdout otherwise.
pub fn destination_for(output: Option<PathBuf>) -> Box<dyn OutputDestination> {
    match output {
        Some(path) => Box::new(FileDestination::new(path)),
        None => Box::new(StdoutDestination),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_destination_writes_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        let destination = destination_for(Some(path.clone()));
        destination.write_bytes(b"{}\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}\n");
        assert!(destination.description().starts_with("file:"));
        assert!(!destination.is_terminal());
    }

    #[test]
    fn test_stdout_is_the_default() {
        assert_eq!(destination_for(None).description(), "stdout");
    }
}
