use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto, // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    /// Resolve from the environment, then an explicit config choice.
    ///
    /// `NO_COLOR` and `CLICOLOR=0` switch colors off, `CLICOLOR_FORCE=1`
    /// switches them on; a config `use_color` value wins over both.
    pub fn from_env(use_color: Option<bool>) -> Self {
        let mut mode = Self::Auto;

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            mode = Self::Never;
        }
        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                mode = Self::Never;
            }
        }
        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                mode = Self::Always;
            }
        }

        match use_color {
            Some(true) => Self::Always,
            Some(false) => Self::Never,
            None => mode,
        }
    }

    /// Whether to colour output headed for a terminal (`true`) or
    /// elsewhere (`false`). Only `Auto` looks at the destination.
    pub fn enabled_for(&self, terminal: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => terminal,
        }
    }

    /// Make `colored` follow this mode for output headed to `terminal`.
    pub fn apply(&self, terminal: bool) {
        colored::control::set_override(self.enabled_for(terminal));
    }
}
