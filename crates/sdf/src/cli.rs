//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;
use sdf_config::Config;
use sdf_core::Accent;

#[derive(Debug, Parser)]
#[command(name = "sdf", version, about = "Terminal portfolio with typewriter, tilt and reveal effects")]
pub struct Cli {
    /// Configuration file (defaults to the user config directory).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Headline typed by the hero typewriter.
    #[arg(long, value_name = "STRING")]
    pub text: Option<String>,

    /// Accent color: purple, cyan, green, magenta, yellow, red or blue.
    #[arg(long, value_name = "NAME")]
    pub accent: Option<Accent>,

    /// Hide the cursor and trail markers.
    #[arg(long)]
    pub no_cursor: bool,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    pub write_config: bool,
}

impl Cli {
    /// Apply command line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(text) = &self.text {
            config.typewriter.text = text.clone();
        }
        if let Some(accent) = self.accent {
            config.accent = accent;
        }
        if self.no_cursor {
            config.cursor = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_change_nothing() {
        let cli = Cli::try_parse_from(["sdf"]).unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config, Config::default());
        assert!(!cli.write_config);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "sdf",
            "--text",
            "hello",
            "--accent",
            "Cyan",
            "--no-cursor",
            "--config",
            "/tmp/sdf.toml",
        ])
        .unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(config.typewriter.text, "hello");
        assert_eq!(config.accent, Accent::Cyan);
        assert!(!config.cursor);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/sdf.toml")));
    }

    #[test]
    fn test_unknown_accent_rejected() {
        assert!(Cli::try_parse_from(["sdf", "--accent", "mauve"]).is_err());
    }
}
