//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Parser, Debug)]
#[command(name = "quizbox")]
#[command(version)]
#[command(about = "Timed multiple-choice quiz in the terminal")]
pub struct Cli {
    /// Config file (default: ~/.config/quizbox/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the question source URL
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Override the maximum number of questions
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Print the answers as JSON after the quiz closes
    #[arg(long)]
    pub print_results: bool,
}

impl Cli {
    /// Loads the config file and applies command-line overrides.
    ///
    /// Validation runs once, after the overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.url {
            config.source.url = url.clone();
        }
        if let Some(limit) = self.limit {
            config.source.limit = limit;
        }
    }
}
