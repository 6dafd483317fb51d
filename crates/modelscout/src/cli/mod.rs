//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the modelscout binary.

mod commands;
mod normalize;
mod parse;

pub use commands::{Cli, Commands, OutputFormat};
pub use normalize::handle_normalize;
pub use parse::{handle_parse, render_limit};

use modelscout_error::ModelScoutResult;
use modelscout_rate_limit::ModelScoutConfig;
use std::path::Path;

/// Load configuration from `path`, or from the default locations when `None`.
pub fn load_config(path: Option<&Path>) -> ModelScoutResult<ModelScoutConfig> {
    match path {
        Some(path) => ModelScoutConfig::from_file(path),
        None => ModelScoutConfig::load(),
    }
}
