//! CLI command handling module
//!
//! Handles all CLI subcommands and argument parsing.

mod commands;
mod logging;
mod version;

pub use commands::{
    DefaultsSubcommand, OutputFormat, handle_defaults_command, render_description, render_list,
    render_value,
};
pub use logging::*;
pub use version::{display_version, version_info};
