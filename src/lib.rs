//! Runner Options Library
//!
//! This library provides the built-in default values of the runner's
//! command-line options. It is used by the `runner-options` binary and by
//! argument parsers that prefill unset options.

pub mod cli;
pub mod config;

// Re-export commonly used items for convenience
pub use config::{DefaultValue, OptionDefault, get_default_config_value};
