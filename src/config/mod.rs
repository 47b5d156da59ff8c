//! Option defaults for the runner CLI
//!
//! A fixed registry of built-in default values, looked up by option name.
//! The argument parser that consumes these defaults lives outside this crate.

pub mod defaults;
pub mod value;

pub use defaults::{
    DEFAULT_OPTIONS, OptionDefault, find_option, get_default_config_value, registered_options,
};
pub use value::DefaultValue;
