//! Built-in option defaults
//!
//! This module holds the fixed table of default values for the runner's
//! command-line options. To register a new option, add an entry to
//! `DEFAULT_OPTIONS` below. Names must be unique.

use super::value::DefaultValue;

/// Registry entry for a single option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDefault {
    pub name: &'static str,
    pub value: DefaultValue,
    pub description: &'static str,
}

/// Registry of all options with a built-in default, in declaration order
pub const DEFAULT_OPTIONS: &[OptionDefault] = &[
    OptionDefault {
        name: "self-hosted",
        value: DefaultValue::Bool(false),
        description: "Run jobs on a self-hosted runner",
    },
    OptionDefault {
        name: "privileged",
        value: DefaultValue::Bool(false),
        description: "Start job containers in privileged mode",
    },
];

/// All registered options
pub fn registered_options() -> &'static [OptionDefault] {
    DEFAULT_OPTIONS
}

/// Find the registry entry for an option name (exact, case-sensitive match)
pub fn find_option(name: &str) -> Option<&'static OptionDefault> {
    DEFAULT_OPTIONS.iter().find(|entry| entry.name == name)
}

/// Get the default value for an option
///
/// Returns `None` when no default is registered for `name`. Unknown names
/// are not an error; callers decide how to treat an unset option.
pub fn get_default_config_value(name: &str) -> Option<DefaultValue> {
    let value = find_option(name).map(|entry| entry.value);
    if value.is_none() {
        tracing::trace!(option = name, "no default registered");
    }
    value
}
