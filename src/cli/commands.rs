//! CLI command handlers

use anyhow::{Context, Result};
use clap::{Subcommand, ValueEnum};

use crate::config::{DefaultValue, find_option, get_default_config_value, registered_options};

/// Output format for listing defaults
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Option defaults subcommands
#[derive(Subcommand, Debug)]
pub enum DefaultsSubcommand {
    /// Print the default value of an option
    Get {
        /// Option name (e.g., "self-hosted", "privileged")
        name: String,
    },
    /// List every option with a built-in default
    List {
        /// Output format
        #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Yaml)]
        output: OutputFormat,
    },
    /// Show an option's default and description
    Describe {
        /// Option name (e.g., "self-hosted", "privileged")
        name: String,
    },
}

/// Handle defaults subcommands
pub fn handle_defaults_command(cmd: DefaultsSubcommand) -> Result<()> {
    match cmd {
        DefaultsSubcommand::Get { name } => {
            tracing::debug!(option = %name, "looking up default");
            println!("{}", render_value(&name)?);
        }
        DefaultsSubcommand::List { output } => {
            tracing::debug!(?output, "listing defaults");
            print!("{}", render_list(output)?);
        }
        DefaultsSubcommand::Describe { name } => {
            tracing::debug!(option = %name, "describing option");
            print!("{}", render_description(&name)?);
        }
    }

    Ok(())
}

/// Render the default value of a single option
pub fn render_value(name: &str) -> Result<String> {
    get_default_config_value(name)
        .map(|value| value.to_string())
        .ok_or_else(|| unknown_option(name))
}

/// Render all registered defaults as a mapping, in registry order
pub fn render_list(format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => {
            let mut mapping = serde_yaml::Mapping::new();
            for entry in registered_options() {
                mapping.insert(
                    serde_yaml::Value::from(entry.name),
                    serde_yaml::to_value(entry.value)
                        .with_context(|| format!("Failed to serialize default for {}", entry.name))?,
                );
            }
            serde_yaml::to_string(&mapping).context("Failed to serialize defaults")
        }
        OutputFormat::Json => {
            let mut map = serde_json::Map::new();
            for entry in registered_options() {
                map.insert(
                    entry.name.to_string(),
                    serde_json::to_value(entry.value)
                        .with_context(|| format!("Failed to serialize default for {}", entry.name))?,
                );
            }
            let mut json = serde_json::to_string_pretty(&map).context("Failed to serialize defaults")?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Render name, default and description of a single option
pub fn render_description(name: &str) -> Result<String> {
    let entry = find_option(name).ok_or_else(|| unknown_option(name))?;
    Ok(format!(
        "Name:        {}\nDefault:     {}\nType:        {}\nDescription: {}\n",
        entry.name,
        entry.value,
        type_name(entry.value),
        entry.description
    ))
}

fn type_name(value: DefaultValue) -> &'static str {
    match value {
        DefaultValue::Bool(_) => "boolean",
        DefaultValue::Integer(_) => "integer",
        DefaultValue::Text(_) => "string",
    }
}

fn unknown_option(name: &str) -> anyhow::Error {
    anyhow::anyhow!("No default value defined for option: {}", name)
}
