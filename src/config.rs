/// Configuration resolution module
///
/// This module handles:
/// - Loading the optional TOML config file
/// - Reading environment overrides
/// - Layering flag > environment > file > default into the immutable
///   settings every command receives
use crate::cli::CliArgs;
use crate::console_format;
use crate::types::{OutputFormat, RenderConfig};
use log::debug;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the output format
pub const OUTPUT_ENV: &str = "SUVCTL_OUTPUT";

/// Environment variable overriding the snapshot path
pub const SNAPSHOT_ENV: &str = "SUVCTL_SNAPSHOT";

/// Any non-empty value disables colors (https://no-color.org)
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Default config file location
/// - Linux: ~/.config/suvctl/config.toml
/// - macOS: ~/Library/Application Support/suvctl/config.toml
/// - Windows: %APPDATA%/suvctl/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("suvctl").join("config.toml"))
}

/// Default snapshot location, next to the user's other suvctl data
pub fn default_snapshot_path() -> PathBuf {
    dirs::data_dir().map(|p| p.join("suvctl").join("snapshot.json")).unwrap_or_else(|| PathBuf::from("snapshot.json"))
}

/// Contents of config.toml; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub output: Option<String>,
    pub detailed: Option<bool>,
    pub snapshot: Option<PathBuf>,
    pub color: Option<bool>,
}

impl FileConfig {
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Invalid config file: {}", e))
    }
}

/// Overrides taken from the process environment
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvOverrides {
    pub output: Option<String>,
    pub snapshot: Option<PathBuf>,
    pub no_color: bool,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build overrides from any variable lookup; blank values count as unset
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        EnvOverrides {
            output: var(OUTPUT_ENV),
            snapshot: var(SNAPSHOT_ENV).map(PathBuf::from),
            no_color: var(NO_COLOR_ENV).is_some(),
        }
    }
}

/// Everything a command needs, resolved once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub render: RenderConfig,
    pub snapshot: PathBuf,
    /// Config file actually read, if any
    pub config_file: Option<PathBuf>,
}

/// Load the config file named by `--config`, or the default one.
///
/// A missing default file yields an empty config; a missing explicit file is
/// an error.
pub fn load_file_config(explicit: Option<&Path>) -> Result<(FileConfig, Option<PathBuf>), String> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(format!("Config file not found: {}", path.display()));
            }
            path.to_path_buf()
        }
        None => match default_config_path() {
            Some(path) if path.is_file() => path,
            _ => {
                debug!("no config file, using defaults");
                return Ok((FileConfig::default(), None));
            }
        },
    };

    debug!("reading config file {}", path.display());
    let content = fs::read_to_string(&path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let config = FileConfig::parse(&content).map_err(|e| format!("{} ({})", e, path.display()))?;
    Ok((config, Some(path)))
}

/// Resolve settings from the CLI, the environment and the process state.
pub fn resolve_settings(args: &CliArgs) -> Result<Settings, String> {
    let (file, config_file) = load_file_config(args.config.as_deref())?;
    let env = EnvOverrides::from_env();
    let mut settings = layer_settings(args, &env, &file, console_format::stdout_is_terminal());
    settings.config_file = config_file;
    Ok(settings)
}

/// Apply flag > environment > file > default to each setting.
pub fn layer_settings(args: &CliArgs, env: &EnvOverrides, file: &FileConfig, stdout_is_terminal: bool) -> Settings {
    let format = match (&args.output, &env.output, &file.output) {
        (Some(name), _, _) => {
            debug!("output format from --output: {}", name);
            OutputFormat::parse_lenient(name)
        }
        (None, Some(name), _) => {
            debug!("output format from {}: {}", OUTPUT_ENV, name);
            OutputFormat::parse_lenient(name)
        }
        (None, None, Some(name)) => {
            debug!("output format from config file: {}", name);
            OutputFormat::parse_lenient(name)
        }
        (None, None, None) => OutputFormat::default(),
    };

    let use_colors = resolve_colors(args, env, file, stdout_is_terminal);

    let snapshot = args
        .snapshot
        .clone()
        .or_else(|| env.snapshot.clone())
        .or_else(|| file.snapshot.clone())
        .unwrap_or_else(default_snapshot_path);

    Settings {
        render: RenderConfig { format, detailed: args.detailed || file.detailed.unwrap_or(false), use_colors },
        snapshot,
        config_file: None,
    }
}

/// Color decision for one output stream.
///
/// `--no-color` and `NO_COLOR` always win. Otherwise the config file's
/// `color` key decides, falling back to whether the stream is a terminal.
pub fn resolve_colors(args: &CliArgs, env: &EnvOverrides, file: &FileConfig, is_terminal: bool) -> bool {
    if args.no_color || env.no_color {
        return false;
    }
    file.color.unwrap_or(is_terminal)
}

/// Color decision for error messages on stderr.
///
/// The config file may be the thing that failed, so an unreadable one counts
/// as empty here and the command reports the real error itself.
pub fn error_colors(args: &CliArgs) -> bool {
    let file = load_file_config(args.config.as_deref()).map(|(file, _)| file).unwrap_or_default();
    resolve_colors(args, &EnvOverrides::from_env(), &file, console_format::stderr_is_terminal())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
