//! Codec configuration loaded from `codec.toml`.
//!
//! Every key is optional. A missing or unparsable file is not an error: the
//! codec logs a warning and runs with defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;

use crate::data_paths::data_path;

/// Settings shared by the CLI subcommands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Location of the precondition type table.
    pub types_file: PathBuf,
    /// Prefix written in front of every encoded line.
    pub indent: String,
    /// Treat decoder diagnostics as lint failures.
    pub deny_warnings: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            types_file: data_path("preconditions.txt"),
            indent: "  ".to_string(),
            deny_warnings: false,
        }
    }
}

/// On-disk shape of `codec.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    types_file: Option<PathBuf>,
    indent: Option<String>,
    deny_warnings: Option<bool>,
}

/// Load the codec configuration, falling back to defaults on any error.
///
/// A relative `types_file` is resolved against the directory of `toml_path`.
pub fn load_config(toml_path: &Path) -> CodecConfig {
    match try_load_config(toml_path) {
        Ok(config) => {
            info!("codec config loaded from '{}'", toml_path.display());
            config
        },
        Err(e) => {
            warn!("Could not load codec config: {e:#}. Using defaults.");
            CodecConfig::default()
        },
    }
}

/// Load the codec configuration from `toml_path`.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid config.
pub fn try_load_config(toml_path: &Path) -> Result<CodecConfig> {
    let text = fs::read_to_string(toml_path)
        .with_context(|| format!("reading codec config from '{}'", toml_path.display()))?;
    let file: ConfigFile =
        toml::from_str(&text).with_context(|| format!("parsing codec config from '{}'", toml_path.display()))?;

    let defaults = CodecConfig::default();
    let base = toml_path.parent().unwrap_or_else(|| Path::new(""));
    Ok(CodecConfig {
        types_file: file.types_file.map_or(defaults.types_file, |p| base.join(p)),
        indent: file.indent.unwrap_or(defaults.indent),
        deny_warnings: file.deny_warnings.unwrap_or(defaults.deny_warnings),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn relative_types_file_resolves_next_to_config() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("codec.toml");
        fs::write(&path, "types_file = \"tables/types.txt\"\ndeny_warnings = true\n")?;

        let config = try_load_config(&path)?;
        assert_eq!(config.types_file, dir.path().join("tables/types.txt"));
        assert!(config.deny_warnings);
        assert_eq!(config.indent, "  ");
        Ok(())
    }

    #[test]
    fn absolute_types_file_is_kept() -> Result<()> {
        let dir = tempdir()?;
        let table = dir.path().join("elsewhere.txt");
        let path = dir.path().join("codec.toml");
        fs::write(&path, format!("types_file = {:?}\nindent = \"\"\n", table.display().to_string()))?;

        let config = try_load_config(&path)?;
        assert_eq!(config.types_file, table);
        assert_eq!(config.indent, "");
        Ok(())
    }

    #[test]
    fn unknown_keys_fall_back_to_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("codec.toml");
        fs::write(&path, "indnet = \"    \"\n")?;

        assert!(try_load_config(&path).is_err());
        assert_eq!(load_config(&path), CodecConfig::default());
        Ok(())
    }

    #[test]
    fn missing_file_uses_defaults() -> Result<()> {
        let dir = tempdir()?;
        let config = load_config(&dir.path().join("nope.toml"));
        assert_eq!(config, CodecConfig::default());
        Ok(())
    }
}
