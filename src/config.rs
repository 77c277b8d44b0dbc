//! Layered configuration: built-in defaults, then `config.toml`, then flags.

use crate::cli::Cli;
use crate::error::{ConfigError, Result};
use directories::ProjectDirs;
use gradeline_core::{AxisLabels, ReshapeOptions};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    input: Option<PathBuf>,
    title: Option<String>,
    group_label: Option<String>,
    category_label: Option<String>,
    value_label: Option<String>,
    attendance_marker: Option<String>,
    keymap: Option<String>,
    log: Option<LogSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LogSection {
    level: Option<String>,
    file: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directive; `RUST_LOG` wins when set.
    pub level: String,
    /// Log file; `None` means the default location.
    pub file: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub title: String,
    pub group_label: String,
    pub category_label: String,
    pub value_label: String,
    pub attendance_marker: String,
    pub keymap: String,
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from("Comparativo_MG.xlsx"),
            title: "Notas por Regional: Minas Gerais".to_string(),
            group_label: "Regional".to_string(),
            category_label: "Avaliação".to_string(),
            value_label: "Nota".to_string(),
            attendance_marker: "presen".to_string(),
            keymap: "vim".to_string(),
            log: LogConfig {
                level: "info".to_string(),
                file: None,
            },
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "gradeline").map(|p| p.config_dir().join("config.toml"))
}

fn read_config_file(path: &Path) -> Result<ConfigFile> {
    let size = std::fs::metadata(path)?.len();
    if size > MAX_CONFIG_FILE_BYTES {
        return Err(ConfigError::TooLarge {
            path: path.to_path_buf(),
            size,
            max: MAX_CONFIG_FILE_BYTES,
        });
    }
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

impl Config {
    /// Load defaults overlaid with the config file.
    ///
    /// `explicit` replaces the user config path. Problems with the file are
    /// returned as warnings and the defaults are kept.
    pub fn load(explicit: Option<&Path>) -> (Config, Vec<String>) {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        let Some(path) = explicit.map(Path::to_path_buf).or_else(user_config_path) else {
            return (config, warnings);
        };

        if !path.exists() {
            if explicit.is_some() {
                warnings.push(format!("Config file not found: {}", path.display()));
            }
            return (config, warnings);
        }

        match read_config_file(&path) {
            Ok(file) => config.apply_file(file),
            Err(err) => warnings.push(format!("Failed to load {}: {}", path.display(), err)),
        }
        (config, warnings)
    }

    /// Parse TOML text and overlay it on the defaults.
    pub fn from_toml_str(content: &str) -> Result<Config> {
        let file: ConfigFile = toml::from_str(content)?;
        let mut config = Config::default();
        config.apply_file(file);
        Ok(config)
    }

    fn apply_file(&mut self, file: ConfigFile) {
        if let Some(v) = file.input {
            self.input = v;
        }
        if let Some(v) = file.title {
            self.title = v;
        }
        if let Some(v) = file.group_label {
            self.group_label = v;
        }
        if let Some(v) = file.category_label {
            self.category_label = v;
        }
        if let Some(v) = file.value_label {
            self.value_label = v;
        }
        if let Some(v) = file.attendance_marker {
            self.attendance_marker = v;
        }
        if let Some(v) = file.keymap {
            self.keymap = v;
        }
        if let Some(log) = file.log {
            if let Some(v) = log.level {
                self.log.level = v;
            }
            if log.file.is_some() {
                self.log.file = log.file;
            }
        }
    }

    /// Command-line flags win over everything else.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref v) = cli.file {
            self.input = v.clone();
        }
        if let Some(ref v) = cli.title {
            self.title = v.clone();
        }
        if let Some(ref v) = cli.keymap {
            self.keymap = v.clone();
        }
        if let Some(ref v) = cli.log_file {
            self.log.file = Some(v.clone());
        }
    }

    pub fn reshape_options(&self) -> ReshapeOptions {
        ReshapeOptions {
            group_label: self.group_label.clone(),
            attendance_marker: self.attendance_marker.clone(),
        }
    }

    pub fn axis_labels(&self) -> AxisLabels {
        AxisLabels {
            category: self.category_label.clone(),
            value: self.value_label.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_the_minas_gerais_report() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from("Comparativo_MG.xlsx"));
        assert_eq!(config.reshape_options().group_label, "Regional");
        assert_eq!(config.reshape_options().attendance_marker, "presen");
        assert_eq!(config.axis_labels(), AxisLabels::default());
    }

    #[test]
    fn file_overrides_defaults() {
        let config = Config::from_toml_str(
            r#"
            input = "SP.xlsx"
            title = "Notas por Regional: São Paulo"
            keymap = "emacs"

            [log]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.input, PathBuf::from("SP.xlsx"));
        assert_eq!(config.title, "Notas por Regional: São Paulo");
        assert_eq!(config.keymap, "emacs");
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.group_label, "Regional");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::from_toml_str("colour = \"red\"").is_err());
    }

    #[test]
    fn flags_override_file() {
        let mut config = Config::from_toml_str("input = \"a.xlsx\"\ntitle = \"A\"").unwrap();
        let cli = Cli {
            file: Some(PathBuf::from("b.csv")),
            log_file: Some(PathBuf::from("/tmp/g.log")),
            ..Cli::default()
        };
        config.apply_cli(&cli);
        assert_eq!(config.input, PathBuf::from("b.csv"));
        assert_eq!(config.title, "A");
        assert_eq!(config.log.file, Some(PathBuf::from("/tmp/g.log")));
    }

    #[test]
    fn load_reports_bad_files_as_warnings() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.toml");
        let (config, warnings) = Config::load(Some(&missing));
        assert_eq!(config, Config::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Config file not found"));

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "title = ").unwrap();
        let (config, warnings) = Config::load(Some(&broken));
        assert_eq!(config, Config::default());
        assert!(warnings[0].starts_with("Failed to load"));

        let good = dir.path().join("good.toml");
        std::fs::write(&good, "attendance_marker = \"frequ\"").unwrap();
        let (config, warnings) = Config::load(Some(&good));
        assert!(warnings.is_empty());
        assert_eq!(config.attendance_marker, "frequ");
    }
}
