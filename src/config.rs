/// User settings stored in `settings.toml`, plus command line overrides.
///
/// Precedence is command line, then the settings file, then built-in
/// defaults.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Result;

const APP_DIR: &str = "wedding-studios";
const CONFIG_FILE: &str = "settings.toml";
const CATALOG_FILE: &str = "studios.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn to_theme(self) -> iced::Theme {
        match self {
            ThemeChoice::Dark => iced::Theme::Dark,
            ThemeChoice::Light => iced::Theme::Light,
        }
    }
}

/// Contents of `settings.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Studio catalog JSON file
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Shortlist database file
    #[serde(default)]
    pub storage: Option<PathBuf>,
    #[serde(default)]
    pub theme: ThemeChoice,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_DIR);
        path.push(CONFIG_FILE);
        path
    })
}

/// Catalog looked up when neither the command line nor settings name one
pub fn default_catalog_path() -> Option<PathBuf> {
    dirs::data_dir().map(|mut path| {
        path.push(APP_DIR);
        path.push(CATALOG_FILE);
        path
    })
}

/// Load settings from the default location, or defaults if there is none
pub fn load() -> Result<Config> {
    if let Some(path) = default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Load settings from `path`. Unparseable TOML yields defaults; an
/// unreadable file is an error.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!("⚠️  Ignoring invalid settings in {}: {}", path.display(), err);
            Ok(Config::default())
        }
    }
}

/// Parsed command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    pub catalog: Option<PathBuf>,
    pub storage: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub verbose: bool,
}

impl Args {
    pub fn from_env() -> std::result::Result<Self, pico_args::Error> {
        Self::parse(pico_args::Arguments::from_env())
    }

    #[cfg(test)]
    pub fn from_vec(args: Vec<std::ffi::OsString>) -> std::result::Result<Self, pico_args::Error> {
        Self::parse(pico_args::Arguments::from_vec(args))
    }

    fn parse(mut args: pico_args::Arguments) -> std::result::Result<Self, pico_args::Error> {
        let verbose = args.contains(["-v", "--verbose"]);
        let storage = args.opt_value_from_os_str("--db", parse_path)?;
        let config = args.opt_value_from_os_str("--config", parse_path)?;
        let catalog = args.opt_free_from_os_str(parse_path)?;

        let rest = args.finish();
        if !rest.is_empty() {
            tracing::warn!("Ignoring extra arguments: {:?}", rest);
        }

        Ok(Args {
            catalog,
            storage,
            config,
            verbose,
        })
    }
}

fn parse_path(value: &std::ffi::OsStr) -> std::result::Result<PathBuf, std::convert::Infallible> {
    Ok(PathBuf::from(value))
}

/// Settings after merging the command line over the settings file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub catalog: Option<PathBuf>,
    pub storage: Option<PathBuf>,
    pub theme: ThemeChoice,
}

impl Settings {
    pub fn resolve(args: &Args, config: Config) -> Self {
        Settings {
            catalog: args.catalog.clone().or(config.catalog),
            storage: args.storage.clone().or(config.storage),
            theme: config.theme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use tempfile::tempdir;

    fn args(list: &[&str]) -> Args {
        Args::from_vec(list.iter().map(OsString::from).collect()).unwrap()
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(
            &path,
            "catalog = \"/srv/studios.json\"\ntheme = \"light\"\n",
        )
        .unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("/srv/studios.json")));
        assert_eq!(config.storage, None);
        assert_eq!(config.theme, ThemeChoice::Light);
    }

    #[test]
    fn test_invalid_toml_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "theme = [").unwrap();

        assert_eq!(load_from_path(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(load_from_path(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn test_parse_arguments() {
        let parsed = args(&["--db", "/tmp/s.db", "-v", "studios.json"]);
        assert_eq!(parsed.catalog, Some(PathBuf::from("studios.json")));
        assert_eq!(parsed.storage, Some(PathBuf::from("/tmp/s.db")));
        assert_eq!(parsed.config, None);
        assert!(parsed.verbose);

        assert_eq!(args(&[]), Args::default());
    }

    #[test]
    fn test_command_line_wins_over_settings() {
        let config = Config {
            catalog: Some(PathBuf::from("/from/config.json")),
            storage: Some(PathBuf::from("/from/config.db")),
            theme: ThemeChoice::Light,
        };
        let settings = Settings::resolve(&args(&["/from/cli.json"]), config);

        assert_eq!(settings.catalog, Some(PathBuf::from("/from/cli.json")));
        assert_eq!(settings.storage, Some(PathBuf::from("/from/config.db")));
        assert_eq!(settings.theme, ThemeChoice::Light);
    }
}
