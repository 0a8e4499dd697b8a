//! cabin-sync configuration.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::{ImportError, ImportResult};

static DEFAULT_BOOKINGS_PATH: &str = "~/cabins/bookings";

fn default_bookings_path() -> PathBuf {
    PathBuf::from(DEFAULT_BOOKINGS_PATH)
}

fn is_default_bookings_path(p: &PathBuf) -> bool {
    *p == default_bookings_path()
}

/// Configuration at ~/.config/cabin-sync/config.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CabinSyncConfig {
    /// Where the booking store keeps its JSON files
    #[serde(default = "default_bookings_path", skip_serializing_if = "is_default_bookings_path")]
    pub bookings_dir: PathBuf,

    /// Canonical names of the cabins for rent
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cabins: Vec<String>,

    /// Named feed URLs, e.g. `regional-uno = "https://www.airbnb.com/calendar/ical/..."`
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub feeds: BTreeMap<String, String>,
}

impl Default for CabinSyncConfig {
    fn default() -> Self {
        CabinSyncConfig {
            bookings_dir: default_bookings_path(),
            cabins: Vec::new(),
            feeds: BTreeMap::new(),
        }
    }
}

impl CabinSyncConfig {
    pub fn config_path() -> ImportResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ImportError::Config("Could not determine config directory".into()))?
            .join("cabin-sync");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented template first
    /// if there is no config yet.
    pub fn load() -> ImportResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> ImportResult<Self> {
        if !path.exists() {
            Self::create_default_config(path)?;
        }

        Config::builder()
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(true),
            )
            .build()
            .map_err(|e| ImportError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ImportError::Config(e.to_string()))
    }

    pub fn save_to(&self, path: &Path) -> ImportResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ImportError::Serialization(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| ImportError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// The bookings directory with `~` expanded.
    pub fn bookings_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.bookings_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Resolve a feed name from `[feeds]` to its URL. Anything that is not a
    /// configured name is returned as given.
    pub fn feed_url<'a>(&'a self, name_or_url: &'a str) -> &'a str {
        self.feeds
            .get(name_or_url)
            .map(String::as_str)
            .unwrap_or(name_or_url)
    }

    /// Write a starter config at `path` in which every setting is a comment,
    /// so loading it yields the defaults.
    pub fn create_default_config(path: &Path) -> ImportResult<()> {
        let contents = format!(
            "\
# cabin-sync configuration

# Where imported bookings are stored:
# bookings_dir = \"{}\"

# Cabins for rent. Imported cabin names are matched against this list:
# cabins = [\"Regional Uno\", \"Regional Dos\", \"Teja Uno\"]

# Airbnb calendar feeds, usable by name with `cabin-sync fetch <name>`:
# [feeds]
# regional-uno = \"https://www.airbnb.com/calendar/ical/123.ics?s=abc\"
",
            DEFAULT_BOOKINGS_PATH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ImportError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ImportError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_creates_commented_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = CabinSyncConfig::load_from(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config.bookings_dir, PathBuf::from("~/cabins/bookings"));
        assert!(config.cabins.is_empty());
        assert!(config.feeds.is_empty());
    }

    #[test]
    fn test_load_reads_cabins_and_feeds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
bookings_dir = "/srv/bookings"
cabins = ["Regional Uno", "Teja Dos"]

[feeds]
regional-uno = "https://www.airbnb.com/calendar/ical/1.ics"
"#,
        )
        .unwrap();

        let config = CabinSyncConfig::load_from(&path).unwrap();

        assert_eq!(config.bookings_path(), PathBuf::from("/srv/bookings"));
        assert_eq!(config.cabins, vec!["Regional Uno", "Teja Dos"]);
        assert_eq!(
            config.feed_url("regional-uno"),
            "https://www.airbnb.com/calendar/ical/1.ics"
        );
        assert_eq!(config.feed_url("https://x.test/a.ics"), "https://x.test/a.ics");
    }

    #[test]
    fn test_load_reads_file_without_toml_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cabins-conf");
        std::fs::write(&path, "cabins = [\"Regional Uno\"]\n").unwrap();

        let config = CabinSyncConfig::load_from(&path).unwrap();
        assert_eq!(config.cabins, vec!["Regional Uno"]);
    }

    #[test]
    fn test_load_reports_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "cabins = [\"unterminated\n").unwrap();

        assert!(matches!(
            CabinSyncConfig::load_from(&path),
            Err(ImportError::Config(_))
        ));
    }

    #[test]
    fn test_save_round_trips_through_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = CabinSyncConfig::default();
        config.cabins.push("Teja Tres".into());
        config.save_to(&path).unwrap();

        let loaded = CabinSyncConfig::load_from(&path).unwrap();
        assert_eq!(loaded.cabins, vec!["Teja Tres"]);
        assert_eq!(loaded.bookings_dir, default_bookings_path());
    }
}
