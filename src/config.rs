//! Runtime configuration loaded from the environment.

use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// PIN seeded on first run when nothing is stored yet.
///
/// This is a placeholder, not a credential: override it with
/// `ROINMOVIES_DEFAULT_PIN` and change it from the studio settings.
pub const DEFAULT_OWNER_PIN: &str = "change-me";

/// Application configuration.
///
/// | Env Var                  | Default                                   |
/// |--------------------------|-------------------------------------------|
/// | `ROINMOVIES_DEFAULT_PIN` | `change-me`                               |
/// | `ROINMOVIES_DATA_DIR`    | `<data dir>/roinmovies`                   |
/// | `ROINMOVIES_CACHE_DIR`   | `<cache dir>/roinmovies/thumbnails`       |
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub default_pin: String,
    pub data_dir: PathBuf,
    pub cache_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from `.env` (if present) and the process environment.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let default_pin = lookup("ROINMOVIES_DEFAULT_PIN")
            .filter(|pin| !pin.is_empty())
            .unwrap_or_else(|| DEFAULT_OWNER_PIN.to_string());

        let data_dir = match lookup("ROINMOVIES_DATA_DIR") {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs::data_dir()
                .or_else(dirs::home_dir)
                .ok_or(AppError::DataDir)?
                .join("roinmovies"),
        };

        let cache_dir = match lookup("ROINMOVIES_CACHE_DIR") {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs_next::cache_dir()
                .or_else(dirs_next::home_dir)
                .unwrap_or_else(std::env::temp_dir)
                .join("roinmovies")
                .join("thumbnails"),
        };

        Ok(Self {
            default_pin,
            data_dir,
            cache_dir,
        })
    }

    /// Path of the durable key/value database.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join("roinmovies.db")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_overrides_are_used() {
        let config = AppConfig::from_lookup(lookup(&[
            ("ROINMOVIES_DEFAULT_PIN", "4321"),
            ("ROINMOVIES_DATA_DIR", "/tmp/roin-data"),
            ("ROINMOVIES_CACHE_DIR", "/tmp/roin-cache"),
        ]))
        .unwrap();

        assert_eq!(config.default_pin, "4321");
        assert_eq!(config.store_path(), PathBuf::from("/tmp/roin-data/roinmovies.db"));
        assert_eq!(config.cache_dir, PathBuf::from("/tmp/roin-cache"));
    }

    #[test]
    fn test_empty_pin_falls_back_to_default() {
        let config = AppConfig::from_lookup(lookup(&[
            ("ROINMOVIES_DEFAULT_PIN", ""),
            ("ROINMOVIES_DATA_DIR", "/tmp/roin-data"),
        ]))
        .unwrap();

        assert_eq!(config.default_pin, DEFAULT_OWNER_PIN);
    }
}
