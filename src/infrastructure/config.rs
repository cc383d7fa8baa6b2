//! Configuration management

use std::ffi::OsString;
use std::path::PathBuf;

/// Store file used when neither `--db` nor `JOURNO_DB` is given
pub const DEFAULT_DB_FILE: &str = "journal.db";

/// Environment variable overriding the store location
pub const DB_PATH_ENV: &str = "JOURNO_DB";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
}

impl Config {
    /// Resolve the store path: command-line flag first, then `JOURNO_DB`, then the default file
    pub fn resolve(cli_path: Option<PathBuf>) -> Self {
        Self::resolve_with(cli_path, std::env::var_os(DB_PATH_ENV))
    }

    fn resolve_with(cli_path: Option<PathBuf>, env_path: Option<OsString>) -> Self {
        let db_path = cli_path
            .or_else(|| env_path.filter(|p| !p.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE));

        Config { db_path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        let config = Config::resolve_with(None, None);
        assert_eq!(config.db_path, PathBuf::from("journal.db"));
    }

    #[test]
    fn test_env_overrides_default() {
        let config = Config::resolve_with(None, Some(OsString::from("/tmp/env.db")));
        assert_eq!(config.db_path, PathBuf::from("/tmp/env.db"));
    }

    #[test]
    fn test_flag_overrides_env() {
        let config = Config::resolve_with(
            Some(PathBuf::from("flag.db")),
            Some(OsString::from("/tmp/env.db")),
        );
        assert_eq!(config.db_path, PathBuf::from("flag.db"));
    }

    #[test]
    fn test_empty_env_is_ignored() {
        let config = Config::resolve_with(None, Some(OsString::new()));
        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_FILE));
    }
}
