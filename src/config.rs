use std::{env, net::SocketAddr, path::PathBuf};

use anyhow::{Context, Result};

const DEFAULT_BIND: &str = "127.0.0.1:3000";
const DEFAULT_DATA_DIR: &str = "./data";

/// Process-level configuration read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub data_dir: PathBuf,
    pub debug: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind = lookup("VIBEPOINT_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind
            .parse()
            .with_context(|| format!("invalid VIBEPOINT_BIND address '{bind}'"))?;

        let data_dir = lookup("VIBEPOINT_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let debug = lookup("VIBEPOINT_DEBUG")
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            bind_addr,
            data_dir,
            debug,
        })
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("vibepoint.sqlite3")
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join("settings.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND);
        assert_eq!(config.db_path(), PathBuf::from("./data/vibepoint.sqlite3"));
        assert!(!config.debug);
    }

    #[test]
    fn overrides_are_read() {
        let config = config_from(&[
            ("VIBEPOINT_BIND", "0.0.0.0:8080"),
            ("VIBEPOINT_DATA_DIR", "/var/lib/vibepoint"),
            ("VIBEPOINT_DEBUG", "TRUE"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(
            config.settings_path(),
            PathBuf::from("/var/lib/vibepoint/settings.json")
        );
        assert!(config.debug);
    }

    #[test]
    fn bad_bind_address_is_an_error() {
        assert!(config_from(&[("VIBEPOINT_BIND", "nowhere")]).is_err());
    }
}
