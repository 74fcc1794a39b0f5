use crate::error::{ConfigError, ConfigErrorKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

fn default_log_filter() -> String {
    "warn,cavern=info".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// World seed; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Alternative catalog file; `None` uses the built-in catalog
    pub catalog_path: Option<PathBuf>,
    pub log_filter: String, // e.g. "warn,cavern=debug"
    /// ANSI colours on the console
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            catalog_path: None,
            log_filter: default_log_filter(),
            color: true,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let err = |source| ConfigError {
            path: path.to_path_buf(),
            source,
        };

        let data = std::fs::read_to_string(path).map_err(|e| err(ConfigErrorKind::Read(e)))?;
        toml::from_str(&data).map_err(|e| err(ConfigErrorKind::Parse(e)))
    }

    /// Defaults, then the TOML file named by `CAVERN_CONFIG` (or `file`), then `CAVERN_*` variables.
    pub fn from_env(file: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::from_filename(".env");

        let file = file
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os("CAVERN_CONFIG").map(PathBuf::from));
        let mut cfg = match file {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        cfg.apply_env(|key| std::env::var(key).ok())?;
        Ok(cfg)
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        let invalid = |key: &str, value: &str| ConfigError {
            path: PathBuf::from("<env>"),
            source: ConfigErrorKind::InvalidEnv(key.to_string(), value.to_string()),
        };

        if let Some(v) = var("CAVERN_SEED") {
            self.seed = Some(v.trim().parse().map_err(|_| invalid("CAVERN_SEED", &v))?);
        }
        if let Some(v) = var("CAVERN_CATALOG") {
            self.catalog_path = Some(PathBuf::from(v));
        }
        if let Some(v) = var("CAVERN_LOG") {
            self.log_filter = v;
        }
        if let Some(v) = var("CAVERN_COLOR") {
            self.color = match v.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => return Err(invalid("CAVERN_COLOR", &v)),
            };
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn t_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.seed, None);
        assert!(cfg.color);
        assert_eq!(cfg.log_filter, "warn,cavern=info");
    }

    #[test]
    fn t_toml_partial() {
        let cfg: Config = toml::from_str("seed = 99\ncolor = false\n").unwrap();
        assert_eq!(cfg.seed, Some(99));
        assert!(!cfg.color);
        assert_eq!(cfg.log_filter, "warn,cavern=info");
    }

    #[test]
    fn t_env_overrides() {
        let mut cfg = Config::default();
        cfg.apply_env(env(&[("CAVERN_SEED", "1234"), ("CAVERN_COLOR", "off"), ("CAVERN_LOG", "debug")]))
            .unwrap();
        assert_eq!(cfg.seed, Some(1234));
        assert!(!cfg.color);
        assert_eq!(cfg.log_filter, "debug");
    }

    #[test]
    fn t_env_rejects_garbage() {
        let mut cfg = Config::default();
        let err = cfg.apply_env(env(&[("CAVERN_SEED", "lots")])).unwrap_err();
        assert!(matches!(err.source, ConfigErrorKind::InvalidEnv(ref k, _) if k == "CAVERN_SEED"));
    }

    #[test]
    fn t_load_missing_file() {
        let err = Config::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err.source, ConfigErrorKind::Read(_)));
    }
}
