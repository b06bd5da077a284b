use std::path::PathBuf;

use anyhow::{Context, Result};

pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub static_dir: PathBuf,
    pub admin_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = var("EMOTIONMAP_HOST").unwrap_or_else(|| "0.0.0.0".into());
        // PORT is what most hosting platforms inject
        let port = var("EMOTIONMAP_PORT")
            .or_else(|| var("PORT"))
            .unwrap_or_else(|| "5000".into());
        let port: u16 = port
            .parse()
            .with_context(|| format!("invalid port '{}'", port))?;
        let db_path = var("EMOTIONMAP_DB_PATH")
            .unwrap_or_else(|| "emotions.db".into())
            .into();
        let static_dir = var("EMOTIONMAP_STATIC_DIR")
            .unwrap_or_else(|| "client".into())
            .into();
        let admin_token = var("EMOTIONMAP_ADMIN_TOKEN").filter(|t| !t.is_empty());

        Ok(Self {
            host,
            port,
            db_path,
            static_dir,
            admin_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.db_path, PathBuf::from("emotions.db"));
        assert_eq!(config.static_dir, PathBuf::from("client"));
        assert!(config.admin_token.is_none());
    }

    #[test]
    fn platform_port_is_a_fallback() {
        assert_eq!(config(&[("PORT", "8080")]).unwrap().port, 8080);
        assert_eq!(
            config(&[("PORT", "8080"), ("EMOTIONMAP_PORT", "9000")]).unwrap().port,
            9000
        );
    }

    #[test]
    fn bad_port_is_an_error() {
        assert!(config(&[("EMOTIONMAP_PORT", "http")]).is_err());
    }

    #[test]
    fn empty_admin_token_disables_admin() {
        assert!(config(&[("EMOTIONMAP_ADMIN_TOKEN", "")]).unwrap().admin_token.is_none());
        assert_eq!(
            config(&[("EMOTIONMAP_ADMIN_TOKEN", "s3cret")]).unwrap().admin_token.as_deref(),
            Some("s3cret")
        );
    }
}
