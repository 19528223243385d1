use std::path::PathBuf;

use anyhow::Context;

/// Where the static host listens and what it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    /// Bundle produced by Trunk.
    pub dist: PathBuf,
    pub assets: PathBuf,
}

impl SiteConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        // a missing .env is fine
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")); // = site/

        let port = match get("SITE_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("SITE_PORT must be a port number, got {raw:?}"))?,
            None => 3000,
        };

        Ok(Self {
            host: get("SITE_HOST").unwrap_or_else(|| "127.0.0.1".to_owned()),
            port,
            dist: get("SITE_DIST").map_or_else(|| root.join("../dist"), PathBuf::from),
            assets: get("SITE_ASSETS").map_or_else(|| root.join("../assets"), PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<SiteConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SiteConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 3000);
        assert!(cfg.dist.ends_with("dist"));
        assert!(cfg.assets.ends_with("assets"));
    }

    #[test]
    fn reads_overrides() {
        let cfg = config(&[
            ("SITE_HOST", "0.0.0.0"),
            ("SITE_PORT", " 8080 "),
            ("SITE_DIST", "/srv/www"),
        ])
        .unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.dist, PathBuf::from("/srv/www"));
    }

    #[test]
    fn rejects_bad_port() {
        let err = config(&[("SITE_PORT", "eighty")]).unwrap_err();
        assert!(format!("{err:#}").contains("SITE_PORT"));
    }
}
