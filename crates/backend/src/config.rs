use std::path::PathBuf;

/// Server settings, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub db_path: PathBuf,
    pub assets_dir: PathBuf,
    /// Origin under which `/uploads` is reachable by browsers.
    pub public_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match lookup("PORT") {
            Some(p) => p
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("invalid PORT {p:?}: {e}"))?,
            None => 3333,
        };
        let db_path = PathBuf::from(lookup("DB_PATH").unwrap_or_else(|| "data/points.redb".to_string()));
        let assets_dir = PathBuf::from(lookup("ASSETS_DIR").unwrap_or_else(|| "assets".to_string()));
        let public_url = lookup("PUBLIC_URL")
            .unwrap_or_else(|| format!("http://localhost:{}", port))
            .trim_end_matches('/')
            .to_string();

        Ok(Config {
            port,
            db_path,
            assets_dir,
            public_url,
        })
    }
}
