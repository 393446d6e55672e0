use std::path::PathBuf;

use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

pub const DEFAULT_UPLOAD_DIR: &str = "/app/uploads";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

/// Where uploaded expense files are written.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { upload_dir: default_upload_dir() }
    }
}

fn default_upload_dir() -> PathBuf { PathBuf::from(DEFAULT_UPLOAD_DIR) }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// The config file when it loads and validates, otherwise [`AppConfig::from_env`].
    pub fn load() -> Result<Self> {
        Self::load_and_validate().or_else(|_| Self::from_env())
    }

    /// Build a config purely from environment variables
    /// (`SERVER_HOST`, `SERVER_PORT`, `DATABASE_URL`, `UPLOAD_DIR`).
    pub fn from_env() -> Result<Self> {
        let mut cfg = AppConfig::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.normalize_from_env();
        self.database.validate()?;
        self.storage.normalize_from_env();
        self.storage.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://") || lower.starts_with("sqlite:")) {
            return Err(anyhow!("database.url must start with postgres://, postgresql:// or sqlite:"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

impl StorageConfig {
    /// `UPLOAD_DIR` wins over the file value.
    pub fn normalize_from_env(&mut self) {
        if let Ok(dir) = std::env::var("UPLOAD_DIR") {
            if !dir.trim().is_empty() {
                self.upload_dir = PathBuf::from(dir);
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.upload_dir.as_os_str().is_empty() {
            return Err(anyhow!("storage.upload_dir must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_toml() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000

            [database]
            url = "postgres://u:p@localhost/expenses"
            max_connections = 5

            [storage]
            upload_dir = "/var/lib/expenses"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.database.max_connections, 5);
        assert_eq!(cfg.database.min_connections, 2);
        assert_eq!(cfg.storage.upload_dir, PathBuf::from("/var/lib/expenses"));
    }

    #[test]
    fn storage_defaults_to_fixed_dir() {
        let cfg: AppConfig = toml::from_str("[server]\nhost = \"h\"\nport = 1\n").unwrap();
        assert_eq!(cfg.storage.upload_dir, PathBuf::from(DEFAULT_UPLOAD_DIR));
    }

    #[test]
    fn server_normalize_fills_defaults() {
        let mut s = ServerConfig { host: "  ".into(), port: 8080, worker_threads: Some(0) };
        s.normalize().unwrap();
        assert_eq!(s.host, "127.0.0.1");
        assert_eq!(s.worker_threads, Some(4));
    }

    #[test]
    fn server_rejects_port_zero() {
        let mut s = ServerConfig { host: "h".into(), port: 0, worker_threads: None };
        assert!(s.normalize().is_err());
    }

    #[test]
    fn database_validation_rules() {
        let mut db = DatabaseConfig { url: "mysql://x".into(), ..DatabaseConfig::default() };
        assert!(db.validate().is_err());
        db.url = "sqlite://expenses.db?mode=rwc".into();
        assert!(db.validate().is_ok());
        db.min_connections = 3;
        db.max_connections = 2;
        assert!(db.validate().is_err());
    }

    #[test]
    fn load_falls_back_to_env_with_default_threads() {
        std::env::set_var("CONFIG_PATH", "/nonexistent/expense-config.toml");
        std::env::set_var("DATABASE_URL", "sqlite://fallback.db?mode=rwc");
        let cfg = AppConfig::load().unwrap();
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert_eq!(cfg.database.url, "sqlite://fallback.db?mode=rwc");
    }

    #[test]
    fn load_from_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nhost = \"127.0.0.1\"\nport = 8181\n").unwrap();
        let cfg = load_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.server.port, 8181);
    }
}
