use serde::Deserialize;
use std::path::Path;
use tritabula::{Result, TriTabulaError};

/// Connection settings read from the json config file.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub database: String,
    #[serde(default = "default_schema")]
    pub schema: String,
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Upper bound on open connections. The report is read over a single connection.
    #[serde(default = "default_pool_size")]
    pub max_open_conns: u32,
    /// Validated against `max_open_conns` only. The report is built sequentially over one
    /// connection, so no pool is created.
    #[serde(default = "default_pool_size")]
    pub max_idle_conns: u32,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_schema() -> String {
    "public".to_string()
}

fn default_pool_size() -> u32 {
    1
}

impl DbConfig {
    pub async fn load(path: &Path) -> Result<DbConfig> {
        let config_error = |reason: String| TriTabulaError::Config {
            path: path.to_path_buf(),
            reason,
        };

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| config_error(format!("cannot read file: {}", e)))?;

        let config: DbConfig =
            serde_json::from_str(&content).map_err(|e| config_error(e.to_string()))?;

        config.validate().map_err(config_error)?;

        tracing::debug!(
            "Loaded config for database '{}' on {}:{} (max open connections {}, max idle connections {})",
            config.database,
            config.host,
            config.port,
            config.max_open_conns,
            config.max_idle_conns
        );

        Ok(config)
    }

    fn validate(&self) -> std::result::Result<(), String> {
        if self.database.is_empty() {
            return Err("database must not be empty".to_string());
        }

        if self.username.is_empty() {
            return Err("username must not be empty".to_string());
        }

        if self.max_open_conns == 0 {
            return Err("maxOpenConns must be at least 1".to_string());
        }

        if self.max_idle_conns > self.max_open_conns {
            return Err(format!(
                "maxIdleConns ({}) must not exceed maxOpenConns ({})",
                self.max_idle_conns, self.max_open_conns
            ));
        }

        Ok(())
    }

    pub(crate) fn get_connection_string(&self) -> String {
        format!(
            "host={} port={} user={} password={} dbname={}",
            quote(&self.host),
            self.port,
            quote(&self.username),
            quote(&self.password),
            quote(&self.database)
        )
    }
}

/// Quotes a connection string value so empty values and values with spaces survive parsing.
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        if c == '\'' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}
