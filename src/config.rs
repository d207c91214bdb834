// src/config.rs

use anyhow::{Context, Result, anyhow, bail};
use serde::Serialize;
use std::{fmt, path::PathBuf, str::FromStr};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 3306;
pub const DEFAULT_USER: &str = "root";
pub const DEFAULT_DATABASE: &str = "e_commerce";
pub const DEFAULT_OPERATIONS: u64 = 10;
pub const DEFAULT_MODE: &str = "select";

/// Which benchmark a run exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BenchMode {
    Select,
    Insert,
}

impl FromStr for BenchMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("select") {
            Ok(BenchMode::Select)
        } else if s.eq_ignore_ascii_case("insert") {
            Ok(BenchMode::Insert)
        } else {
            Err(anyhow!("unknown benchmark mode '{s}'"))
        }
    }
}

impl fmt::Display for BenchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchMode::Select => f.write_str("select"),
            BenchMode::Insert => f.write_str("insert"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(anyhow!("unknown output format '{other}', expected 'text' or 'json'")),
        }
    }
}

/// Everything a run needs, fixed before the connection is opened.
///
/// The mode is kept as the raw string so that an unrecognized value can be
/// reported by the runner instead of failing configuration.
#[derive(Clone)]
pub struct BenchConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub operations: u64,
    pub mode: String,
    pub output: OutputFormat,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            user: DEFAULT_USER.into(),
            password: String::new(),
            database: DEFAULT_DATABASE.into(),
            operations: DEFAULT_OPERATIONS,
            mode: DEFAULT_MODE.into(),
            output: OutputFormat::Text,
        }
    }
}

impl BenchConfig {
    /// Load from the process environment, after pulling in a `.env` file if one exists.
    pub fn from_env() -> Result<Self> {
        load_dotenv(dotenvy::dotenv())?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = BenchConfig::default();

        if let Some(host) = lookup("MYSQL_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("MYSQL_PORT") {
            config.port = port
                .trim()
                .parse()
                .with_context(|| format!("MYSQL_PORT is not a valid port: '{port}'"))?;
        }
        if let Some(user) = lookup("MYSQL_USER") {
            config.user = user;
        }
        if let Some(password) = lookup("MYSQL_PASSWORD") {
            config.password = password;
        }
        if let Some(database) = lookup("MYSQL_DATABASE") {
            config.database = database;
        }
        if let Some(ops) = lookup("BENCH_OPERATIONS") {
            config.operations = ops
                .trim()
                .parse()
                .with_context(|| format!("BENCH_OPERATIONS is not a number: '{ops}'"))?;
        }
        if let Some(mode) = lookup("BENCH_MODE") {
            config.mode = mode;
        }
        if let Some(output) = lookup("BENCH_OUTPUT") {
            config.output = output.parse()?;
        }

        if config.operations == 0 {
            bail!("BENCH_OPERATIONS must be at least 1");
        }
        Ok(config)
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    /// The parsed mode, or `None` when the configured string is not a known mode.
    pub fn bench_mode(&self) -> Option<BenchMode> {
        self.mode.parse().ok()
    }

    /// Connection target for log lines. Never includes the password.
    pub fn target(&self) -> String {
        format!(
            "mysql://{}@{}:{}/{}",
            self.user, self.host, self.port, self.database
        )
    }
}

/// A missing `.env` is fine; one that fails to parse is an error, since dotenvy
/// stops at the bad line and leaves earlier keys set.
fn load_dotenv(result: Result<PathBuf, dotenvy::Error>) -> Result<()> {
    match result {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded .env");
            Ok(())
        }
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e).context("Failed to load .env"),
    }
}

impl fmt::Debug for BenchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BenchConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("operations", &self.operations)
            .field("mode", &self.mode)
            .field("output", &self.output)
            .finish()
    }
}
