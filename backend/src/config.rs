use std::{env, fmt::Display, str::FromStr};

use tracing::info;

pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub frontend_url: String,
    pub static_dir: String,
    pub sentry_dsn: Option<String>,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: try_load("DATABASE_URL", "applications.db")?,
            port: try_load("PORT", "3000")?,
            frontend_url: try_load("FRONTEND_URL", "http://localhost:8080")?,
            static_dir: try_load("STATIC_DIR", "../frontend/dist")?,
            sentry_dsn: env::var("SENTRY_DSN").ok().filter(|dsn| !dsn.trim().is_empty()),
        })
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> anyhow::Result<T>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    parse_value(key, &raw)
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> anyhow::Result<T>
where
    T::Err: Display,
{
    raw.trim()
        .parse()
        .map_err(|e: T::Err| anyhow::anyhow!("Invalid {key} value {raw:?}: {e}"))
}
