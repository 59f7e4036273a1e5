use std::env;

use anyhow::{Context, Result};

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Port to listen on (all interfaces)
    pub port: u16,
    /// Create missing tables at startup
    pub auto_create_schema: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = get("DATABASE_URL").context("DATABASE_URL must be set")?;

        let port = match get("PORT") {
            Some(p) => p
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {:?}", p))?,
            None => 8080,
        };

        let auto_create_schema = match get("AUTO_CREATE_SCHEMA") {
            Some(v) => parse_flag(&v).with_context(|| {
                format!(
                    "AUTO_CREATE_SCHEMA must be one of true/false, 1/0, yes/no, got {:?}",
                    v
                )
            })?,
            None => true,
        };

        Ok(Self {
            database_url,
            port,
            auto_create_schema,
        })
    }
}

/// Case-insensitive boolean as commonly written in env files
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
