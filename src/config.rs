use std::path::PathBuf;

use crate::error::{AppError, Result};

pub const DEFAULT_DATA_PATH: &str = "data.csv";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub has_header: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_path = lookup("SONG_STORE_DATA")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let has_header = match lookup("SONG_STORE_HEADER") {
            Some(value) => parse_flag(&value).ok_or_else(|| {
                AppError::Config(format!(
                    "SONG_STORE_HEADER must be true or false, got '{}'",
                    value
                ))
            })?,
            None => true,
        };

        Ok(Self {
            data_path,
            has_header,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
