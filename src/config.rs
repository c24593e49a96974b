use std::env;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

pub const API_KEY_VAR: &str = "LINEAR_API_KEY";
pub const API_URL_VAR: &str = "LINEAR_API_URL";
pub const DEFAULT_API_URL: &str = "https://api.linear.app/graphql";
pub const DEFAULT_TICKETS_FILE: &str = "LINEAR_TICKETS.md";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub api_url: String,
    pub tickets_path: PathBuf,
    pub team: Option<String>,
}

impl AppConfig {
    pub fn load(tickets_path: PathBuf, team: Option<String>) -> AppResult<Self> {
        Self::from_lookup(tickets_path, team, |name| env::var(name).ok())
    }

    fn from_lookup<F>(tickets_path: PathBuf, team: Option<String>, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(AppError::MissingCredential(API_KEY_VAR))?;

        let api_url = lookup(API_URL_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let team = team
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        Ok(Self {
            api_key,
            api_url,
            tickets_path,
            team,
        })
    }
}
