use crate::error::AppError;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 100;

pub const MIN_MATCH_COUNT: u8 = 3;
pub const MAX_MATCH_COUNT: u8 = 20;

/// Platform the summoner plays on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Na1,
    Euw1,
    Kr,
    Eun1,
    Jp1,
}

impl Region {
    pub const ALL: [Region; 5] = [Region::Na1, Region::Euw1, Region::Kr, Region::Eun1, Region::Jp1];

    pub fn platform(&self) -> &'static str {
        match self {
            Region::Na1 => "na1",
            Region::Euw1 => "euw1",
            Region::Kr => "kr",
            Region::Eun1 => "eun1",
            Region::Jp1 => "jp1",
        }
    }

    /// Regional routing host serving the match-v5 endpoints.
    pub fn regional_routing(&self) -> &'static str {
        match self {
            Region::Na1 => "americas",
            Region::Euw1 | Region::Eun1 => "europe",
            Region::Kr | Region::Jp1 => "asia",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.platform())
    }
}

impl FromStr for Region {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Region::ALL
            .into_iter()
            .find(|r| r.platform() == wanted)
            .ok_or_else(|| {
                AppError::ConfigError(format!(
                    "unknown region '{}' (expected one of: na1, euw1, kr, eun1, jp1)",
                    s
                ))
            })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub region: Region,
    pub cache_ttl: Duration,
    pub request_delay: Duration,
}

impl Config {
    /// Live-mode configuration. The key comes from `--api-key` when given,
    /// otherwise from `RIOT_API_KEY`.
    pub fn from_env(api_key: Option<String>, region: Option<Region>) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_key = match api_key {
            Some(key) => key,
            None => env::var("RIOT_API_KEY").map_err(|_| {
                AppError::ConfigError(
                    "RIOT_API_KEY not found in environment or .env file".to_string(),
                )
            })?,
        };
        if api_key.trim().is_empty() {
            return Err(AppError::ConfigError("API key is empty".to_string()));
        }

        let region = match region {
            Some(region) => region,
            None => region_from_env()?,
        };

        Ok(Config {
            api_key,
            region,
            cache_ttl: Duration::from_secs(env_u64("RIOT_CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS)?),
            request_delay: Duration::from_millis(env_u64(
                "RIOT_REQUEST_DELAY_MS",
                DEFAULT_REQUEST_DELAY_MS,
            )?),
        })
    }
}

pub fn region_from_env() -> Result<Region, AppError> {
    env::var("RIOT_REGION")
        .map(|r| r.parse())
        .unwrap_or(Ok(Region::Na1))
}

fn env_u64(name: &str, default: u64) -> Result<u64, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::ConfigError(format!("{} must be a non-negative integer", name))),
        Err(_) => Ok(default),
    }
}
