use crate::fleet::generator::DEFAULT_FLEET_SIZE;
use crate::fleet::queries::DEFAULT_IDLE_TOP_N;
use color_eyre::eyre::{eyre, WrapErr};
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DATA_PATH_VAR: &str = "FLEET_DATA_PATH";
pub const SIZE_VAR: &str = "FLEET_SIZE";
pub const SEED_VAR: &str = "FLEET_SEED";
pub const IDLE_TOP_N_VAR: &str = "FLEET_IDLE_TOP_N";
pub const DEBUG_VAR: &str = "DEBUG";

/// Where the snapshot comes from and how the dashboard is sized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetConfig {
    /// JSON snapshot to load. `None` means generate a synthetic fleet.
    pub data_path: Option<PathBuf>,
    pub fleet_size: usize,
    pub seed: Option<u64>,
    pub idle_top_n: usize,
    pub debug: bool,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            fleet_size: DEFAULT_FLEET_SIZE,
            seed: None,
            idle_top_n: DEFAULT_IDLE_TOP_N,
            debug: false,
        }
    }
}

impl FleetConfig {
    /// Builds the configuration from any variable source; `init_app_config`
    /// passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> color_eyre::eyre::Result<Self> {
        let defaults = Self::default();

        let data_path = lookup(DATA_PATH_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            data_path,
            fleet_size: parse_var(&lookup, SIZE_VAR)?.unwrap_or(defaults.fleet_size),
            seed: parse_var(&lookup, SEED_VAR)?,
            idle_top_n: parse_var(&lookup, IDLE_TOP_N_VAR)?.unwrap_or(defaults.idle_top_n),
            debug: lookup(DEBUG_VAR).is_some_and(|value| is_truthy(&value)),
        })
    }

    /// The data path resolved against the working directory.
    pub fn resolved_data_path(&self) -> color_eyre::eyre::Result<Option<PathBuf>> {
        let Some(path) = &self.data_path else {
            return Ok(None);
        };
        if path.is_absolute() {
            return Ok(Some(path.clone()));
        }
        let base_dir = env::current_dir().wrap_err("Cannot determine working directory")?;
        Ok(Some(base_dir.join(path)))
    }
}

/// Initializes the application configuration from `.env` and the process
/// environment.
pub fn init_app_config() -> color_eyre::eyre::Result<FleetConfig> {
    // Load environment variables from .env file
    dotenv().ok();

    FleetConfig::from_lookup(|key| env::var(key).ok())
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> color_eyre::eyre::Result<Option<T>>
where
    T: FromStr,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| eyre!("Invalid value for {key}: {raw:?}"))
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
