pub mod file;

use crate::config::file::FileConfig;
use crate::domain::model::SortOrder;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, validate_zip_code, Validate};
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_LOCATION_ENDPOINT: &str = "https://ipinfo.io/json";
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://api.pizzame.dev/v1/restaurants";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone, Parser)]
#[command(name = "pizza-me")]
#[command(about = "Find nearby pizza restaurants from your terminal")]
pub struct CliConfig {
    /// Search this zip code instead of resolving the current location
    #[arg(long)]
    pub zip: Option<String>,

    #[arg(long)]
    pub location_endpoint: Option<String>,

    #[arg(long)]
    pub search_endpoint: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Show at most this many restaurants
    #[arg(long)]
    pub limit: Option<usize>,

    /// Initial sort order
    #[arg(long, value_enum)]
    pub sort: Option<SortOrder>,

    /// Keep the list open and re-sort with d/n, quit with q
    #[arg(long)]
    pub interactive: bool,

    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Fully resolved configuration: CLI flags over file values over defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub zip: Option<String>,
    pub location_endpoint: String,
    pub search_endpoint: String,
    pub timeout_seconds: u64,
    pub limit: Option<usize>,
    pub sort: SortOrder,
    pub interactive: bool,
    pub verbose: bool,
}

impl Settings {
    pub fn resolve(cli: CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::merge(cli, file))
    }

    fn merge(cli: CliConfig, file: FileConfig) -> Self {
        let endpoints = file.endpoints.unwrap_or_default();
        let search = file.search.unwrap_or_default();
        let display = file.display.unwrap_or_default();

        Self {
            zip: cli.zip,
            location_endpoint: cli
                .location_endpoint
                .or(endpoints.location)
                .unwrap_or_else(|| DEFAULT_LOCATION_ENDPOINT.to_string()),
            search_endpoint: cli
                .search_endpoint
                .or(endpoints.search)
                .unwrap_or_else(|| DEFAULT_SEARCH_ENDPOINT.to_string()),
            timeout_seconds: cli
                .timeout_seconds
                .or(search.timeout_seconds)
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            limit: cli.limit.or(search.limit),
            sort: cli.sort.or(display.sort).unwrap_or(SortOrder::Distance),
            interactive: cli.interactive,
            verbose: cli.verbose,
        }
    }
}

impl ConfigProvider for Settings {
    fn location_endpoint(&self) -> &str {
        &self.location_endpoint
    }

    fn search_endpoint(&self) -> &str {
        &self.search_endpoint
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("location_endpoint", &self.location_endpoint)?;
        validate_url("search_endpoint", &self.search_endpoint)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        if let Some(zip) = &self.zip {
            validate_zip_code("zip", zip)?;
        }
        Ok(())
    }
}
