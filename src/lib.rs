pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

pub use adapters::{FixedLocation, HttpLocationProvider, HttpSearchService};
pub use config::{CliConfig, Settings};
pub use core::engine::FinderEngine;
pub use core::session::{Phase, Session};
pub use domain::model::{Restaurant, RestaurantList, SortOrder};
pub use utils::error::{FinderError, Result};
