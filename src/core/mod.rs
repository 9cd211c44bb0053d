pub mod engine;
pub mod session;

pub use crate::domain::model::{Restaurant, RestaurantList, SortOrder};
pub use crate::domain::ports::{ConfigProvider, LocationProvider, SearchService};
pub use crate::utils::error::Result;
