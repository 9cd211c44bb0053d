// Adapters layer: concrete HTTP implementations of the collaborator ports.

pub mod location;
pub mod search;

pub use location::{FixedLocation, HttpLocationProvider};
pub use search::HttpSearchService;
