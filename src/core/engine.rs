use crate::core::session::Session;
use crate::domain::model::RestaurantList;
use crate::domain::ports::{LocationProvider, SearchService};
use crate::utils::error::Result;

/// Drives one search attempt: resolve a zip code, query the search service,
/// and build a fresh list model in the default distance order. Each
/// collaborator gets exactly one request; any failure is terminal for the
/// attempt and leaves the session in the error phase.
pub struct FinderEngine<L: LocationProvider, S: SearchService> {
    locator: L,
    search: S,
    session: Session,
}

impl<L: LocationProvider, S: SearchService> FinderEngine<L, S> {
    pub fn new(locator: L, search: S) -> Self {
        Self {
            locator,
            search,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn run(&mut self) -> Result<RestaurantList> {
        self.session.begin_search();

        tracing::info!("Resolving current location");
        let zip = match self.locator.current_zip().await {
            Ok(zip) => zip,
            Err(e) => {
                self.session.fail(&e);
                return Err(e);
            }
        };
        tracing::info!("Location resolved to zip {}", zip);

        tracing::info!("Searching for pizza near {}", zip);
        let restaurants = match self.search.restaurants_near(&zip).await {
            Ok(restaurants) => restaurants,
            Err(e) => {
                self.session.fail(&e);
                return Err(e);
            }
        };
        tracing::debug!("Search returned {} restaurants", restaurants.len());

        let list = RestaurantList::new(restaurants);
        self.session.results_ready(list.count());
        Ok(list)
    }
}
