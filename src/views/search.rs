use super::{Listing, ViewScope};
use crate::models::Reservation;
use crate::services::api::ReservationsApi;

pub struct SearchView {
    scope: ViewScope,
    pub mobile_number: String,
    results: Option<Vec<Reservation>>,
    pub error: Option<String>,
}

impl Default for SearchView {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchView {
    pub fn new() -> Self {
        Self {
            scope: ViewScope::new(),
            mobile_number: String::new(),
            results: None,
            error: None,
        }
    }

    pub fn listing(&self) -> Option<Listing<'_, Reservation>> {
        self.results
            .as_ref()
            .map(|results| Listing::from_items(results.iter().collect()))
    }

    pub async fn search(&mut self, api: &dyn ReservationsApi, mobile_number: &str) {
        self.mobile_number = mobile_number.trim().to_string();
        self.error = None;

        let token = self.scope.request_token();
        let result = api.search_reservations(&self.mobile_number, &token).await;
        if self.scope.is_unmounted() {
            return;
        }

        match result {
            Ok(found) => self.results = Some(found),
            Err(e) if e.is_aborted() => {}
            Err(e) => {
                tracing::error!(error = %e, "reservation search failed");
                self.error = Some(e.to_string());
            }
        }
    }
}
