use chrono::{Duration, NaiveDate};

use super::{ActionOutcome, Confirm, Listing, ViewHandle, ViewScope};
use crate::errors::ApiError;
use crate::models::{Reservation, ReservationId, ReservationStatus, Table, TableId};
use crate::services::api::ReservationsApi;

pub const CANCEL_PROMPT: &str = "Would you like to cancel this reservation?";
pub const FINISH_PROMPT: &str = "Is this table ready to seat new guests? This cannot be undone.";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub date: NaiveDate,
    pub reservations: Vec<Reservation>,
    pub reservations_error: Option<String>,
    pub tables: Vec<Table>,
    pub tables_error: Option<String>,
}

impl DashboardState {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            reservations: Vec::new(),
            reservations_error: None,
            tables: Vec::new(),
            tables_error: None,
        }
    }

    // Cancelled reservations are never shown.
    pub fn reservation_listing(&self) -> Listing<'_, Reservation> {
        Listing::from_items(
            self.reservations
                .iter()
                .filter(|r| r.status != ReservationStatus::Cancelled)
                .collect(),
        )
    }

    pub fn table_listing(&self) -> Listing<'_, Table> {
        Listing::from_items(self.tables.iter().collect())
    }

    pub fn previous_date(&self) -> NaiveDate {
        self.date - Duration::days(1)
    }

    pub fn next_date(&self) -> NaiveDate {
        self.date + Duration::days(1)
    }
}

pub struct DashboardView {
    scope: ViewScope,
    state: DashboardState,
}

impl DashboardView {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            scope: ViewScope::new(),
            state: DashboardState::new(date),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn handle(&self) -> ViewHandle {
        self.scope.handle()
    }

    pub async fn load(&mut self, api: &dyn ReservationsApi) {
        let reservations_token = self.scope.request_token();
        let tables_token = self.scope.request_token();
        let date = self.state.date;

        self.state.reservations_error = None;
        self.state.tables_error = None;

        let (reservations, tables) = tokio::join!(
            api.list_reservations(date, &reservations_token),
            api.list_tables(&tables_token),
        );

        if self.scope.is_unmounted() {
            tracing::debug!(date = %date, "dashboard unmounted, dropping load results");
            return;
        }

        match reservations {
            Ok(list) => self.state.reservations = list,
            Err(e) if e.is_aborted() => {}
            Err(e) => {
                tracing::error!(error = %e, date = %date, "failed to load reservations");
                self.state.reservations_error = Some(e.to_string());
            }
        }

        match tables {
            Ok(list) => self.state.tables = list,
            Err(e) if e.is_aborted() => {}
            Err(e) => {
                tracing::error!(error = %e, "failed to load tables");
                self.state.tables_error = Some(e.to_string());
            }
        }
    }

    pub async fn select_date(&mut self, api: &dyn ReservationsApi, date: NaiveDate) {
        self.state.date = date;
        self.load(api).await;
    }

    pub async fn cancel_reservation(
        &mut self,
        api: &dyn ReservationsApi,
        confirm: &dyn Confirm,
        id: &ReservationId,
    ) -> ActionOutcome {
        if !confirm.confirm(CANCEL_PROMPT) {
            return ActionOutcome::Declined;
        }

        let token = self.scope.request_token();
        let result = api.cancel_reservation(id, &token).await;
        self.after_mutation(api, result, "cancel reservation").await
    }

    pub async fn finish_table(
        &mut self,
        api: &dyn ReservationsApi,
        confirm: &dyn Confirm,
        table_id: &TableId,
    ) -> ActionOutcome {
        if !confirm.confirm(FINISH_PROMPT) {
            return ActionOutcome::Declined;
        }

        let token = self.scope.request_token();
        let result = api.finish_table(table_id, &token).await;
        self.after_mutation(api, result, "finish table").await
    }

    async fn after_mutation(
        &mut self,
        api: &dyn ReservationsApi,
        result: Result<(), ApiError>,
        action: &str,
    ) -> ActionOutcome {
        match result {
            Ok(()) => {
                self.load(api).await;
                ActionOutcome::Completed
            }
            Err(e) if e.is_aborted() => ActionOutcome::Aborted,
            Err(e) => {
                tracing::error!(error = %e, action, "dashboard action failed");
                ActionOutcome::Failed(e.to_string())
            }
        }
    }
}
