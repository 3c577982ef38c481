use super::{Route, SubmitOutcome, ViewScope};
use crate::errors::ApiResult;
use crate::models::{Reservation, ReservationId, ReservationStatus, Table, TableId};
use crate::services::api::ReservationsApi;
use crate::services::validation::check_seating;

pub struct SeatView {
    scope: ViewScope,
    reservation_id: ReservationId,
    pub reservation: Option<Reservation>,
    pub tables: Vec<Table>,
    pub errors: Vec<String>,
}

impl SeatView {
    pub fn new(reservation_id: ReservationId) -> Self {
        Self {
            scope: ViewScope::new(),
            reservation_id,
            reservation: None,
            tables: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn reservation_id(&self) -> &ReservationId {
        &self.reservation_id
    }

    pub fn available_tables(&self) -> Vec<&Table> {
        let party_size = self.reservation.as_ref().map_or(0, |r| r.draft.party_size);
        self.tables
            .iter()
            .filter(|t| !t.is_occupied() && t.capacity >= party_size)
            .collect()
    }

    pub async fn load(&mut self, api: &dyn ReservationsApi) -> ApiResult<()> {
        let reservation_token = self.scope.request_token();
        let tables_token = self.scope.request_token();

        let (reservation, tables) = tokio::join!(
            api.read_reservation(&self.reservation_id, &reservation_token),
            api.list_tables(&tables_token),
        );

        if self.scope.is_unmounted() {
            return Ok(());
        }

        self.reservation = Some(reservation?);
        match tables {
            Ok(tables) => self.tables = tables,
            Err(e) if e.is_aborted() => {}
            Err(e) => {
                tracing::error!(error = %e, "failed to load tables for seating");
                self.errors.push(e.to_string());
            }
        }
        Ok(())
    }

    pub async fn submit(&mut self, api: &dyn ReservationsApi, table_id: &TableId) -> SubmitOutcome {
        self.errors.clear();

        let Some(reservation) = &self.reservation else {
            self.errors.push("Reservation could not be loaded.".to_string());
            return SubmitOutcome::Invalid;
        };
        if !reservation.status.can_transition_to(ReservationStatus::Seated) {
            self.errors.push(format!(
                "Only booked reservations can be seated; this one is {}.",
                reservation.status.as_str()
            ));
            return SubmitOutcome::Invalid;
        }
        let Some(table) = self.tables.iter().find(|t| &t.table_id == table_id) else {
            self.errors.push("Please select a table.".to_string());
            return SubmitOutcome::Invalid;
        };

        let problems = check_seating(table, reservation.draft.party_size);
        if !problems.is_empty() {
            self.errors = problems;
            return SubmitOutcome::Invalid;
        }

        let date = reservation.draft.reservation_date;
        let token = self.scope.request_token();
        match api
            .seat_reservation(table_id, &self.reservation_id, &token)
            .await
        {
            Ok(()) if self.scope.is_unmounted() => SubmitOutcome::Aborted,
            Ok(()) => SubmitOutcome::Navigate(Route::Dashboard { date: Some(date) }),
            Err(e) if e.is_aborted() => SubmitOutcome::Aborted,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    table_id = %table_id,
                    reservation_id = %self.reservation_id,
                    "failed to seat reservation"
                );
                self.errors.push(e.to_string());
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }
}
