use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use tokio_util::sync::CancellationToken;

use crate::errors::{ApiError, ApiResult};
use crate::models::{
    Reservation, ReservationDraft, ReservationId, ReservationStatus, Table, TableDraft, TableId,
};
use crate::services::api::ReservationsApi;

// In-memory API double. Ignores cancellation so views have to guard
// themselves.
#[derive(Default)]
pub(crate) struct MockApi {
    pub reservations: Mutex<Vec<Reservation>>,
    pub tables: Mutex<Vec<Table>>,
    pub calls: Mutex<Vec<String>>,
    pub fail_reservations: bool,
    pub fail_tables: bool,
    pub fail_mutations: bool,
    pub yield_first: bool,
}

impl MockApi {
    pub fn with(reservations: Vec<Reservation>, tables: Vec<Table>) -> Self {
        Self {
            reservations: Mutex::new(reservations),
            tables: Mutex::new(tables),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
        if self.yield_first {
            tokio::task::yield_now().await;
        }
    }

    fn mutation(&self) -> ApiResult<()> {
        if self.fail_mutations {
            return Err(ApiError::Status {
                status: 500,
                message: "boom".to_string(),
            });
        }
        Ok(())
    }

    fn not_found(what: &str) -> ApiError {
        ApiError::Status {
            status: 404,
            message: format!("{what} not found"),
        }
    }
}

pub(crate) fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub(crate) fn reservation(id: i64, day: &str, status: ReservationStatus) -> Reservation {
    Reservation {
        reservation_id: ReservationId::from(id),
        draft: ReservationDraft {
            first_name: format!("Guest{id}"),
            last_name: "Lee".to_string(),
            mobile_number: "555-123-4567".to_string(),
            party_size: 2,
            reservation_date: date(day),
            reservation_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        },
        status,
    }
}

pub(crate) fn table(id: i64, capacity: i32, seated: Option<i64>) -> Table {
    Table {
        table_id: TableId::from(id),
        table_name: format!("#{id}"),
        capacity,
        reservation_id: seated.map(ReservationId::from),
    }
}

#[async_trait]
impl ReservationsApi for MockApi {
    async fn list_reservations(
        &self,
        date: NaiveDate,
        _cancel: &CancellationToken,
    ) -> ApiResult<Vec<Reservation>> {
        self.record("list_reservations").await;
        if self.fail_reservations {
            return Err(ApiError::InvalidResponse("reservations down".to_string()));
        }
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.draft.reservation_date == date)
            .cloned()
            .collect())
    }

    async fn search_reservations(
        &self,
        mobile_number: &str,
        _cancel: &CancellationToken,
    ) -> ApiResult<Vec<Reservation>> {
        self.record("search_reservations").await;
        let wanted: String = mobile_number.chars().filter(|c| c.is_ascii_digit()).collect();
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| {
                let digits: String =
                    r.draft.mobile_number.chars().filter(|c| c.is_ascii_digit()).collect();
                digits.contains(&wanted)
            })
            .cloned()
            .collect())
    }

    async fn read_reservation(
        &self,
        id: &ReservationId,
        _cancel: &CancellationToken,
    ) -> ApiResult<Reservation> {
        self.record("read_reservation").await;
        self.reservations
            .lock()
            .unwrap()
            .iter()
            .find(|r| &r.reservation_id == id)
            .cloned()
            .ok_or_else(|| Self::not_found("reservation"))
    }

    async fn create_reservation(
        &self,
        draft: &ReservationDraft,
        _cancel: &CancellationToken,
    ) -> ApiResult<Reservation> {
        self.record("create_reservation").await;
        self.mutation()?;
        let mut reservations = self.reservations.lock().unwrap();
        let created = Reservation {
            reservation_id: ReservationId::from(reservations.len() as i64 + 1),
            draft: draft.clone(),
            status: ReservationStatus::Booked,
        };
        reservations.push(created.clone());
        Ok(created)
    }

    async fn update_reservation(
        &self,
        id: &ReservationId,
        draft: &ReservationDraft,
        _cancel: &CancellationToken,
    ) -> ApiResult<Reservation> {
        self.record("update_reservation").await;
        self.mutation()?;
        let mut reservations = self.reservations.lock().unwrap();
        let existing = reservations
            .iter_mut()
            .find(|r| &r.reservation_id == id)
            .ok_or_else(|| Self::not_found("reservation"))?;
        existing.draft = draft.clone();
        Ok(existing.clone())
    }

    async fn cancel_reservation(
        &self,
        id: &ReservationId,
        _cancel: &CancellationToken,
    ) -> ApiResult<()> {
        self.record("cancel_reservation").await;
        self.mutation()?;
        let mut reservations = self.reservations.lock().unwrap();
        let existing = reservations
            .iter_mut()
            .find(|r| &r.reservation_id == id)
            .ok_or_else(|| Self::not_found("reservation"))?;
        existing.status = ReservationStatus::Cancelled;
        Ok(())
    }

    async fn list_tables(&self, _cancel: &CancellationToken) -> ApiResult<Vec<Table>> {
        self.record("list_tables").await;
        if self.fail_tables {
            return Err(ApiError::InvalidResponse("tables down".to_string()));
        }
        Ok(self.tables.lock().unwrap().clone())
    }

    async fn create_table(
        &self,
        draft: &TableDraft,
        _cancel: &CancellationToken,
    ) -> ApiResult<Table> {
        self.record("create_table").await;
        self.mutation()?;
        let mut tables = self.tables.lock().unwrap();
        let created = Table {
            table_id: TableId::from(tables.len() as i64 + 1),
            table_name: draft.table_name.clone(),
            capacity: draft.capacity,
            reservation_id: None,
        };
        tables.push(created.clone());
        Ok(created)
    }

    async fn seat_reservation(
        &self,
        table_id: &TableId,
        reservation_id: &ReservationId,
        _cancel: &CancellationToken,
    ) -> ApiResult<()> {
        self.record("seat_reservation").await;
        self.mutation()?;
        let mut tables = self.tables.lock().unwrap();
        let table = tables
            .iter_mut()
            .find(|t| &t.table_id == table_id)
            .ok_or_else(|| Self::not_found("table"))?;
        table.reservation_id = Some(reservation_id.clone());
        for r in self.reservations.lock().unwrap().iter_mut() {
            if &r.reservation_id == reservation_id {
                r.status = ReservationStatus::Seated;
            }
        }
        Ok(())
    }

    async fn finish_table(&self, table_id: &TableId, _cancel: &CancellationToken) -> ApiResult<()> {
        self.record("finish_table").await;
        self.mutation()?;
        let mut tables = self.tables.lock().unwrap();
        let table = tables
            .iter_mut()
            .find(|t| &t.table_id == table_id)
            .ok_or_else(|| Self::not_found("table"))?;
        if let Some(seated) = table.reservation_id.take() {
            for r in self.reservations.lock().unwrap().iter_mut() {
                if r.reservation_id == seated {
                    r.status = ReservationStatus::Finished;
                }
            }
        }
        Ok(())
    }
}
