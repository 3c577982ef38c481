pub mod http;

use std::future::Future;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::errors::{ApiError, ApiResult};
use crate::models::{Reservation, ReservationDraft, ReservationId, Table, TableDraft, TableId};

// Every call takes the cancellation token of the view that issued it and
// resolves to `ApiError::Aborted` once that token is cancelled.
#[async_trait]
pub trait ReservationsApi: Send + Sync {
    async fn list_reservations(
        &self,
        date: NaiveDate,
        cancel: &CancellationToken,
    ) -> ApiResult<Vec<Reservation>>;

    async fn search_reservations(
        &self,
        mobile_number: &str,
        cancel: &CancellationToken,
    ) -> ApiResult<Vec<Reservation>>;

    async fn read_reservation(
        &self,
        id: &ReservationId,
        cancel: &CancellationToken,
    ) -> ApiResult<Reservation>;

    async fn create_reservation(
        &self,
        draft: &ReservationDraft,
        cancel: &CancellationToken,
    ) -> ApiResult<Reservation>;

    async fn update_reservation(
        &self,
        id: &ReservationId,
        draft: &ReservationDraft,
        cancel: &CancellationToken,
    ) -> ApiResult<Reservation>;

    async fn cancel_reservation(
        &self,
        id: &ReservationId,
        cancel: &CancellationToken,
    ) -> ApiResult<()>;

    async fn list_tables(&self, cancel: &CancellationToken) -> ApiResult<Vec<Table>>;

    async fn create_table(
        &self,
        draft: &TableDraft,
        cancel: &CancellationToken,
    ) -> ApiResult<Table>;

    async fn seat_reservation(
        &self,
        table_id: &TableId,
        reservation_id: &ReservationId,
        cancel: &CancellationToken,
    ) -> ApiResult<()>;

    async fn finish_table(&self, table_id: &TableId, cancel: &CancellationToken) -> ApiResult<()>;
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

pub async fn cancellable<T, F>(cancel: &CancellationToken, fut: F) -> ApiResult<T>
where
    F: Future<Output = ApiResult<T>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(ApiError::Aborted),
        result = fut => result,
    }
}
