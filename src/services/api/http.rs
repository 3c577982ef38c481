use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tokio_util::sync::CancellationToken;

use super::{cancellable, Envelope, ReservationsApi};
use crate::errors::{ApiError, ApiResult};
use crate::models::{
    wire, Reservation, ReservationDraft, ReservationId, Table, TableDraft, TableId,
};

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: Url,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let raw = base_url.into();
        let base_url =
            Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(raw));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    // Each segment is percent-encoded on its own. Dot segments are dropped
    // by the url crate rather than encoded, so they are refused here.
    fn url(&self, segments: &[&str]) -> ApiResult<Url> {
        if let Some(bad) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
            return Err(ApiError::InvalidUrl(format!("bad path segment {bad:?}")));
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        cancel: &CancellationToken,
    ) -> ApiResult<T> {
        cancellable(cancel, async move {
            let response = Self::check_status(request.send().await?).await?;
            let envelope: Envelope<T> = response
                .json()
                .await
                .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
            Ok(envelope.data)
        })
        .await
    }

    async fn execute(&self, request: RequestBuilder, cancel: &CancellationToken) -> ApiResult<()> {
        cancellable(cancel, async move {
            Self::check_status(request.send().await?).await?;
            Ok(())
        })
        .await
    }

    async fn check_status(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await?;
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or_else(|_| if text.is_empty() { status.to_string() } else { text });

        tracing::debug!(status = %status, message = %message, "reservation API returned error");
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ReservationsApi for HttpApi {
    async fn list_reservations(
        &self,
        date: NaiveDate,
        cancel: &CancellationToken,
    ) -> ApiResult<Vec<Reservation>> {
        let request = self
            .client
            .get(self.url(&["reservations"])?)
            .query(&[("date", wire::format_date(date))]);
        self.fetch(request, cancel).await
    }

    async fn search_reservations(
        &self,
        mobile_number: &str,
        cancel: &CancellationToken,
    ) -> ApiResult<Vec<Reservation>> {
        let request = self
            .client
            .get(self.url(&["reservations"])?)
            .query(&[("mobile_number", mobile_number)]);
        self.fetch(request, cancel).await
    }

    async fn read_reservation(
        &self,
        id: &ReservationId,
        cancel: &CancellationToken,
    ) -> ApiResult<Reservation> {
        let request = self.client.get(self.url(&["reservations", id.as_str()])?);
        self.fetch(request, cancel).await
    }

    async fn create_reservation(
        &self,
        draft: &ReservationDraft,
        cancel: &CancellationToken,
    ) -> ApiResult<Reservation> {
        let request = self
            .client
            .post(self.url(&["reservations"])?)
            .json(&Envelope { data: draft });
        self.fetch(request, cancel).await
    }

    async fn update_reservation(
        &self,
        id: &ReservationId,
        draft: &ReservationDraft,
        cancel: &CancellationToken,
    ) -> ApiResult<Reservation> {
        let request = self
            .client
            .put(self.url(&["reservations", id.as_str()])?)
            .json(&Envelope { data: draft });
        self.fetch(request, cancel).await
    }

    async fn cancel_reservation(
        &self,
        id: &ReservationId,
        cancel: &CancellationToken,
    ) -> ApiResult<()> {
        let request = self
            .client
            .put(self.url(&["reservations", id.as_str(), "status"])?)
            .json(&json!({ "data": { "status": "cancelled" } }));
        self.execute(request, cancel).await
    }

    async fn list_tables(&self, cancel: &CancellationToken) -> ApiResult<Vec<Table>> {
        let request = self.client.get(self.url(&["tables"])?);
        self.fetch(request, cancel).await
    }

    async fn create_table(
        &self,
        draft: &TableDraft,
        cancel: &CancellationToken,
    ) -> ApiResult<Table> {
        let request = self
            .client
            .post(self.url(&["tables"])?)
            .json(&Envelope { data: draft });
        self.fetch(request, cancel).await
    }

    async fn seat_reservation(
        &self,
        table_id: &TableId,
        reservation_id: &ReservationId,
        cancel: &CancellationToken,
    ) -> ApiResult<()> {
        let request = self
            .client
            .put(self.url(&["tables", table_id.as_str(), "seat"])?)
            .json(&json!({ "data": { "reservation_id": reservation_id } }));
        self.execute(request, cancel).await
    }

    async fn finish_table(&self, table_id: &TableId, cancel: &CancellationToken) -> ApiResult<()> {
        let request = self.client.delete(self.url(&["tables", table_id.as_str(), "seat"])?);
        self.execute(request, cancel).await
    }
}
