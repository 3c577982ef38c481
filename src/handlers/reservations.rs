use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::{Html, Response};
use axum::Form;
use chrono::Local;
use serde::Deserialize;

use super::dashboard::{after_action, selected_date};
use super::{form_response, render, ConfirmForm};
use crate::errors::AppError;
use crate::models::{ReservationForm, ReservationId, TableId};
use crate::state::AppState;
use crate::views::{DashboardView, FormMode, ReservationFormView, Route, SeatView};

// GET /reservations/new
pub async fn new_reservation_page() -> Html<String> {
    let view = ReservationFormView::new(FormMode::Create);
    render::reservation_form(&view, &Route::NewReservation.path())
}

// POST /reservations/new
pub async fn create_reservation(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ReservationForm>,
) -> Response {
    let mut view = ReservationFormView::new(FormMode::Create);
    view.set_form(form);
    let outcome = view.submit(state.api.as_ref(), Local::now().naive_local()).await;
    form_response(outcome, || {
        render::reservation_form(&view, &Route::NewReservation.path())
    })
}

// GET /reservations/:id/edit
pub async fn edit_reservation_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Html<String> {
    let id = ReservationId::from(id);
    let action = Route::EditReservation(id.clone()).path();
    let view = ReservationFormView::edit(state.api.as_ref(), id).await;
    render::reservation_form(&view, &action)
}

// POST /reservations/:id/edit
pub async fn update_reservation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<ReservationForm>,
) -> Response {
    let id = ReservationId::from(id);
    let action = Route::EditReservation(id.clone()).path();
    let mut view = ReservationFormView::new(FormMode::Edit(id));
    view.set_form(form);
    let outcome = view.submit(state.api.as_ref(), Local::now().naive_local()).await;
    form_response(outcome, || render::reservation_form(&view, &action))
}

// POST /reservations/:id/cancel
pub async fn cancel_reservation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<ConfirmForm>,
) -> Html<String> {
    let id = ReservationId::from(id);
    let confirmed = form.confirmed;
    let confirm = move |_: &str| confirmed;

    let mut view = DashboardView::new(selected_date(form.date.as_deref()));
    let outcome = view
        .cancel_reservation(state.api.as_ref(), &confirm, &id)
        .await;
    tracing::info!(reservation_id = %id, outcome = ?outcome, "cancel reservation");

    after_action(&mut view, state.api.as_ref(), outcome).await
}

// GET /reservations/:id/seat
pub async fn seat_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let mut view = SeatView::new(ReservationId::from(id));
    view.load(state.api.as_ref()).await?;
    Ok(render::seat_form(&view))
}

// POST /reservations/:id/seat
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeatForm {
    pub table_id: String,
}

pub async fn seat_reservation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<SeatForm>,
) -> Result<Response, AppError> {
    let mut view = SeatView::new(ReservationId::from(id));
    view.load(state.api.as_ref()).await?;
    let outcome = view
        .submit(state.api.as_ref(), &TableId::from(form.table_id))
        .await;
    Ok(form_response(outcome, || render::seat_form(&view)))
}
