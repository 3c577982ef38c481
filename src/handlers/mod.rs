pub mod dashboard;
pub mod health;
pub mod render;
pub mod reservations;
pub mod search;
pub mod tables;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;

use crate::state::AppState;
use crate::views::SubmitOutcome;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard::redirect_to_dashboard))
        .route("/health", get(health::health))
        .route("/dashboard", get(dashboard::dashboard_page))
        .route(
            "/reservations/new",
            get(reservations::new_reservation_page).post(reservations::create_reservation),
        )
        .route(
            "/reservations/:id/edit",
            get(reservations::edit_reservation_page).post(reservations::update_reservation),
        )
        .route(
            "/reservations/:id/cancel",
            post(reservations::cancel_reservation),
        )
        .route(
            "/reservations/:id/seat",
            get(reservations::seat_page).post(reservations::seat_reservation),
        )
        .route(
            "/tables/new",
            get(tables::new_table_page).post(tables::create_table),
        )
        .route("/tables/:id/finish", post(tables::finish_table))
        .route("/search", get(search::search_page))
        .with_state(state)
}

// Posted by the confirm-guarded buttons on the dashboard. `confirmed` is
// only set when the user accepted the browser prompt.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfirmForm {
    pub confirmed: bool,
    pub date: Option<String>,
}

fn form_response(outcome: SubmitOutcome, render: impl FnOnce() -> Html<String>) -> Response {
    match outcome {
        SubmitOutcome::Navigate(route) => Redirect::to(&route.path()).into_response(),
        SubmitOutcome::Invalid => (StatusCode::UNPROCESSABLE_ENTITY, render()).into_response(),
        SubmitOutcome::Failed(_) => (StatusCode::BAD_GATEWAY, render()).into_response(),
        SubmitOutcome::Aborted => render().into_response(),
    }
}
