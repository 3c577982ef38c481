use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use super::render;
use crate::models::wire;
use crate::services::api::ReservationsApi;
use crate::state::AppState;
use crate::views::{ActionOutcome, DashboardView, Route};

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub(crate) fn selected_date(raw: Option<&str>) -> NaiveDate {
    raw.and_then(wire::parse_date).unwrap_or_else(today)
}

pub async fn redirect_to_dashboard() -> Redirect {
    Redirect::to(&Route::Dashboard { date: None }.path())
}

// GET /dashboard?date=YYYY-MM-DD
#[derive(Deserialize)]
pub struct DashboardQuery {
    pub date: Option<String>,
}

pub async fn dashboard_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DashboardQuery>,
) -> Html<String> {
    let mut view = DashboardView::new(selected_date(query.date.as_deref()));
    view.load(state.api.as_ref()).await;
    render::dashboard(view.state(), today(), None)
}

// Renders the dashboard after a cancel/finish action. A completed action
// has already refreshed the view; anything else still needs a load.
pub(crate) async fn after_action(
    view: &mut DashboardView,
    api: &dyn ReservationsApi,
    outcome: ActionOutcome,
) -> Html<String> {
    let error = match &outcome {
        ActionOutcome::Failed(message) => Some(message.as_str()),
        _ => None,
    };
    if outcome != ActionOutcome::Completed {
        view.load(api).await;
    }
    render::dashboard(view.state(), today(), error)
}
