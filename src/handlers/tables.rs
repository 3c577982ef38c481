use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::{Html, Response};
use axum::Form;

use super::dashboard::{after_action, selected_date};
use super::{form_response, render, ConfirmForm};
use crate::models::{TableForm, TableId};
use crate::state::AppState;
use crate::views::{DashboardView, TableFormView};

// GET /tables/new
pub async fn new_table_page() -> Html<String> {
    render::table_form(&TableFormView::new())
}

// POST /tables/new
pub async fn create_table(
    State(state): State<Arc<AppState>>,
    Form(form): Form<TableForm>,
) -> Response {
    let mut view = TableFormView::new();
    view.form = form;
    let outcome = view.submit(state.api.as_ref()).await;
    form_response(outcome, || render::table_form(&view))
}

// POST /tables/:id/finish
pub async fn finish_table(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<ConfirmForm>,
) -> Html<String> {
    let table_id = TableId::from(id);
    let confirmed = form.confirmed;
    let confirm = move |_: &str| confirmed;

    let mut view = DashboardView::new(selected_date(form.date.as_deref()));
    let outcome = view
        .finish_table(state.api.as_ref(), &confirm, &table_id)
        .await;
    tracing::info!(table_id = %table_id, outcome = ?outcome, "finish table");

    after_action(&mut view, state.api.as_ref(), outcome).await
}
