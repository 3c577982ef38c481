use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use super::render;
use crate::state::AppState;
use crate::views::SearchView;

// GET /search?mobile_number=...
#[derive(Deserialize)]
pub struct SearchQuery {
    pub mobile_number: Option<String>,
}

pub async fn search_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Html<String> {
    let mut view = SearchView::new();
    if let Some(mobile_number) = query.mobile_number.as_deref().filter(|m| !m.trim().is_empty()) {
        view.search(state.api.as_ref(), mobile_number).await;
    }
    render::search(&view)
}
