use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde::Deserialize;
use tracing::{error, warn};

use pw_core::view::PoliticiansPage;
use pw_core::SortMode;

use crate::render;
use crate::state::{ApiState, AppState};

#[derive(Debug, Default, Deserialize)]
pub struct SortParams {
    sort: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MemberFilter {
    state: Option<String>,
}

/// Home page. A failed article fetch renders the empty page; the only
/// visible symptom is the missing content.
pub async fn home(State(state): State<Arc<AppState>>) -> Html<String> {
    let articles = match state.news.articles().await {
        Ok(articles) => articles,
        Err(e) => {
            warn!("Failed to fetch articles, rendering empty page: {}", e);
            Vec::new()
        }
    };
    Html(render::home_page(&articles))
}

/// Politicians page. Sort mode comes from the query string; a failed
/// fetch leaves the list empty.
pub async fn politicians(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SortParams>,
) -> Html<String> {
    let mut page = PoliticiansPage::new();
    match state.members.politicians().await {
        Ok(politicians) => page.load(politicians),
        Err(e) => error!("Error fetching politicians: {}", e),
    }
    page.set_sort_mode(
        params
            .sort
            .as_deref()
            .map(SortMode::from_query)
            .unwrap_or_default(),
    );
    Html(render::politicians_page(&page))
}

/// The flat array the politicians page consumes.
pub async fn list_politicians(State(state): State<Arc<ApiState>>) -> impl IntoResponse {
    match state.directory.list(None).await {
        Ok(members) => Json(members).into_response(),
        Err(e) => {
            error!("Directory listing failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn list_members(
    State(state): State<Arc<ApiState>>,
    Query(filter): Query<MemberFilter>,
) -> impl IntoResponse {
    match state.directory.list(filter.state.as_deref()).await {
        Ok(members) => Json(members).into_response(),
        Err(e) => {
            error!("Directory listing failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn get_member(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.directory.get(id).await {
        Ok(Some(member)) => Json(member).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Member not found").into_response(),
        Err(e) => {
            error!("Member lookup failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
