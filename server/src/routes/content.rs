//! Content global read endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use schemas::{DataEnvelope, GlobalKind};
use serde_json::Value;

use crate::state::AppState;

/// `GET /api/globals/{slug}` — fetch a CMS global wrapped as `{ "data": … }`.
///
/// Only the known slugs resolve; anything else is a plain 404 without an
/// upstream call.
pub async fn get_global(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<DataEnvelope<Value>>, StatusCode> {
    let Some(kind) = GlobalKind::from_slug(&slug) else {
        return Err(StatusCode::NOT_FOUND);
    };

    match state.content.get_global(kind.slug()).await {
        Ok(value) => Ok(Json(DataEnvelope { data: value })),
        Err(e) => {
            tracing::error!(error = %e, slug = kind.slug(), "global fetch failed");
            Err(super::cms_error_status(&e))
        }
    }
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
