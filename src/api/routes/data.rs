//! Data Route
//!
//! The payload endpoint consumed by the Marquee front-end.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::DataResponse;
use crate::api::state::AppState;

/// GET /api/data
///
/// Returns the configured message as `{"message": "<string>"}`.
pub async fn get_data(State(state): State<Arc<AppState>>) -> Json<DataResponse> {
    Json(DataResponse {
        message: state.config.message.clone(),
    })
}
