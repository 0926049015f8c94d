//! Speed Picker Handlers
//!
//! The picker page and the artificially delayed options fragment. Both
//! resolve the optional `speed` query parameter; unrecognized or missing
//! values fall back to the slow category, so these routes always render.

use axum::{extract::Query, response::IntoResponse};
use serde::Deserialize;
use tracing::debug;

use crate::speed::{self, Speed};
use crate::templates::{OptionsTemplate, PickerTemplate};

/// Query parameters accepted by the picker routes.
#[derive(Debug, Deserialize)]
pub struct PickerParams {
    pub speed: Option<String>,
}

/// Handler for / - renders the picker page with the resolved list.
pub async fn show(Query(params): Query<PickerParams>) -> impl IntoResponse {
    let speed = Speed::resolve(params.speed.as_deref());
    PickerTemplate::new("Animals by speed", speed)
}

/// Handler for /options - same resolution, preceded by the resolved
/// category's artificial delay.
pub async fn options(Query(params): Query<PickerParams>) -> impl IntoResponse {
    let speed = speed::resolve_delayed(params.speed.as_deref()).await;
    debug!(speed = speed.as_str(), "serving options after artificial delay");
    OptionsTemplate::new(speed)
}
