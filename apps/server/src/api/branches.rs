use std::sync::Arc;

use axum::{routing::post, Json, Router};
use ifsc_finder_bank_data::BankSearchParams;
use ifsc_finder_core::constants::SEARCH_UNAVAILABLE_MESSAGE;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

/// Bank → State → District → Branch search. No data source supports it.
async fn search_branches(Json(params): Json<BankSearchParams>) -> ApiResult<Json<()>> {
    tracing::debug!("Rejected branch search: {:?}", params);
    Err(ApiError::NotImplemented(SEARCH_UNAVAILABLE_MESSAGE.to_string()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/branches/search", post(search_branches))
}
