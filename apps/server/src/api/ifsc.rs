use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use ifsc_finder_bank_data::BranchRecord;
use ifsc_finder_core::{
    constants::FETCH_FAILED_MESSAGE,
    ifsc::{format_warning, normalize_input, validate_ifsc},
    speech::{utterance_for, Utterance},
};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{BranchDetails, CodeValidation},
};

/// Validation failures are 400s; an absent result is a generic 404.
async fn resolve(state: &AppState, raw: &str) -> ApiResult<BranchRecord> {
    let code = normalize_input(raw);
    state
        .lookup_service
        .lookup(&code)
        .await?
        .ok_or_else(|| ApiError::NotFound(FETCH_FAILED_MESSAGE.to_string()))
}

async fn get_branch(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> ApiResult<Json<BranchDetails>> {
    let record = resolve(&state, &code).await?;
    Ok(Json(BranchDetails::from(record)))
}

async fn get_readout(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> ApiResult<Json<Utterance>> {
    let record = resolve(&state, &code).await?;
    Ok(Json(utterance_for(&record, None)))
}

async fn validate_code(Path(code): Path<String>) -> Json<CodeValidation> {
    let code = normalize_input(&code);
    Json(CodeValidation {
        valid: validate_ifsc(&code),
        warning: format_warning(&code).map(str::to_string),
        code,
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ifsc/{code}", get(get_branch))
        .route("/ifsc/{code}/readout", get(get_readout))
        .route("/ifsc/{code}/validate", get(validate_code))
}
