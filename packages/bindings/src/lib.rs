use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Fast path for reactive UI updates: the raw projection formula, no
/// validation, no envelope.
#[napi]
pub fn calculate_potential(daily_amount: f64, days: u32, rate_percent: f64) -> f64 {
    grind_core::projection::project(daily_amount, days, rate_percent)
}

#[napi]
pub fn project_earnings(input_json: String) -> NapiResult<String> {
    let input: grind_core::projection::ProjectionInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        grind_core::projection::project_earnings(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

#[napi]
pub fn builtin_board() -> NapiResult<String> {
    serde_json::to_string(&grind_core::catalog::Catalog::builtin()).map_err(to_napi_error)
}

#[napi]
pub fn board_tags(catalog_json: String) -> NapiResult<String> {
    let catalog: grind_core::catalog::Catalog =
        serde_json::from_str(&catalog_json).map_err(to_napi_error)?;
    serde_json::to_string(&catalog.all_tags()).map_err(to_napi_error)
}

#[napi]
pub fn progress_summary(catalog_json: String, completed_json: String) -> NapiResult<String> {
    let catalog: grind_core::catalog::Catalog =
        serde_json::from_str(&catalog_json).map_err(to_napi_error)?;
    let progress: grind_core::progress::Progress =
        serde_json::from_str(&completed_json).map_err(to_napi_error)?;
    serde_json::to_string(&progress.summary(&catalog)).map_err(to_napi_error)
}
