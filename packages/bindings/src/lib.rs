use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Build a reconciled repayment schedule from a JSON-encoded request.
/// Returns the full computation envelope (rows, summary, narrative,
/// warnings) as a JSON string.
#[napi]
pub fn build_schedule(input_json: String) -> NapiResult<String> {
    let request: amort_core::schedule::ScheduleRequest =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = amort_core::schedule::build_schedule(&request).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
