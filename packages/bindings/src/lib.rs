use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Schedule
// ---------------------------------------------------------------------------

#[napi]
pub fn build_schedule(input_json: String) -> NapiResult<String> {
    let input: loan_engine_core::schedule::ScheduleInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        loan_engine_core::schedule::build_schedule(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Solvers
// ---------------------------------------------------------------------------

#[napi]
pub fn solve_rate(input_json: String) -> NapiResult<String> {
    let input: loan_engine_core::solvers::rate::RateInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        loan_engine_core::solvers::rate::solve_rate(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn solve_principal(input_json: String) -> NapiResult<String> {
    let input: loan_engine_core::solvers::principal::PrincipalInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        loan_engine_core::solvers::principal::solve_principal(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn solve_tenure(input_json: String) -> NapiResult<String> {
    let input: loan_engine_core::solvers::tenure::TenureInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        loan_engine_core::solvers::tenure::solve_tenure(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn payoff_schedule(input_json: String) -> NapiResult<String> {
    let input: loan_engine_core::solvers::tenure::PayoffInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        loan_engine_core::solvers::tenure::payoff_schedule(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[napi]
pub fn amount_in_words(amount: i64) -> NapiResult<String> {
    if amount < 0 {
        return Err(napi::Error::from_reason("amount must be non-negative"));
    }
    Ok(loan_engine_core::words::to_indian_words(amount as u64))
}

#[napi]
pub fn format_amount(amount: i64) -> NapiResult<String> {
    if amount < 0 {
        return Err(napi::Error::from_reason("amount must be non-negative"));
    }
    Ok(loan_engine_core::words::format_inr(amount as u64))
}
