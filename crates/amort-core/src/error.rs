use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmortError {
    #[error("Invalid input: {field} ({reason})")]
    InvalidInput { field: String, reason: String },

    #[error("Unknown repayment method: {value} (expected annuity, effective or flat)")]
    InvalidMethod { value: String },

    #[error("Invalid tenor: {months} months (must be at least 1)")]
    InvalidTenor { months: u32 },

    #[error("Date error: {0}")]
    DateError(String),
}
