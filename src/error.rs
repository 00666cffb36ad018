use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoanError {
    #[error("invalid loan amount {0}: must be a positive number")]
    InvalidPrincipal(Decimal),

    #[error("invalid term {0}: must be a whole number of months from 1 to 1200")]
    InvalidTerm(i64),

    #[error("invalid interest rate {0}: must not be negative")]
    InvalidRate(Decimal),

    #[error("amounts too large to compute the {0}")]
    Overflow(&'static str),

    #[error("{field}: '{input}' is not a number")]
    InvalidNumber { field: &'static str, input: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("json export failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LoanError>;
