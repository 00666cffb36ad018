pub mod chart;
pub mod error;
pub mod export;
pub mod inr;
pub mod loan;
pub mod prompt;
pub mod report;
pub mod theme;

pub use error::{LoanError, Result};
pub use inr::format_inr;
pub use loan::{compute_schedule, InstallmentRow, LoanInput, Schedule, ScheduleTotals};
