use log::{debug, trace};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;

use crate::error::{LoanError, Result};

/// Places every displayed or exported amount is rounded to.
pub const DISPLAY_DP: u32 = 2;

/// Longest accepted term: 100 years of monthly installments.
pub const MAX_TERM_MONTHS: u32 = 1200;

/// A validated loan request. Construct it with [`LoanInput::new`]; the fields
/// cannot be changed afterwards.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LoanInput {
    principal: Decimal,
    term_months: u32,
    annual_rate_percent: Decimal,
}

impl LoanInput {
    /// Validates the three fields in order and reports the first one that is
    /// out of range.
    pub fn new(principal: Decimal, term_months: i64, annual_rate_percent: Decimal) -> Result<Self> {
        Ok(Self {
            principal: validate_principal(principal)?,
            term_months: validate_term(term_months)?,
            annual_rate_percent: validate_rate(annual_rate_percent)?,
        })
    }

    pub fn principal(&self) -> Decimal {
        self.principal
    }

    pub fn term_months(&self) -> u32 {
        self.term_months
    }

    pub fn annual_rate_percent(&self) -> Decimal {
        self.annual_rate_percent
    }

    /// Equal-principal schedule: the principal portion is constant and
    /// interest accrues on the declining balance.
    ///
    /// The running balance keeps full precision between periods. Only the
    /// emitted row values are rounded, and the totals are sums of those
    /// rounded values.
    ///
    /// Fails with [`LoanError::Overflow`] when an amount no longer fits in a
    /// `Decimal`, which only happens for principals or rates far outside any
    /// real loan.
    pub fn schedule(&self) -> Result<Schedule> {
        let periodic_principal = self.principal / Decimal::from(self.term_months);
        let monthly_rate = self.annual_rate_percent / dec!(100) / dec!(12);
        debug!(
            "schedule for {} over {} months at {}%: periodic principal {}, monthly rate {}",
            self.principal, self.term_months, self.annual_rate_percent, periodic_principal, monthly_rate
        );

        let mut balance = self.principal;
        let mut rows = Vec::with_capacity(self.term_months as usize);
        let mut totals = ScheduleTotals::default();

        for index in 1..=self.term_months {
            let interest = balance
                .checked_mul(monthly_rate)
                .ok_or(LoanError::Overflow("interest"))?;
            let total = periodic_principal
                .checked_add(interest)
                .ok_or(LoanError::Overflow("total payment"))?;
            balance -= periodic_principal;
            if balance < Decimal::ZERO {
                balance = Decimal::ZERO;
            }
            trace!(
                "inst # {}, interest {}, total {}, balance {}",
                index,
                interest,
                total,
                balance
            );

            let row = InstallmentRow::new(
                index,
                round(periodic_principal, DISPLAY_DP),
                round(interest, DISPLAY_DP),
                round(total, DISPLAY_DP),
                round(balance, DISPLAY_DP),
            );
            totals.add(&row)?;
            rows.push(row);
        }

        Ok(Schedule { rows, totals })
    }
}

pub fn validate_principal(principal: Decimal) -> Result<Decimal> {
    if principal <= Decimal::ZERO {
        return Err(LoanError::InvalidPrincipal(principal));
    }
    Ok(principal)
}

pub fn validate_term(term_months: i64) -> Result<u32> {
    match u32::try_from(term_months) {
        Ok(term) if (1..=MAX_TERM_MONTHS).contains(&term) => Ok(term),
        _ => Err(LoanError::InvalidTerm(term_months)),
    }
}

pub fn validate_rate(annual_rate_percent: Decimal) -> Result<Decimal> {
    if annual_rate_percent < Decimal::ZERO {
        return Err(LoanError::InvalidRate(annual_rate_percent));
    }
    Ok(annual_rate_percent)
}

/// Validates the inputs and computes their schedule in one call.
pub fn compute_schedule(
    principal: Decimal,
    term_months: i64,
    annual_rate_percent: Decimal,
) -> Result<Schedule> {
    LoanInput::new(principal, term_months, annual_rate_percent)?.schedule()
}

#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
pub struct InstallmentRow {
    #[serde(rename = "Inst.No")]
    pub index: u32,
    #[serde(rename = "Principal")]
    pub principal_portion: Decimal,
    #[serde(rename = "Interest")]
    pub interest_portion: Decimal,
    #[serde(rename = "Total")]
    pub total_payment: Decimal,
    #[serde(rename = "Balance")]
    pub remaining_balance: Decimal,
}

impl InstallmentRow {
    pub fn new(
        index: u32,
        principal_portion: Decimal,
        interest_portion: Decimal,
        total_payment: Decimal,
        remaining_balance: Decimal,
    ) -> Self {
        Self {
            index,
            principal_portion,
            interest_portion,
            total_payment,
            remaining_balance,
        }
    }
}

impl fmt::Display for InstallmentRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "inst number {}, principal {:.2}, interest {:.2}, total {:.2}, balance {:.2}",
            self.index,
            self.principal_portion,
            self.interest_portion,
            self.total_payment,
            self.remaining_balance
        )
    }
}

/// Sums of the rounded row values. The balance column is not summed.
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize)]
pub struct ScheduleTotals {
    #[serde(rename = "Principal")]
    pub principal: Decimal,
    #[serde(rename = "Interest")]
    pub interest: Decimal,
    #[serde(rename = "Total")]
    pub total_payment: Decimal,
}

impl ScheduleTotals {
    fn add(&mut self, row: &InstallmentRow) -> Result<()> {
        let sum = |acc: Decimal, amount: Decimal| {
            acc.checked_add(amount).ok_or(LoanError::Overflow("totals"))
        };
        self.principal = sum(self.principal, row.principal_portion)?;
        self.interest = sum(self.interest, row.interest_portion)?;
        self.total_payment = sum(self.total_payment, row.total_payment)?;
        Ok(())
    }
}

impl fmt::Display for ScheduleTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total principal {:.2}, total interest {:.2}, total paid {:.2}",
            self.principal, self.interest, self.total_payment
        )
    }
}

/// Output of a single calculation: the rows ordered by installment number and
/// their totals.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Schedule {
    rows: Vec<InstallmentRow>,
    totals: ScheduleTotals,
}

impl Schedule {
    pub fn rows(&self) -> &[InstallmentRow] {
        &self.rows
    }

    pub fn totals(&self) -> &ScheduleTotals {
        &self.totals
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn last(&self) -> Option<&InstallmentRow> {
        self.rows.last()
    }
}

// ties go to the even digit
pub(crate) fn round(amt: Decimal, dec: u32) -> Decimal {
    let mut rounded = amt.round_dp_with_strategy(dec, RoundingStrategy::MidpointNearestEven);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(dec);
    rounded
}
