//! Console prompts for the three loan fields.
//!
//! Each field is asked for until it parses and passes its range check; only
//! the failing field is asked again.

use log::{debug, warn};
use std::io::{self, BufRead, Write};

use crate::error::{LoanError, Result};
use crate::inr::parse_amount;
use crate::loan::{validate_principal, validate_rate, validate_term, LoanInput};

const AMOUNT_PROMPT: &str = "Enter Loan Amount: ";
const TERM_PROMPT: &str = "Enter Term (months): ";
const RATE_PROMPT: &str = "Enter Annual Interest Rate (%): ";

const AMOUNT_RETRY: &str = "Invalid loan amount. Please enter a positive number.";
const TERM_RETRY: &str = "Invalid term. Please enter a positive integer.";
const RATE_RETRY: &str = "Invalid interest rate. Please enter a non-negative number.";

pub fn prompt_loan_input<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<LoanInput> {
    let principal = ask(input, output, AMOUNT_PROMPT, AMOUNT_RETRY, |line| {
        validate_principal(parse_amount("loan amount", line)?)
    })?;

    let term = ask(input, output, TERM_PROMPT, TERM_RETRY, |line| {
        let term = parse_term(line)?;
        validate_term(term)?;
        Ok(term)
    })?;

    let rate = ask(input, output, RATE_PROMPT, RATE_RETRY, |line| {
        validate_rate(parse_amount("interest rate", line)?)
    })?;

    LoanInput::new(principal, term, rate)
}

pub fn parse_term(line: &str) -> Result<i64> {
    let trimmed = line.trim();
    trimmed.parse::<i64>().map_err(|_| LoanError::InvalidNumber {
        field: "term",
        input: trimmed.to_string(),
    })
}

fn ask<R, W, T, F>(input: &mut R, output: &mut W, prompt: &str, retry: &str, check: F) -> Result<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T>,
{
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed before all loan fields were entered").into());
        }

        match check(&line) {
            Ok(value) => {
                debug!("accepted {:?} for '{}'", line.trim(), prompt.trim());
                return Ok(value);
            }
            Err(e) => {
                warn!("rejected input: {}", e);
                writeln!(output, "{}", retry)?;
            }
        }
    }
}
