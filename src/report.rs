//! Console table for a computed schedule.

use chrono::{Months, NaiveDate};
use tabled::builder::Builder;
use tabled::settings::object::{Columns, Rows};
use tabled::settings::{Alignment, Style};

use crate::inr::format_inr;
use crate::loan::{InstallmentRow, Schedule};
use crate::theme::{BorderStyle, Palette, Theme};

pub const TITLE: &str = "Loan Amortization Schedule";
const HEADERS: [&str; 5] = ["Inst.No", "Principal", "Interest", "Total", "Balance"];

#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions {
    pub theme: Theme,
    /// When set, a Due column lists one date per month starting here.
    pub first_payment: Option<NaiveDate>,
}

pub fn render_table(schedule: &Schedule, options: &RenderOptions) -> String {
    let palette = options.theme.palette();
    let table = build_table(schedule, options.first_payment, &palette);
    let summary = format!(
        "{} installments, total interest {}, total paid {}",
        schedule.len(),
        format_inr(schedule.totals().interest),
        format_inr(schedule.totals().total_payment)
    );
    format!("{}\n{}\n{}", palette.title(TITLE), table, palette.emphasis(&summary))
}

fn build_table(schedule: &Schedule, first_payment: Option<NaiveDate>, palette: &Palette) -> String {
    let mut builder = Builder::default();

    let mut header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    if first_payment.is_some() {
        header.insert(1, "Due".to_string());
    }
    builder.push_record(header);

    for row in schedule.rows() {
        builder.push_record(row_cells(row, first_payment));
    }

    let totals = schedule.totals();
    let mut footer = vec![
        "Total".to_string(),
        format_inr(totals.principal),
        format_inr(totals.interest),
        format_inr(totals.total_payment),
        String::new(),
    ];
    if first_payment.is_some() {
        footer.insert(1, String::new());
    }
    builder.push_record(footer);

    let mut table = builder.build();
    match palette.border {
        BorderStyle::Modern => table.with(Style::modern()),
        BorderStyle::Rounded => table.with(Style::rounded()),
    };
    let first_amount = if first_payment.is_some() { 2 } else { 1 };
    table.modify(Columns::new(first_amount..), Alignment::right());
    table.modify(Rows::first(), Alignment::center());
    table.to_string()
}

fn row_cells(row: &InstallmentRow, first_payment: Option<NaiveDate>) -> Vec<String> {
    let mut cells = vec![
        row.index.to_string(),
        format_inr(row.principal_portion),
        format_inr(row.interest_portion),
        format_inr(row.total_payment),
        format_inr(row.remaining_balance),
    ];
    if let Some(first) = first_payment {
        cells.insert(1, due_date(first, row.index).map(|d| d.to_string()).unwrap_or_default());
    }
    cells
}

/// Date of installment `index`, one calendar month after the previous one.
pub fn due_date(first_payment: NaiveDate, index: u32) -> Option<NaiveDate> {
    first_payment.checked_add_months(Months::new(index.saturating_sub(1)))
}
