use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::inr::format_inr;
use crate::loan::Schedule;
use crate::theme::Palette;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ChartPoint {
    pub installment: u32,
    pub principal: Decimal,
    pub interest: Decimal,
}

/// Principal and interest per installment, in installment order.
pub fn chart_series(schedule: &Schedule) -> Vec<ChartPoint> {
    schedule
        .rows()
        .iter()
        .map(|row| ChartPoint {
            installment: row.index,
            principal: row.principal_portion,
            interest: row.interest_portion,
        })
        .collect()
}

/// Horizontal stacked bars, one line per installment, scaled so the largest
/// payment spans `width` marks.
pub fn render_bars(schedule: &Schedule, width: usize, palette: &Palette) -> String {
    let points = chart_series(schedule);
    let largest = points
        .iter()
        .map(|p| p.principal + p.interest)
        .max()
        .unwrap_or(Decimal::ZERO);
    let label_width = points.last().map(|p| p.installment.to_string().len()).unwrap_or(1);

    let mut out = format!(
        "{} principal  {} interest\n",
        palette.principal_mark, palette.interest_mark
    );
    for point in &points {
        let principal_marks = scale(point.principal, largest, width);
        let interest_marks = scale(point.principal + point.interest, largest, width)
            .saturating_sub(principal_marks);
        out.push_str(&format!(
            "{:>label_width$} {}{} {}\n",
            point.installment,
            palette.principal_mark.to_string().repeat(principal_marks),
            palette.interest_mark.to_string().repeat(interest_marks),
            format_inr(point.principal + point.interest),
        ));
    }
    out
}

fn scale(value: Decimal, largest: Decimal, width: usize) -> usize {
    if largest.is_zero() {
        return 0;
    }
    (value / largest * Decimal::from(width))
        .round()
        .to_usize()
        .unwrap_or(0)
}
