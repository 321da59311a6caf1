//! Tick construction and label formatting for both chart axes.

use crate::models::Breakpoint;
use crate::models::YearDomain;
use num_format::{Locale, ToFormattedString};

/// Every 5th year gets a visible label; the rest keep their tick mark but
/// render empty text. This decimates labels only, never bars.
const LABEL_EVERY: usize = 5;

/// One axis tick: a slot or value plus its (possibly empty) label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// Build one tick per year in the domain, with decimated labels.
///
/// On mobile layouts the century is dropped and the label is decorated with a
/// leading apostrophe (`'05`); desktop shows the full 4-digit year.
pub fn year_ticks(domain: &YearDomain, breakpoint: Breakpoint) -> Vec<Tick> {
    domain
        .years()
        .enumerate()
        .map(|(i, year)| {
            let label = if i % LABEL_EVERY == 0 {
                year_label(year, breakpoint)
            } else {
                String::new()
            };
            Tick {
                value: year as f64,
                label,
            }
        })
        .collect()
}

fn year_label(year: i32, breakpoint: Breakpoint) -> String {
    if breakpoint.is_mobile() {
        format!("'{:02}", year.rem_euclid(100))
    } else {
        year.to_string()
    }
}

/// Build ticks at the explicitly configured values, not at computed "nice"
/// positions. Labels get thousands separators.
pub fn value_ticks(values: &[f64]) -> Vec<Tick> {
    values
        .iter()
        .map(|&v| Tick {
            value: v,
            label: fmt_comma(v),
        })
        .collect()
}

/// Thousands-separated number formatting, mirroring `d3.format(',')`.
///
/// A non-finite input is the synthetic "no label" marker and renders as empty
/// text rather than `0` or `NaN`.
pub fn fmt_comma(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    if value.fract() == 0.0 {
        (value as i64).to_formatted_string(&Locale::en)
    } else {
        let whole = (value.trunc() as i64).to_formatted_string(&Locale::en);
        let frac = format!("{}", value.fract().abs());
        format!("{}.{}", whole, frac.trim_start_matches("0."))
    }
}
