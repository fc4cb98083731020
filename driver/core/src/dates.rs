//! Take Dates
//!
//! Resolves a full date (day / month / year) for every take. The base
//! calendar runs Nov 2024 through Nov 2025: each 4 takes advance one month.
//! Per-take overrides from the content map, month seeds from `mainDates`,
//! and month-seed inheritance are layered on top, with a default day for
//! takes that end up with nothing explicit.

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};

use crate::content::{ContentMap, DateSpec};

/// First month of the sequence: November 2024.
const BASE_YEAR: i32 = 2024;
const BASE_MONTH: u32 = 11;

/// Day used for takes without any explicit date.
pub const DEFAULT_DAY: u32 = 9;

/// A resolved calendar date for one take.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TakeDate {
    /// Day of month, 1..=31.
    pub day: u32,
    /// Month, 1..=12.
    pub month: u32,
    /// Four-digit year.
    pub year: i32,
}

impl fmt::Display for TakeDate {
    /// Formats as the date chip shows it: `DD / MM / YYYY`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02} / {:02} / {}", self.day, self.month, self.year)
    }
}

/// First day of the month a take belongs to.
fn base_for_take(take: u32, steps_per_month: u32) -> NaiveDate {
    let offset = take / steps_per_month.max(1);
    // Nov 1 2024 is a valid date; month addition never fails on day 1.
    NaiveDate::from_ymd_opt(BASE_YEAR, BASE_MONTH, 1)
        .unwrap_or_default()
        .checked_add_months(Months::new(offset))
        .unwrap_or_default()
}

/// Parse a date override string for a given take.
///
/// Accepted shapes: `dd/mm/yyyy`, `yyyy/mm/dd`, `mm/yyyy` and a bare day,
/// with `/`, `-` or `.` as separators. Anything else resolves to `None`.
#[must_use]
pub fn parse_date_str(
    text: &str,
    fallback_day: u32,
    take: u32,
    steps_per_month: u32,
) -> Option<TakeDate> {
    let parts: Vec<&str> = text
        .trim()
        .split(['/', '-', '.'])
        .map(str::trim)
        .collect();
    if parts.iter().any(|p| p.is_empty() || !p.chars().all(|c| c.is_ascii_digit())) {
        return None;
    }

    let date = match parts.as_slice() {
        [a, b, c] => {
            if a.len() == 4 {
                // yyyy/mm/dd
                TakeDate {
                    year: a.parse().ok()?,
                    month: b.parse().ok()?,
                    day: c.parse().ok()?,
                }
            } else if c.len() == 4 {
                // dd/mm/yyyy
                TakeDate {
                    day: a.parse().ok()?,
                    month: b.parse().ok()?,
                    year: c.parse().ok()?,
                }
            } else {
                return None;
            }
        }
        [m, y] if y.len() >= 2 => TakeDate {
            day: fallback_day.clamp(1, 31),
            month: m.parse().ok()?,
            year: y.parse().ok()?,
        },
        [d] => {
            let base = base_for_take(take, steps_per_month);
            TakeDate {
                day: d.parse().ok()?,
                month: base.month(),
                year: base.year(),
            }
        }
        _ => return None,
    };

    Some(TakeDate {
        day: date.day.clamp(1, 31),
        month: date.month.clamp(1, 12),
        year: date.year.max(1),
    })
}

fn date_from_spec(
    spec: &DateSpec,
    fallback_day: u32,
    take: u32,
    steps_per_month: u32,
) -> Option<TakeDate> {
    match spec {
        DateSpec::Text(text) => parse_date_str(text, fallback_day, take, steps_per_month),
        DateSpec::Day(day) => {
            let base = base_for_take(take, steps_per_month);
            Some(TakeDate {
                day: (*day).clamp(1, 31),
                month: base.month(),
                year: base.year(),
            })
        }
    }
}

/// Resolved dates for the whole sequence, one per take.
#[derive(Clone, Debug)]
pub struct DateMap {
    dates: Vec<TakeDate>,
}

impl DateMap {
    /// Resolve dates for `total_steps` takes from a content map.
    ///
    /// Layering, in order: per-take overrides, `mainDates` seeds on the
    /// first take of each month, inheritance of the month seed by the rest
    /// of the month, and finally the base calendar with the default day.
    #[must_use]
    pub fn resolve(
        content: &ContentMap,
        total_steps: u32,
        steps_per_month: u32,
        default_day: u32,
    ) -> Self {
        let steps_per_month = steps_per_month.max(1);
        let default_day = default_day.clamp(1, 31);
        let mut overrides: Vec<Option<TakeDate>> = (0..total_steps)
            .map(|i| {
                content
                    .take(i)
                    .and_then(|t| t.date.as_ref())
                    .and_then(|spec| date_from_spec(spec, default_day, i, steps_per_month))
            })
            .collect();

        // mainDates seed the first take of their month, overriding any
        // per-take value there.
        let months = total_steps.div_ceil(steps_per_month);
        for m in 0..months {
            let start = m * steps_per_month;
            let base = base_for_take(start, steps_per_month);
            let key = format!("{:04}-{:02}", base.year(), base.month());
            if let Some(spec) = content.main_dates().get(&key) {
                if let Some(date) = date_from_spec(spec, default_day, start, steps_per_month) {
                    overrides[start as usize] = Some(date);
                }
            }
        }

        // Takes without a date inherit their month's seed.
        for m in 0..months {
            let start = (m * steps_per_month) as usize;
            if let Some(seed) = overrides[start] {
                let end = (start + steps_per_month as usize).min(overrides.len());
                for slot in &mut overrides[start + 1..end] {
                    slot.get_or_insert(seed);
                }
            }
        }

        let dates = overrides
            .into_iter()
            .enumerate()
            .map(|(i, slot)| {
                slot.unwrap_or_else(|| {
                    let base = base_for_take(i as u32, steps_per_month);
                    TakeDate {
                        day: default_day,
                        month: base.month(),
                        year: base.year(),
                    }
                })
            })
            .collect();

        Self { dates }
    }

    /// The date for a take; out-of-range indexes clamp to the last take.
    #[must_use]
    pub fn date_for(&self, take: u32) -> TakeDate {
        let index = (take as usize).min(self.dates.len().saturating_sub(1));
        self.dates.get(index).copied().unwrap_or(TakeDate {
            day: DEFAULT_DAY,
            month: BASE_MONTH,
            year: BASE_YEAR,
        })
    }
}

/// Label for a month group, e.g. `"Nov 2024"` for month 0.
#[must_use]
pub fn month_label(month: u32) -> String {
    let date = NaiveDate::from_ymd_opt(BASE_YEAR, BASE_MONTH, 1)
        .unwrap_or_default()
        .checked_add_months(Months::new(month))
        .unwrap_or_default();
    date.format("%b %Y").to_string()
}

/// Labels for all month groups.
#[must_use]
pub fn month_labels(months: u32) -> Vec<String> {
    (0..months).map(month_label).collect()
}
