use crate::model::catalog::{definition_of, ActivityType, CreditRule};
use crate::model::entry::ActivityEntry;
use crate::model::ledger::ActivityAggregate;

/// Round half-up at the tenths digit: 0.34 -> 0.3, 0.35 -> 0.4, 0.37 -> 0.4.
/// Credit values are displayed with one decimal everywhere, so the rounding
/// has to land on exactly that digit.
pub fn round_to_tenths(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// The credit formula, on raw hour/day quantities.
///
/// Day-based types pay `days * rate`, unrounded: fractional days yield
/// fractional credits. Hour-based types convert each hour pool into units and
/// take the *fractional* minimum: both the classroom and the autonomous quota
/// must be proportionally satisfied, a surplus on one side never compensates
/// a deficit on the other. The result is rounded to one decimal.
pub fn credits(kind: ActivityType, classroom_hours: f64, autonomous_hours: f64, days: f64) -> f64 {
    match definition_of(kind).rule {
        CreditRule::DayBased { credit_per_day } => days * credit_per_day,
        CreditRule::HourBased {
            classroom_hours_per_unit,
            autonomous_hours_per_unit,
            credit_per_unit,
        } => {
            let classroom_units = classroom_hours / classroom_hours_per_unit;
            let autonomous_units = autonomous_hours / autonomous_hours_per_unit;
            let completed_units = classroom_units.min(autonomous_units);
            round_to_tenths(completed_units * credit_per_unit)
        }
    }
}

/// Credit value of a single entry, for per-entry display and the CSV export.
/// Does not touch the ledger.
pub fn credits_for_entry(kind: ActivityType, entry: &ActivityEntry) -> f64 {
    credits(kind, entry.classroom_hours, entry.autonomous_hours, entry.days)
}

/// Credit value of a type's running totals. Note the rounding happens once on
/// the aggregate here, while the export rounds each entry independently;
/// the two paths intentionally disagree on sums of partial entries.
pub fn credits_for_aggregate(kind: ActivityType, aggregate: &ActivityAggregate) -> f64 {
    credits(
        kind,
        aggregate.classroom_total,
        aggregate.autonomous_total,
        aggregate.days_total,
    )
}
