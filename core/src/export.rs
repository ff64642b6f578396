use std::fmt::Write as _;

use crate::credit::credits_for_entry;
use crate::model::catalog::{definition_of, ActivityType, CreditRule};
use crate::model::ledger::Ledger;

pub const CSV_HEADER: &str =
    "Type,Title,Date From,Date To,Classroom Hours,Autonomous Hours,Days,Credits";

/// Render the whole ledger as a CSV document: one row per entry, catalog
/// order first, insertion order within a type. Hour columns are rounded to
/// whole numbers for display; `Days` and `Date To` are left empty when the
/// value is absent; `Credits` is the per-entry formula value.
pub fn to_csv(ledger: &Ledger) -> String {
    let mut out = String::new();
    out.push_str(CSV_HEADER);
    out.push('\n');

    for kind in ActivityType::ALL {
        let def = definition_of(kind);
        for entry in ledger.entries(kind) {
            let date_to = entry
                .date_to
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            // Days only exist for day-based types.
            let days = match def.rule {
                CreditRule::DayBased { .. } => format!("{}", entry.days),
                CreditRule::HourBased { .. } => String::new(),
            };
            let _ = writeln!(
                out,
                "{},{},{},{},{},{},{},{:.1}",
                csv_field(def.name),
                csv_field(&entry.title),
                entry.date_from.format("%Y-%m-%d"),
                date_to,
                entry.classroom_hours.round(),
                entry.autonomous_hours.round(),
                days,
                credits_for_entry(kind, entry),
            );
        }
    }

    out
}

/// Quote a free-text field when it would break the row.
fn csv_field(raw: &str) -> String {
    if raw.contains(',') || raw.contains('"') || raw.contains('\n') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entry::EntryDraft;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_empty_ledger_is_header_only() {
        let csv = to_csv(&Ledger::new());
        assert_eq!(csv, format!("{}\n", CSV_HEADER));
    }

    #[test]
    fn test_rows_cover_every_entry_once() {
        let mut ledger = Ledger::new();
        ledger.add_entry(
            ActivityType::Courses,
            EntryDraft {
                title: "Bayesian methods".to_string(),
                date_from: Some(date("2026-02-02")),
                date_to: Some(date("2026-02-06")),
                classroom_hours: 10.4,
                autonomous_hours: 19.6,
                ..Default::default()
            },
        );
        ledger.add_entry(
            ActivityType::Dissemination,
            EntryDraft {
                title: "Researchers' night".to_string(),
                date_from: Some(date("2026-09-25")),
                days: 1.5,
                ..Default::default()
            },
        );

        let csv = to_csv(&ledger);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        // Hour fields rounded to whole numbers, empty Days column.
        assert_eq!(
            lines[1],
            "\"Courses (PhD, Unibo, external)\",Bayesian methods,2026-02-02,2026-02-06,10,20,,1.0"
        );
        // Day-based: hours are zero, Days carries the fractional value,
        // Date To is empty.
        assert_eq!(
            lines[2],
            "Dissemination,Researchers' night,2026-09-25,,0,0,1.5,0.8"
        );
    }

    #[test]
    fn test_row_credits_match_entry_formula() {
        let mut ledger = Ledger::new();
        ledger.add_entry(
            ActivityType::Tutoring,
            EntryDraft {
                title: "First-year tutoring".to_string(),
                date_from: Some(date("2026-03-09")),
                classroom_hours: 10.0,
                autonomous_hours: 2.5,
                ..Default::default()
            },
        );
        let entry = &ledger.entries(ActivityType::Tutoring)[0];
        let expected = credits_for_entry(ActivityType::Tutoring, entry);
        let csv = to_csv(&ledger);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.ends_with(&format!("{:.1}", expected)));
    }

    #[test]
    fn test_title_with_comma_stays_one_field() {
        let mut ledger = Ledger::new();
        ledger.add_entry(
            ActivityType::Seminars,
            EntryDraft {
                title: "Ethics, law and AI".to_string(),
                date_from: Some(date("2026-04-14")),
                classroom_hours: 2.0,
                autonomous_hours: 3.0,
                ..Default::default()
            },
        );
        let csv = to_csv(&ledger);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains("\"Ethics, law and AI\""));
    }
}
