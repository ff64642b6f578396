use serde::Serialize;

use crate::credit::credits_for_aggregate;
use crate::model::catalog::ActivityType;
use crate::model::ledger::Ledger;

/// Fixed research-component credits, awarded outside this tracker.
pub const RESEARCH_CREDITS: f64 = 140.0;
/// Programme threshold for training credits.
pub const TRAINING_CREDIT_CAP: f64 = 40.0;
/// Programme threshold for training + research credits.
pub const TOTAL_CREDIT_CAP: f64 = 180.0;

/// Snapshot of programme progress, derived from the ledger on demand.
/// The percentages are capped at 100 for display; the credit values are the
/// raw sums and can exceed their caps.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProgressReport {
    pub training_credits: f64,
    pub total_credits: f64,
    pub training_progress: f64,
    pub total_progress: f64,
    /// Advisory only: the tracker keeps accepting entries past the cap.
    pub over_training_cap: bool,
}

/// Display percentage of `value` against `cap`, capped at 100.
pub fn progress(value: f64, cap: f64) -> f64 {
    ((value / cap) * 100.0).min(100.0)
}

/// Sum of per-type credits over the whole catalog.
pub fn training_credits(ledger: &Ledger) -> f64 {
    ActivityType::ALL
        .iter()
        .map(|&kind| credits_for_aggregate(kind, ledger.aggregate(kind)))
        .sum()
}

pub fn report(ledger: &Ledger) -> ProgressReport {
    let training = training_credits(ledger);
    let total = training + RESEARCH_CREDITS;
    ProgressReport {
        training_credits: training,
        total_credits: total,
        training_progress: progress(training, TRAINING_CREDIT_CAP),
        total_progress: progress(total, TOTAL_CREDIT_CAP),
        over_training_cap: training > TRAINING_CREDIT_CAP,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entry::EntryDraft;
    use chrono::NaiveDate;

    fn day_draft(title: &str, days: f64) -> EntryDraft {
        EntryDraft {
            title: title.to_string(),
            date_from: NaiveDate::parse_from_str("2026-05-01", "%Y-%m-%d").ok(),
            days,
            ..Default::default()
        }
    }

    #[test]
    fn test_progress_caps_at_100() {
        assert_eq!(progress(20.0, 40.0), 50.0);
        assert_eq!(progress(40.0, 40.0), 100.0);
        assert_eq!(progress(55.0, 40.0), 100.0);
    }

    #[test]
    fn test_empty_ledger_report() {
        let report = report(&Ledger::new());
        assert_eq!(report.training_credits, 0.0);
        assert_eq!(report.total_credits, RESEARCH_CREDITS);
        assert_eq!(report.training_progress, 0.0);
        assert!(!report.over_training_cap);
        // 140/180
        assert!((report.total_progress - 77.77777777777779).abs() < 1e-9);
    }

    #[test]
    fn test_advisory_flag_strictly_above_cap() {
        let mut ledger = Ledger::new();
        // 80 days at 0.5 cd/day = exactly 40 training credits
        ledger.add_entry(ActivityType::ExtraCurricular, day_draft("Long retreat", 80.0));
        let at_cap = report(&ledger);
        assert_eq!(at_cap.training_credits, 40.0);
        assert!(!at_cap.over_training_cap);
        assert_eq!(at_cap.training_progress, 100.0);

        ledger.add_entry(ActivityType::Dissemination, day_draft("Open day", 1.0));
        let over = report(&ledger);
        assert_eq!(over.training_credits, 40.5);
        assert!(over.over_training_cap);
        // Percentage stays pinned at 100, the raw value does not.
        assert_eq!(over.training_progress, 100.0);
        assert_eq!(over.total_credits, 180.5);
        assert_eq!(over.total_progress, 100.0);
    }

    #[test]
    fn test_training_credits_sums_all_types() {
        let mut ledger = Ledger::new();
        ledger.add_entry(
            ActivityType::Courses,
            EntryDraft {
                title: "Numerics".to_string(),
                date_from: NaiveDate::parse_from_str("2026-05-01", "%Y-%m-%d").ok(),
                classroom_hours: 5.0,
                autonomous_hours: 20.0,
                ..Default::default()
            },
        );
        ledger.add_entry(ActivityType::ExtraCurricular, day_draft("Workshop", 3.0));
        // 1.0 (courses) + 1.5 (3 days * 0.5)
        assert_eq!(training_credits(&ledger), 2.5);
    }
}
