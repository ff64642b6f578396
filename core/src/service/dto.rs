use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::credit::{credits_for_aggregate, credits_for_entry};
use crate::model::catalog::{definition_of, ActivityType};
use crate::model::entry::ActivityEntry;
use crate::model::ledger::Ledger;

/// Flattened entry for listings: the stored fields plus the derived credit
/// value, so the shell never runs the formula itself.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EntryView {
    pub id: Uuid,
    pub kind: ActivityType,
    pub type_name: &'static str,
    pub title: String,
    pub date_from: NaiveDate,
    pub date_to: Option<NaiveDate>,
    pub classroom_hours: f64,
    pub autonomous_hours: f64,
    pub days: f64,
    pub credits: f64,
}

impl EntryView {
    pub fn from_entry(kind: ActivityType, entry: &ActivityEntry) -> Self {
        Self {
            id: entry.id,
            kind,
            type_name: definition_of(kind).name,
            title: entry.title.clone(),
            date_from: entry.date_from,
            date_to: entry.date_to,
            classroom_hours: entry.classroom_hours,
            autonomous_hours: entry.autonomous_hours,
            days: entry.days,
            credits: credits_for_entry(kind, entry),
        }
    }

    /// Listing id, the first block of the uuid.
    pub fn short_id(&self) -> String {
        self.id.to_string()[..8].to_string()
    }
}

/// One catalog type's running totals and credit value.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TypeSummary {
    pub kind: ActivityType,
    pub name: &'static str,
    pub classroom_total: f64,
    pub autonomous_total: f64,
    pub days_total: f64,
    pub entry_count: usize,
    pub credits: f64,
}

impl TypeSummary {
    pub fn from_ledger(kind: ActivityType, ledger: &Ledger) -> Self {
        let aggregate = ledger.aggregate(kind);
        Self {
            kind,
            name: definition_of(kind).name,
            classroom_total: aggregate.classroom_total,
            autonomous_total: aggregate.autonomous_total,
            days_total: aggregate.days_total,
            entry_count: aggregate.entries.len(),
            credits: credits_for_aggregate(kind, aggregate),
        }
    }
}
