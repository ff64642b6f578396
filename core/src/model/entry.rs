use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One logged occurrence of a training activity. Immutable once stored; the
/// only way out of the ledger is an explicit delete by id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    pub id: Uuid,
    pub title: String,
    pub date_from: NaiveDate,
    pub date_to: Option<NaiveDate>,
    #[serde(default)]
    pub classroom_hours: f64,
    #[serde(default)]
    pub autonomous_hours: f64,
    #[serde(default)]
    pub days: f64,
}

/// What the shell collects before validation. `date_from` stays optional here
/// so an incomplete form can be represented; the ledger refuses to store it.
/// Numeric fields are expected to be coerced already (bad input reads as 0).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryDraft {
    pub title: String,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub classroom_hours: f64,
    pub autonomous_hours: f64,
    pub days: f64,
}

impl EntryDraft {
    /// A draft is storable once it has a non-blank title and a start date.
    /// Nothing else is validated: `date_to` before `date_from` and negative
    /// numbers pass through unchallenged.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && self.date_from.is_some()
    }

    pub(crate) fn into_entry(self) -> Option<ActivityEntry> {
        if !self.is_complete() {
            return None;
        }
        let date_from = self.date_from?;
        Some(ActivityEntry {
            id: Uuid::new_v4(),
            title: self.title,
            date_from,
            date_to: self.date_to,
            classroom_hours: self.classroom_hours,
            autonomous_hours: self.autonomous_hours,
            days: self.days,
        })
    }
}
