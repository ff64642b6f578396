use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::catalog::ActivityType;
use crate::model::entry::{ActivityEntry, EntryDraft};

/// Per-type running totals plus the entry list they are derived from.
/// Invariant: after every mutation the three totals equal the sum over the
/// current entries. They are recomputed from scratch, never patched, so a
/// delete cannot drift the totals.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ActivityAggregate {
    pub classroom_total: f64,
    pub autonomous_total: f64,
    pub days_total: f64,
    pub entries: Vec<ActivityEntry>,
}

impl ActivityAggregate {
    pub fn recompute(&mut self) {
        self.classroom_total = self.entries.iter().map(|e| e.classroom_hours).sum();
        self.autonomous_total = self.entries.iter().map(|e| e.autonomous_hours).sum();
        self.days_total = self.entries.iter().map(|e| e.days).sum();
    }
}

/// The whole training record: one aggregate per catalog type, always all
/// eight keys present. Serialized as the plain keyed record the original
/// `doctoralActivities` store used.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct Ledger {
    activities: BTreeMap<ActivityType, ActivityAggregate>,
}

impl Default for Ledger {
    fn default() -> Self {
        let mut activities = BTreeMap::new();
        for kind in ActivityType::ALL {
            activities.insert(kind, ActivityAggregate::default());
        }
        Ledger { activities }
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aggregate(&self, kind: ActivityType) -> &ActivityAggregate {
        // Every constructor and normalize() fill all catalog keys, so a miss
        // here is a programming error, not a runtime condition.
        self.activities
            .get(&kind)
            .expect("ledger covers every catalog key")
    }

    pub fn entries(&self, kind: ActivityType) -> &[ActivityEntry] {
        &self.aggregate(kind).entries
    }

    /// Append a drafted entry and recompute that type's totals. Returns the
    /// new entry's id, or `None` when the draft is incomplete (missing title
    /// or start date); in that case the ledger is left untouched.
    pub fn add_entry(&mut self, kind: ActivityType, draft: EntryDraft) -> Option<Uuid> {
        let entry = draft.into_entry()?;
        let id = entry.id;
        let aggregate = self.activities.entry(kind).or_default();
        aggregate.entries.push(entry);
        aggregate.recompute();
        Some(id)
    }

    /// Remove the entry with the given id and recompute. Returns `false`
    /// (no-op) when the id is not in that type's list.
    pub fn remove_entry(&mut self, kind: ActivityType, id: &Uuid) -> bool {
        let aggregate = self.activities.entry(kind).or_default();
        let before = aggregate.entries.len();
        aggregate.entries.retain(|e| e.id != *id);
        if aggregate.entries.len() == before {
            return false;
        }
        aggregate.recompute();
        true
    }

    /// Repair invariants after deserialization: a hand-edited or stale record
    /// may miss catalog keys or carry totals that no longer match its
    /// entries. Missing keys are inserted empty and every total is rebuilt.
    pub fn normalize(&mut self) {
        for kind in ActivityType::ALL {
            let aggregate = self.activities.entry(kind).or_default();
            aggregate.recompute();
        }
    }
}
