use anyhow::Result;
use uuid::Uuid;

use crate::credit::credits_for_aggregate;
use crate::export;
use crate::model::catalog::ActivityType;
use crate::model::entry::EntryDraft;
use crate::model::ledger::Ledger;
use crate::report::{self, ProgressReport};
use crate::repository::LedgerRepository;
use crate::service::dto::{EntryView, TypeSummary};

/// Owns the in-memory ledger: loaded once from the repository at startup,
/// written back whole after every successful mutation. Rejected drafts and
/// unknown-id deletes change nothing and trigger no save.
pub struct LedgerService<R: LedgerRepository> {
    repo: R,
    ledger: Ledger,
}

impl<R: LedgerRepository> LedgerService<R> {
    pub fn new(repo: R) -> Result<Self> {
        let ledger = repo.load()?;
        Ok(Self { repo, ledger })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn add_entry(&mut self, kind: ActivityType, draft: EntryDraft) -> Result<Option<Uuid>> {
        let added = self.ledger.add_entry(kind, draft);
        if added.is_some() {
            self.repo.save(&self.ledger)?;
        }
        Ok(added)
    }

    pub fn remove_entry(&mut self, kind: ActivityType, id: &Uuid) -> Result<bool> {
        let removed = self.ledger.remove_entry(kind, id);
        if removed {
            self.repo.save(&self.ledger)?;
        }
        Ok(removed)
    }

    pub fn credits_for(&self, kind: ActivityType) -> f64 {
        credits_for_aggregate(kind, self.ledger.aggregate(kind))
    }

    pub fn report(&self) -> ProgressReport {
        report::report(&self.ledger)
    }

    pub fn summaries(&self) -> Vec<TypeSummary> {
        ActivityType::ALL
            .iter()
            .map(|&kind| TypeSummary::from_ledger(kind, &self.ledger))
            .collect()
    }

    pub fn entries(&self, kind: ActivityType) -> Vec<EntryView> {
        self.ledger
            .entries(kind)
            .iter()
            .map(|e| EntryView::from_entry(kind, e))
            .collect()
    }

    /// Every entry across the catalog, catalog-then-insertion order.
    pub fn all_entries(&self) -> Vec<EntryView> {
        ActivityType::ALL
            .iter()
            .flat_map(|&kind| self.entries(kind))
            .collect()
    }

    /// Resolve the short id shown in listings back to an entry. Returns a
    /// match only when the prefix is unambiguous across the whole ledger.
    pub fn find_entry(&self, id_prefix: &str) -> Option<(ActivityType, Uuid)> {
        let prefix = id_prefix.to_lowercase();
        if prefix.is_empty() {
            return None;
        }
        let mut matches = ActivityType::ALL.iter().flat_map(|&kind| {
            self.ledger
                .entries(kind)
                .iter()
                .filter(|e| e.id.to_string().starts_with(&prefix))
                .map(move |e| (kind, e.id))
        });
        let first = matches.next()?;
        if matches.next().is_some() {
            return None;
        }
        Some(first)
    }

    pub fn export_csv(&self) -> String {
        export::to_csv(&self.ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::cell::RefCell;

    struct MockLedgerRepo {
        saved: RefCell<Vec<Ledger>>,
    }

    impl MockLedgerRepo {
        fn new() -> Self {
            Self {
                saved: RefCell::new(Vec::new()),
            }
        }
    }

    impl LedgerRepository for MockLedgerRepo {
        fn load(&self) -> Result<Ledger> {
            Ok(Ledger::new())
        }
        fn save(&self, ledger: &Ledger) -> Result<()> {
            self.saved.borrow_mut().push(ledger.clone());
            Ok(())
        }
    }

    fn draft(title: &str) -> EntryDraft {
        EntryDraft {
            title: title.to_string(),
            date_from: NaiveDate::parse_from_str("2026-02-02", "%Y-%m-%d").ok(),
            classroom_hours: 5.0,
            autonomous_hours: 20.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_mutations_save_whole_ledger() {
        let mut service = LedgerService::new(MockLedgerRepo::new()).unwrap();
        let id = service
            .add_entry(ActivityType::Courses, draft("Deep learning"))
            .unwrap()
            .unwrap();
        assert_eq!(service.repo.saved.borrow().len(), 1);

        assert!(service.remove_entry(ActivityType::Courses, &id).unwrap());
        assert_eq!(service.repo.saved.borrow().len(), 2);
        let last = service.repo.saved.borrow().last().cloned().unwrap();
        assert_eq!(last, Ledger::new());
    }

    #[test]
    fn test_rejected_draft_does_not_save() {
        let mut service = LedgerService::new(MockLedgerRepo::new()).unwrap();
        let skipped = service
            .add_entry(ActivityType::Courses, EntryDraft::default())
            .unwrap();
        assert_eq!(skipped, None);
        assert!(service.repo.saved.borrow().is_empty());

        let removed = service
            .remove_entry(ActivityType::Courses, &Uuid::new_v4())
            .unwrap();
        assert!(!removed);
        assert!(service.repo.saved.borrow().is_empty());
    }

    #[test]
    fn test_find_entry_needs_unique_prefix() {
        let mut service = LedgerService::new(MockLedgerRepo::new()).unwrap();
        let id = service
            .add_entry(ActivityType::Seminars, draft("Colloquium"))
            .unwrap()
            .unwrap();

        let prefix = id.to_string()[..8].to_string();
        assert_eq!(service.find_entry(&prefix), Some((ActivityType::Seminars, id)));
        assert_eq!(service.find_entry(""), None);
        assert_eq!(service.find_entry("zzzzzzzz"), None);
    }

    #[test]
    fn test_views_carry_credit_values() {
        let mut service = LedgerService::new(MockLedgerRepo::new()).unwrap();
        service
            .add_entry(ActivityType::Courses, draft("Statistics"))
            .unwrap();

        let views = service.all_entries();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].credits, 1.0);
        assert_eq!(service.credits_for(ActivityType::Courses), 1.0);

        let summaries = service.summaries();
        assert_eq!(summaries.len(), 8);
        assert_eq!(summaries[0].kind, ActivityType::Courses);
        assert_eq!(summaries[0].credits, 1.0);
        assert_eq!(summaries[1].entry_count, 0);
    }
}
