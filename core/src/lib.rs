pub mod credit;
pub mod export;
pub mod input;
pub mod model;
pub mod report;
pub mod repository;
pub mod service;
pub mod time;

pub use model::catalog::{definition_of, ActivityDefinition, ActivityType, CreditRule};
pub use model::entry::{ActivityEntry, EntryDraft};
pub use model::ledger::{ActivityAggregate, Ledger};
pub use repository::{FileLedgerRepository, LedgerRepository};
pub use service::{EntryView, LedgerService, TypeSummary};
pub use credit::{credits, credits_for_aggregate, credits_for_entry, round_to_tenths};
pub use export::to_csv;
pub use input::{coerce_number, expand_field, parse_entry_args, EntryInput};
pub use report::{progress, report, ProgressReport};
pub use time::parse_entry_date;
