pub mod dto;
pub mod ledger_service;

pub use dto::{EntryView, TypeSummary};
pub use ledger_service::LedgerService;
