use crate::model::ledger::Ledger;
use anyhow::Result;

/// Persistence seam: the core loads the whole ledger once at startup and
/// hands the whole ledger back after every mutation.
pub trait LedgerRepository {
    fn load(&self) -> Result<Ledger>;
    fn save(&self, ledger: &Ledger) -> Result<()>;
}
