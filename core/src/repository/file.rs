use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::model::ledger::Ledger;
use crate::repository::traits::LedgerRepository;

/// The record key the browser build stored the ledger under; kept as the
/// file stem so an exported localStorage dump drops in unchanged.
const STORAGE_KEY: &str = "doctoralActivities";

#[derive(Clone)]
pub struct FileLedgerRepository {
    file_path: PathBuf,
}

impl FileLedgerRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".doctrack")
            }
        };
        fs::create_dir_all(&path)?;
        path.push(format!("{}.json", STORAGE_KEY));

        // First run: seed the store with an empty ledger so load() always
        // has a record to read.
        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &Ledger::new())?;
            writer.flush()?;
        }

        Ok(FileLedgerRepository { file_path: path })
    }
}

impl LedgerRepository for FileLedgerRepository {
    fn load(&self) -> Result<Ledger> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let mut ledger: Ledger = serde_json::from_reader(reader)?;
        // A stale or hand-edited record may miss keys or carry drifted
        // totals; loaded state must satisfy the aggregate invariant.
        ledger.normalize();
        Ok(ledger)
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, ledger)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::ActivityType;
    use crate::model::entry::EntryDraft;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn temp_base() -> PathBuf {
        std::env::temp_dir().join(format!("doctrack-test-{}", Uuid::new_v4()))
    }

    #[test]
    fn test_first_run_seeds_empty_ledger() {
        let base = temp_base();
        let repo = FileLedgerRepository::new(Some(base.clone())).unwrap();
        let ledger = repo.load().unwrap();
        assert_eq!(ledger, Ledger::new());
        fs::remove_dir_all(base).unwrap();
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let base = temp_base();
        let repo = FileLedgerRepository::new(Some(base.clone())).unwrap();

        let mut ledger = Ledger::new();
        ledger.add_entry(
            ActivityType::Labs,
            EntryDraft {
                title: "Wet lab rotation".to_string(),
                date_from: NaiveDate::parse_from_str("2026-01-19", "%Y-%m-%d").ok(),
                classroom_hours: 15.0,
                autonomous_hours: 10.0,
                ..Default::default()
            },
        );
        repo.save(&ledger).unwrap();

        let restored = repo.load().unwrap();
        assert_eq!(restored, ledger);
        fs::remove_dir_all(base).unwrap();
    }
}
