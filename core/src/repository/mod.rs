pub mod file;
pub mod traits;

// Re-export
pub use file::FileLedgerRepository;
pub use traits::LedgerRepository;
