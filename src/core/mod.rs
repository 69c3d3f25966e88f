pub mod days;
pub mod import_export;

pub use import_export::{ImportExportLogic, ImportOutcome, clear_database};
