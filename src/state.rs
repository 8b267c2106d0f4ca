use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::data::loader;
use crate::data::model::{ValidationStats, ValidationTable};

// ---------------------------------------------------------------------------
// Validation viewer state
// ---------------------------------------------------------------------------

/// The validation viewer's full state, independent of rendering.
pub struct ValidationState {
    /// Currently shown trace.
    pub table: ValidationTable,

    /// Summary magnitudes of `table`, cached for the top bar.
    pub stats: ValidationStats,

    /// Where the current trace came from.
    pub source: PathBuf,

    /// Error message from the last interactive load attempt.
    pub status_message: Option<String>,
}

impl ValidationState {
    /// Load the startup trace.  Any failure here is fatal to the process.
    pub fn load(path: &Path) -> Result<Self> {
        let table = loader::load_table(path)?;
        log::info!("loaded {} rows from {}", table.len(), path.display());
        let stats = table.stats();
        Ok(ValidationState {
            table,
            stats,
            source: path.to_path_buf(),
            status_message: None,
        })
    }

    /// Ingest a trace picked interactively, replacing the current one.
    pub fn set_table(&mut self, table: ValidationTable, source: PathBuf) {
        self.stats = table.stats();
        self.table = table;
        self.source = source;
        self.status_message = None;
    }
}
