//! Session start: load, normalize and snapshot the price list.

use std::path::Path;
use std::time::Instant;

use pvp_ingest::{Result, load_source};
use pvp_model::{LoadOptions, Selection};
use pvp_normalization::{normalize_dose, normalize_form, normalize_ingredient, normalize_rows};
use pvp_query::Catalog;
use tracing::{info, info_span};

/// The catalog of a session plus what normalization dropped.
#[derive(Debug, Clone)]
pub struct SessionCatalog {
    pub catalog: Catalog,
    /// Rows dropped for an unusable price.
    pub skipped: usize,
    /// Empty rows ignored silently.
    pub blank_rows: usize,
}

/// Loads `path`, normalizes every row and builds the session catalog.
///
/// # Errors
///
/// Fails on any load error or a missing required column. Rows with an
/// unusable price are skipped and only counted.
pub fn load_catalog(path: &Path, options: &LoadOptions) -> Result<SessionCatalog> {
    let span = info_span!("load", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = load_source(path, options)?;
    let raw = table.raw_records()?;
    let dataset = normalize_rows(&raw);
    let skipped = dataset.skipped_count();
    let blank_rows = dataset.blank_rows;

    let catalog = Catalog::new(dataset.records);
    info!(
        records = catalog.len(),
        skipped,
        blank_rows,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Price list loaded"
    );
    Ok(SessionCatalog {
        catalog,
        skipped,
        blank_rows,
    })
}

/// Canonicalizes user-typed keys so they compare equal to catalog values.
pub fn normalize_selection(ingredient: &str, dose: &str, form: &str) -> Selection {
    Selection::new(
        normalize_ingredient(ingredient),
        normalize_dose(dose),
        normalize_form(form),
    )
}
