//! Immutable record snapshots.

use std::sync::{Arc, PoisonError, RwLock};

use pvp_model::{MedicationRecord, Selection};

use crate::filter::{list_doses, list_forms, list_ingredients, select_matching};

/// A read-only snapshot of the normalized records of one session.
///
/// Cloning is cheap and shares the underlying records; nothing can mutate
/// a snapshot once it is built.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Arc<[MedicationRecord]>,
}

impl Catalog {
    pub fn new(records: Vec<MedicationRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[MedicationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ingredients(&self) -> Vec<String> {
        list_ingredients(&self.records)
    }

    pub fn doses(&self, ingredient: &str) -> Vec<String> {
        list_doses(&self.records, ingredient)
    }

    pub fn forms(&self, ingredient: &str, dose: &str) -> Vec<String> {
        list_forms(&self.records, ingredient, dose)
    }

    pub fn select(&self, selection: &Selection) -> Vec<MedicationRecord> {
        select_matching(
            &self.records,
            &selection.ingredient,
            &selection.dose,
            &selection.form,
        )
    }

    /// Returns true if both catalogs share the same snapshot.
    pub fn same_snapshot(&self, other: &Catalog) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<MedicationRecord>> for Catalog {
    fn from(records: Vec<MedicationRecord>) -> Self {
        Self::new(records)
    }
}

/// Holds the current catalog of a long-lived session.
///
/// Readers take a [`snapshot`](CatalogStore::snapshot) at the start of a
/// computation and keep using it; [`replace`](CatalogStore::replace) only
/// affects snapshots taken afterwards.
#[derive(Debug, Default)]
pub struct CatalogStore {
    current: RwLock<Catalog>,
}

impl CatalogStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(catalog),
        }
    }

    pub fn snapshot(&self) -> Catalog {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Swaps in a freshly loaded catalog and returns the previous one.
    pub fn replace(&self, catalog: Catalog) -> Catalog {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        tracing::info!(
            previous = guard.len(),
            records = catalog.len(),
            "Replaced catalog snapshot"
        );
        std::mem::replace(&mut *guard, catalog)
    }
}
