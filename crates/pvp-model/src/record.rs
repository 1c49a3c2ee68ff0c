//! Medication price records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One data row as read from a source file, before normalization.
///
/// Every cell is kept as text; the price is parsed during normalization so
/// that unparsable values can be counted instead of failing the load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// 1-based data row number (the header row is not counted).
    pub row: usize,
    pub active_ingredient: String,
    pub dose: String,
    pub form: String,
    pub name: String,
    pub laboratory: Option<String>,
    pub price: String,
}

/// A normalized medication row.
///
/// `active_ingredient`, `dose` and `form` are always in canonical form; the
/// filter engine compares them by exact string equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationRecord {
    /// Active ingredient ("principio activo"), uppercased.
    pub active_ingredient: String,
    /// Dose strength ("dosis"), lowercased.
    pub dose: String,
    /// Pharmaceutical form ("forma farmacéutica"), uppercased.
    pub form: String,
    /// Product display name.
    pub name: String,
    /// Manufacturer, display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub laboratory: Option<String>,
    /// Retail price (PVP), never negative.
    pub price: f64,
}

impl MedicationRecord {
    /// Returns true if the record matches all three selection keys.
    pub fn matches(&self, ingredient: &str, dose: &str, form: &str) -> bool {
        self.active_ingredient == ingredient && self.dose == dose && self.form == form
    }
}

/// The ingredient, dose and form chosen through the cascading selectors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub ingredient: String,
    pub dose: String,
    pub form: String,
}

impl Selection {
    pub fn new(
        ingredient: impl Into<String>,
        dose: impl Into<String>,
        form: impl Into<String>,
    ) -> Self {
        Self {
            ingredient: ingredient.into(),
            dose: dose.into(),
            form: form.into(),
        }
    }

    /// Returns true if `record` satisfies this selection.
    pub fn matches(&self, record: &MedicationRecord) -> bool {
        record.matches(&self.ingredient, &self.dose, &self.form)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.ingredient, self.dose, self.form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> MedicationRecord {
        MedicationRecord {
            active_ingredient: "IBUPROFENO".to_string(),
            dose: "400mg".to_string(),
            form: "TABLETA".to_string(),
            name: "Advil".to_string(),
            laboratory: None,
            price: 5.25,
        }
    }

    #[test]
    fn selection_matches_exactly() {
        let record = record();
        assert!(Selection::new("IBUPROFENO", "400mg", "TABLETA").matches(&record));
        assert!(!Selection::new("IBUPROFENO", "400MG", "TABLETA").matches(&record));
        assert!(!Selection::new("IBUPROFENO", "400mg", "CAPSULA").matches(&record));
    }

    #[test]
    fn selection_display() {
        let selection = Selection::new("IBUPROFENO", "400mg", "TABLETA");
        assert_eq!(selection.to_string(), "IBUPROFENO 400mg TABLETA");
    }

    #[test]
    fn record_serializes_without_missing_laboratory() {
        let json = serde_json::to_string(&record()).expect("serialize record");
        assert!(!json.contains("laboratory"));
        let round: MedicationRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record());
    }
}
