//! The three-stage filter engine.
//!
//! Each stage lists the distinct values that are valid given the choices
//! already made, so a user following the stages never reaches an empty
//! combination before the last one. All functions are pure; an empty result
//! is a normal answer, not an error.

use std::collections::BTreeSet;

use pvp_model::MedicationRecord;

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Distinct, non-empty active ingredients in ascending order.
pub fn list_ingredients(records: &[MedicationRecord]) -> Vec<String> {
    distinct_sorted(
        records
            .iter()
            .map(|r| r.active_ingredient.as_str())
            .filter(|ingredient| !ingredient.is_empty()),
    )
}

/// Distinct doses of `ingredient` in ascending order.
pub fn list_doses(records: &[MedicationRecord], ingredient: &str) -> Vec<String> {
    distinct_sorted(
        records
            .iter()
            .filter(|r| r.active_ingredient == ingredient)
            .map(|r| r.dose.as_str()),
    )
}

/// Distinct forms of `ingredient` at `dose` in ascending order.
pub fn list_forms(records: &[MedicationRecord], ingredient: &str, dose: &str) -> Vec<String> {
    distinct_sorted(
        records
            .iter()
            .filter(|r| r.active_ingredient == ingredient && r.dose == dose)
            .map(|r| r.form.as_str()),
    )
}

/// Every record matching all three keys, in input order.
pub fn select_matching(
    records: &[MedicationRecord],
    ingredient: &str,
    dose: &str,
    form: &str,
) -> Vec<MedicationRecord> {
    let matching: Vec<MedicationRecord> = records
        .iter()
        .filter(|r| r.matches(ingredient, dose, form))
        .cloned()
        .collect();
    tracing::debug!(
        ingredient,
        dose,
        form,
        matches = matching.len(),
        "Selected matching records"
    );
    matching
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ingredient: &str, dose: &str, form: &str, name: &str) -> MedicationRecord {
        MedicationRecord {
            active_ingredient: ingredient.to_string(),
            dose: dose.to_string(),
            form: form.to_string(),
            name: name.to_string(),
            laboratory: None,
            price: 1.0,
        }
    }

    fn records() -> Vec<MedicationRecord> {
        vec![
            record("IBUPROFENO", "400mg", "TABLETA", "Advil"),
            record("PARACETAMOL", "500mg", "TABLETA", "Tempra"),
            record("IBUPROFENO", "400mg", "CAPSULA", "Motrin"),
            record("IBUPROFENO", "600mg", "TABLETA", "Dalsy"),
            record("IBUPROFENO", "400mg", "TABLETA", "Genérico"),
            record("", "1mg", "X", "Sin principio"),
        ]
    }

    #[test]
    fn test_list_ingredients_sorted_distinct_non_empty() {
        assert_eq!(list_ingredients(&records()), vec!["IBUPROFENO", "PARACETAMOL"]);
    }

    #[test]
    fn test_list_doses() {
        assert_eq!(list_doses(&records(), "IBUPROFENO"), vec!["400mg", "600mg"]);
        assert!(list_doses(&records(), "ASPIRINA").is_empty());
    }

    #[test]
    fn test_list_forms_scenario() {
        assert_eq!(
            list_forms(&records(), "IBUPROFENO", "400mg"),
            vec!["CAPSULA", "TABLETA"]
        );
        assert!(list_forms(&records(), "IBUPROFENO", "800mg").is_empty());
    }

    #[test]
    fn test_select_matching_preserves_order() {
        let matching = select_matching(&records(), "IBUPROFENO", "400mg", "TABLETA");
        let names: Vec<&str> = matching.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Advil", "Genérico"]);
    }

    #[test]
    fn test_select_matching_no_results() {
        assert!(select_matching(&records(), "PARACETAMOL", "500mg", "CAPSULA").is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(list_ingredients(&[]).is_empty());
    }
}
