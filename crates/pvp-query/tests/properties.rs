//! Property tests for the filter engine.

use proptest::prelude::*;
use pvp_model::MedicationRecord;
use pvp_query::{list_doses, list_forms, list_ingredients, select_matching};

fn record_strategy() -> impl Strategy<Value = MedicationRecord> {
    (
        prop::sample::select(vec!["", "ASPIRINA", "IBUPROFENO", "PARACETAMOL,CAFEINA"]),
        prop::sample::select(vec!["100mg", "400mg", "500mg"]),
        prop::sample::select(vec!["CAPSULA", "JARABE", "TABLETA"]),
        "[A-Za-z ]{1,12}",
        0.0f64..100.0,
    )
        .prop_map(|(ingredient, dose, form, name, price)| MedicationRecord {
            active_ingredient: ingredient.to_string(),
            dose: dose.to_string(),
            form: form.to_string(),
            name,
            laboratory: None,
            price,
        })
}

fn records_strategy() -> impl Strategy<Value = Vec<MedicationRecord>> {
    prop::collection::vec(record_strategy(), 0..40)
}

fn is_strictly_ascending(values: &[String]) -> bool {
    values.windows(2).all(|pair| pair[0] < pair[1])
}

proptest! {
    #[test]
    fn ingredients_are_sorted_distinct_and_present(records in records_strategy()) {
        let ingredients = list_ingredients(&records);
        prop_assert!(is_strictly_ascending(&ingredients));
        for ingredient in &ingredients {
            prop_assert!(!ingredient.is_empty());
            prop_assert!(records.iter().any(|r| &r.active_ingredient == ingredient));
        }
    }

    #[test]
    fn forms_only_come_from_matching_records(records in records_strategy()) {
        for ingredient in list_ingredients(&records) {
            let doses = list_doses(&records, &ingredient);
            prop_assert!(is_strictly_ascending(&doses));
            for dose in doses {
                let forms = list_forms(&records, &ingredient, &dose);
                prop_assert!(!forms.is_empty());
                prop_assert!(is_strictly_ascending(&forms));
                for form in forms {
                    prop_assert!(records.iter().any(|r| r.matches(&ingredient, &dose, &form)));
                }
            }
        }
    }

    #[test]
    fn selection_is_an_ordered_subset(records in records_strategy()) {
        let matching = select_matching(&records, "IBUPROFENO", "400mg", "TABLETA");
        prop_assert!(matching.iter().all(|r| r.matches("IBUPROFENO", "400mg", "TABLETA")));

        let expected: Vec<&MedicationRecord> = records
            .iter()
            .filter(|r| r.matches("IBUPROFENO", "400mg", "TABLETA"))
            .collect();
        prop_assert_eq!(matching.len(), expected.len());
        for (got, want) in matching.iter().zip(expected) {
            prop_assert_eq!(got, want);
        }
    }
}
