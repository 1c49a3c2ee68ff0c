//! Canonical forms of the three selection keys.
//!
//! Every function here is idempotent: applying it to its own output returns
//! the same string.

use pvp_model::MedicationRecord;

/// Canonicalizes an active ingredient.
///
/// Trims, removes whitespace around commas, collapses internal whitespace
/// runs to a single space and uppercases.
///
/// ```
/// use pvp_normalization::normalize_ingredient;
///
/// assert_eq!(
///     normalize_ingredient("  paracetamol ,  cafeína  "),
///     "PARACETAMOL,CAFEÍNA"
/// );
/// assert_eq!(normalize_ingredient("acido   acetil salicilico"), "ACIDO ACETIL SALICILICO");
/// ```
pub fn normalize_ingredient(value: &str) -> String {
    let tightened = value
        .trim()
        .split(',')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(",");
    tightened
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// Canonicalizes a dose: trimmed and lowercased.
pub fn normalize_dose(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Canonicalizes a pharmaceutical form: trimmed and uppercased.
pub fn normalize_form(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Re-applies key canonicalization to an already typed record.
///
/// Display fields are trimmed; an empty laboratory becomes `None`.
pub fn normalize_record(record: MedicationRecord) -> MedicationRecord {
    let laboratory = record
        .laboratory
        .map(|lab| lab.trim().to_string())
        .filter(|lab| !lab.is_empty());
    MedicationRecord {
        active_ingredient: normalize_ingredient(&record.active_ingredient),
        dose: normalize_dose(&record.dose),
        form: normalize_form(&record.form),
        name: record.name.trim().to_string(),
        laboratory,
        price: record.price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_comma_spacing() {
        assert_eq!(normalize_ingredient("a , b,c ,  d"), "A,B,C,D");
        assert_eq!(normalize_ingredient(" , a"), ",A");
    }

    #[test]
    fn test_ingredient_whitespace_collapse() {
        assert_eq!(normalize_ingredient("\tibuprofeno\n  sodico "), "IBUPROFENO SODICO");
    }

    #[test]
    fn test_ingredient_empty() {
        assert_eq!(normalize_ingredient("   "), "");
    }

    #[test]
    fn test_dose_keeps_inner_text() {
        assert_eq!(normalize_dose(" 400MG "), "400mg");
        assert_eq!(normalize_dose("400mg"), "400mg");
        assert_eq!(normalize_dose("120 MG/5 ML"), "120 mg/5 ml");
    }

    #[test]
    fn test_form() {
        assert_eq!(normalize_form(" tableta recubierta "), "TABLETA RECUBIERTA");
    }

    #[test]
    fn test_normalize_record_idempotent() {
        let record = MedicationRecord {
            active_ingredient: " losartan , hidroclorotiazida ".to_string(),
            dose: "50MG/12.5MG".to_string(),
            form: "tableta".to_string(),
            name: "  Hyzaar ".to_string(),
            laboratory: Some("  ".to_string()),
            price: 18.0,
        };
        let once = normalize_record(record);
        assert_eq!(once.active_ingredient, "LOSARTAN,HIDROCLOROTIAZIDA");
        assert_eq!(once.dose, "50mg/12.5mg");
        assert_eq!(once.form, "TABLETA");
        assert_eq!(once.name, "Hyzaar");
        assert_eq!(once.laboratory, None);
        assert_eq!(normalize_record(once.clone()), once);
    }
}
