//! Dependent selector state.
//!
//! Models the three linked dropdowns of the explorer: changing the
//! ingredient clears the dose and form, changing the dose clears the form.

use pvp_model::Selection;

use crate::catalog::Catalog;
use crate::error::{QueryError, Result, Stage};

/// Selection state of the ingredient → dose → form dropdowns.
///
/// Holds its own catalog snapshot, so a reload elsewhere never changes the
/// options a user is currently picking from.
#[derive(Debug, Clone)]
pub struct Cascade {
    catalog: Catalog,
    ingredient: Option<String>,
    dose: Option<String>,
    form: Option<String>,
}

impl Cascade {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ingredient: None,
            dose: None,
            form: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ingredient(&self) -> Option<&str> {
        self.ingredient.as_deref()
    }

    pub fn dose(&self) -> Option<&str> {
        self.dose.as_deref()
    }

    pub fn form(&self) -> Option<&str> {
        self.form.as_deref()
    }

    /// Options of the first selector.
    pub fn ingredient_options(&self) -> Vec<String> {
        self.catalog.ingredients()
    }

    /// Options of the dose selector; empty until an ingredient is chosen.
    pub fn dose_options(&self) -> Vec<String> {
        match &self.ingredient {
            Some(ingredient) => self.catalog.doses(ingredient),
            None => Vec::new(),
        }
    }

    /// Options of the form selector; empty until a dose is chosen.
    pub fn form_options(&self) -> Vec<String> {
        match (&self.ingredient, &self.dose) {
            (Some(ingredient), Some(dose)) => self.catalog.forms(ingredient, dose),
            _ => Vec::new(),
        }
    }

    /// Options of `stage` given the current choices.
    pub fn options(&self, stage: Stage) -> Vec<String> {
        match stage {
            Stage::Ingredient => self.ingredient_options(),
            Stage::Dose => self.dose_options(),
            Stage::Form => self.form_options(),
        }
    }

    fn ensure_option(options: &[String], stage: Stage, value: &str) -> Result<()> {
        if options.iter().any(|option| option == value) {
            Ok(())
        } else {
            Err(QueryError::InvalidChoice {
                stage,
                value: value.to_string(),
            })
        }
    }

    /// Chooses the ingredient and clears dose and form.
    pub fn choose_ingredient(&mut self, value: &str) -> Result<()> {
        Self::ensure_option(&self.ingredient_options(), Stage::Ingredient, value)?;
        self.ingredient = Some(value.to_string());
        self.dose = None;
        self.form = None;
        tracing::debug!(ingredient = value, "Ingredient chosen");
        Ok(())
    }

    /// Chooses the dose and clears the form.
    pub fn choose_dose(&mut self, value: &str) -> Result<()> {
        if self.ingredient.is_none() {
            return Err(QueryError::StageLocked {
                stage: Stage::Dose,
                required: Stage::Ingredient,
            });
        }
        Self::ensure_option(&self.dose_options(), Stage::Dose, value)?;
        self.dose = Some(value.to_string());
        self.form = None;
        tracing::debug!(dose = value, "Dose chosen");
        Ok(())
    }

    /// Chooses the form.
    pub fn choose_form(&mut self, value: &str) -> Result<()> {
        if self.dose.is_none() {
            return Err(QueryError::StageLocked {
                stage: Stage::Form,
                required: Stage::Dose,
            });
        }
        Self::ensure_option(&self.form_options(), Stage::Form, value)?;
        self.form = Some(value.to_string());
        tracing::debug!(form = value, "Form chosen");
        Ok(())
    }

    /// Chooses `value` at `stage`.
    pub fn choose(&mut self, stage: Stage, value: &str) -> Result<()> {
        match stage {
            Stage::Ingredient => self.choose_ingredient(value),
            Stage::Dose => self.choose_dose(value),
            Stage::Form => self.choose_form(value),
        }
    }

    /// The complete selection once all three stages are chosen.
    pub fn selection(&self) -> Option<Selection> {
        match (&self.ingredient, &self.dose, &self.form) {
            (Some(ingredient), Some(dose), Some(form)) => {
                Some(Selection::new(ingredient, dose, form))
            }
            _ => None,
        }
    }
}
