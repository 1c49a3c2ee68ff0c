//! Interactive cascading selection on a line-based terminal.

use std::io::{self, BufRead, Write};

use pvp_model::Selection;
use pvp_normalization::{normalize_dose, normalize_form, normalize_ingredient};
use pvp_query::{Cascade, Catalog, Stage};

const STAGES: [Stage; 3] = [Stage::Ingredient, Stage::Dose, Stage::Form];

fn normalize_for(stage: Stage, value: &str) -> String {
    match stage {
        Stage::Ingredient => normalize_ingredient(value),
        Stage::Dose => normalize_dose(value),
        Stage::Form => normalize_form(value),
    }
}

/// Resolves a typed answer to one of `options`.
///
/// The option text, compared after normalization, wins over a 1-based
/// option number, so a dose listed as `500` is picked by typing `500`.
fn resolve_answer(stage: Stage, options: &[String], answer: &str) -> Option<String> {
    let wanted = normalize_for(stage, answer);
    if let Some(option) = options.iter().find(|option| **option == wanted) {
        return Some(option.clone());
    }
    answer
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .and_then(|idx| options.get(idx))
        .cloned()
}

/// Walks the user through ingredient, dose and form.
///
/// Returns the complete selection, or `None` when input ends first or a
/// stage has no options.
///
/// # Errors
///
/// Fails only on I/O errors of `input` or `output`.
pub fn explore<R: BufRead, W: Write>(
    catalog: Catalog,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<Selection>> {
    let mut cascade = Cascade::new(catalog);

    for stage in STAGES {
        let options = cascade.options(stage);
        if options.is_empty() {
            writeln!(output, "No hay opciones para {stage}.")?;
            return Ok(None);
        }

        loop {
            writeln!(output, "{stage}:")?;
            for (idx, option) in options.iter().enumerate() {
                writeln!(output, "  {}) {option}", idx + 1)?;
            }
            write!(output, "> ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let answer = line.trim();
            let Some(value) = resolve_answer(stage, &options, answer) else {
                writeln!(output, "Opción no válida: '{answer}'")?;
                continue;
            };
            match cascade.choose(stage, &value) {
                Ok(()) => break,
                Err(error) => writeln!(output, "{error}")?,
            }
        }
    }

    Ok(cascade.selection())
}
