use std::io;

use anyhow::Result;
use tracing::{info_span, warn};

use pvp_cli::explore::explore;
use pvp_cli::session::{SessionCatalog, load_catalog, normalize_selection};
use pvp_model::{LoadOptions, Selection};
use pvp_normalization::{normalize_dose, normalize_ingredient};
use pvp_query::{Catalog, Stage};
use pvp_report::{ReportOutcome, SortOrder, report_for};

use crate::cli::{
    DosesArgs, ExploreArgs, FormsArgs, OutputArg, RenderArgs, ReportArgs, SortArg, SourceArgs,
};
use crate::summary::{print_options, print_report};

const NO_RESULTS_MESSAGE: &str = "⚠️ No se encontraron datos para esta combinación.";

fn open_catalog(source: &SourceArgs) -> Result<Catalog> {
    let options = LoadOptions::new().with_sheet(source.sheet.clone());
    let SessionCatalog { catalog, .. } = load_catalog(&source.file, &options)?;
    Ok(catalog)
}

fn print_stage_options(stage: Stage, options: &[String]) {
    if options.is_empty() {
        eprintln!("No hay opciones para {stage}.");
    } else {
        print_options(stage.label(), options);
    }
}

pub fn run_ingredients(source: &SourceArgs) -> Result<()> {
    let catalog = open_catalog(source)?;
    print_stage_options(Stage::Ingredient, &catalog.ingredients());
    Ok(())
}

pub fn run_doses(source: &SourceArgs, args: &DosesArgs) -> Result<()> {
    let catalog = open_catalog(source)?;
    let doses = catalog.doses(&normalize_ingredient(&args.ingredient));
    print_stage_options(Stage::Dose, &doses);
    Ok(())
}

pub fn run_forms(source: &SourceArgs, args: &FormsArgs) -> Result<()> {
    let catalog = open_catalog(source)?;
    let forms = catalog.forms(
        &normalize_ingredient(&args.ingredient),
        &normalize_dose(&args.dose),
    );
    print_stage_options(Stage::Form, &forms);
    Ok(())
}

pub fn run_report(source: &SourceArgs, args: &ReportArgs) -> Result<()> {
    let catalog = open_catalog(source)?;
    let selection = normalize_selection(&args.ingredient, &args.dose, &args.form);
    render_outcome(&catalog, &selection, args.render)
}

pub fn run_explore(source: &SourceArgs, args: &ExploreArgs) -> Result<()> {
    let catalog = open_catalog(source)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    match explore(catalog.clone(), &mut input, &mut output)? {
        Some(selection) => {
            println!();
            render_outcome(&catalog, &selection, args.render)
        }
        None => {
            warn!("Selection cancelled before all stages were chosen");
            Ok(())
        }
    }
}

fn render_outcome(catalog: &Catalog, selection: &Selection, render: RenderArgs) -> Result<()> {
    let span = info_span!("report", selection = %selection);
    let _guard = span.enter();
    let outcome = report_for(catalog, selection);

    if let OutputArg::Json = render.output {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }
    match outcome {
        ReportOutcome::Report(report) => print_report(&report, sort_order(render.sort)),
        ReportOutcome::NoResults(selection) => {
            eprintln!("{NO_RESULTS_MESSAGE}");
            eprintln!("Selección: {selection}");
        }
    }
    Ok(())
}

fn sort_order(sort: SortArg) -> SortOrder {
    match sort {
        SortArg::None => SortOrder::Source,
        SortArg::Asc => SortOrder::Ascending,
        SortArg::Desc => SortOrder::Descending,
    }
}
