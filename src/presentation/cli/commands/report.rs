use std::path::Path;

use crate::application::services::diagnose::DiagnosticService;
use crate::domain::ports::PageEnvironment;
use crate::domain::rules::Evaluator;
use crate::domain::value_objects::thresholds::ThresholdSet;
use crate::presentation::cli::formatters::report_fmt::render_report;

/// Renders the plain-text diagnostic report and writes it to the output
/// file, or to stdout when no file was requested. A failing file write
/// falls back to stdout so the report is never lost.
pub fn run_report(
    env: &PageEnvironment<'_>,
    evaluator: &Evaluator,
    thresholds: &ThresholdSet,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let service = DiagnosticService::new(env, thresholds);
    let record = service.gather();
    let evaluation = evaluator.evaluate(&record, thresholds);
    let report = render_report(&record, &evaluation);

    match output {
        Some(path) => {
            if let Err(err) = std::fs::write(path, &report) {
                tracing::warn!("failed to write report to {}: {err}", path.display());
                print!("{report}");
            } else {
                println!("Report written to {}", path.display());
            }
        }
        None => print!("{report}"),
    }
    Ok(())
}
