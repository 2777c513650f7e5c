use serde::Serialize;

use crate::application::services::diagnose::DiagnosticService;
use crate::domain::entities::finding::Evaluation;
use crate::domain::entities::record::DiagnosticRecord;
use crate::domain::ports::PageEnvironment;
use crate::domain::rules::Evaluator;
use crate::domain::value_objects::thresholds::ThresholdSet;
use crate::presentation::cli::formatters::{finding_fmt, record_fmt};

#[derive(Serialize)]
struct ScanOutput<'a> {
    record: &'a DiagnosticRecord,
    evaluation: &'a Evaluation,
}

/// Runs a full diagnostic pass: gather the record, evaluate the ruleset,
/// display record and findings.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails; gathering and
/// evaluation themselves never fail.
pub fn run_scan(
    env: &PageEnvironment<'_>,
    evaluator: &Evaluator,
    thresholds: &ThresholdSet,
    json: bool,
) -> anyhow::Result<(DiagnosticRecord, Evaluation)> {
    let service = DiagnosticService::new(env, thresholds);
    let record = service.gather();
    let evaluation = evaluator.evaluate(&record, thresholds);

    if json {
        let output = ScanOutput {
            record: &record,
            evaluation: &evaluation,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        record_fmt::print_record(&record);
        if !evaluation.findings.is_empty() {
            record_fmt::print_section_header("Detected Issues & Recommendations");
            finding_fmt::format_findings(&evaluation.findings);
        }
        finding_fmt::print_summary(&evaluation);
    }

    Ok((record, evaluation))
}
