use colored::Colorize;

use crate::application::services::cleanup::CleanupService;
use crate::domain::entities::receipt::{CleanupReceipt, CleanupSummary};
use crate::domain::value_objects::run_state::RunState;
use crate::presentation::cli::formatters::record_fmt::print_section_header;

fn print_receipt(receipt: &CleanupReceipt) {
    match (&receipt.error, receipt.items_cleared) {
        (Some(error), _) => println!(
            "  {} {}: {}",
            "✗".red().bold(),
            receipt.backend,
            error.red()
        ),
        (None, Some(0)) => println!("  {} {}: nothing to clear", "·".dimmed(), receipt.backend),
        (None, count) => println!(
            "  {} {}: {} item(s) cleared",
            "✓".green(),
            receipt.backend,
            count.unwrap_or(0)
        ),
    }
}

/// Runs the storage wipe, streaming one line per backend as it completes.
pub fn run_clean(service: &CleanupService<'_>) -> CleanupSummary {
    print_section_header("Storage Cleaning");
    let summary = service.clean(&mut print_receipt);

    println!();
    match summary.state {
        RunState::CompletedWithErrors => println!(
            "{}",
            format!(
                "Cleanup finished with errors — {} item(s) cleared.",
                summary.total_cleared()
            )
            .yellow()
            .bold()
        ),
        _ => println!(
            "{}",
            format!(
                "✅ Cleanup complete — {} item(s) cleared. Refresh the page to test.",
                summary.total_cleared()
            )
            .green()
            .bold()
        ),
    }
    summary
}
