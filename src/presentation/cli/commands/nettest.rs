use colored::Colorize;

use crate::application::services::nettest::NetworkTestService;
use crate::domain::entities::receipt::{EndpointReport, NetworkTestSummary};
use crate::domain::value_objects::outcome::PingOutcome;
use crate::presentation::cli::formatters::record_fmt::print_section_header;

fn print_endpoint(done: usize, total: usize, report: &EndpointReport) {
    let status = match &report.outcome {
        PingOutcome::Reachable { elapsed_ms } => {
            format!("{} {} ms", "✓".green(), elapsed_ms)
        }
        PingOutcome::TimedOut { after_ms } => {
            format!("{} timeout after {after_ms} ms", "✗".red().bold())
        }
        PingOutcome::Failed { message } => format!("{} {message}", "✗".red().bold()),
    };
    println!("  [{done}/{total}] {}: {status}", report.name);
}

/// Runs the reachability sequence, streaming per-endpoint progress.
pub async fn run_nettest(service: &NetworkTestService<'_>) -> NetworkTestSummary {
    print_section_header("Network Test");
    let summary = service.run(&mut print_endpoint).await;

    println!();
    if summary.all_reachable {
        println!("{}", "✅ Network appears to be working correctly.".green().bold());
    } else {
        println!(
            "{}",
            "Network issues detected. This may be affecting your connection to the site."
                .red()
                .bold()
        );
    }
    summary
}
