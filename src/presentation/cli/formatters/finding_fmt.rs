use colored::Colorize;

use crate::domain::entities::finding::{Evaluation, Finding};
use crate::domain::value_objects::severity::Severity;

fn severity_badge(severity: Severity) -> String {
    let label = format!(" {severity} ");
    match severity {
        Severity::Error => format!("{}", label.on_red().white().bold()),
        Severity::Success => format!("{}", label.on_green().black()),
        Severity::Info => format!("{}", label.on_blue().white()),
    }
}

pub fn format_findings(findings: &[Finding]) {
    for finding in findings {
        println!(
            "{} {} {}",
            severity_badge(finding.severity),
            format!("[{}]", finding.category).dimmed(),
            finding.message
        );
    }
}

/// Closing summary, gated on the run-level issues flag.
pub fn print_summary(evaluation: &Evaluation) {
    println!();
    if evaluation.issues_found {
        println!(
            "{}",
            format!(
                "{} issue(s) detected. Try cleaning storage and refreshing the page.",
                evaluation.error_count()
            )
            .red()
            .bold()
        );
    } else {
        println!("{}", "✅ No critical issues detected.".green().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::category::Category;
    use colored::control;

    fn disable_colors() {
        control::set_override(false);
    }

    #[test]
    fn badge_contains_level_name() {
        disable_colors();
        assert!(severity_badge(Severity::Error).contains("ERROR"));
        assert!(severity_badge(Severity::Success).contains("OK"));
        assert!(severity_badge(Severity::Info).contains("INFO"));
    }

    #[test]
    fn format_findings_does_not_panic() {
        disable_colors();
        format_findings(&[
            Finding::error(Category::Network, "High latency detected"),
            Finding::info(Category::Storage, "Service workers present"),
        ]);
        format_findings(&[]);
    }

    #[test]
    fn print_summary_both_branches() {
        disable_colors();
        print_summary(&Evaluation {
            findings: vec![],
            issues_found: false,
        });
        print_summary(&Evaluation {
            findings: vec![Finding::error(Category::Site, "insecure protocol")],
            issues_found: true,
        });
    }
}
