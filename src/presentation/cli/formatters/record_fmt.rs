use colored::Colorize;

use crate::domain::entities::record::{DiagnosticRecord, QuotaEstimate};
use crate::domain::value_objects::category::Category;
use crate::domain::value_objects::outcome::ProbeOutcome;

pub fn print_section_header(title: &str) {
    println!();
    println!("{}", title.bold().cyan());
    let display_width = title.chars().count();
    println!("{}", "─".repeat(display_width).cyan());
}

fn print_detail(label: &str, value: &str) {
    println!("  {} {value}", format!("{label}:").bold());
}

fn print_outcome<T>(label: &str, outcome: &ProbeOutcome<T>, render: impl Fn(&T) -> String) {
    match outcome {
        ProbeOutcome::Value(v) => print_detail(label, &render(v)),
        ProbeOutcome::Unavailable(reason) => {
            println!("  {} {}", format!("{label}:").bold(), reason.dimmed());
        }
        ProbeOutcome::Error(message) => {
            println!(
                "  {} {}",
                format!("{label}:").bold(),
                format!("Error: {message}").red()
            );
        }
    }
}

fn yes_no(flag: bool) -> String {
    if flag { "Yes".into() } else { "No".into() }
}

fn quota_text(estimate: &QuotaEstimate) -> String {
    format!(
        "{} MB of {} MB ({:.0}%)",
        estimate.usage_mb(),
        estimate.quota_mb(),
        estimate.percent_used()
    )
}

/// Renders the full record as labeled console sections.
pub fn print_record(record: &DiagnosticRecord) {
    print_section_header(Category::Browser.title());
    print_detail("Browser", &record.browser.family.to_string());
    if let Some(version) = record.browser.major_version {
        print_detail("Major Version", &version.to_string());
    }
    print_detail("User Agent", &record.browser.user_agent);
    print_outcome("Private Mode", &record.browser.private_mode, |p| yes_no(*p));
    print_detail("Do Not Track", &yes_no(record.browser.do_not_track));
    print_detail("Language", &record.browser.language);
    print_detail("Timezone", &record.browser.timezone);

    print_section_header(Category::Site.title());
    print_detail("Domain", &record.site.hostname);
    print_detail("URL", &record.site.url);
    print_detail("Protocol", &record.site.scheme);

    print_section_header(Category::Storage.title());
    print_outcome("localStorage Items", &record.storage.local_items, u64::to_string);
    print_outcome(
        "sessionStorage Items",
        &record.storage.session_items,
        u64::to_string,
    );
    print_outcome("Cookies", &record.storage.cookie_count, u64::to_string);
    print_outcome("Databases", &record.storage.database_count, u64::to_string);
    print_outcome("Service Workers", &record.storage.worker_count, u64::to_string);
    print_outcome("Storage Used", &record.storage.quota, quota_text);

    print_section_header(Category::Network.title());
    print_outcome("Connection", &record.network.connection, |hints| {
        let downlink = hints
            .downlink_mbps
            .map_or_else(|| "?".into(), |d| format!("{d:.1}"));
        let rtt = hints
            .rtt_ms
            .map_or_else(|| "?".into(), |r| r.to_string());
        format!(
            "{} — {downlink} Mbps down, {rtt} ms RTT{}",
            hints.effective_type,
            if hints.save_data { ", data saver on" } else { "" }
        )
    });

    print_section_header(Category::Performance.title());
    print_outcome("Navigation", &record.performance.navigation, |nav| {
        format!(
            "load {} ms, DOM ready {} ms, TTFB {} ms",
            nav.load_ms, nav.dom_ready_ms, nav.ttfb_ms
        )
    });
    if record.performance.zero_duration_same_origin > 0 {
        print_detail(
            "Zero-duration Resources",
            &record.performance.zero_duration_same_origin.to_string(),
        );
    }

    print_section_header(Category::System.title());
    print_detail("Platform", &record.system.platform);
    print_detail("Screen Resolution", &record.system.screen.to_string());
    print_detail("Window Size", &record.system.viewport.to_string());
    print_detail("Device Pixel Ratio", &record.system.pixel_ratio.to_string());

    if !record.checks.page_errors.is_empty() {
        print_section_header("Detected Error Messages");
        for message in &record.checks.page_errors {
            println!("  {}", message.red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rules::test_support::healthy_record;
    use colored::control;

    fn disable_colors() {
        control::set_override(false);
    }

    #[test]
    fn print_record_does_not_panic() {
        disable_colors();
        print_record(&healthy_record());
    }

    #[test]
    fn print_record_with_failures_does_not_panic() {
        disable_colors();
        let mut record = healthy_record();
        record.storage.local_items = ProbeOutcome::Error("backend fault".into());
        record.storage.quota = ProbeOutcome::Unavailable("not exposed".into());
        record.checks.page_errors = vec!["Login failed".into()];
        print_record(&record);
    }

    #[test]
    fn quota_text_formats_percent() {
        let text = quota_text(&QuotaEstimate {
            usage_bytes: 52_428_800,
            quota_bytes: 104_857_600,
        });
        assert_eq!(text, "50 MB of 100 MB (50%)");
    }

    #[test]
    fn yes_no_text() {
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
    }
}
