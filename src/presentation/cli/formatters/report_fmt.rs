use std::fmt::Write;

use crate::domain::entities::finding::Evaluation;
use crate::domain::entities::record::DiagnosticRecord;
use crate::domain::value_objects::category::Category;
use crate::domain::value_objects::outcome::ProbeOutcome;
use crate::domain::value_objects::severity::Severity;

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "{title}:");
    let _ = writeln!(out, "{}", "-".repeat(title.len() + 1));
}

fn line(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "{label}: {value}");
}

fn outcome_line<T>(
    out: &mut String,
    label: &str,
    outcome: &ProbeOutcome<T>,
    render: impl Fn(&T) -> String,
) {
    match outcome {
        ProbeOutcome::Value(v) => line(out, label, &render(v)),
        ProbeOutcome::Unavailable(reason) => line(out, label, &format!("not available ({reason})")),
        ProbeOutcome::Error(message) => line(out, label, &format!("error: {message}")),
    }
}

fn yes_no(flag: bool) -> String {
    if flag {
        "Yes".into()
    } else {
        "No".into()
    }
}

/// Serializes a diagnostic run into the flat plain-text report handed to
/// the export sink. Section order is fixed: browser, site, storage,
/// network, performance, system, detected errors, timestamp.
#[must_use]
pub fn render_report(record: &DiagnosticRecord, evaluation: &Evaluation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "SITE DIAGNOSTICS REPORT");
    let _ = writeln!(out, "=======================");
    let _ = writeln!(out);

    section(&mut out, Category::Browser.title());
    line(&mut out, "Browser", &record.browser.family.to_string());
    if let Some(version) = record.browser.major_version {
        line(&mut out, "Major Version", &version.to_string());
    }
    line(&mut out, "User Agent", &record.browser.user_agent);
    outcome_line(&mut out, "Private Mode", &record.browser.private_mode, |p| {
        yes_no(*p)
    });
    line(
        &mut out,
        "Do Not Track",
        &yes_no(record.browser.do_not_track),
    );
    line(&mut out, "Language", &record.browser.language);
    line(&mut out, "Timezone", &record.browser.timezone);
    let _ = writeln!(out);

    section(&mut out, Category::Site.title());
    line(&mut out, "Domain", &record.site.hostname);
    line(&mut out, "URL", &record.site.url);
    line(&mut out, "Protocol", &record.site.scheme);
    let _ = writeln!(out);

    section(&mut out, Category::Storage.title());
    outcome_line(
        &mut out,
        "localStorage",
        &record.storage.local_items,
        |n| format!("{n} items"),
    );
    outcome_line(
        &mut out,
        "sessionStorage",
        &record.storage.session_items,
        |n| format!("{n} items"),
    );
    outcome_line(&mut out, "Cookies", &record.storage.cookie_count, u64::to_string);
    outcome_line(
        &mut out,
        "Databases",
        &record.storage.database_count,
        u64::to_string,
    );
    outcome_line(
        &mut out,
        "Service Workers",
        &record.storage.worker_count,
        u64::to_string,
    );
    outcome_line(&mut out, "Storage Used", &record.storage.quota, |q| {
        format!(
            "{} MB of {} MB ({:.0}%)",
            q.usage_mb(),
            q.quota_mb(),
            q.percent_used()
        )
    });
    let _ = writeln!(out);

    section(&mut out, Category::Network.title());
    outcome_line(&mut out, "Connection", &record.network.connection, |hints| {
        let downlink = hints
            .downlink_mbps
            .map_or_else(|| "?".into(), |d| format!("{d:.1}"));
        let rtt = hints.rtt_ms.map_or_else(|| "?".into(), |r| r.to_string());
        format!(
            "{}, {downlink} Mbps downlink, {rtt} ms RTT, data saver {}",
            hints.effective_type,
            if hints.save_data { "on" } else { "off" }
        )
    });
    let _ = writeln!(out);

    section(&mut out, Category::Performance.title());
    outcome_line(&mut out, "Navigation", &record.performance.navigation, |nav| {
        format!(
            "load {} ms, DOM ready {} ms, TTFB {} ms",
            nav.load_ms, nav.dom_ready_ms, nav.ttfb_ms
        )
    });
    line(
        &mut out,
        "Zero-duration Same-origin Resources",
        &record.performance.zero_duration_same_origin.to_string(),
    );
    let _ = writeln!(out);

    section(&mut out, Category::System.title());
    line(&mut out, "Platform", &record.system.platform);
    line(
        &mut out,
        "Screen Resolution",
        &format!("{}x{}", record.system.screen.width, record.system.screen.height),
    );
    line(
        &mut out,
        "Window Size",
        &format!(
            "{}x{}",
            record.system.viewport.width, record.system.viewport.height
        ),
    );
    line(
        &mut out,
        "Device Pixel Ratio",
        &record.system.pixel_ratio.to_string(),
    );
    let _ = writeln!(out);

    section(&mut out, "Detected Errors");
    let errors: Vec<_> = evaluation
        .findings
        .iter()
        .filter(|f| f.severity == Severity::Error)
        .collect();
    if errors.is_empty() && record.checks.page_errors.is_empty() {
        let _ = writeln!(out, "None");
    } else {
        for finding in errors {
            let _ = writeln!(out, "[{}] {}", finding.category, finding.message);
        }
        for message in &record.checks.page_errors {
            let _ = writeln!(out, "[page] {message}");
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "Report generated at: {}",
        record.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    );
    out
}
