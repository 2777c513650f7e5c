use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use sitecheck::application::config::AppConfig;
use sitecheck::application::services::cleanup::CleanupService;
use sitecheck::application::services::nettest::{EndpointCheck, NetworkTestService};
use sitecheck::domain::ports::session::PageSession;
use sitecheck::domain::ports::PageEnvironment;
use sitecheck::domain::rules::{default_rules, Evaluator};
use sitecheck::domain::value_objects::thresholds::ThresholdSet;
use sitecheck::infrastructure::network::http_pinger::HttpPinger;
use sitecheck::infrastructure::render::create_screen_capture;
use sitecheck::infrastructure::session::CapturedSession;
use sitecheck::presentation::cli::app::{Cli, Commands};
use sitecheck::presentation::cli::commands::capture::run_capture;
use sitecheck::presentation::cli::commands::clean::run_clean;
use sitecheck::presentation::cli::commands::nettest::run_nettest;
use sitecheck::presentation::cli::commands::report::run_report;
use sitecheck::presentation::cli::commands::scan::run_scan;

fn print_banner() {
    println!("{}", "━".repeat(44).cyan());
    println!("{}", "  SITECHECK — Web Session Diagnostics".bold().cyan());
    println!("{}", "━".repeat(44).cyan());
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn open_session(path: Option<&PathBuf>) -> anyhow::Result<(CapturedSession, PathBuf)> {
    let path = path.context(
        "no session capture provided — export one from the browser and pass --session <path>",
    )?;
    let session = CapturedSession::load(path)?;
    Ok((session, path.clone()))
}

/// Endpoint sequence for the reachability test: the captured page's origin
/// first, then the configured reference endpoints.
fn nettest_endpoints(origin: &str, config: &AppConfig) -> Vec<EndpointCheck> {
    let mut endpoints = vec![EndpointCheck {
        name: "Site Origin".into(),
        url: origin.to_string(),
    }];
    endpoints.extend(config.network.endpoints.iter().map(|e| EndpointCheck {
        name: e.name.clone(),
        url: e.url.clone(),
    }));
    endpoints
}

/// Wires every port of a captured session into a `PageEnvironment` and
/// runs `f` against it. Main is the only place that knows concrete types.
fn with_environment<T>(
    session: &CapturedSession,
    f: impl FnOnce(&PageEnvironment<'_>) -> anyhow::Result<T>,
) -> anyhow::Result<T> {
    let local = session.local_store();
    let session_store = session.session_store();
    let env = PageEnvironment {
        session,
        local: &local,
        session_store: &session_store,
        cookies: session,
        databases: session,
        workers: session,
        caches: session,
        quota: session,
        connection: session,
        timeline: session,
        dom: session,
    };
    f(&env)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    // Load configuration
    let config = if let Some(ref path) = cli.config {
        AppConfig::load_from(path)?
    } else {
        AppConfig::load()?
    };
    let thresholds = ThresholdSet::from(&config.thresholds);
    let evaluator = Evaluator::new(default_rules());

    // A bare invocation is a scan, mirroring the single-run injection of
    // the in-page variant.
    let command = cli.command.unwrap_or(Commands::Scan { json: false });

    match command {
        Commands::Scan { json } => {
            let (session, _) = open_session(cli.session.as_ref())?;
            if !json {
                print_banner();
            }
            with_environment(&session, |env| {
                run_scan(env, &evaluator, &thresholds, json).map(|_| ())
            })?;
        }
        Commands::Clean => {
            let (session, path) = open_session(cli.session.as_ref())?;
            let local = session.local_store();
            let session_store = session.session_store();
            let service = CleanupService::new(
                &local,
                &session_store,
                &session,
                &session,
                &session,
                &session,
                session.hostname(),
            );
            run_clean(&service);
            // Persist the wiped state so a rerun sees the cleaned session.
            session.save_to(&path)?;
        }
        Commands::Nettest => {
            let (session, _) = open_session(cli.session.as_ref())?;
            let pinger = HttpPinger::new()?;
            let service = NetworkTestService::new(
                &pinger,
                nettest_endpoints(&session.origin(), &config),
                Duration::from_millis(config.network.timeout_ms),
                Duration::from_millis(config.network.pause_ms),
            );
            run_nettest(&service).await;
        }
        Commands::Report { output } => {
            let (session, _) = open_session(cli.session.as_ref())?;
            with_environment(&session, |env| {
                run_report(env, &evaluator, &thresholds, output.as_deref())
            })?;
        }
        Commands::Capture { output } => {
            let (session, _) = open_session(cli.session.as_ref())?;
            let renderer = create_screen_capture(&config.renderer);
            run_capture(&*renderer, &session.url(), &output)?;
        }
    }

    Ok(())
}
