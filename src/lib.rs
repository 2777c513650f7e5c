//! sitecheck — client-side web session diagnostics.
//!
//! Probes the runtime environment of a captured page session through a set
//! of fault-tolerant ports, aggregates the outcomes into one diagnostic
//! record, evaluates an issue ruleset against it, and offers remediation
//! actions (storage wipe, network reachability test) with partial-failure
//! tolerance.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
