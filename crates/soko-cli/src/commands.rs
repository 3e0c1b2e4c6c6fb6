//! Command handlers. Each reads JSON inputs, runs one pipeline stage and
//! writes a JSON document to stdout.

use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use soko_analyzer::RiskAnalyzer;
use soko_core::{DetailBundle, Finding, Investigation, PlatformPresenceSummary, ScoringRules};
use soko_graph::{build_network, GraphStats, NetworkGraph};
use soko_pipeline::{
    investigation_view, run_investigation, CaptureSource, InvestigationRun, InvestigationStore,
    InvestigationView, MemoryStore,
};

#[derive(Serialize)]
struct GraphOutput {
    network: NetworkGraph,
    #[serde(serialize_with = "soko_graph::stats::stats_or_empty")]
    stats: Option<GraphStats>,
}

#[derive(Serialize)]
struct InvestigateOutput {
    run: InvestigationRun,
    view: InvestigationView,
}

/// Scoring rules from `path`, or the defaults when no path is configured.
pub(crate) fn load_effective_rules(path: Option<&Path>) -> anyhow::Result<ScoringRules> {
    match path {
        Some(path) => {
            let rules = soko_core::load_rules(path)
                .with_context(|| format!("loading scoring rules from {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded scoring rules");
            Ok(rules)
        }
        None => Ok(ScoringRules::default()),
    }
}

pub(crate) fn run_analyze(
    rules: ScoringRules,
    username: &str,
    presence_path: &Path,
    detail_path: Option<&Path>,
    pretty: bool,
) -> anyhow::Result<()> {
    let presence: PlatformPresenceSummary = read_json(presence_path)?;
    let detail: Option<DetailBundle> = detail_path.map(read_json::<DetailBundle>).transpose()?;

    let report = RiskAnalyzer::new(rules).analyze(username, Some(&presence), detail.as_ref());
    print_json(&report, pretty)
}

pub(crate) fn run_graph(
    investigation_path: &Path,
    findings_path: &Path,
    pretty: bool,
) -> anyhow::Result<()> {
    let investigation: Investigation = read_json(investigation_path)?;
    let findings: Vec<Finding> = read_json(findings_path)?;

    let (network, stats) = build_network(&investigation, &findings);
    print_json(&GraphOutput { network, stats }, pretty)
}

pub(crate) fn run_investigate(
    rules: ScoringRules,
    username: &str,
    capture_path: &Path,
    pretty: bool,
) -> anyhow::Result<()> {
    let source = CaptureSource::load(capture_path)?;
    let mut store = MemoryStore::new();
    let investigation = store.create_investigation(username)?;

    let run = run_investigation(
        &mut store,
        &source,
        &RiskAnalyzer::new(rules),
        investigation.id,
    )?;
    let view = investigation_view(&store, investigation.id)?;
    print_json(&InvestigateOutput { run, view }, pretty)
}

pub(crate) fn run_rules(rules: &ScoringRules) -> anyhow::Result<()> {
    print!("{}", serde_yaml::to_string(rules)?);
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}
