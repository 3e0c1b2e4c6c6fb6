//! Investigation run and read orchestration.

use serde::Serialize;
use soko_analyzer::{RiskAnalyzer, RiskReport};
use soko_core::{
    DetailBundle, DetailPlatform, Finding, Investigation, InvestigationStatus, NewFinding,
    PlatformDetail, PlatformPresenceSummary, ANALYSIS_PLATFORM,
};
use soko_graph::{build_network, GraphStats, NetworkGraph};

use crate::error::PipelineError;
use crate::source::PresenceSource;
use crate::store::InvestigationStore;

/// Result of running one investigation end to end.
#[derive(Debug, Clone, Serialize)]
pub struct InvestigationRun {
    pub investigation_id: i64,
    pub username: String,
    pub status: InvestigationStatus,
    pub platform_results: PlatformPresenceSummary,
    pub detailed_data: DetailBundle,
    pub analysis: RiskReport,
}

/// Everything a reader needs to display one investigation.
#[derive(Debug, Clone, Serialize)]
pub struct InvestigationView {
    pub investigation: Investigation,
    pub findings: Vec<Finding>,
    pub network: NetworkGraph,
    /// Serialized as `{}` when the graph is empty.
    #[serde(serialize_with = "soko_graph::stats::stats_or_empty")]
    pub stats: Option<GraphStats>,
}

/// Payload of the synthetic analysis finding.
#[derive(Serialize)]
struct AnalysisPayload<'a> {
    platform_results: &'a PlatformPresenceSummary,
    reddit: Option<&'a PlatformDetail>,
    github: Option<&'a PlatformDetail>,
    analysis: &'a RiskReport,
}

/// Collect, persist and analyze data for investigation `id`.
///
/// 1. Mark the investigation `running`.
/// 2. Search platform presence and fetch Reddit and GitHub details.
/// 3. Persist one finding per platform probe.
/// 4. Run the risk analyzer and persist its report as the analysis finding.
/// 5. Mark the investigation `completed`.
///
/// # Errors
///
/// Returns [`PipelineError::NotFound`] for an unknown id. Any later failure
/// marks the investigation `failed` and is returned.
pub fn run_investigation<St, So>(
    store: &mut St,
    source: &So,
    analyzer: &RiskAnalyzer,
    id: i64,
) -> Result<InvestigationRun, PipelineError>
where
    St: InvestigationStore + ?Sized,
    So: PresenceSource + ?Sized,
{
    let investigation = store.investigation(id)?.ok_or(PipelineError::NotFound(id))?;
    tracing::info!(investigation_id = id, username = %investigation.username, "starting investigation");

    store.set_status(id, InvestigationStatus::Running)?;

    let result = collect_and_analyze(store, source, analyzer, &investigation).and_then(|run| {
        store.set_status(id, InvestigationStatus::Completed)?;
        Ok(run)
    });

    match result {
        Ok(run) => {
            tracing::info!(
                investigation_id = id,
                level = %run.analysis.risk_level,
                score = run.analysis.risk_score,
                "investigation completed"
            );
            Ok(run)
        }
        Err(e) => {
            tracing::warn!(investigation_id = id, error = %e, "investigation failed");
            if let Err(mark_err) = store.set_status(id, InvestigationStatus::Failed) {
                tracing::warn!(
                    investigation_id = id,
                    error = %mark_err,
                    "could not mark investigation as failed"
                );
            }
            Err(e)
        }
    }
}

fn collect_and_analyze<St, So>(
    store: &mut St,
    source: &So,
    analyzer: &RiskAnalyzer,
    investigation: &Investigation,
) -> Result<InvestigationRun, PipelineError>
where
    St: InvestigationStore + ?Sized,
    So: PresenceSource + ?Sized,
{
    let username = investigation.username.as_str();

    let platform_results = source.search_username(username)?;
    tracing::debug!(
        username,
        checked = platform_results.total_checked,
        found = platform_results.found_on().len(),
        "presence search finished"
    );

    let detailed_data = DetailBundle::new()
        .with(source.reddit_detail(username))
        .with(source.github_detail(username));

    for probe in &platform_results.platforms {
        store.append_finding(NewFinding {
            investigation_id: investigation.id,
            platform: probe.platform.clone(),
            username: username.to_string(),
            profile_url: probe.url.clone(),
            data: serde_json::to_string(probe)?,
            found: probe.found,
        })?;
    }

    let analysis = analyzer.analyze(username, Some(&platform_results), Some(&detailed_data));

    let payload = AnalysisPayload {
        platform_results: &platform_results,
        reddit: detailed_data.get(DetailPlatform::Reddit),
        github: detailed_data.get(DetailPlatform::Github),
        analysis: &analysis,
    };
    store.append_finding(NewFinding {
        investigation_id: investigation.id,
        platform: ANALYSIS_PLATFORM.to_string(),
        username: username.to_string(),
        profile_url: String::new(),
        data: serde_json::to_string(&payload)?,
        found: true,
    })?;

    Ok(InvestigationRun {
        investigation_id: investigation.id,
        username: username.to_string(),
        status: InvestigationStatus::Completed,
        platform_results,
        detailed_data,
        analysis,
    })
}

/// Load investigation `id` with its findings and a freshly built graph.
///
/// # Errors
///
/// Returns [`PipelineError::NotFound`] for an unknown id, or a store error.
pub fn investigation_view<St>(store: &St, id: i64) -> Result<InvestigationView, PipelineError>
where
    St: InvestigationStore + ?Sized,
{
    let investigation = store.investigation(id)?.ok_or(PipelineError::NotFound(id))?;
    let findings = store.findings_for(id)?;
    let (network, stats) = build_network(&investigation, &findings);

    Ok(InvestigationView {
        investigation,
        findings,
        network,
        stats,
    })
}
