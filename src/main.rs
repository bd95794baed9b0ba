use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use deal_coach::config::AppConfig;
use deal_coach::error::AppError;
use deal_coach::telemetry;
use deal_coach::workflows::qualification::{
    classify, deal_router, AccessLevel, DealCoachingService, DealScorecard, DealSnapshot,
    ErpLandscape, GapEntry, LogNotifier, MemoryDealRepository, QualificationEngine, Stakeholder,
    StakeholderId, StakeholderRole,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use serde_json::json;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Deal Coaching Assistant",
    about = "Score and coach enterprise sales deals from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Work with a single deal without starting the server
    Deal {
        #[command(subcommand)]
        command: DealCommand,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum DealCommand {
    /// Score a deal snapshot and print the MEDDIC scorecard
    Scorecard(ScorecardArgs),
}

#[derive(Args, Debug)]
struct ScorecardArgs {
    /// Deal snapshot as JSON (defaults to a built-in sample deal)
    #[arg(long)]
    snapshot: Option<PathBuf>,
    /// Print the evidence trail behind every dimension score
    #[arg(long)]
    show_evidence: bool,
}

#[derive(Debug, Serialize)]
struct ScoreResponse {
    average_score: u8,
    status: &'static str,
    dimensions: Vec<DimensionView>,
    gaps: Vec<GapEntry>,
}

#[derive(Debug, Serialize)]
struct DimensionView {
    dimension: &'static str,
    score: u8,
    tier: &'static str,
    evidence: Vec<String>,
}

fn dimension_views(scorecard: &DealScorecard) -> Vec<DimensionView> {
    scorecard
        .iter()
        .map(|(dimension, score)| DimensionView {
            dimension: dimension.label(),
            score: score.value,
            tier: score.tier().label(),
            evidence: score.evidence.clone(),
        })
        .collect()
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Deal {
            command: DealCommand::Scorecard(args),
        } => run_scorecard(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let service = Arc::new(DealCoachingService::new(
        Arc::new(MemoryDealRepository::default()),
        Arc::new(LogNotifier),
    ));

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/deals/score", post(score_endpoint))
        .with_state(state)
        .merge(deal_router(service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "deal coaching assistant ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_scorecard(args: ScorecardArgs) -> Result<(), AppError> {
    let snapshot = match args.snapshot {
        Some(path) => {
            let reader = BufReader::new(File::open(path)?);
            serde_json::from_reader(reader)?
        }
        None => sample_snapshot(),
    };

    let engine = QualificationEngine::new();
    let outcome = engine.qualify(&snapshot);
    render_scorecard(&outcome.scorecard, &outcome.gaps, args.show_evidence);

    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Stateless scoring: accept a snapshot, return the scorecard, never store.
async fn score_endpoint(Json(snapshot): Json<DealSnapshot>) -> Json<ScoreResponse> {
    let engine = QualificationEngine::new();
    let outcome = engine.qualify(&snapshot);
    let average = outcome.scorecard.average();

    Json(ScoreResponse {
        average_score: average,
        status: classify(average).label(),
        dimensions: dimension_views(&outcome.scorecard),
        gaps: outcome.gaps,
    })
}

fn render_scorecard(scorecard: &DealScorecard, gaps: &[GapEntry], show_evidence: bool) {
    println!("MEDDIC scorecard");
    let average = scorecard.average();
    println!(
        "Overall: {}/100 ({})",
        average,
        classify(average).label()
    );

    println!("\nDimensions");
    for (dimension, score) in scorecard.iter() {
        println!(
            "- {}: {}/100 ({})",
            dimension.label(),
            score.value,
            score.tier().label()
        );
        if show_evidence {
            for line in &score.evidence {
                println!("    {line}");
            }
        }
    }

    if gaps.is_empty() {
        println!("\nGaps: none");
    } else {
        println!("\nGaps");
        for gap in gaps {
            println!(
                "- {} ({}): {}",
                gap.dimension.label(),
                gap.score,
                gap.recommended_action
            );
        }
    }
}

fn sample_snapshot() -> DealSnapshot {
    DealSnapshot {
        industries: vec!["Industrial Manufacturing".to_string()],
        process_domains: vec!["Order to Cash".to_string()],
        value_drivers: vec![
            "Reduce Days Sales Outstanding".to_string(),
            "Improve Net Working Capital".to_string(),
        ],
        capabilities: vec!["Cash Application Automation".to_string()],
        free_text: "CFO wants a decision this quarter; the manual matching bottleneck costs \
                    roughly $1.2 million a year and 30% of credit hold reviews are late."
            .to_string(),
        rise_opportunity: false,
        erp_landscape: ErpLandscape {
            modern: false,
            legacy: true,
            third_party: true,
        },
        stakeholders: vec![Stakeholder {
            id: StakeholderId::default(),
            name: "Dana Whitfield".to_string(),
            title: "Chief Financial Officer".to_string(),
            role: StakeholderRole::EconomicBuyer,
            access: AccessLevel::Indirect,
            budget_confirmed: false,
        }],
        generated_text: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;

    #[tokio::test]
    async fn score_endpoint_summarizes_a_snapshot() {
        let Json(body) = super::score_endpoint(Json(sample_snapshot())).await;

        assert_eq!(body.dimensions.len(), 6);
        assert!(body.average_score > 0);
        assert!(body
            .dimensions
            .iter()
            .any(|dimension| dimension.dimension == "Economic Buyer" && dimension.score > 0));
    }

    #[tokio::test]
    async fn score_endpoint_reports_all_gaps_for_an_empty_snapshot() {
        let Json(body) = super::score_endpoint(Json(DealSnapshot::default())).await;

        assert_eq!(body.average_score, 0);
        assert_eq!(body.status, "exploring");
        assert_eq!(body.gaps.len(), 6);
        assert!(body.dimensions.iter().all(|dimension| dimension.score == 0));
    }
}
