//! Behavioural tests for scanning a product through the dashboard.

#[path = "dashboard_scan_bdd/mod.rs"]
mod dashboard_scan_bdd_support;

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use dashboard_scan_bdd_support::{ScanState, SharedRuntime, ensure_runtime_and_server};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};
use trustlens::dashboard::{CounterAnimation, MetricsView, VirtualClock};
use trustlens::test_support::scenario_json;
use trustlens::{
    AnalysisError, Dashboard, DashboardSettings, HttpAnalysisGateway, HttpAnalysisGatewayConfig,
    Projection,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ANALYZE_PATH: &str = "/api/analyze";
const REFERENCE_CSV: &str =
    "Review_Text,Prediction,Confidence_Score\r\n\"Great!\",Genuine,91.2\r\n";

type StepResult = Result<(), Box<dyn Error>>;

#[fixture]
fn scan_state() -> ScanState {
    ScanState::default()
}

fn trim_quotes(text: &str) -> &str {
    text.trim_matches('"')
}

fn mount(
    scan_state: &ScanState,
    runtime: &SharedRuntime,
    response: ResponseTemplate,
) -> StepResult {
    let mock = Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .respond_with(response);
    scan_state
        .server
        .with_ref(|server| runtime.block_on(mock.mount(server)))
        .ok_or("mock server not initialised")?;
    Ok(())
}

/// Builds a dashboard pointed at the mock service, on a clock the steps
/// control.
fn install_dashboard(scan_state: &ScanState) -> StepResult {
    let base_url = scan_state
        .server
        .with_ref(MockServer::uri)
        .ok_or("mock server not initialised")?;
    let gateway = HttpAnalysisGateway::new(&HttpAnalysisGatewayConfig::new(base_url))?;
    let clock = VirtualClock::new();
    let dashboard = Dashboard::new(Arc::new(gateway), DashboardSettings::default())
        .with_clock(Arc::new(clock.clone()));
    scan_state.clock.set(clock);
    scan_state.dashboard.set(dashboard);
    Ok(())
}

#[given("an analysis service that answers with the reference scan")]
fn serve_reference_scan(scan_state: &ScanState) -> StepResult {
    let runtime = ensure_runtime_and_server(scan_state)?;
    mount(
        scan_state,
        &runtime,
        ResponseTemplate::new(200).set_body_json(scenario_json()),
    )?;
    install_dashboard(scan_state)
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[given("an analysis service that rejects requests with {message}")]
fn serve_rejection(scan_state: &ScanState, message: String) -> StepResult {
    let runtime = ensure_runtime_and_server(scan_state)?;
    mount(
        scan_state,
        &runtime,
        ResponseTemplate::new(200).set_body_json(json!({ "error": trim_quotes(&message) })),
    )?;
    install_dashboard(scan_state)
}

#[when("the analysis service starts failing with status {status:u16}")]
fn start_failing(scan_state: &ScanState, status: u16) -> StepResult {
    let runtime = ensure_runtime_and_server(scan_state)?;
    scan_state
        .server
        .with_ref(|server| runtime.block_on(server.reset()))
        .ok_or("mock server not initialised")?;
    mount(
        scan_state,
        &runtime,
        ResponseTemplate::new(status).set_body_string("<html>upstream down</html>"),
    )
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[when("the user analyses {identifier}")]
fn analyse(scan_state: &ScanState, identifier: String) -> StepResult {
    let runtime = ensure_runtime_and_server(scan_state)?;
    let outcome = scan_state
        .dashboard
        .with_mut(|dashboard| {
            runtime
                .block_on(dashboard.analyze(trim_quotes(&identifier)))
                .map(|_| ())
        })
        .ok_or("dashboard not initialised")?;

    match outcome {
        Ok(()) => drop(scan_state.error.take()),
        Err(error) => scan_state.error.set(error),
    }
    Ok(())
}

#[when("the user exports the scan")]
fn export(scan_state: &ScanState) -> StepResult {
    let outcome = scan_state
        .dashboard
        .with_ref(Dashboard::export_csv)
        .ok_or("dashboard not initialised")?;

    match outcome {
        Ok(csv) => {
            drop(scan_state.error.take());
            scan_state.export.set(csv);
        }
        Err(error) => {
            drop(scan_state.export.take());
            scan_state.error.set(error);
        }
    }
    Ok(())
}

fn received_bodies(scan_state: &ScanState) -> Result<Vec<Value>, Box<dyn Error>> {
    let runtime = ensure_runtime_and_server(scan_state)?;
    let requests = scan_state
        .server
        .with_ref(|server| runtime.block_on(server.received_requests()))
        .ok_or("mock server not initialised")?
        .ok_or("request recording is disabled")?;
    requests
        .iter()
        .map(|request| {
            serde_json::from_slice::<Value>(&request.body).map_err(Box::<dyn Error>::from)
        })
        .collect()
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the service received {count:usize} request for {identifier} asking for {pages:u32} pages")]
fn assert_request_body(
    scan_state: &ScanState,
    count: usize,
    identifier: String,
    pages: u32,
) -> StepResult {
    let bodies = received_bodies(scan_state)?;
    if bodies.len() != count {
        return Err(format!("expected {count} requests, got {}", bodies.len()).into());
    }
    let expected = json!({ "asin": trim_quotes(&identifier), "pages": pages });
    if let Some(body) = bodies.iter().find(|body| **body != expected) {
        return Err(format!("expected request body {expected}, got {body}").into());
    }
    Ok(())
}

#[then("the service received {count:usize} requests")]
fn assert_request_count(scan_state: &ScanState, count: usize) -> StepResult {
    let received = received_bodies(scan_state)?.len();
    if received != count {
        return Err(format!("expected {count} requests, got {received}").into());
    }
    Ok(())
}

/// Reads a value off the shown projection once every animation has run.
fn settled<T>(
    scan_state: &ScanState,
    read: impl FnOnce(&Projection, Duration) -> Option<T>,
) -> Result<T, Box<dyn Error>> {
    scan_state
        .clock
        .with_ref(|clock| clock.advance(Duration::from_secs(5)))
        .ok_or("clock not initialised")?;
    scan_state
        .dashboard
        .with_ref(|dashboard| {
            let now = dashboard.now();
            dashboard
                .projection()
                .and_then(|projection| read(projection, now))
        })
        .ok_or("dashboard not initialised")?
        .ok_or_else(|| "panel is not shown".into())
}

fn assert_counter(
    scan_state: &ScanState,
    name: &str,
    expected: &str,
    pick: fn(&MetricsView) -> CounterAnimation,
) -> StepResult {
    let shown = settled(scan_state, |projection, now| {
        projection
            .metrics
            .ready()
            .map(|metrics| pick(metrics).display_at(now))
    })?;
    if shown != trim_quotes(expected) {
        return Err(format!("expected {name} to read {expected}, got {shown}").into());
    }
    Ok(())
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the total review counter settles on {value}")]
fn assert_total_reviews(scan_state: &ScanState, value: String) -> StepResult {
    assert_counter(scan_state, "total reviews", &value, |metrics| {
        metrics.total_reviews
    })
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the fake share settles on {value}")]
fn assert_fake_share(scan_state: &ScanState, value: String) -> StepResult {
    assert_counter(scan_state, "fake share", &value, |metrics| {
        metrics.fake_percent
    })
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the trust share settles on {value}")]
fn assert_trust_share(scan_state: &ScanState, value: String) -> StepResult {
    assert_counter(scan_state, "trust share", &value, |metrics| {
        metrics.trust_percent
    })
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the average confidence settles on {value}")]
fn assert_avg_confidence(scan_state: &ScanState, value: String) -> StepResult {
    assert_counter(scan_state, "average confidence", &value, |metrics| {
        metrics.avg_confidence
    })
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the gauge reads {label} with verdict {verdict}")]
fn assert_gauge(scan_state: &ScanState, label: String, verdict: String) -> StepResult {
    let (shown_label, shown_verdict, trust) = settled(scan_state, |projection, now| {
        projection.gauge.ready().map(|gauge| {
            (
                gauge.tier.label(),
                gauge.verdict(),
                gauge.trust_score.display_at(now),
            )
        })
    })?;
    if shown_label != trim_quotes(&label) || shown_verdict != trim_quotes(&verdict) {
        return Err(format!("gauge shows {shown_label} / {shown_verdict}").into());
    }
    if trust != "70" {
        return Err(format!("expected trust score 70, got {trust}").into());
    }
    Ok(())
}

#[then("the distribution shows {genuine:u64} genuine and {fake:u64} fake reviews")]
fn assert_distribution(scan_state: &ScanState, genuine: u64, fake: u64) -> StepResult {
    let shown = settled(scan_state, |projection, _| {
        projection
            .distribution
            .ready()
            .map(|distribution| (distribution.genuine, distribution.fake))
    })?;
    if shown != (genuine, fake) {
        return Err(format!("expected {genuine}/{fake}, got {}/{}", shown.0, shown.1).into());
    }
    Ok(())
}

#[then("the feed shows {count:usize} cards")]
fn assert_feed_cards(scan_state: &ScanState, count: usize) -> StepResult {
    let cards = settled(scan_state, |projection, _| {
        projection.feed.ready().map(|feed| feed.cards().len())
    })?;
    if cards != count {
        return Err(format!("expected {count} feed cards, got {cards}").into());
    }
    Ok(())
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the shown scan is still for {identifier}")]
fn assert_shown_identifier(scan_state: &ScanState, identifier: String) -> StepResult {
    let shown = settled(scan_state, |projection, _| {
        Some(projection.meta.identifier.clone())
    })?;
    if shown != trim_quotes(&identifier) {
        return Err(format!("expected scan for {identifier}, got {shown}").into());
    }
    Ok(())
}

#[then("no results are shown")]
fn assert_nothing_shown(scan_state: &ScanState) -> StepResult {
    let shown = scan_state
        .dashboard
        .with_ref(|dashboard| dashboard.projection().is_some() || dashboard.export_enabled())
        .ok_or("dashboard not initialised")?;
    if shown {
        return Err("expected an empty dashboard".into());
    }
    Ok(())
}

#[then("the dashboard is idle")]
fn assert_idle(scan_state: &ScanState) -> StepResult {
    let busy = scan_state
        .dashboard
        .with_ref(Dashboard::is_busy)
        .ok_or("dashboard not initialised")?;
    if busy {
        return Err("expected the dashboard to accept a new scan".into());
    }
    Ok(())
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the error message is {message}")]
fn assert_error_message(scan_state: &ScanState, message: String) -> StepResult {
    let error: AnalysisError = scan_state
        .error
        .with_ref(Clone::clone)
        .ok_or("expected an error")?;
    if error.to_string() != trim_quotes(&message) {
        return Err(format!("expected error {message}, got {error}").into());
    }
    Ok(())
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[then("the export file is named {file_name}")]
fn assert_export_name(scan_state: &ScanState, file_name: String) -> StepResult {
    let name = scan_state
        .export
        .with_ref(|csv| csv.file_name.clone())
        .ok_or("expected an export")?;
    if name != trim_quotes(&file_name) {
        return Err(format!("expected file {file_name}, got {name}").into());
    }
    Ok(())
}

#[then("the export holds the reference review as CSV")]
fn assert_export_contents(scan_state: &ScanState) -> StepResult {
    let contents = scan_state
        .export
        .with_ref(|csv| csv.contents.clone())
        .ok_or("expected an export")?;
    if contents != REFERENCE_CSV {
        return Err(format!("unexpected CSV:\n{contents:?}").into());
    }
    Ok(())
}

#[scenario(path = "tests/features/dashboard_scan.feature", index = 0)]
fn reference_scan_fills_every_panel(scan_state: ScanState) {
    let _ = scan_state;
}

#[scenario(path = "tests/features/dashboard_scan.feature", index = 1)]
fn service_error_on_success_status(scan_state: ScanState) {
    let _ = scan_state;
}

#[scenario(path = "tests/features/dashboard_scan.feature", index = 2)]
fn blank_input_never_reaches_service(scan_state: ScanState) {
    let _ = scan_state;
}

#[scenario(path = "tests/features/dashboard_scan.feature", index = 3)]
fn failed_scan_keeps_previous_results(scan_state: ScanState) {
    let _ = scan_state;
}
