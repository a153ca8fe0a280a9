//! Tests for operation mode determination.

use rstest::rstest;

use crate::TrustlensConfig;
use crate::config::OperationMode;

#[rstest]
fn dashboard_when_no_identifier_given() {
    let config = TrustlensConfig::default();

    assert_eq!(
        config.operation_mode(),
        OperationMode::Dashboard,
        "should open the dashboard without an identifier"
    );
}

#[rstest]
fn single_scan_when_identifier_given() {
    let config = TrustlensConfig {
        asin: Some("B000123456".to_owned()),
        ..Default::default()
    };

    assert_eq!(
        config.operation_mode(),
        OperationMode::SingleScan,
        "should scan once when an identifier is set"
    );
}

#[rstest]
fn tui_flag_takes_precedence_over_identifier() {
    let config = TrustlensConfig {
        asin: Some("B000123456".to_owned()),
        tui: true,
        ..Default::default()
    };

    assert_eq!(
        config.operation_mode(),
        OperationMode::Dashboard,
        "--tui should open the dashboard pre-filled with the identifier"
    );
}

#[rstest]
fn export_options_do_not_affect_mode() {
    let config = TrustlensConfig {
        csv: true,
        output_dir: Some("exports".into()),
        ..Default::default()
    };

    assert_eq!(config.operation_mode(), OperationMode::Dashboard);
}
