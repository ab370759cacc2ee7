// tests/audit_viewer_tests.rs
use reservafacil_front::application::{
    error::ApplicationError, queries::audit::AuditQueryService, views::AuditViewer,
};
use reservafacil_front::domain::audit::{AUDIT_COLUMNS, AuditCode, AuditRecord, LedgerTimestamp};
use std::sync::Arc;

mod support;
use support::{Outcome, StubLedger, capture_logs, sample_record};

fn viewer_over(ledger: Arc<StubLedger>) -> AuditViewer {
    AuditViewer::new(Arc::new(AuditQueryService::new(ledger)))
}

#[tokio::test]
async fn renders_one_row_per_record_with_six_cells_in_order() {
    let records = vec![
        sample_record(3, "DELETE", "carol"),
        sample_record(1, "LOGIN", "alice"),
        sample_record(2, "CREATE", "bob"),
    ];
    let ledger = Arc::new(StubLedger::new(Outcome::Ok(records.clone())));
    let mut viewer = viewer_over(ledger.clone());

    viewer.mount().await.expect("mount succeeds");

    let table = viewer.table();
    assert_eq!(table.headers, AUDIT_COLUMNS.map(String::from).to_vec());
    assert_eq!(table.row_count(), records.len());
    for (row, record) in table.rows.iter().zip(&records) {
        assert_eq!(row.len(), 6);
        assert_eq!(row[0], record.code().to_string());
        assert_eq!(row[1], record.action());
        assert_eq!(row[2], record.timestamp().as_str());
        assert_eq!(row[3], record.responsible_user());
        assert_eq!(row[4], record.detail());
        assert_eq!(row[5], record.affected_table());
    }
    // ledger order is kept as-is
    assert_eq!(viewer.records(), records.as_slice());
    assert_eq!(ledger.calls(), 1);
}

#[tokio::test]
async fn ledger_scenario_renders_verbatim_row() {
    let record = AuditRecord::new(
        AuditCode::Integer(1),
        "LOGIN",
        LedgerTimestamp::parse("2024-01-01T00:00:00Z").unwrap(),
        "alice",
        "ok",
        "users",
    );
    let ledger = Arc::new(StubLedger::new(Outcome::Ok(vec![record])));
    let mut viewer = viewer_over(ledger);

    viewer.mount().await.unwrap();

    let expected = [
        "1",
        "LOGIN",
        "2024-01-01T00:00:00Z",
        "alice",
        "ok",
        "users",
    ];
    assert_eq!(viewer.table().rows, vec![expected.map(String::from).to_vec()]);
}

#[tokio::test]
async fn empty_collection_renders_no_rows() {
    let ledger = Arc::new(StubLedger::new(Outcome::Ok(vec![])));
    let mut viewer = viewer_over(ledger);

    viewer.mount().await.unwrap();

    assert!(viewer.table().is_empty());
}

#[tokio::test]
async fn error_status_leaves_display_empty_and_is_returned() {
    let message = "relation auditoria does not exist";
    let ledger = Arc::new(StubLedger::new(Outcome::Rejected(message.into())));
    let mut viewer = viewer_over(ledger);

    match viewer.mount().await {
        Err(ApplicationError::Rejected(msg)) => assert_eq!(msg, message),
        other => panic!("unexpected mount result: {other:?}"),
    }
    assert!(viewer.records().is_empty());
    assert!(viewer.table().is_empty());
}

#[tokio::test]
async fn transport_failure_is_logged_and_display_unchanged() {
    let (logs, _guard) = capture_logs();
    let outcome = Outcome::Transport("connection refused".into());
    let ledger = Arc::new(StubLedger::new(outcome));
    let mut viewer = viewer_over(ledger);

    let err = viewer.mount().await.unwrap_err();

    assert!(matches!(err, ApplicationError::Transport(_)));
    assert!(viewer.records().is_empty());
    let output = logs.contents();
    assert!(
        output.contains("ERROR"),
        "expected an error line, got: {output}"
    );
    assert!(output.contains("connection refused"), "got: {output}");
}

#[tokio::test]
async fn malformed_payload_is_rejected_not_rendered() {
    let outcome = Outcome::Malformed("missing field `detalle`".into());
    let ledger = Arc::new(StubLedger::new(outcome));
    let mut viewer = viewer_over(ledger);

    assert!(matches!(
        viewer.mount().await,
        Err(ApplicationError::MalformedResponse(_))
    ));
    assert!(viewer.table().is_empty());
}

#[tokio::test]
async fn mounting_twice_issues_a_single_request() {
    let records = vec![sample_record(1, "LOGIN", "alice")];
    let ledger = Arc::new(StubLedger::new(Outcome::Ok(records)));
    let mut viewer = viewer_over(ledger.clone());

    viewer.mount().await.unwrap();
    viewer.mount().await.unwrap();

    assert_eq!(ledger.calls(), 1);
    assert_eq!(viewer.records().len(), 1);
}
