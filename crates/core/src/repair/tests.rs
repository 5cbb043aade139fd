//! Unit tests for repair payloads and status handling.

use chrono::NaiveDate;
use rstest::rstest;
use uuid::Uuid;

use super::*;
use crate::validate;

#[rstest]
#[case("OPEN", RepairStatus::Open)]
#[case("pending", RepairStatus::Pending)]
#[case(" Closed ", RepairStatus::Closed)]
fn test_parse_status(#[case] input: &str, #[case] expected: RepairStatus) {
    assert_eq!(input.parse::<RepairStatus>().unwrap(), expected);
}

#[test]
fn test_unknown_status() {
    assert!("REOPENED".parse::<RepairStatus>().is_err());
    assert!(serde_json::from_str::<RepairStatus>(r#""open""#).is_err());
}

#[test]
fn test_status_wire_format() {
    assert_eq!(
        serde_json::to_string(&RepairStatus::Pending).unwrap(),
        r#""PENDING""#
    );
    assert_eq!(RepairStatus::default(), RepairStatus::Open);
    assert!(RepairStatus::Closed.is_closed());
    assert!(!RepairStatus::Open.is_closed());
}

#[test]
fn test_new_repair_defaults() {
    let json = format!(
        r#"{{"date_raised":"2024-03-01","school_id":"{}","device_serial":"SN-1","device_model_id":"{}"}}"#,
        Uuid::new_v4(),
        Uuid::new_v4()
    );
    let repair: NewRepair = serde_json::from_str(&json).unwrap();

    assert!(repair.has_protective_case);
    assert!(repair.external_ticket_number.is_none());
    assert!(validate(&repair).is_ok());
}

#[test]
fn test_ticket_number_length() {
    let patch = RepairPatch {
        external_ticket_number: Some(Some("T".repeat(101))),
        ..RepairPatch::default()
    };
    assert!(validate(&patch).is_err());
}

#[test]
fn test_patch_distinguishes_null_and_absent() {
    let patch: RepairPatch =
        serde_json::from_str(r#"{"date_closed":null,"is_sla_breached":true}"#).unwrap();

    assert_eq!(patch.date_closed, Some(None));
    assert_eq!(patch.is_sla_breached, Some(true));
    assert_eq!(patch.inbound_date, None);
    assert!(!patch.is_empty());
    assert!(RepairPatch::default().is_empty());
}

#[test]
fn test_status_change_into_patch() {
    let closed_on = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
    let patch = RepairPatch::from(RepairStatusChange {
        status: RepairStatus::Closed,
        date_closed: Some(closed_on),
    });

    assert_eq!(patch.status, Some(RepairStatus::Closed));
    assert_eq!(patch.date_closed, Some(Some(closed_on)));
    assert!(patch.school_id.is_none());

    let reopened = RepairPatch::from(RepairStatusChange {
        status: RepairStatus::Pending,
        date_closed: None,
    });
    assert_eq!(reopened.date_closed, None);
}

#[test]
fn test_collection_assignment_into_patch() {
    let inbound = Uuid::new_v4();
    let patch = RepairPatch::from(CollectionAssignment {
        inbound_collection_id: Some(inbound),
        ..CollectionAssignment::default()
    });

    assert_eq!(patch.inbound_collection_id, Some(Some(inbound)));
    assert_eq!(patch.outbound_collection_id, None);
    assert_eq!(patch.referenced_collections().collect::<Vec<_>>(), vec![inbound]);
}
