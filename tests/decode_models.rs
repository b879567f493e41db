//! Decode/encode round-trip tests against realistic Elise payloads.

use biolevate_models::{
    DataValue, DecodeError, EliseAnnotation, EliseFileInfo, EliseFileInfoType, ItemReference,
    ItemReferenceType, Job, JobStatus, Model, PageDataEliseFileInfo, Position, PositionBboxDto,
    ValueSlot,
};
use serde_json::json;

#[test]
fn test_position_bbox_concrete_scenario() {
    let payload = json!({"type": "BBOX", "bbox": {"x0": 1.0}, "page_number": 2});

    let position = Position::decode(&payload).expect("decode failed");
    let Position::Bbox(bbox_position) = &position else {
        panic!("expected bbox position, got {position:?}");
    };

    let bbox = match bbox_position.bbox.as_ref() {
        ValueSlot::Present(bbox) => bbox,
        other => panic!("expected present bbox, got {other:?}"),
    };
    assert_eq!(bbox.x0, ValueSlot::Present(1.0));
    assert!(bbox.y0.is_absent());
    assert!(bbox.x1.is_absent());
    assert!(bbox.y1.is_absent());
    assert_eq!(bbox_position.page_number, ValueSlot::Present(2));

    // Re-encoding reproduces the payload exactly: no spurious nulls.
    assert_eq!(position.encode(), payload);
}

#[test]
fn test_job_round_trip_preserves_declared_fields() {
    let payload = json!({
        "jobId": "job-42",
        "status": "RUNNING",
        "taskType": "EXTRACTION",
        "createdTime": 1700000000000_i64,
        "executionTime": 1.5,
        "name": "quarterly report",
        "archived": false
    });

    let job = Job::decode(&payload).expect("decode failed");
    assert_eq!(job.job_id, ValueSlot::Present("job-42".to_string()));
    assert_eq!(job.status, ValueSlot::Present(JobStatus::Running));
    assert!(job.error_message.is_absent());

    assert_eq!(job.encode(), payload);
}

#[test]
fn test_decode_of_encode_is_identity() {
    let payload = json!({
        "jobId": "job-42",
        "status": "SUCCESS",
        "errorMessage": null,
        "oddKey": {"nested": [1, 2, 3]}
    });

    let job = Job::decode(&payload).expect("decode failed");
    let again = Job::decode(&job.encode()).expect("re-decode failed");
    assert_eq!(job, again);
}

#[test]
fn test_absent_vs_null_are_distinct_states() {
    let absent = Job::decode(&json!({})).expect("decode failed");
    assert!(absent.error_message.is_absent());

    let null = Job::decode(&json!({"errorMessage": null})).expect("decode failed");
    assert!(null.error_message.is_null());

    assert_ne!(absent.error_message, null.error_message);

    // Absent omits the key; Null re-emits it.
    assert_eq!(absent.encode(), json!({}));
    assert_eq!(null.encode(), json!({"errorMessage": null}));
}

#[test]
fn test_enum_fallback_vs_invalid_enum_value() {
    // JobStatus declares a fallback: unknown strings are preserved.
    let job = Job::decode(&json!({"status": "PAUSED"})).expect("decode failed");
    assert_eq!(
        job.status,
        ValueSlot::Present(JobStatus::Unrecognized("PAUSED".to_string()))
    );
    assert_eq!(job.encode(), json!({"status": "PAUSED"}));

    // EliseFileInfoType declares none: the same kind of input is an error.
    let err = EliseFileInfo::decode(&json!({"type": "SYMLINK"})).unwrap_err();
    assert_eq!(
        err,
        DecodeError::InvalidEnumValue {
            path: biolevate_models::FieldPath::root().key("type"),
            value: "SYMLINK".to_string(),
        }
    );
    assert_eq!(err.to_string(), "invalid value 'SYMLINK' for enum field 'type'");
}

#[test]
fn test_unknown_keys_survive_mutation() {
    let payload = json!({
        "jobId": "job-1",
        "betaFeatures": {"ranking": true},
        "x-trace": "abc123"
    });

    let mut job = Job::decode(&payload).expect("decode failed");
    assert_eq!(job.additional_properties.len(), 2);

    // Mutate a known field, then encode.
    job.status = ValueSlot::Present(JobStatus::Failed);
    let encoded = job.encode();

    assert_eq!(encoded["betaFeatures"], json!({"ranking": true}));
    assert_eq!(encoded["x-trace"], json!("abc123"));
    assert_eq!(encoded["status"], json!("FAILED"));
    assert_eq!(encoded["jobId"], json!("job-1"));
}

#[test]
fn test_known_fields_win_over_stale_unknown_keys() {
    let mut bbox = PositionBboxDto::default();
    bbox.page_number = ValueSlot::Present(7);
    // A stale copy of a declared key, as if injected by a proxy.
    bbox.additional_properties.insert("page_number", json!(999));

    assert_eq!(bbox.encode(), json!({"page_number": 7}));
}

#[test]
fn test_required_fields_enforced() {
    let reference =
        ItemReference::decode(&json!({"name": "document.pdf", "type": "FILE", "path": "/reports/"}))
            .expect("decode failed");
    assert_eq!(reference.name, "document.pdf");
    assert_eq!(reference.item_type, ItemReferenceType::File);
    assert_eq!(reference.path, ValueSlot::Present("/reports/".to_string()));

    let err = ItemReference::decode(&json!({"type": "FILE"})).unwrap_err();
    assert_eq!(err.to_string(), "missing required field 'name'");
}

#[test]
fn test_nested_model_error_carries_full_path() {
    let payload = json!({
        "data": [
            {"name": "ok.pdf", "size": 10},
            {"name": "bad.pdf", "size": "huge"}
        ]
    });
    let err = PageDataEliseFileInfo::decode(&payload).unwrap_err();
    assert_eq!(
        err.to_string(),
        "type mismatch at 'data[1].size': expected integer, got string"
    );
}

#[test]
fn test_file_page_round_trip() {
    let payload = json!({
        "data": [
            {"id": "f-1", "name": "a.pdf", "type": "FILE", "indexed": true},
            {"id": "f-2", "name": "archive", "type": "FOLDER"}
        ],
        "totalPages": 1,
        "totalElements": 2,
        "hasNext": false
    });

    let page = PageDataEliseFileInfo::decode(&payload).expect("decode failed");
    let files = match page.data.as_ref() {
        ValueSlot::Present(files) => files,
        other => panic!("expected file list, got {other:?}"),
    };
    assert_eq!(files.len(), 2);
    assert_eq!(files[1].file_type, ValueSlot::Present(EliseFileInfoType::Folder));

    assert_eq!(page.encode(), payload);
}

#[test]
fn test_data_value_dates_round_trip() {
    let payload = json!({
        "dateValue": "2024-06-01T12:30:00Z",
        "doubleListValue": [1.5, 2.5],
        "strValue": "answer"
    });

    let value = DataValue::decode(&payload).expect("decode failed");
    assert!(value.date_value.is_present());
    assert_eq!(value.encode(), payload);

    let err = DataValue::decode(&json!({"dateValue": "not a date"})).unwrap_err();
    assert_eq!(
        err.to_string(),
        "type mismatch at 'dateValue': expected RFC 3339 date-time, got string"
    );
}

#[test]
fn test_annotation_with_nested_statement() {
    let payload = json!({
        "id": {"id": "ann-1"},
        "createdTime": 1700000000000_i64,
        "space": {"id": "space-9", "entityType": "SPACE"},
        "data": {"type": "KNOWLEDGE", "name": "molecule", "value": "aspirin"},
        "status": "VALID"
    });

    let annotation = EliseAnnotation::decode(&payload).expect("decode failed");
    assert!(annotation.data.is_present());
    assert_eq!(annotation.encode(), payload);

    // Status is a closed enum.
    let err = EliseAnnotation::decode(&json!({"status": "MAYBE"})).unwrap_err();
    assert_eq!(err.to_string(), "invalid value 'MAYBE' for enum field 'status'");
}
