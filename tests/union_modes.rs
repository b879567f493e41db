//! Lenient vs strict union resolution on real model unions.

use biolevate_models::{
    DecodeError, DecodeOptions, FieldPath, FsProvider, Model, Position, ProviderConfig, ValueSlot,
};
use serde_json::json;

#[test]
fn test_lenient_overlap_resolves_by_declaration_order() {
    // Every position shape is all-optional, so an empty object satisfies
    // all three candidates; the first declared one wins.
    let position = Position::decode(&json!({})).expect("decode failed");
    assert!(matches!(position, Position::Bbox(_)));
}

#[test]
fn test_lenient_resolution_is_deterministic() {
    let payload = json!({"type": "CELL", "sheet_name": "Q1", "row": 4, "col": 2});
    let first = Position::decode(&payload).expect("decode failed");
    let second = Position::decode(&payload).expect("decode failed");
    assert_eq!(first, second);
}

#[test]
fn test_strict_overlap_is_ambiguous() {
    let err = Position::decode_with(&json!({}), DecodeOptions::strict()).unwrap_err();
    assert_eq!(
        err,
        DecodeError::AmbiguousUnion {
            path: FieldPath::root(),
            union: "Position",
            candidates: vec!["PositionBboxDto", "PositionCellDto", "PositionLineDto"],
        }
    );
}

#[test]
fn test_strict_single_match_on_disjoint_shapes() {
    // Required fields make the provider configs mutually exclusive.
    let payload = json!({"bucketName": "datasets", "region": "eu-west1", "projectId": "p-1"});
    let config = ProviderConfig::decode_with(&payload, DecodeOptions::strict())
        .expect("decode failed");
    let ProviderConfig::Gcs(gcs) = &config else {
        panic!("expected GCS config, got {config:?}");
    };
    assert_eq!(gcs.bucket_name, "datasets");
    assert_eq!(config.encode(), payload);
}

#[test]
fn test_strict_no_match_is_unresolved() {
    let err = ProviderConfig::decode_with(&json!({}), DecodeOptions::strict()).unwrap_err();
    assert_eq!(
        err,
        DecodeError::UnresolvedUnion {
            path: FieldPath::root(),
            union: "ProviderConfig",
        }
    );
    assert_eq!(err.to_string(), "value at '$' matches no candidate of union ProviderConfig");
}

#[test]
fn test_lenient_no_match_propagates_last_candidate_error() {
    // No candidate accepts an empty object; the SharePoint candidate is
    // tried last, so its missing-field error surfaces.
    let err = ProviderConfig::decode(&json!({})).unwrap_err();
    assert_eq!(err.to_string(), "missing required field 'siteUrl'");
}

#[test]
fn test_union_error_path_includes_parent_field() {
    let payload = json!({"name": "shared drive", "config": {}});
    let err = FsProvider::decode_with(&payload, DecodeOptions::strict()).unwrap_err();
    assert_eq!(
        err,
        DecodeError::UnresolvedUnion {
            path: FieldPath::root().key("config"),
            union: "ProviderConfig",
        }
    );
}

#[test]
fn test_provider_with_union_field_round_trips() {
    let payload = json!({
        "id": "prov-7",
        "name": "archive",
        "type": "AZURE",
        "config": {"containerName": "documents", "accountName": "acct"},
        "system": false
    });

    let provider = FsProvider::decode(&payload).expect("decode failed");
    let config = match provider.config.as_ref() {
        ValueSlot::Present(config) => config,
        other => panic!("expected present config, got {other:?}"),
    };
    assert!(matches!(config, ProviderConfig::Azure(_)));

    assert_eq!(provider.encode(), payload);
}
