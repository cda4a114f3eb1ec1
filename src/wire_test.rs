use super::*;
use crate::action::{Shape, mint_id};
use crate::geometry::RelativePoint;

fn sample_action() -> AnnotationAction {
    AnnotationAction {
        id: mint_id("p1", 100),
        author: "p1".to_owned(),
        color: "#FF0000".to_owned(),
        shape: Shape::Pencil {
            width: 0.003,
            points: vec![RelativePoint::new(0.1, 0.2)],
        },
    }
}

// --- Encoding ---

#[test]
fn annotate_encodes_with_type_tag() {
    let json = serde_json::to_value(WireMessage::Annotate { action: sample_action() }).unwrap();
    assert_eq!(json["type"], "annotate");
    assert_eq!(json["action"]["tool"], "pencil");
    assert_eq!(json["action"]["id"], "p1-100");
}

#[test]
fn clear_encodes_as_bare_tag() {
    let encoded = encode_message(&WireMessage::ClearAnnotations).unwrap();
    assert_eq!(encoded, r#"{"type":"clearAnnotations"}"#);
}

#[test]
fn selective_clear_encodes_camel_case() {
    let json = serde_json::to_value(WireMessage::ClearAnnotationsByType {
        author_type: AuthorScope::Students,
        author_identity: "tutor-1".to_owned(),
    })
    .unwrap();
    assert_eq!(json["type"], "clearAnnotationsByType");
    assert_eq!(json["authorType"], "students");
    assert_eq!(json["authorIdentity"], "tutor-1");
}

#[test]
fn delete_encodes_id() {
    let json =
        serde_json::to_value(WireMessage::DeleteAnnotation { id: "p1-100".to_owned() }).unwrap();
    assert_eq!(json["type"], "deleteAnnotation");
    assert_eq!(json["id"], "p1-100");
}

#[test]
fn sync_encodes_history_and_step() {
    let json = serde_json::to_value(WireMessage::SyncAnnotations {
        history: vec![sample_action()],
        history_step: 1,
    })
    .unwrap();
    assert_eq!(json["type"], "syncAnnotations");
    assert_eq!(json["historyStep"], 1);
    assert_eq!(json["history"][0]["author"], "p1");
}

// --- Decoding ---

#[test]
fn round_trip_preserves_every_variant() {
    let messages = [
        WireMessage::Annotate { action: sample_action() },
        WireMessage::ClearAnnotations,
        WireMessage::ClearAnnotationsByType {
            author_type: AuthorScope::Teacher,
            author_identity: "tutor-1".to_owned(),
        },
        WireMessage::DeleteAnnotation { id: "p1-100".to_owned() },
        WireMessage::SyncAnnotations { history: vec![sample_action()], history_step: 1 },
    ];
    for message in messages {
        let encoded = encode_message(&message).unwrap();
        let decoded = decode_message(&encoded).unwrap();
        assert_eq!(decoded, message);
    }
}

#[test]
fn decode_rejects_invalid_json() {
    let err = decode_message("{not json").unwrap_err();
    assert!(matches!(err, WireError::Decode(_)));
}

#[test]
fn decode_rejects_unknown_type() {
    let err = decode_message(r#"{"type":"reticulateSplines"}"#).unwrap_err();
    assert!(matches!(err, WireError::Decode(_)));
}

#[test]
fn decode_rejects_missing_fields() {
    assert!(decode_message(r#"{"type":"deleteAnnotation"}"#).is_err());
    assert!(decode_message(r#"{"type":"annotate"}"#).is_err());
}

#[test]
fn decode_rejects_unknown_author_scope() {
    let err = decode_message(
        r#"{"type":"clearAnnotationsByType","authorType":"ghosts","authorIdentity":"x"}"#,
    )
    .unwrap_err();
    assert!(matches!(err, WireError::Decode(_)));
}

#[test]
fn author_scope_names_are_lowercase() {
    assert_eq!(serde_json::to_value(AuthorScope::All).unwrap(), "all");
    assert_eq!(serde_json::to_value(AuthorScope::Teacher).unwrap(), "teacher");
    assert_eq!(serde_json::to_value(AuthorScope::Students).unwrap(), "students");
}
