use super::*;

#[test]
fn sneakers_endpoint_formats_numeric_key() {
    assert_eq!(sneakers_endpoint("42"), "/user-sneakers/42");
}

#[test]
fn sneakers_endpoint_formats_username_key() {
    assert_eq!(sneakers_endpoint("jordan"), "/user-sneakers/jordan");
}

#[test]
fn add_note_endpoint_formats_expected_path() {
    assert_eq!(add_note_endpoint(7), "/add-note-to-user-sneaker/7");
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("tok-abc"), "Bearer tok-abc");
}

#[test]
fn note_payload_sends_note_as_is() {
    assert_eq!(
        note_payload("  spaced note "),
        serde_json::json!({ "note": "  spaced note " })
    );
}

#[test]
fn delete_payload_carries_both_identifiers() {
    assert_eq!(
        delete_payload(42, 7),
        serde_json::json!({ "userId": 42, "sneakerId": 7 })
    );
}

#[test]
fn delete_endpoint_is_fixed_path() {
    assert_eq!(DELETE_ENDPOINT, "/delete-sneaker");
}

#[test]
fn list_failed_message_formats_status() {
    assert_eq!(list_failed_message(502), "sneaker list request failed: 502");
}

#[test]
fn update_failed_message_formats_status() {
    assert_eq!(update_failed_message(401), "note update failed: 401");
}

#[test]
fn delete_failed_message_formats_status() {
    assert_eq!(delete_failed_message(403), "delete request failed: 403");
}
