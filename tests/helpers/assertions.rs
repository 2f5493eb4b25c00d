// Test Assertion Helpers
//
// Checks on the JSON envelope returned by every endpoint.

use serde_json::Value;

/// Assert the body is a success envelope with the given message and return
/// its `data` array
///
/// # Panics
/// If `message` differs or `data` is not an array
pub fn assert_envelope<'a>(body: &'a Value, message: &str) -> &'a Vec<Value> {
    assert_eq!(
        body["message"].as_str(),
        Some(message),
        "Unexpected envelope message in {}",
        body
    );
    body["data"]
        .as_array()
        .unwrap_or_else(|| panic!("Expected `data` to be an array in {}", body))
}

/// Assert the body is an error envelope carrying `message`
pub fn assert_error_envelope(body: &Value, status: &str, message: &str) {
    assert_eq!(body["status"].as_str(), Some(status), "in {}", body);
    assert_eq!(body["message"].as_str(), Some(message), "in {}", body);
    assert!(body.get("data").is_none(), "Error envelope must not carry data");
}

/// Assert an object has exactly the given keys
pub fn assert_fields(record: &Value, expected: &[&str]) {
    let object = record
        .as_object()
        .unwrap_or_else(|| panic!("Expected a JSON object, got {}", record));

    let mut actual: Vec<&str> = object.keys().map(String::as_str).collect();
    actual.sort_unstable();
    let mut expected = expected.to_vec();
    expected.sort_unstable();

    assert_eq!(actual, expected, "Field set mismatch for {}", record);
}
