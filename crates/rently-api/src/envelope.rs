// The backend wraps every response as `{statusCode, message, data}`.
//
// The envelope's `statusCode` is authoritative even when the HTTP layer
// says 200 — some middleware paths answer auth failures that way.

use serde::Deserialize;

/// The `{statusCode, message, data}` wrapper every backend response uses.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub status_code: u16,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

/// Whether a profile-probe envelope represents a live session.
///
/// A `statusCode` of 401 is the one shape that means "signed out";
/// every other envelope counts as valid.
pub fn profile_response_is_valid(status_code: u16) -> bool {
    status_code != 401
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_profile_is_invalid() {
        assert!(!profile_response_is_valid(401));
    }

    #[test]
    fn any_other_status_is_valid() {
        assert!(profile_response_is_valid(200));
        assert!(profile_response_is_valid(201));
        assert!(profile_response_is_valid(500));
        assert!(profile_response_is_valid(0));
    }

    #[test]
    fn envelope_deserializes_without_message_or_data() {
        let env: Envelope<Vec<String>> =
            serde_json::from_str(r#"{"statusCode": 200}"#).expect("envelope should parse");
        assert_eq!(env.status_code, 200);
        assert!(env.message.is_none());
        assert!(env.data.is_none());
    }

    #[test]
    fn envelope_carries_data() {
        let env: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"statusCode": 200, "message": "OK", "data": [1, 2]}"#)
                .expect("envelope should parse");
        assert_eq!(env.data, Some(vec![1, 2]));
        assert_eq!(env.message.as_deref(), Some("OK"));
    }
}
