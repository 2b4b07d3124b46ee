use serde::{Deserialize, Serialize};

/// Response body for `POST /contact`.
///
/// `message` carries a human readable rejection reason when `success` is
/// false. The server may omit it, in which case the client falls back to a
/// localized default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_optional() {
        let ok: ContactResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(ok.success);
        assert_eq!(ok.message, None);

        let rejected: ContactResponse =
            serde_json::from_str(r#"{"success":false,"message":"X"}"#).unwrap();
        assert!(!rejected.success);
        assert_eq!(rejected.message.as_deref(), Some("X"));
    }
}
