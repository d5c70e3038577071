use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One record from an answer's edit history.
///
/// Histories are ordered oldest-first; a revision's "next version" is the
/// record that chronologically follows it, or the live answer text when the
/// revision is the most recent one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRevision {
    #[serde(rename = "texts")]
    pub text: String,
    pub edited_at: DateTime<Utc>,
    pub editor_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_name() {
        let json = r#"{"texts":"old answer","edited_at":"2024-05-01T09:00:00Z","editor_name":"admin"}"#;
        let rev: AnswerRevision = serde_json::from_str(json).unwrap();
        assert_eq!(rev.text, "old answer");
        assert_eq!(rev.editor_name, "admin");
    }
}
