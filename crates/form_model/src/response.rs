//! Submitted form responses
//!
//! A response carries an open-ended answer map. Field keys are drawn from a
//! known per-category vocabulary, but the map is not schema-enforced: unknown
//! keys must be tolerated, never rejected.

use crate::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Insertion-ordered map from field key to submitted answer.
///
/// `serde_json::Map` with the `preserve_order` feature keeps the submission
/// order of unknown keys stable, which the ordering policy relies on.
pub type AnswerMap = serde_json::Map<String, Value>;

/// A submitted form response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// Internal identifier
    pub id: Uuid,
    /// Which form produced this response
    pub category: Category,
    /// Public hash of the linked listing, absent for category-agnostic forms
    pub listing_hash: Option<String>,
    /// Field key to answer value, in submission order
    pub answers: AnswerMap,
    /// Submission timestamp
    pub submitted_at: DateTime<Utc>,
}

impl Response {
    /// Create a new response submitted now
    pub fn new(category: Category, listing_hash: Option<String>, answers: AnswerMap) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            listing_hash,
            answers,
            submitted_at: Utc::now(),
        }
    }

    /// Look up a string answer by key
    pub fn answer_str(&self, key: &str) -> Option<&str> {
        self.answers.get(key).and_then(Value::as_str)
    }

    /// The respondent's name from the contact fields, if submitted
    pub fn respondent_name(&self) -> Option<&str> {
        self.answer_str("name").filter(|s| !s.is_empty())
    }
}

/// Whether an answer value counts as present for display purposes.
///
/// Absent, null, and empty-string answers are all treated as "not answered"
/// and are omitted from ordered output.
pub fn is_answered(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn answers(pairs: &[(&str, Value)]) -> AnswerMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_is_answered() {
        assert!(!is_answered(&Value::Null));
        assert!(!is_answered(&json!("")));
        assert!(is_answered(&json!("yes")));
        assert!(is_answered(&json!(0)));
        assert!(is_answered(&json!(false)));
        assert!(is_answered(&json!(["a", "b"])));
    }

    #[test]
    fn test_respondent_name() {
        let r = Response::new(
            Category::PropertyEvaluation,
            None,
            answers(&[("name", json!("Kovács János"))]),
        );
        assert_eq!(r.respondent_name(), Some("Kovács János"));

        let r = Response::new(Category::PropertyEvaluation, None, answers(&[("name", json!(""))]));
        assert_eq!(r.respondent_name(), None);

        let r = Response::new(Category::PropertyEvaluation, None, AnswerMap::new());
        assert_eq!(r.respondent_name(), None);
    }

    #[test]
    fn test_unknown_keys_survive_serde() {
        let r = Response::new(
            Category::ViewingFeedback,
            Some("ab12cd34ef".to_string()),
            answers(&[("mystery-field", json!("kept")), ("name", json!("X"))]),
        );
        let json = serde_json::to_string(&r).unwrap();
        let back: Response = serde_json::from_str(&json).unwrap();
        assert_eq!(back.answer_str("mystery-field"), Some("kept"));
        let keys: Vec<_> = back.answers.keys().collect();
        assert_eq!(keys, vec!["mystery-field", "name"]);
    }
}
