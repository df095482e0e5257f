//! Canonical field ordering
//!
//! Both the admin response-detail view and the PDF export walk a response's
//! answers in the same order: the fixed per-category key list first, then any
//! unlisted keys in submission order. Keeping one policy here guarantees the
//! preview and the exported file never disagree.

use crate::{is_answered, Category, Response};
use serde_json::Value;

/// Field order for the evaluation-style forms.
///
/// Viewing feedback and standalone property evaluation share one question
/// set, so they share one canonical order.
const EVALUATION_ORDER: &[&str] = &[
    "property-rating",
    "property-feeling",
    "most-liked",
    "disliked-option",
    "disliked-details",
    "changes-option",
    "changes-details",
    "advertisement-accuracy",
    "price-realism",
    "realistic-price",
    "questions-option",
    "questions-details",
    "revisit",
    "purchase-offer",
    "name",
    "phone",
    "email",
    "call-time",
];

/// Field order for the needs-assessment form
const NEEDS_ASSESSMENT_ORDER: &[&str] = &[
    "previous-experience",
    "agent-involved",
    "current-agent-help",
    "viewed-properties",
    "search-time",
    "liked-property",
    "liked-property-details",
    "not-purchased-reason",
    "family-size-needs",
    "preferred-location",
    "transportation-needs",
    "urgency",
    "family-additional-comments",
    "budget",
    "cash-savings-time",
    "down-payment",
    "down-savings-time",
    "loan-type",
    "payment-other",
    "additional-comments",
];

/// The canonical display order of field keys for a category
pub fn field_order(category: Category) -> &'static [&'static str] {
    match category {
        Category::NeedsAssessment => NEEDS_ASSESSMENT_ORDER,
        Category::ViewingFeedback | Category::PropertyEvaluation => EVALUATION_ORDER,
    }
}

/// A response's answers in canonical display order.
///
/// Canonical keys with answered values come first, in the fixed per-category
/// order; remaining answered keys follow in the map's submission order.
/// Absent, null, and empty-string values are omitted entirely.
pub fn ordered_entries(response: &Response) -> Vec<(&str, &Value)> {
    let order = field_order(response.category);
    let mut entries = Vec::with_capacity(response.answers.len());

    for key in order {
        if let Some(value) = response.answers.get(*key) {
            if is_answered(value) {
                entries.push((*key, value));
            }
        }
    }

    for (key, value) in &response.answers {
        if !order.contains(&key.as_str()) && is_answered(value) {
            entries.push((key.as_str(), value));
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AnswerMap;
    use proptest::prelude::*;
    use serde_json::json;

    fn response(category: Category, pairs: &[(&str, Value)]) -> Response {
        let answers: AnswerMap = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        Response::new(category, None, answers)
    }

    #[test]
    fn test_canonical_keys_first_in_fixed_order() {
        // Submitted out of order; output follows the canonical list.
        let r = response(
            Category::PropertyEvaluation,
            &[
                ("name", json!("Kovács János")),
                ("property-rating", json!("5")),
                ("most-liked", json!("the garden")),
            ],
        );
        let keys: Vec<_> = ordered_entries(&r).iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["property-rating", "most-liked", "name"]);
    }

    #[test]
    fn test_unlisted_keys_appended_in_submission_order() {
        let r = response(
            Category::ViewingFeedback,
            &[
                ("zeta-extra", json!("z")),
                ("name", json!("X")),
                ("alpha-extra", json!("a")),
            ],
        );
        let keys: Vec<_> = ordered_entries(&r).iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["name", "zeta-extra", "alpha-extra"]);
    }

    #[test]
    fn test_empty_and_null_values_omitted() {
        let r = response(
            Category::NeedsAssessment,
            &[
                ("budget", json!("")),
                ("urgency", json!(null)),
                ("search-time", json!("3 hónapja")),
                ("mystery", json!("")),
            ],
        );
        let keys: Vec<_> = ordered_entries(&r).iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["search-time"]);
    }

    #[test]
    fn test_needs_assessment_uses_its_own_order() {
        let r = response(
            Category::NeedsAssessment,
            &[
                ("budget", json!("60M")),
                ("previous-experience", json!("yes")),
            ],
        );
        let keys: Vec<_> = ordered_entries(&r).iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["previous-experience", "budget"]);
    }

    #[test]
    fn test_deterministic_for_fixed_map() {
        let r = response(
            Category::PropertyEvaluation,
            &[("revisit", json!("yes")), ("custom", json!("x"))],
        );
        let first: Vec<_> = ordered_entries(&r).iter().map(|(k, _)| *k).collect();
        for _ in 0..10 {
            let again: Vec<_> = ordered_entries(&r).iter().map(|(k, _)| *k).collect();
            assert_eq!(again, first);
        }
    }

    proptest! {
        // Every answered key appears exactly once; canonical keys precede
        // unlisted keys and keep the canonical relative order.
        #[test]
        fn prop_ordering_invariants(
            canonical_mask in proptest::collection::vec(any::<bool>(), 18),
            extras in proptest::collection::vec("[a-z]{1,8}", 0..5),
        ) {
            let order = field_order(Category::PropertyEvaluation);
            let mut pairs: Vec<(&str, Value)> = Vec::new();
            for (key, keep) in order.iter().zip(&canonical_mask) {
                if *keep {
                    pairs.push((key, json!("v")));
                }
            }
            let extra_keys: Vec<String> =
                extras.iter().map(|e| format!("x-{e}")).collect();
            let mut seen = std::collections::HashSet::new();
            let answers: AnswerMap = pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .chain(extra_keys.iter().filter(|k| seen.insert((*k).clone())).map(|k| (k.clone(), json!("e"))))
                .collect();
            let expected_len = answers.len();
            let r = Response::new(Category::PropertyEvaluation, None, answers);

            let entries = ordered_entries(&r);
            prop_assert_eq!(entries.len(), expected_len);

            let keys: Vec<&str> = entries.iter().map(|(k, _)| *k).collect();
            let mut unique = std::collections::HashSet::new();
            for k in &keys {
                prop_assert!(unique.insert(*k), "duplicate key {}", k);
            }

            // Canonical prefix preserves canonical relative order.
            let canonical: Vec<&str> = keys
                .iter()
                .copied()
                .filter(|k| order.contains(k))
                .collect();
            let expected_canonical: Vec<&str> = order
                .iter()
                .copied()
                .filter(|k| r.answers.contains_key(*k))
                .collect();
            prop_assert_eq!(canonical, expected_canonical);

            // No unlisted key may precede a canonical key.
            if let Some(first_extra) = keys.iter().position(|k| !order.contains(k)) {
                prop_assert!(keys[first_extra..].iter().all(|k| !order.contains(k)));
            }
        }
    }
}
