//! Form categories
//!
//! Every submitted response is tagged with exactly one category from a closed
//! set. The category selects both the display label and the canonical field
//! order, so it is a proper enum rather than a free-form string tag.

use crate::{FormModelError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of form categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Buyer needs-assessment form (not tied to a listing)
    NeedsAssessment,
    /// Feedback collected after a property viewing
    ViewingFeedback,
    /// Standalone property evaluation form
    PropertyEvaluation,
}

impl Category {
    /// All categories, in admin display order
    pub const ALL: [Category; 3] = [
        Category::NeedsAssessment,
        Category::ViewingFeedback,
        Category::PropertyEvaluation,
    ];

    /// The stable kebab-case tag used in stored records and URLs
    pub fn tag(&self) -> &'static str {
        match self {
            Category::NeedsAssessment => "needs-assessment",
            Category::ViewingFeedback => "viewing-feedback",
            Category::PropertyEvaluation => "property-evaluation",
        }
    }

    /// Parse a stored tag into a category
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "needs-assessment" => Ok(Category::NeedsAssessment),
            "viewing-feedback" => Ok(Category::ViewingFeedback),
            "property-evaluation" => Ok(Category::PropertyEvaluation),
            other => Err(FormModelError::UnknownCategory(other.to_string())),
        }
    }

    /// Human-readable title used in the admin UI and exported documents
    pub fn display_label(&self) -> &'static str {
        match self {
            Category::NeedsAssessment => "Igényfelmérés",
            Category::ViewingFeedback => "Mutatás értékelés",
            Category::PropertyEvaluation => "Ingatlan értékelés",
        }
    }

    /// Whether responses of this category reference a listing
    pub fn is_listing_bound(&self) -> bool {
        !matches!(self, Category::NeedsAssessment)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_tag(category.tag()).unwrap(), category);
        }
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&Category::PropertyEvaluation).unwrap();
        assert_eq!(json, "\"property-evaluation\"");

        let parsed: Category = serde_json::from_str("\"viewing-feedback\"").unwrap();
        assert_eq!(parsed, Category::ViewingFeedback);
    }

    #[test]
    fn test_unknown_tag_rejected() {
        assert!(Category::from_tag("guestbook").is_err());
    }

    #[test]
    fn test_display_labels_non_empty() {
        for category in Category::ALL {
            assert!(!category.display_label().is_empty());
        }
    }

    #[test]
    fn test_listing_binding() {
        assert!(!Category::NeedsAssessment.is_listing_bound());
        assert!(Category::ViewingFeedback.is_listing_bound());
        assert!(Category::PropertyEvaluation.is_listing_bound());
    }
}
