//! Property listing records
//!
//! Listings are owned by the external store; the export pipeline only reads
//! them. The short random `hash` is the only key exposed in public form URLs,
//! never the internal identifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A property listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    /// Internal identifier (never public)
    pub id: Uuid,
    /// Free-text location, e.g. "Budapest II., Pasaréti út"
    pub location: String,
    /// Asking price in whole currency units (HUF)
    pub price: i64,
    /// External reference URL for the advertisement
    pub reference_url: String,
    /// Short opaque token used as the public lookup key
    pub hash: String,
    /// Identity of the agent who created the listing
    pub created_by: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Listing {
    /// Create a new listing with a fresh id and public hash
    pub fn new(
        location: impl Into<String>,
        price: i64,
        reference_url: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            location: location.into(),
            price,
            reference_url: reference_url.into(),
            hash: generate_hash(),
            created_by: created_by.into(),
            created_at: Utc::now(),
        }
    }

    /// Public form URL path for this listing's feedback form
    pub fn form_path(&self, category_segment: &str) -> String {
        format!("/form/{}/{}", category_segment, self.hash)
    }
}

/// Generate a short opaque public token.
///
/// Ten hex characters of a v4 UUID: unguessable enough for shareable form
/// links while staying short enough to type.
fn generate_hash() -> String {
    let simple = Uuid::new_v4().simple().to_string();
    simple[..10].to_string()
}
