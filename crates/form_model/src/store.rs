//! Store interfaces
//!
//! The persistent store is an external collaborator; the export pipeline only
//! consumes these read interfaces. `MemoryStore` backs tests and demos.

use crate::{Category, FormModelError, Listing, Response, Result};
use uuid::Uuid;

/// Read access to listings
pub trait ListingSource {
    /// Find the listing published under a public hash, if any
    fn find_by_hash(&self, hash: &str) -> Result<Option<Listing>>;

    /// All listings, newest first
    fn all(&self) -> Result<Vec<Listing>>;
}

/// Access to submitted responses
pub trait ResponseStore {
    /// Responses matching the optional category and listing-hash filters,
    /// newest submission first
    fn query(&self, category: Option<Category>, listing_hash: Option<&str>)
        -> Result<Vec<Response>>;

    /// Record a new submission
    fn insert(&mut self, response: Response) -> Result<()>;

    /// Delete a response by identifier
    fn delete(&mut self, id: &Uuid) -> Result<()>;
}

/// In-memory store for tests and demos
#[derive(Debug, Default)]
pub struct MemoryStore {
    listings: Vec<Listing>,
    responses: Vec<Response>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listing
    pub fn add_listing(&mut self, listing: Listing) {
        self.listings.push(listing);
    }

    pub fn listing_count(&self) -> usize {
        self.listings.len()
    }

    pub fn response_count(&self) -> usize {
        self.responses.len()
    }
}

impl ListingSource for MemoryStore {
    fn find_by_hash(&self, hash: &str) -> Result<Option<Listing>> {
        Ok(self.listings.iter().find(|l| l.hash == hash).cloned())
    }

    fn all(&self) -> Result<Vec<Listing>> {
        let mut listings = self.listings.clone();
        listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listings)
    }
}

impl ResponseStore for MemoryStore {
    fn query(
        &self,
        category: Option<Category>,
        listing_hash: Option<&str>,
    ) -> Result<Vec<Response>> {
        let mut matches: Vec<Response> = self
            .responses
            .iter()
            .filter(|r| category.is_none_or(|c| r.category == c))
            .filter(|r| listing_hash.is_none_or(|h| r.listing_hash.as_deref() == Some(h)))
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(matches)
    }

    fn insert(&mut self, response: Response) -> Result<()> {
        self.responses.push(response);
        Ok(())
    }

    fn delete(&mut self, id: &Uuid) -> Result<()> {
        let before = self.responses.len();
        self.responses.retain(|r| r.id != *id);
        if self.responses.len() == before {
            return Err(FormModelError::ResponseNotFound(*id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AnswerMap;
    use chrono::{Duration, Utc};

    fn listing(location: &str, age_minutes: i64) -> Listing {
        let mut l = Listing::new(location, 1_000_000, "https://example.com", "agent@example.com");
        l.created_at = Utc::now() - Duration::minutes(age_minutes);
        l
    }

    fn feedback(listing_hash: Option<&str>, age_minutes: i64) -> Response {
        let mut r = Response::new(
            Category::ViewingFeedback,
            listing_hash.map(str::to_string),
            AnswerMap::new(),
        );
        r.submitted_at = Utc::now() - Duration::minutes(age_minutes);
        r
    }

    #[test]
    fn test_find_by_hash() {
        let mut store = MemoryStore::new();
        let l = listing("Budapest I.", 0);
        let hash = l.hash.clone();
        store.add_listing(l);

        assert!(store.find_by_hash(&hash).unwrap().is_some());
        assert!(store.find_by_hash("missing").unwrap().is_none());
    }

    #[test]
    fn test_all_listings_newest_first() {
        let mut store = MemoryStore::new();
        store.add_listing(listing("old", 60));
        store.add_listing(listing("new", 1));

        let all = store.all().unwrap();
        assert_eq!(all[0].location, "new");
        assert_eq!(all[1].location, "old");
    }

    #[test]
    fn test_query_filters_and_orders() {
        let mut store = MemoryStore::new();
        store.insert(feedback(Some("aaaa"), 30)).unwrap();
        store.insert(feedback(Some("bbbb"), 10)).unwrap();
        store.insert(feedback(Some("aaaa"), 5)).unwrap();
        store
            .insert(Response::new(Category::NeedsAssessment, None, AnswerMap::new()))
            .unwrap();

        let by_listing = store.query(None, Some("aaaa")).unwrap();
        assert_eq!(by_listing.len(), 2);
        assert!(by_listing[0].submitted_at > by_listing[1].submitted_at);

        let by_category = store.query(Some(Category::NeedsAssessment), None).unwrap();
        assert_eq!(by_category.len(), 1);

        assert_eq!(store.query(None, None).unwrap().len(), 4);
    }

    #[test]
    fn test_delete() {
        let mut store = MemoryStore::new();
        let r = feedback(None, 0);
        let id = r.id;
        store.insert(r).unwrap();

        store.delete(&id).unwrap();
        assert_eq!(store.response_count(), 0);
        assert!(store.delete(&id).is_err());
    }
}
