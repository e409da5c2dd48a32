//! Inventory query layer
//!
//! Loads the full car collection once and performs client-side
//! filtering over it. Filtering always recomputes from the snapshot, so
//! it is idempotent and order-preserving; it never goes back to the
//! backend.

use std::sync::Arc;

use shared::models::Car;

use crate::ClientResult;
use crate::repository::CarRepository;

/// Case-insensitive substring match over title, description, and each
/// tag value. The empty needle matches everything.
fn matches_term(car: &Car, needle: &str) -> bool {
    car.title.to_lowercase().contains(needle)
        || car.description.to_lowercase().contains(needle)
        || car
            .tags
            .values()
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Client-side view over the full car collection
pub struct InventoryQueryEngine<R> {
    repository: Arc<R>,
    /// Full collection as last fetched, in server order
    snapshot: Vec<Car>,
    /// Derived filtered view, recomputed from the snapshot
    filtered: Vec<Car>,
}

impl<R: CarRepository> InventoryQueryEngine<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            snapshot: Vec::new(),
            filtered: Vec::new(),
        }
    }

    /// Fetch the full collection and reset the filtered view to it.
    /// A failed fetch leaves the previous snapshot in place.
    pub async fn load(&mut self) -> ClientResult<()> {
        let cars = self.repository.get_all().await?;
        tracing::debug!(count = cars.len(), "inventory snapshot loaded");
        self.filtered = cars.clone();
        self.snapshot = cars;
        Ok(())
    }

    /// Filter the snapshot by a search term; returns the matching
    /// subset in snapshot order. An empty term matches everything.
    pub fn search(&mut self, term: &str) -> &[Car] {
        let needle = term.to_lowercase();
        self.filtered = self
            .snapshot
            .iter()
            .filter(|car| matches_term(car, &needle))
            .cloned()
            .collect();
        &self.filtered
    }

    /// Drop a car from both views after a successful delete elsewhere,
    /// without a re-fetch. `load` remains the full-reload fallback.
    pub fn remove_locally(&mut self, car_id: &str) {
        self.snapshot.retain(|car| car.id != car_id);
        self.filtered.retain(|car| car.id != car_id);
    }

    /// Full collection as last fetched.
    pub fn snapshot(&self) -> &[Car] {
        &self.snapshot
    }

    /// Current filtered view.
    pub fn results(&self) -> &[Car] {
        &self.filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::CarTags;

    fn car(title: &str, description: &str, company: &str) -> Car {
        Car {
            id: title.to_lowercase(),
            title: title.to_string(),
            description: description.to_string(),
            tags: CarTags {
                car_type: "sedan".to_string(),
                company: company.to_string(),
                dealer: "City Motors".to_string(),
            },
            images: Vec::new(),
        }
    }

    #[test]
    fn test_match_is_case_insensitive_across_fields() {
        let corolla = car("Corolla", "One careful owner", "Toyota");

        assert!(matches_term(&corolla, "corolla"));
        assert!(matches_term(&corolla, "careful"));
        assert!(matches_term(&corolla, "toyota"));
        assert!(matches_term(&corolla, "city motors"));
        assert!(!matches_term(&corolla, "honda"));
    }

    #[test]
    fn test_empty_needle_matches_everything() {
        assert!(matches_term(&car("Corolla", "", "Toyota"), ""));
    }
}
