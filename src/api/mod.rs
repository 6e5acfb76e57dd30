mod favorites;
mod meals;

pub use favorites::FavoritesApi;
pub use meals::MealApi;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::model::{RawCategory, RawMeal};

/// Read-only surface of the meal lookup service.
///
/// The loader is generic over this trait so the fetch/refresh flow can be
/// exercised without a live service.
#[async_trait]
pub trait MealSource: Send + Sync {
    /// List every browsable category.
    async fn categories(&self) -> Result<Vec<RawCategory>, ApiError>;

    /// Fetch one randomly selected meal.
    async fn random_meal(&self) -> Result<Option<RawMeal>, ApiError>;

    /// Fetch a batch of randomly selected meals.
    async fn random_meals(&self, count: usize) -> Result<Vec<RawMeal>, ApiError>;

    /// List the meals belonging to a category.
    async fn filter_by_category(&self, category: &str) -> Result<Vec<RawMeal>, ApiError>;

    /// Look a meal up by id.
    async fn meal_by_id(&self, id: &str) -> Result<Option<RawMeal>, ApiError>;
}
