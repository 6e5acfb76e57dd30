use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::api::MealSource;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::model::{RawCategory, RawMeal};

/// Wire envelope for meal list endpoints.
///
/// The service signals "no results" with an explicit `null` list.
#[derive(Debug, Deserialize)]
struct MealsEnvelope {
    meals: Option<Vec<RawMeal>>,
}

#[derive(Debug, Deserialize)]
struct CategoriesEnvelope {
    #[serde(default)]
    categories: Option<Vec<RawCategory>>,
}

/// Client for the public meal lookup service.
#[derive(Debug, Clone)]
pub struct MealApi {
    client: Client,
    base_url: String,
}

impl MealApi {
    /// Create a client from configuration
    pub fn new(config: &AppConfig) -> Self {
        Self::with_base_url(
            config.meal_api_url.clone(),
            Duration::from_secs(config.timeout),
        )
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mealdeck/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        MealApi {
            client,
            base_url: base_url.into(),
        }
    }

    /// List every browsable category.
    pub async fn categories(&self) -> Result<Vec<RawCategory>, ApiError> {
        let envelope: CategoriesEnvelope = self.get_json("categories.php", &[]).await?;
        Ok(envelope.categories.unwrap_or_default())
    }

    /// Fetch one randomly selected meal.
    pub async fn random_meal(&self) -> Result<Option<RawMeal>, ApiError> {
        let meals = self.get_meals("random.php", &[]).await?;
        Ok(meals.into_iter().next())
    }

    /// Fetch `count` randomly selected meals.
    ///
    /// The random endpoint returns one meal per call, so the batch is `count`
    /// concurrent requests joined at a single point. Any sub-fetch failure
    /// fails the whole batch.
    pub async fn random_meals(&self, count: usize) -> Result<Vec<RawMeal>, ApiError> {
        let mut handles = Vec::with_capacity(count);
        for _ in 0..count {
            let api = self.clone();
            handles.push(tokio::spawn(async move { api.random_meal().await }));
        }

        let mut meals = Vec::with_capacity(count);
        for handle in handles {
            if let Some(meal) = handle.await?? {
                meals.push(meal);
            }
        }
        Ok(meals)
    }

    /// List the meals belonging to a category.
    ///
    /// Filter results are partial records (id, title, thumbnail); the full
    /// record comes from [`MealApi::meal_by_id`].
    pub async fn filter_by_category(&self, category: &str) -> Result<Vec<RawMeal>, ApiError> {
        self.get_meals("filter.php", &[("c", category)]).await
    }

    /// Look a meal up by id. `None` when the service has no such meal.
    pub async fn meal_by_id(&self, id: &str) -> Result<Option<RawMeal>, ApiError> {
        let meals = self.get_meals("lookup.php", &[("i", id)]).await?;
        Ok(meals.into_iter().next())
    }

    async fn get_meals(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<RawMeal>, ApiError> {
        let envelope: MealsEnvelope = self.get_json(path, query).await?;
        Ok(envelope.meals.unwrap_or_default())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status().as_u16(),
                url: response.url().to_string(),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl MealSource for MealApi {
    async fn categories(&self) -> Result<Vec<RawCategory>, ApiError> {
        MealApi::categories(self).await
    }

    async fn random_meal(&self) -> Result<Option<RawMeal>, ApiError> {
        MealApi::random_meal(self).await
    }

    async fn random_meals(&self, count: usize) -> Result<Vec<RawMeal>, ApiError> {
        MealApi::random_meals(self, count).await
    }

    async fn filter_by_category(&self, category: &str) -> Result<Vec<RawMeal>, ApiError> {
        MealApi::filter_by_category(self, category).await
    }

    async fn meal_by_id(&self, id: &str) -> Result<Option<RawMeal>, ApiError> {
        MealApi::meal_by_id(self, id).await
    }
}
