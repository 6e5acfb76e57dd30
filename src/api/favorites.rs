use std::time::Duration;

use log::debug;
use reqwest::Client;

use crate::api::MealSource;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::model::{Favorite, FavoriteSummary, NewFavorite, Recipe};
use crate::normalize::normalize;

/// Client for the favorites backend.
///
/// Every operation takes the user id explicitly; the auth provider owns the
/// session and this crate never reads ambient identity state.
#[derive(Debug, Clone)]
pub struct FavoritesApi {
    client: Client,
    base_url: String,
}

impl FavoritesApi {
    /// Create a client from configuration
    pub fn new(config: &AppConfig) -> Self {
        Self::with_base_url(
            config.favorites_api_url.clone(),
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

        FavoritesApi {
            client,
            base_url: base_url.into(),
        }
    }

    /// List a user's saved favorites.
    pub async fn list(&self, user_id: &str) -> Result<Vec<Favorite>, ApiError> {
        let url = format!("{}/favorites/{}", self.base_url, user_id);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status().as_u16(),
                url: response.url().to_string(),
            });
        }
        Ok(response.json().await?)
    }

    /// Save a favorite carrying its denormalized display fields.
    pub async fn add(&self, favorite: &NewFavorite) -> Result<(), ApiError> {
        let url = format!("{}/favorites", self.base_url);
        debug!("POST {} recipe {}", url, favorite.recipe_id);

        let response = self.client.post(&url).json(favorite).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status().as_u16(),
                url: response.url().to_string(),
            });
        }
        Ok(())
    }

    /// Remove the favorite keyed by `(user_id, recipe_id)`.
    pub async fn remove(&self, user_id: &str, recipe_id: i64) -> Result<(), ApiError> {
        let url = format!("{}/favorites/{}/{}", self.base_url, user_id, recipe_id);
        debug!("DELETE {}", url);

        let response = self.client.delete(&url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status().as_u16(),
                url: response.url().to_string(),
            });
        }
        Ok(())
    }

    /// Whether the user has saved the given recipe.
    pub async fn is_saved(&self, user_id: &str, recipe_id: i64) -> Result<bool, ApiError> {
        let favorites = self.list(user_id).await?;
        Ok(favorites
            .iter()
            .any(|favorite| favorite.recipe_id == recipe_id))
    }

    /// Flip the saved state of a recipe and return the new state.
    ///
    /// When `currently_saved` is true this issues a removal, otherwise an
    /// addition carrying the denormalized summary. Concurrent toggles on the
    /// same recipe are not guarded; the last request wins. On error the
    /// caller keeps whatever flag it had.
    pub async fn toggle(
        &self,
        user_id: &str,
        summary: &FavoriteSummary,
        currently_saved: bool,
    ) -> Result<bool, ApiError> {
        if currently_saved {
            self.remove(user_id, summary.recipe_id).await?;
            Ok(false)
        } else {
            self.add(&NewFavorite::from_summary(user_id, summary)).await?;
            Ok(true)
        }
    }

    /// Materialize a user's favorites as full display recipes.
    ///
    /// Each bookmark is joined against the lookup service; when the lookup
    /// misses (or errors) the stored denormalized fields stand in, so the
    /// favorites list always renders something for every row.
    pub async fn favorite_recipes<S: MealSource>(
        &self,
        source: &S,
        user_id: &str,
    ) -> Result<Vec<Recipe>, ApiError> {
        let favorites = self.list(user_id).await?;

        let mut recipes = Vec::with_capacity(favorites.len());
        for favorite in favorites {
            let full = match source.meal_by_id(&favorite.recipe_id.to_string()).await {
                Ok(raw) => raw.as_ref().and_then(normalize),
                Err(err) => {
                    debug!("lookup for favorite {} failed: {}", favorite.recipe_id, err);
                    None
                }
            };
            recipes.push(full.unwrap_or_else(|| favorite.to_recipe()));
        }
        Ok(recipes)
    }
}
