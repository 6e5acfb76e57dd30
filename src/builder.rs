use std::time::Duration;

use crate::api::{FavoritesApi, MealApi};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::loader::HomeLoader;

/// Facade bundling the two service clients behind one configuration.
pub struct MealDeck {
    meals: MealApi,
    favorites: FavoritesApi,
    batch_size: usize,
}

impl MealDeck {
    /// Creates a new builder for configuring the clients
    ///
    /// # Example
    /// ```
    /// use mealdeck::MealDeck;
    ///
    /// let deck = MealDeck::builder()
    ///     .favorites_api_url("https://favorites.example.com/api")
    ///     .build();
    /// ```
    pub fn builder() -> MealDeckBuilder {
        MealDeckBuilder::default()
    }

    /// Build the facade from explicit configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        MealDeck {
            meals: MealApi::new(config),
            favorites: FavoritesApi::new(config),
            batch_size: config.random_batch_size,
        }
    }

    /// Build the facade from config file / environment, falling back to
    /// defaults (see [`AppConfig::load`]).
    pub fn from_env() -> Result<Self, ApiError> {
        Ok(Self::from_config(&AppConfig::load()?))
    }

    /// The meal lookup client.
    pub fn meals(&self) -> &MealApi {
        &self.meals
    }

    /// The favorites client.
    pub fn favorites(&self) -> &FavoritesApi {
        &self.favorites
    }

    /// A fresh loader for one home screen session.
    pub fn home_loader(&self) -> HomeLoader<MealApi> {
        HomeLoader::new(self.meals.clone(), self.batch_size)
    }
}

/// Builder for configuring the clients without a config file
#[derive(Debug, Default)]
pub struct MealDeckBuilder {
    meal_api_url: Option<String>,
    favorites_api_url: Option<String>,
    timeout: Option<Duration>,
    random_batch_size: Option<usize>,
}

impl MealDeckBuilder {
    /// Override the meal lookup service base URL
    ///
    /// # Example
    /// ```
    /// use mealdeck::MealDeck;
    ///
    /// let deck = MealDeck::builder()
    ///     .meal_api_url("https://www.themealdb.com/api/json/v1/1")
    ///     .build();
    /// ```
    pub fn meal_api_url(mut self, url: impl Into<String>) -> Self {
        self.meal_api_url = Some(url.into());
        self
    }

    /// Override the favorites backend base URL
    pub fn favorites_api_url(mut self, url: impl Into<String>) -> Self {
        self.favorites_api_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use mealdeck::MealDeck;
    /// use std::time::Duration;
    ///
    /// let deck = MealDeck::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .build();
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set how many random recipes the initial home load fetches
    pub fn random_batch_size(mut self, count: usize) -> Self {
        self.random_batch_size = Some(count);
        self
    }

    /// Build the facade, using defaults for everything not set
    pub fn build(self) -> MealDeck {
        let mut config = AppConfig::default();
        if let Some(url) = self.meal_api_url {
            config.meal_api_url = url;
        }
        if let Some(url) = self.favorites_api_url {
            config.favorites_api_url = url;
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout.as_secs();
        }
        if let Some(count) = self.random_batch_size {
            config.random_batch_size = count;
        }
        MealDeck::from_config(&config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_config_defaults() {
        let deck = MealDeck::builder().build();
        assert_eq!(deck.batch_size, AppConfig::default().random_batch_size);
    }

    #[test]
    fn builder_overrides_apply() {
        let deck = MealDeck::builder()
            .meal_api_url("http://localhost:9999")
            .random_batch_size(3)
            .timeout(Duration::from_secs(2))
            .build();
        assert_eq!(deck.batch_size, 3);
    }
}
