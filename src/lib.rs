//! Client-side data core for a recipe browsing app.
//!
//! Screens talk to two external services: a public meal lookup API and a
//! small favorites backend. This crate owns everything between the network
//! and the screen: normalizing the lookup service's sparse records into one
//! canonical [`Recipe`] shape, orchestrating the home screen's concurrent
//! fetch/refresh flow, and toggling per-user favorites. Session handling
//! stays with the auth provider; callers pass a user id in explicitly.
//!
//! ```no_run
//! use mealdeck::MealDeck;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), mealdeck::ApiError> {
//! let deck = MealDeck::builder().build();
//! let loader = deck.home_loader();
//!
//! let home = loader.load_initial().await?;
//! println!("{} categories, {} recipes", home.categories.len(), home.recipes.len());
//!
//! let seafood = loader.select_category("Seafood").await;
//! println!("{} seafood recipes", seafood.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod builder;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod uniffi_bindings;

pub use api::{FavoritesApi, MealApi, MealSource};
pub use builder::{MealDeck, MealDeckBuilder};
pub use config::AppConfig;
pub use error::ApiError;
pub use loader::{HomeData, HomeLoader, HomeState, LoadPhase};
pub use model::{
    Category, Favorite, FavoriteSummary, NewFavorite, RawCategory, RawMeal, Recipe,
};
pub use normalize::{categories_from_raw, normalize, normalize_all};

/// Look one recipe up by id using the default configuration.
pub async fn lookup_recipe(id: &str) -> Result<Option<Recipe>, ApiError> {
    let deck = MealDeck::builder().build();
    let raw = deck.meals().meal_by_id(id).await?;
    Ok(raw.as_ref().and_then(normalize))
}

/// List a category's recipes using the default configuration.
pub async fn browse_category(category: &str) -> Result<Vec<Recipe>, ApiError> {
    let deck = MealDeck::builder().build();
    let raw = deck.meals().filter_by_category(category).await?;
    Ok(normalize_all(&raw))
}
