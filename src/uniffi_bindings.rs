//! UniFFI bindings for mealdeck
//!
//! This module provides FFI-compatible types and functions for use with iOS
//! and Android shells. It wraps the async Rust API with synchronous functions
//! that manage their own tokio runtime.

use std::fmt;

use crate::error::ApiError;
use crate::model::{Category, Favorite, FavoriteSummary, Recipe};

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible recipe
///
/// The raw upstream record is not carried across the boundary; the shell only
/// ever renders the normalized fields.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub cook_time: String,
    pub servings: u32,
    pub category: String,
    pub area: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// Share-style video URL, if the recipe has one
    pub youtube_url: Option<String>,
    /// Embeddable player URL derived from `youtube_url`
    pub youtube_embed_url: Option<String>,
}

impl From<Recipe> for FfiRecipe {
    fn from(recipe: Recipe) -> Self {
        let youtube_embed_url = recipe.youtube_embed_url();
        FfiRecipe {
            id: recipe.id,
            title: recipe.title,
            description: recipe.description,
            image: recipe.image,
            cook_time: recipe.cook_time,
            servings: recipe.servings,
            category: recipe.category,
            area: recipe.area,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            youtube_url: recipe.youtube_url,
            youtube_embed_url,
        }
    }
}

/// FFI-compatible category
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiCategory {
    pub id: u32,
    pub title: String,
    pub image: String,
    pub description: String,
}

impl From<Category> for FfiCategory {
    fn from(category: Category) -> Self {
        FfiCategory {
            id: category.id,
            title: category.title,
            image: category.image,
            description: category.description,
        }
    }
}

/// FFI-compatible favorite row
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiFavorite {
    pub id: i64,
    pub recipe_id: i64,
    pub user_id: String,
    pub title: String,
    pub image: String,
    pub cook_time: String,
    pub servings: u32,
}

impl From<Favorite> for FfiFavorite {
    fn from(favorite: Favorite) -> Self {
        FfiFavorite {
            id: favorite.id,
            recipe_id: favorite.recipe_id,
            user_id: favorite.user_id,
            title: favorite.title,
            image: favorite.image,
            cook_time: favorite.cook_time,
            servings: favorite.servings,
        }
    }
}

/// Denormalized summary the shell sends when saving a favorite
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiFavoriteSummary {
    pub recipe_id: i64,
    pub title: String,
    pub image: String,
    pub cook_time: String,
    pub servings: u32,
}

impl From<FfiFavoriteSummary> for FavoriteSummary {
    fn from(summary: FfiFavoriteSummary) -> Self {
        FavoriteSummary {
            recipe_id: summary.recipe_id,
            title: summary.title,
            image: summary.image,
            cook_time: summary.cook_time,
            servings: summary.servings,
        }
    }
}

/// Everything the home screen needs from one initial load
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiHomeData {
    pub categories: Vec<FfiCategory>,
    pub recipes: Vec<FfiRecipe>,
    pub featured: Option<FfiRecipe>,
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiApiError {
    /// Network-level failure
    HttpError { message: String },
    /// Non-success HTTP status from a service
    StatusError { message: String },
    /// A background fetch task failed
    TaskError { message: String },
    /// Configuration error
    ConfigError { message: String },
    /// Client construction error
    BuilderError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiApiError::HttpError { message } => write!(f, "Http error: {}", message),
            FfiApiError::StatusError { message } => write!(f, "Status error: {}", message),
            FfiApiError::TaskError { message } => write!(f, "Task error: {}", message),
            FfiApiError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiApiError::BuilderError { message } => write!(f, "Builder error: {}", message),
            FfiApiError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiApiError {}

impl From<ApiError> for FfiApiError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Http(e) => FfiApiError::HttpError {
                message: e.to_string(),
            },
            ApiError::Status { status, url } => FfiApiError::StatusError {
                message: format!("{} returned status {}", url, status),
            },
            ApiError::Task(e) => FfiApiError::TaskError {
                message: e.to_string(),
            },
            ApiError::Config(e) => FfiApiError::ConfigError {
                message: e.to_string(),
            },
            ApiError::Builder(message) => FfiApiError::BuilderError { message },
        }
    }
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiApiError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiApiError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

/// Load everything the home screen needs
///
/// Issues the three initial fetches concurrently and fails as a whole if any
/// of them fails.
///
/// # Arguments
/// * `batch_size` - Optional number of random recipes to fetch (config default if not specified)
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn load_home(batch_size: Option<u32>) -> Result<FfiHomeData, FfiApiError> {
    let rt = create_runtime()?;
    rt.block_on(async {
        let mut builder = crate::MealDeck::builder();
        if let Some(count) = batch_size {
            builder = builder.random_batch_size(count as usize);
        }
        let deck = builder.build();

        let home = deck.home_loader().load_initial().await?;
        Ok(FfiHomeData {
            categories: home.categories.into_iter().map(FfiCategory::from).collect(),
            recipes: home.recipes.into_iter().map(FfiRecipe::from).collect(),
            featured: home.featured.map(FfiRecipe::from),
        })
    })
}

/// List a category's recipes
///
/// Mirrors the category-switch path: a fetch failure degrades to an empty
/// list rather than an error.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn browse_category(category: String) -> Result<Vec<FfiRecipe>, FfiApiError> {
    let rt = create_runtime()?;
    rt.block_on(async {
        let deck = crate::MealDeck::builder().build();
        let recipes = deck.home_loader().load_by_category(&category).await;
        Ok(recipes.into_iter().map(FfiRecipe::from).collect())
    })
}

/// Look one recipe up by id
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn lookup_recipe(id: String) -> Result<Option<FfiRecipe>, FfiApiError> {
    let rt = create_runtime()?;
    rt.block_on(async {
        let recipe = crate::lookup_recipe(&id).await?;
        Ok(recipe.map(FfiRecipe::from))
    })
}

/// List a user's saved favorites
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn list_favorites(user_id: String) -> Result<Vec<FfiFavorite>, FfiApiError> {
    let rt = create_runtime()?;
    rt.block_on(async {
        let deck = crate::MealDeck::from_env()?;
        let favorites = deck.favorites().list(&user_id).await?;
        Ok(favorites.into_iter().map(FfiFavorite::from).collect())
    })
}

/// Flip the saved state of a recipe, returning the new state
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn toggle_favorite(
    user_id: String,
    summary: FfiFavoriteSummary,
    currently_saved: bool,
) -> Result<bool, FfiApiError> {
    let rt = create_runtime()?;
    rt.block_on(async {
        let deck = crate::MealDeck::from_env()?;
        let saved = deck
            .favorites()
            .toggle(&user_id, &summary.into(), currently_saved)
            .await?;
        Ok(saved)
    })
}
