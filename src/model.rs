use serde::{Deserialize, Serialize};

/// One record as returned by the meal lookup service.
///
/// The upstream payload is sparse: every field is optional, ingredients and
/// their measures arrive as twenty numbered column pairs, and instructions are
/// a single newline-delimited string. Nothing here is guaranteed by the
/// source; [`crate::normalize::normalize`] is the only sanctioned way to turn
/// one of these into a displayable [`Recipe`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawMeal {
    #[serde(rename = "idMeal")]
    pub id: Option<String>,
    #[serde(rename = "strMeal")]
    pub title: Option<String>,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(rename = "strMealThumb")]
    pub thumb: Option<String>,
    #[serde(rename = "strTags")]
    pub tags: Option<String>,
    #[serde(rename = "strYoutube")]
    pub youtube: Option<String>,
    #[serde(rename = "strSource")]
    pub source: Option<String>,

    #[serde(rename = "strIngredient1")]
    pub ingredient1: Option<String>,
    #[serde(rename = "strIngredient2")]
    pub ingredient2: Option<String>,
    #[serde(rename = "strIngredient3")]
    pub ingredient3: Option<String>,
    #[serde(rename = "strIngredient4")]
    pub ingredient4: Option<String>,
    #[serde(rename = "strIngredient5")]
    pub ingredient5: Option<String>,
    #[serde(rename = "strIngredient6")]
    pub ingredient6: Option<String>,
    #[serde(rename = "strIngredient7")]
    pub ingredient7: Option<String>,
    #[serde(rename = "strIngredient8")]
    pub ingredient8: Option<String>,
    #[serde(rename = "strIngredient9")]
    pub ingredient9: Option<String>,
    #[serde(rename = "strIngredient10")]
    pub ingredient10: Option<String>,
    #[serde(rename = "strIngredient11")]
    pub ingredient11: Option<String>,
    #[serde(rename = "strIngredient12")]
    pub ingredient12: Option<String>,
    #[serde(rename = "strIngredient13")]
    pub ingredient13: Option<String>,
    #[serde(rename = "strIngredient14")]
    pub ingredient14: Option<String>,
    #[serde(rename = "strIngredient15")]
    pub ingredient15: Option<String>,
    #[serde(rename = "strIngredient16")]
    pub ingredient16: Option<String>,
    #[serde(rename = "strIngredient17")]
    pub ingredient17: Option<String>,
    #[serde(rename = "strIngredient18")]
    pub ingredient18: Option<String>,
    #[serde(rename = "strIngredient19")]
    pub ingredient19: Option<String>,
    #[serde(rename = "strIngredient20")]
    pub ingredient20: Option<String>,

    #[serde(rename = "strMeasure1")]
    pub measure1: Option<String>,
    #[serde(rename = "strMeasure2")]
    pub measure2: Option<String>,
    #[serde(rename = "strMeasure3")]
    pub measure3: Option<String>,
    #[serde(rename = "strMeasure4")]
    pub measure4: Option<String>,
    #[serde(rename = "strMeasure5")]
    pub measure5: Option<String>,
    #[serde(rename = "strMeasure6")]
    pub measure6: Option<String>,
    #[serde(rename = "strMeasure7")]
    pub measure7: Option<String>,
    #[serde(rename = "strMeasure8")]
    pub measure8: Option<String>,
    #[serde(rename = "strMeasure9")]
    pub measure9: Option<String>,
    #[serde(rename = "strMeasure10")]
    pub measure10: Option<String>,
    #[serde(rename = "strMeasure11")]
    pub measure11: Option<String>,
    #[serde(rename = "strMeasure12")]
    pub measure12: Option<String>,
    #[serde(rename = "strMeasure13")]
    pub measure13: Option<String>,
    #[serde(rename = "strMeasure14")]
    pub measure14: Option<String>,
    #[serde(rename = "strMeasure15")]
    pub measure15: Option<String>,
    #[serde(rename = "strMeasure16")]
    pub measure16: Option<String>,
    #[serde(rename = "strMeasure17")]
    pub measure17: Option<String>,
    #[serde(rename = "strMeasure18")]
    pub measure18: Option<String>,
    #[serde(rename = "strMeasure19")]
    pub measure19: Option<String>,
    #[serde(rename = "strMeasure20")]
    pub measure20: Option<String>,
}

impl RawMeal {
    /// Number of numbered ingredient/measure column pairs the service exposes.
    pub const MAX_INGREDIENT_SLOTS: usize = 20;

    /// All ingredient/measure pairs in column order.
    ///
    /// The slot count is fixed regardless of how many entries are filled in;
    /// gaps stay in place so callers can reason about the original indices.
    pub fn ingredient_slots(&self) -> [(Option<&str>, Option<&str>); Self::MAX_INGREDIENT_SLOTS] {
        fn slot<'a>(
            ingredient: &'a Option<String>,
            measure: &'a Option<String>,
        ) -> (Option<&'a str>, Option<&'a str>) {
            (ingredient.as_deref(), measure.as_deref())
        }

        [
            slot(&self.ingredient1, &self.measure1),
            slot(&self.ingredient2, &self.measure2),
            slot(&self.ingredient3, &self.measure3),
            slot(&self.ingredient4, &self.measure4),
            slot(&self.ingredient5, &self.measure5),
            slot(&self.ingredient6, &self.measure6),
            slot(&self.ingredient7, &self.measure7),
            slot(&self.ingredient8, &self.measure8),
            slot(&self.ingredient9, &self.measure9),
            slot(&self.ingredient10, &self.measure10),
            slot(&self.ingredient11, &self.measure11),
            slot(&self.ingredient12, &self.measure12),
            slot(&self.ingredient13, &self.measure13),
            slot(&self.ingredient14, &self.measure14),
            slot(&self.ingredient15, &self.measure15),
            slot(&self.ingredient16, &self.measure16),
            slot(&self.ingredient17, &self.measure17),
            slot(&self.ingredient18, &self.measure18),
            slot(&self.ingredient19, &self.measure19),
            slot(&self.ingredient20, &self.measure20),
        ]
    }
}

/// Canonical display shape every screen consumes.
///
/// Produced exclusively by [`crate::normalize::normalize`]; `ingredients` and
/// `instructions` contain only non-empty trimmed entries in their original
/// order, and display fields are never empty-by-accident (missing values fall
/// back to fixed placeholders). The untouched upstream record rides along in
/// `original_data`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
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
    pub youtube_url: Option<String>,
    pub original_data: RawMeal,
}

impl Recipe {
    /// Embeddable player URL for the recipe's video, if it has one.
    ///
    /// Derived from the share-style `watch?v=` URL the service hands out.
    pub fn youtube_embed_url(&self) -> Option<String> {
        self.youtube_url.as_deref().and_then(youtube_embed_url)
    }
}

/// Convert a `watch?v=` YouTube URL into its embed form.
pub fn youtube_embed_url(url: &str) -> Option<String> {
    let video_id = url.split("v=").nth(1)?;
    if video_id.is_empty() {
        return None;
    }
    Some(format!("https://www.youtube.com/embed/{}", video_id))
}

/// One category as returned by the meal lookup service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCategory {
    #[serde(rename = "idCategory")]
    pub id: Option<String>,
    #[serde(rename = "strCategory")]
    pub name: Option<String>,
    #[serde(rename = "strCategoryThumb")]
    pub thumb: Option<String>,
    #[serde(rename = "strCategoryDescription")]
    pub description: Option<String>,
}

/// A browsable category.
///
/// `id` is the 1-based position within the list the service returned; it is
/// not stable across reloads if the upstream ordering changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: u32,
    pub title: String,
    pub image: String,
    pub description: String,
}

/// A user-scoped bookmark as stored by the favorites backend.
///
/// Display fields (`title`, `image`, `cook_time`, `servings`) are denormalized
/// at save time so the favorites list renders without a join at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: i64,
    pub recipe_id: i64,
    pub user_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub cook_time: String,
    #[serde(default)]
    pub servings: u32,
}

impl Favorite {
    /// Build a display record from the stored denormalized fields.
    ///
    /// Used when the full recipe lookup misses; the result has empty
    /// ingredient and instruction lists but still renders as a card.
    pub fn to_recipe(&self) -> Recipe {
        let original_data = RawMeal {
            id: Some(self.recipe_id.to_string()),
            title: Some(self.title.clone()),
            thumb: Some(self.image.clone()),
            ..RawMeal::default()
        };

        Recipe {
            id: self.recipe_id.to_string(),
            title: if self.title.is_empty() {
                "Unknown Title".to_string()
            } else {
                self.title.clone()
            },
            description: String::new(),
            image: self.image.clone(),
            cook_time: self.cook_time.clone(),
            servings: self.servings,
            category: String::new(),
            area: String::new(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            youtube_url: None,
            original_data,
        }
    }
}

/// Denormalized display fields captured at the moment a recipe is saved.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteSummary {
    pub recipe_id: i64,
    pub title: String,
    pub image: String,
    pub cook_time: String,
    pub servings: u32,
}

impl FavoriteSummary {
    /// Capture the summary fields of a recipe.
    ///
    /// Returns `None` when the recipe id is not numeric, since the favorites
    /// backend keys bookmarks by numeric recipe id.
    pub fn of(recipe: &Recipe) -> Option<Self> {
        let recipe_id = recipe.id.parse().ok()?;
        Some(FavoriteSummary {
            recipe_id,
            title: recipe.title.clone(),
            image: recipe.image.clone(),
            cook_time: recipe.cook_time.clone(),
            servings: recipe.servings,
        })
    }
}

/// Request body for saving a favorite.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFavorite {
    pub user_id: String,
    pub recipe_id: i64,
    pub title: String,
    pub image: String,
    pub cook_time: String,
    pub servings: u32,
}

impl NewFavorite {
    pub fn from_summary(user_id: &str, summary: &FavoriteSummary) -> Self {
        NewFavorite {
            user_id: user_id.to_string(),
            recipe_id: summary.recipe_id,
            title: summary.title.clone(),
            image: summary.image.clone(),
            cook_time: summary.cook_time.clone(),
            servings: summary.servings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_meal_deserializes_numbered_columns() {
        let raw: RawMeal = serde_json::from_str(
            r#"{
                "idMeal": "52874",
                "strMeal": "Beef and Mustard Pie",
                "strCategory": "Beef",
                "strArea": "British",
                "strInstructions": "Preheat the oven.\nSeason the beef.",
                "strMealThumb": "https://example.com/pie.jpg",
                "strYoutube": "https://www.youtube.com/watch?v=nMyBC9staMU",
                "strIngredient1": "Beef",
                "strIngredient2": "Plain Flour",
                "strIngredient3": "",
                "strMeasure1": "1kg",
                "strMeasure2": "2 tbs",
                "strDrinkAlternate": null,
                "strCreativeCommonsConfirmed": null
            }"#,
        )
        .unwrap();

        assert_eq!(raw.id.as_deref(), Some("52874"));
        assert_eq!(raw.title.as_deref(), Some("Beef and Mustard Pie"));
        assert_eq!(raw.ingredient2.as_deref(), Some("Plain Flour"));
        assert_eq!(raw.measure2.as_deref(), Some("2 tbs"));
        // Unknown upstream columns are tolerated, missing ones come back None.
        assert_eq!(raw.ingredient20, None);
    }

    #[test]
    fn ingredient_slots_preserve_column_order_and_gaps() {
        let raw = RawMeal {
            ingredient1: Some("Beef".to_string()),
            ingredient3: Some("Salt".to_string()),
            measure1: Some("1kg".to_string()),
            ..RawMeal::default()
        };

        let slots = raw.ingredient_slots();
        assert_eq!(slots.len(), RawMeal::MAX_INGREDIENT_SLOTS);
        assert_eq!(slots[0], (Some("Beef"), Some("1kg")));
        assert_eq!(slots[1], (None, None));
        assert_eq!(slots[2], (Some("Salt"), None));
    }

    #[test]
    fn youtube_embed_url_from_watch_url() {
        assert_eq!(
            youtube_embed_url("https://www.youtube.com/watch?v=nMyBC9staMU"),
            Some("https://www.youtube.com/embed/nMyBC9staMU".to_string())
        );
        assert_eq!(youtube_embed_url("https://example.com/clip"), None);
        assert_eq!(youtube_embed_url("https://www.youtube.com/watch?v="), None);
    }

    #[test]
    fn favorite_round_trips_camel_case() {
        let favorite: Favorite = serde_json::from_str(
            r#"{
                "id": 7,
                "recipeId": 52874,
                "userId": "user_2x",
                "title": "Beef and Mustard Pie",
                "image": "https://example.com/pie.jpg",
                "cookTime": "30 minutes",
                "servings": 4
            }"#,
        )
        .unwrap();

        assert_eq!(favorite.recipe_id, 52874);
        assert_eq!(favorite.user_id, "user_2x");

        let body = serde_json::to_value(NewFavorite {
            user_id: favorite.user_id.clone(),
            recipe_id: favorite.recipe_id,
            title: favorite.title.clone(),
            image: favorite.image.clone(),
            cook_time: favorite.cook_time.clone(),
            servings: favorite.servings,
        })
        .unwrap();
        assert_eq!(body["recipeId"], 52874);
        assert_eq!(body["cookTime"], "30 minutes");
    }

    #[test]
    fn fallback_recipe_fills_unknown_title() {
        let favorite = Favorite {
            id: 1,
            recipe_id: 42,
            user_id: "u1".to_string(),
            title: String::new(),
            image: String::new(),
            cook_time: "30 minutes".to_string(),
            servings: 4,
        };

        let recipe = favorite.to_recipe();
        assert_eq!(recipe.id, "42");
        assert_eq!(recipe.title, "Unknown Title");
        assert!(recipe.ingredients.is_empty());
    }
}
