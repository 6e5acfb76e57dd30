//! Conversion of raw upstream records into the canonical display shapes.
//!
//! The lookup service guarantees nothing about its records, so everything the
//! rest of the crate touches goes through [`normalize`] first. A record that
//! cannot be displayed at all comes back as `None` and is filtered out by the
//! callers; anything else is padded with fixed placeholders rather than left
//! empty.

use crate::model::{Category, RawCategory, RawMeal, Recipe};

/// Cook time shown when the source record carries none.
pub const PLACEHOLDER_COOK_TIME: &str = "30 minutes";

/// Servings count shown when the source record carries none.
pub const PLACEHOLDER_SERVINGS: u32 = 4;

/// Description shown when the record has no instructions text to preview.
pub const PLACEHOLDER_DESCRIPTION: &str = "No description available.";

/// How many characters of the instructions text feed the description preview.
const DESCRIPTION_PREVIEW_CHARS: usize = 120;

/// Convert one raw record into a [`Recipe`].
///
/// Returns `None` when the record carries neither an id nor a title, the
/// signal for "unusable record" that callers filter out of lists silently.
/// All twenty ingredient slots are inspected in column order with no early
/// exit, so gaps in the numbered columns do not truncate the list; each kept
/// entry is `"{measure} {ingredient}"` with both sides trimmed, or the
/// ingredient alone when the measure is blank. Instructions are the raw
/// newline-delimited text split into trimmed non-empty lines.
///
/// Malformed values never raise an error here; the one failure mode is the
/// `None` return above.
pub fn normalize(raw: &RawMeal) -> Option<Recipe> {
    let id = raw.id.as_deref().map(str::trim).unwrap_or("");
    let title = raw.title.as_deref().map(str::trim).unwrap_or("");
    if id.is_empty() && title.is_empty() {
        return None;
    }

    let mut ingredients = Vec::new();
    for (ingredient, measure) in raw.ingredient_slots() {
        let Some(name) = ingredient.map(str::trim).filter(|name| !name.is_empty()) else {
            continue;
        };
        match measure.map(str::trim).filter(|measure| !measure.is_empty()) {
            Some(measure) => ingredients.push(format!("{} {}", measure, name)),
            None => ingredients.push(name.to_string()),
        }
    }

    let instructions: Vec<String> = raw
        .instructions
        .as_deref()
        .unwrap_or("")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    Some(Recipe {
        id: id.to_string(),
        title: title.to_string(),
        description: describe(raw.instructions.as_deref()),
        image: raw.thumb.clone().unwrap_or_default(),
        cook_time: PLACEHOLDER_COOK_TIME.to_string(),
        servings: PLACEHOLDER_SERVINGS,
        category: raw.category.clone().unwrap_or_default(),
        area: raw.area.clone().unwrap_or_default(),
        ingredients,
        instructions,
        youtube_url: raw.youtube.clone().filter(|url| !url.trim().is_empty()),
        original_data: raw.clone(),
    })
}

/// Normalize a batch, dropping unusable records.
pub fn normalize_all(raw: &[RawMeal]) -> Vec<Recipe> {
    raw.iter().filter_map(normalize).collect()
}

/// Enumerate raw categories into display values.
///
/// Ids are the 1-based position in the returned list.
pub fn categories_from_raw(raw: &[RawCategory]) -> Vec<Category> {
    raw.iter()
        .enumerate()
        .map(|(index, category)| Category {
            id: index as u32 + 1,
            title: category.name.clone().unwrap_or_default(),
            image: category.thumb.clone().unwrap_or_default(),
            description: category.description.clone().unwrap_or_default(),
        })
        .collect()
}

fn describe(instructions: Option<&str>) -> String {
    match instructions.map(str::trim).filter(|text| !text.is_empty()) {
        Some(text) => {
            let preview: String = text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
            if text.chars().count() > DESCRIPTION_PREVIEW_CHARS {
                format!("{}...", preview)
            } else {
                preview
            }
        }
        None => PLACEHOLDER_DESCRIPTION.to_string(),
    }
}
