//! Orchestration of the home screen's fetch and refresh flow.
//!
//! One loader instance backs one screen session. The initial load fans out
//! three concurrent fetches and joins them all-or-nothing; category switches
//! degrade to an empty list instead of erroring; a monotonic sequence token
//! keeps late responses from overwriting fresher state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use log::{debug, error, warn};

use crate::api::MealSource;
use crate::error::ApiError;
use crate::model::{Category, Recipe};
use crate::normalize::{categories_from_raw, normalize, normalize_all};

/// Where a screen session is in its load lifecycle.
///
/// `Idle → Loading → (Ready | Errored)` for the initial load, then
/// `Ready → Loading → Ready` on every category switch or refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Errored,
}

/// Everything the home screen renders from.
///
/// While a reload is in flight the previous values stay visible; they are
/// replaced only when the replacement data has fully arrived.
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub phase: LoadPhase,
    pub categories: Vec<Category>,
    pub recipes: Vec<Recipe>,
    pub featured: Option<Recipe>,
    pub selected_category: Option<String>,
}

/// Result of a successful initial load.
#[derive(Debug, Clone)]
pub struct HomeData {
    pub categories: Vec<Category>,
    pub recipes: Vec<Recipe>,
    pub featured: Option<Recipe>,
}

/// Fetch orchestrator for the home screen.
pub struct HomeLoader<S> {
    source: S,
    batch_size: usize,
    state: Mutex<HomeState>,
    seq: AtomicU64,
}

impl<S: MealSource> HomeLoader<S> {
    /// Create a loader over a meal source.
    ///
    /// `batch_size` is how many random recipes the initial load fetches.
    pub fn new(source: S, batch_size: usize) -> Self {
        HomeLoader {
            source,
            batch_size,
            state: Mutex::new(HomeState::default()),
            seq: AtomicU64::new(0),
        }
    }

    /// Load everything the home screen needs.
    ///
    /// Issues three fetches concurrently (category list, a batch of random
    /// recipes, one featured random recipe) and joins them before touching
    /// any state: if any of the three fails, the whole operation fails with a
    /// single error and no partial data is applied. On success the default
    /// selected category becomes the first entry of the returned list, unless
    /// a selection already exists.
    pub async fn load_initial(&self) -> Result<HomeData, ApiError> {
        let token = self.next_token();
        self.set_phase(LoadPhase::Loading);

        let fetched = tokio::try_join!(
            self.source.categories(),
            self.source.random_meals(self.batch_size),
            self.source.random_meal(),
        );

        let (raw_categories, raw_batch, raw_featured) = match fetched {
            Ok(parts) => parts,
            Err(err) => {
                error!("initial load failed: {}", err);
                self.set_phase(LoadPhase::Errored);
                return Err(err);
            }
        };

        let data = HomeData {
            categories: categories_from_raw(&raw_categories),
            recipes: normalize_all(&raw_batch),
            featured: raw_featured.as_ref().and_then(normalize),
        };

        let mut state = self.lock_state();
        if self.seq.load(Ordering::SeqCst) == token {
            state.categories = data.categories.clone();
            state.recipes = data.recipes.clone();
            state.featured = data.featured.clone();
            if state.selected_category.is_none() {
                state.selected_category = data.categories.first().map(|c| c.title.clone());
            }
            state.phase = LoadPhase::Ready;
        }
        Ok(data)
    }

    /// Re-run the initial load, keeping current data visible until it lands.
    pub async fn refresh(&self) -> Result<HomeData, ApiError> {
        self.load_initial().await
    }

    /// Fetch and normalize the recipes of one category.
    ///
    /// A fetch failure degrades to an empty list; this path never errors, so
    /// the screen always has something (possibly nothing) to show.
    pub async fn load_by_category(&self, category: &str) -> Vec<Recipe> {
        match self.source.filter_by_category(category).await {
            Ok(raw) => normalize_all(&raw),
            Err(err) => {
                warn!("category fetch for {:?} failed: {}", category, err);
                Vec::new()
            }
        }
    }

    /// Select a category and load its recipes into the loader state.
    ///
    /// Only one category is selected at a time, and reselecting the same
    /// value re-issues the fetch; there is no memoization. Each call takes a
    /// fresh sequence token; if a newer request was issued while this one was
    /// in flight, the response is returned to the caller but discarded for
    /// state purposes, so a slow stale fetch can never overwrite a newer
    /// result.
    pub async fn select_category(&self, category: &str) -> Vec<Recipe> {
        let token = self.next_token();
        {
            let mut state = self.lock_state();
            state.selected_category = Some(category.to_string());
            state.phase = LoadPhase::Loading;
        }

        let recipes = self.load_by_category(category).await;

        let mut state = self.lock_state();
        if self.seq.load(Ordering::SeqCst) != token {
            debug!("discarding stale response for category {:?}", category);
            return recipes;
        }
        state.recipes = recipes.clone();
        state.phase = LoadPhase::Ready;
        recipes
    }

    /// Current state of the screen session.
    pub fn snapshot(&self) -> HomeState {
        self.lock_state().clone()
    }

    fn next_token(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn set_phase(&self, phase: LoadPhase) {
        self.lock_state().phase = phase;
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, HomeState> {
        // The lock is never held across an await point.
        self.state.lock().expect("home state lock poisoned")
    }
}
