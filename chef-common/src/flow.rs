//! Screen flow controller
//!
//! Holds the whole prototype state and the transition function that moves it
//! between screens. Every operation is total: events that make no sense for
//! the current screen, unknown ids and out-of-range steps leave state alone.

use crate::catalog::{self, CookingStep, Ingredient, Recipe, MIN_GRAMS};
use crate::diet_style::DietStyle;
use crate::screen::Screen;
use std::cmp::Ordering;
use tracing::{debug, info, warn};

// ============================================================================
// Event Types
// ============================================================================

/// User actions dispatched to the flow
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowEvent {
    /// Shutter button on the camera screen
    Capture,
    /// Profile icon on the camera screen
    OpenProfile,
    /// Close button on the profile screen
    CloseProfile,
    /// "Find recipes" on the analysis screen
    FindRecipes,
    /// Back chevron. Target depends on the current screen.
    Back,
    SelectStyle(DietStyle),
    AdjustGrams { id: String, delta: i32 },
    StartCooking { recipe_id: String },
    NextStep,
    PrevStep,
    /// "Make video" on the last cooking step
    GenerateVideo,
    /// "Make another take" on the share screen
    Redo,
    /// Narration button on the current step card
    ToggleNarration,
}

/// How a cooking step renders relative to the current one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Current,
    Upcoming,
}

// ============================================================================
// State
// ============================================================================

/// Complete prototype state. Owned by a single writer.
///
/// Fields are private and there is no deserializer: the only way to get a
/// `FlowState` is `new()` followed by events.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlowState {
    screen: Screen,
    selected_style: DietStyle,
    /// Set by `StartCooking`. Left in place when navigating away.
    selected_recipe: Option<Recipe>,
    current_step: usize,
    ingredients: Vec<Ingredient>,
    recipes: Vec<Recipe>,
    steps: Vec<CookingStep>,
    narration_playing: bool,
}

impl Default for FlowState {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowState {
    /// Session-start state: camera screen with the seed catalog
    pub fn new() -> Self {
        Self {
            screen: Screen::Camera,
            selected_style: DietStyle::default(),
            selected_recipe: None,
            current_step: 0,
            ingredients: catalog::seed_ingredients(),
            recipes: catalog::seed_recipes(),
            steps: catalog::cooking_steps(),
            narration_playing: false,
        }
    }

    /// Build a state by applying `events` to a fresh session in order
    pub fn replay<I>(events: I) -> Self
    where
        I: IntoIterator<Item = FlowEvent>,
    {
        events
            .into_iter()
            .fold(Self::new(), |state, event| state.transition(event))
    }

    /// Apply an event and return the new state.
    pub fn transition(mut self, event: FlowEvent) -> FlowState {
        self.apply(event);
        self
    }

    /// Apply an event in place. This is the core transition function.
    pub fn apply(&mut self, event: FlowEvent) {
        let from = self.screen;

        match (from, event) {
            (Screen::Camera, FlowEvent::Capture) => self.screen = Screen::Analysis,
            (Screen::Camera, FlowEvent::OpenProfile) => self.screen = Screen::Profile,
            (Screen::Profile, FlowEvent::CloseProfile) => self.screen = Screen::Camera,
            (Screen::Analysis, FlowEvent::FindRecipes) => self.screen = Screen::Recipes,
            (Screen::Recipes, FlowEvent::Back) => self.screen = Screen::Analysis,
            (Screen::Recipes, FlowEvent::StartCooking { recipe_id }) => {
                self.start_cooking(&recipe_id)
            }
            (Screen::Cooking, FlowEvent::Back) => self.screen = Screen::Recipes,
            (Screen::Cooking, FlowEvent::NextStep) => self.next_step(),
            (Screen::Cooking, FlowEvent::PrevStep) => self.prev_step(),
            // Only offered on the last step, but not enforced here
            (Screen::Cooking, FlowEvent::GenerateVideo) => self.screen = Screen::Share,
            (Screen::Cooking, FlowEvent::ToggleNarration) => {
                self.narration_playing = !self.narration_playing
            }
            (Screen::Share, FlowEvent::Back | FlowEvent::Redo) => self.screen = Screen::Cooking,
            // Data edits, not navigation
            (_, FlowEvent::SelectStyle(style)) => self.select_style(style),
            (_, FlowEvent::AdjustGrams { id, delta }) => self.adjust_grams(&id, delta),
            (screen, event) => debug!("Ignoring {:?} on {} screen", event, screen),
        }

        if self.screen != from {
            info!("Screen {} -> {}", from, self.screen);
        }
    }

    fn start_cooking(&mut self, recipe_id: &str) {
        let Some(recipe) = self.recipes.iter().find(|r| r.id == recipe_id).cloned() else {
            warn!("Start cooking requested for unknown recipe {}", recipe_id);
            return;
        };
        self.selected_recipe = Some(recipe);
        self.current_step = 0;
        self.screen = Screen::Cooking;
    }

    /// Set grams of ingredient `id` to `max(MIN_GRAMS, grams + delta)`.
    /// No ceiling. Unknown ids are ignored.
    pub fn adjust_grams(&mut self, id: &str, delta: i32) {
        let Some(ingredient) = self.ingredients.iter_mut().find(|i| i.id == id) else {
            warn!("Adjust grams requested for unknown ingredient {}", id);
            return;
        };
        let adjusted = (i64::from(ingredient.grams) + i64::from(delta)).max(i64::from(MIN_GRAMS));
        ingredient.grams = u32::try_from(adjusted).unwrap_or(u32::MAX);
    }

    /// Highlight a style. Does not narrow `recipes()`.
    pub fn select_style(&mut self, style: DietStyle) {
        self.selected_style = style;
    }

    /// Advance one step; no-op on the last step
    pub fn next_step(&mut self) {
        if self.current_step < self.last_step_index() {
            self.current_step += 1;
        }
    }

    /// Go back one step; no-op on the first step
    pub fn prev_step(&mut self) {
        if self.current_step > 0 {
            self.current_step -= 1;
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selected_style(&self) -> DietStyle {
        self.selected_style
    }

    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.selected_recipe.as_ref()
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    /// Always the full recipe list, whatever style is selected
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn steps(&self) -> &[CookingStep] {
        &self.steps
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn last_step_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn is_first_step(&self) -> bool {
        self.current_step == 0
    }

    /// Gates the "Make video" button
    pub fn is_last_step(&self) -> bool {
        self.current_step == self.last_step_index()
    }

    pub fn can_go_back(&self) -> bool {
        !self.is_first_step()
    }

    /// Cooking progress bar fill, 0..=100
    pub fn progress_percent(&self) -> f64 {
        if self.steps.is_empty() {
            return 0.0;
        }
        (self.current_step + 1) as f64 / self.steps.len() as f64 * 100.0
    }

    pub fn step_status(&self, index: usize) -> StepStatus {
        match index.cmp(&self.current_step) {
            Ordering::Less => StepStatus::Done,
            Ordering::Equal => StepStatus::Current,
            Ordering::Greater => StepStatus::Upcoming,
        }
    }

    pub fn narration_playing(&self) -> bool {
        self.narration_playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cooking(recipe_id: &str) -> FlowState {
        FlowState::replay([
            FlowEvent::Capture,
            FlowEvent::FindRecipes,
            FlowEvent::StartCooking {
                recipe_id: recipe_id.to_string(),
            },
        ])
    }

    #[test]
    fn test_initial_state() {
        let state = FlowState::new();
        assert_eq!(state.screen(), Screen::Camera);
        assert_eq!(state.selected_style(), DietStyle::Normal);
        assert!(state.selected_recipe().is_none());
        assert_eq!(state.current_step(), 0);
        assert!(!state.narration_playing());
    }

    #[test]
    fn test_camera_transitions() {
        let state = FlowState::new();
        assert_eq!(
            state.clone().transition(FlowEvent::Capture).screen(),
            Screen::Analysis
        );
        assert_eq!(
            state.transition(FlowEvent::OpenProfile).screen(),
            Screen::Profile
        );
    }

    #[test]
    fn test_profile_closes_to_camera() {
        let state = FlowState::replay([FlowEvent::OpenProfile, FlowEvent::CloseProfile]);
        assert_eq!(state.screen(), Screen::Camera);
    }

    #[test]
    fn test_back_targets() {
        let recipes = FlowState::replay([FlowEvent::Capture, FlowEvent::FindRecipes]);
        assert_eq!(
            recipes.transition(FlowEvent::Back).screen(),
            Screen::Analysis
        );

        let state = cooking("1");
        assert_eq!(
            state.clone().transition(FlowEvent::Back).screen(),
            Screen::Recipes
        );

        let share = state.transition(FlowEvent::GenerateVideo);
        assert_eq!(share.screen(), Screen::Share);
        assert_eq!(
            share.clone().transition(FlowEvent::Back).screen(),
            Screen::Cooking
        );
        assert_eq!(share.transition(FlowEvent::Redo).screen(), Screen::Cooking);
    }

    #[test]
    fn test_back_is_noop_without_parent() {
        for state in [
            FlowState::new(),
            FlowState::replay([FlowEvent::Capture]),
            FlowState::replay([FlowEvent::OpenProfile]),
        ] {
            let before = state.clone();
            assert_eq!(state.transition(FlowEvent::Back), before);
        }
    }

    #[test]
    fn test_start_cooking_resets_step_keeps_narration() {
        let mut state = cooking("1");
        state.apply(FlowEvent::NextStep);
        state.apply(FlowEvent::NextStep);
        state.apply(FlowEvent::ToggleNarration);
        state.apply(FlowEvent::Back);
        state.apply(FlowEvent::StartCooking {
            recipe_id: "3".to_string(),
        });

        assert_eq!(state.screen(), Screen::Cooking);
        assert_eq!(state.selected_recipe().map(|r| r.id.as_str()), Some("3"));
        assert_eq!(state.current_step(), 0);
        // Only ToggleNarration flips the flag
        assert!(state.narration_playing());
    }

    #[test]
    fn test_start_cooking_keeps_narration_off() {
        let state = cooking("1")
            .transition(FlowEvent::Back)
            .transition(FlowEvent::StartCooking {
                recipe_id: "2".to_string(),
            });
        assert!(!state.narration_playing());
    }

    #[test]
    fn test_start_cooking_unknown_recipe_is_noop() {
        let state = FlowState::replay([FlowEvent::Capture, FlowEvent::FindRecipes]);
        let before = state.clone();
        let after = state.transition(FlowEvent::StartCooking {
            recipe_id: "42".to_string(),
        });
        assert_eq!(after, before);
    }

    #[test]
    fn test_selected_recipe_survives_leaving_cooking() {
        let state = cooking("2").transition(FlowEvent::Back);
        assert_eq!(state.screen(), Screen::Recipes);
        assert_eq!(state.selected_recipe().map(|r| r.id.as_str()), Some("2"));
    }

    #[test]
    fn test_navigation_events_ignored_off_screen() {
        let state = FlowState::new();
        let before = state.clone();
        let after = state
            .transition(FlowEvent::FindRecipes)
            .transition(FlowEvent::NextStep)
            .transition(FlowEvent::GenerateVideo)
            .transition(FlowEvent::CloseProfile)
            .transition(FlowEvent::ToggleNarration);
        assert_eq!(after, before);
    }

    #[test]
    fn test_step_bounds() {
        let mut state = cooking("1");
        state.apply(FlowEvent::PrevStep);
        assert_eq!(state.current_step(), 0);
        assert!(!state.can_go_back());

        for _ in 0..10 {
            state.apply(FlowEvent::NextStep);
        }
        assert_eq!(state.current_step(), state.last_step_index());
        assert!(state.is_last_step());
        assert!(state.can_go_back());
    }

    #[test]
    fn test_generate_video_not_step_gated() {
        let state = cooking("1").transition(FlowEvent::GenerateVideo);
        assert_eq!(state.screen(), Screen::Share);
        assert_eq!(state.current_step(), 0);
    }

    #[test]
    fn test_adjust_grams_clamps_at_floor() {
        let mut state = FlowState::new();
        state.adjust_grams("3", -100);
        assert_eq!(state.ingredient("3").map(|i| i.grams), Some(MIN_GRAMS));
        state.adjust_grams("3", -10);
        assert_eq!(state.ingredient("3").map(|i| i.grams), Some(MIN_GRAMS));
        state.adjust_grams("3", 25);
        assert_eq!(state.ingredient("3").map(|i| i.grams), Some(35));
    }

    #[test]
    fn test_adjust_grams_has_no_ceiling() {
        let mut state = FlowState::new();
        state.adjust_grams("1", i32::MAX);
        state.adjust_grams("1", i32::MAX);
        assert_eq!(state.ingredient("1").map(|i| i.grams), Some(u32::MAX));
    }

    #[test]
    fn test_adjust_grams_unknown_id_is_noop() {
        let mut state = FlowState::new();
        let before = state.clone();
        state.adjust_grams("99", 10);
        assert_eq!(state, before);
    }

    #[test]
    fn test_select_style_does_not_filter() {
        let state = FlowState::replay([
            FlowEvent::Capture,
            FlowEvent::SelectStyle(DietStyle::Eco),
        ]);
        assert_eq!(state.selected_style(), DietStyle::Eco);
        assert_eq!(state.recipes().len(), 3);
    }

    #[test]
    fn test_narration_toggles_on_cooking() {
        let mut state = cooking("1");
        state.apply(FlowEvent::ToggleNarration);
        assert!(state.narration_playing());
        state.apply(FlowEvent::ToggleNarration);
        assert!(!state.narration_playing());
    }

    #[test]
    fn test_progress_percent() {
        let mut state = cooking("1");
        assert!((state.progress_percent() - 20.0).abs() < 1e-9);
        for _ in 0..4 {
            state.next_step();
        }
        assert!((state.progress_percent() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_step_status() {
        let mut state = cooking("1");
        state.next_step();
        state.next_step();
        assert_eq!(state.step_status(0), StepStatus::Done);
        assert_eq!(state.step_status(1), StepStatus::Done);
        assert_eq!(state.step_status(2), StepStatus::Current);
        assert_eq!(state.step_status(4), StepStatus::Upcoming);
    }
}
