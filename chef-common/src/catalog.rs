//! Seed catalog: detected ingredients, recipes and the guided cooking steps.
//!
//! Everything here is fixed at session start. Only ingredient grams change
//! afterwards, through [`crate::FlowState::adjust_grams`].

use crate::diet_style::DietStyle;
use serde::{Deserialize, Serialize};

/// Lowest serving size an ingredient can be adjusted down to
pub const MIN_GRAMS: u32 = 10;

/// Delta applied by the -/+ buttons on an ingredient card
pub const GRAMS_STEP: i32 = 10;

/// kcal/100g at which the calorie meter is full
pub const CALORIE_METER_MAX: u32 = 500;

/// A detected food item with an adjustable serving size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub image_url: String,
    /// kcal per 100g. Does not scale with `grams`.
    pub calories: u32,
    pub grams: u32,
}

impl Ingredient {
    /// Fill level of the calorie meter, 0..=100
    pub fn calorie_meter_percent(&self) -> f64 {
        (self.calories as f64 / CALORIE_METER_MAX as f64 * 100.0).min(100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub image_url: String,
    /// Display string, e.g. "15 min"
    pub time: String,
    pub calories: u32,
    pub style: DietStyle,
}

impl Recipe {
    pub fn style_label(&self) -> &'static str {
        self.style.label()
    }
}

/// One instruction in the guided cooking sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookingStep {
    pub id: String,
    /// 1-based position in the sequence
    pub number: u32,
    pub text: String,
    pub duration: Option<String>,
}

fn ingredient(id: &str, name: &str, image_url: &str, calories: u32, grams: u32) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        name: name.to_string(),
        image_url: image_url.to_string(),
        calories,
        grams,
    }
}

fn recipe(
    id: &str,
    name: &str,
    image_url: &str,
    time: &str,
    calories: u32,
    style: DietStyle,
) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: name.to_string(),
        image_url: image_url.to_string(),
        time: time.to_string(),
        calories,
        style,
    }
}

pub fn seed_ingredients() -> Vec<Ingredient> {
    vec![
        ingredient(
            "1",
            "Tomato",
            "https://images.unsplash.com/photo-1546470427-227d2076ccb6?w=256",
            18,
            100,
        ),
        ingredient(
            "2",
            "Cucumber",
            "https://images.unsplash.com/photo-1568584711271-2cfdf98e9acd?w=256",
            15,
            150,
        ),
        ingredient(
            "3",
            "Cheese",
            "https://images.unsplash.com/photo-1486297678162-eb2a19b0a32d?w=256",
            402,
            50,
        ),
        ingredient(
            "4",
            "Basil",
            "https://images.unsplash.com/photo-1618375569909-3c8616cf7733?w=256",
            23,
            20,
        ),
    ]
}

pub fn seed_recipes() -> Vec<Recipe> {
    vec![
        recipe(
            "1",
            "Caprese with pesto sauce",
            "https://images.unsplash.com/photo-1608897013039-887f21d8c804?w=800",
            "15 min",
            320,
            DietStyle::Normal,
        ),
        recipe(
            "2",
            "Grilled vegetable salad",
            "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?w=800",
            "25 min",
            180,
            DietStyle::Vegan,
        ),
        recipe(
            "3",
            "Light vegetable mix",
            "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?w=800",
            "10 min",
            120,
            DietStyle::Diet,
        ),
    ]
}

/// Step texts paired with their duration labels, in order
const STEPS: &[(&str, &str)] = &[
    (
        "Slice the tomatoes and mozzarella into rounds of equal thickness",
        "3 min",
    ),
    (
        "Lay them out on a plate, alternating tomato and mozzarella",
        "2 min",
    ),
    (
        "Make the pesto: blend basil, garlic and olive oil",
        "5 min",
    ),
    ("Drizzle the pesto over the dish", "1 min"),
    ("Garnish with fresh basil leaves and serve", "1 min"),
];

/// The guided steps. Shared by every recipe.
pub fn cooking_steps() -> Vec<CookingStep> {
    STEPS
        .iter()
        .enumerate()
        .map(|(i, (text, duration))| CookingStep {
            id: (i + 1).to_string(),
            number: i as u32 + 1,
            text: text.to_string(),
            duration: Some(duration.to_string()),
        })
        .collect()
}
