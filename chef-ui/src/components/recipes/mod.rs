mod recipe_card;
mod view;

pub use recipe_card::RecipeCard;
pub use view::RecipesView;
