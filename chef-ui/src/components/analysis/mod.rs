mod diet_style_picker;
mod ingredient_card;
mod view;

pub use diet_style_picker::DietStylePicker;
pub use ingredient_card::IngredientCard;
pub use view::AnalysisView;
