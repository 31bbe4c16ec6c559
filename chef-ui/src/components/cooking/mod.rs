mod step_card;
mod view;

pub use step_card::StepCard;
pub use view::CookingView;
