//! chef-common - Screen flow model for the InstaChef prototype
//!
//! Pure data and transition logic with no UI or I/O. Shared by the Dioxus
//! views in chef-ui and the launchers in chef-mocks and chef-desktop.

pub mod catalog;
pub mod diet_style;
pub mod error;
pub mod flow;
pub mod screen;

pub use catalog::{CookingStep, Ingredient, Recipe};
pub use diet_style::DietStyle;
pub use error::ParseError;
pub use flow::{FlowEvent, FlowState, StepStatus};
pub use screen::Screen;
