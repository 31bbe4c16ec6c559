//! Shared UI components

pub mod analysis;
pub mod app_view;
pub mod button;
pub mod camera;
pub mod chef_app;
pub mod cooking;
pub mod icons;
pub mod profile;
pub mod progress_bar;
pub mod recipes;
pub mod share;

pub use analysis::{AnalysisView, DietStylePicker, IngredientCard};
pub use app_view::ChefAppView;
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use camera::CameraView;
pub use chef_app::ChefApp;
pub use cooking::{CookingView, StepCard};
pub use icons::{
    CameraIcon, CheckIcon, ChevronLeftIcon, ChevronRightIcon, ClockIcon, CrownIcon, DownloadIcon,
    FlameIcon, HistoryIcon, LogInIcon, MinusIcon, MusicIcon, PauseIcon, PlayIcon, PlusIcon,
    SaladIcon, SendIcon, SmartphoneIcon, TimerIcon, TrashIcon, UserIcon, VolumeIcon, XIcon,
};
pub use profile::ProfileView;
pub use progress_bar::ProgressBar;
pub use recipes::{RecipeCard, RecipesView};
pub use share::{SharePanel, ShareTarget, ShareView};
