//! Screen mocks with interactive controls

pub mod framework;
mod screen;
pub mod url_state;

pub use screen::{mock_flow, ScreenMock, screen_presets};
