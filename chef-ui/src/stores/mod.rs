//! Store types for UI state management
//!
//! Shared by chef-mocks and chef-desktop. Each store derives `Store` so
//! views can subscribe to individual fields via lensing.

pub mod app;
pub mod config;

pub use app::*;
pub use config::*;
