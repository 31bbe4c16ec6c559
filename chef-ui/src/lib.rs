//! chef-ui - Stores and view components for InstaChef
//!
//! Views are pure render functions of store snapshots. They report user
//! actions as `FlowEvent`s and never mutate state themselves; the owner of
//! the store (web prototype, mock pages, desktop shell) applies them.

pub mod components;
pub mod stores;
pub mod theme;

pub use components::*;
