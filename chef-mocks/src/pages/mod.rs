//! Route pages

mod mock_index;
mod prototype;

pub use mock_index::{MockIndex, MockScreen};
pub use prototype::Prototype;
