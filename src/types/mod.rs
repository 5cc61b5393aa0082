//! Shared types used throughout the library.

mod direction;
mod side;

pub use direction::{Axis, Direction};
pub(crate) use direction::quarter_turns;
pub use side::Side;
