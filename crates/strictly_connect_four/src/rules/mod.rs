//! Game rules for Connect Four.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the engine and its tests can evaluate arbitrary layouts.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Direction, WIN_LENGTH, check_winner, winner_in_direction};
