//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the game state and the move search share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_LINES, check_winner};
