//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are separated from
//! board storage so the state machine and the AI share one definition of
//! winning, drawing and legality.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::is_draw;
pub use moves::legal_moves;
pub use win::{WIN_LINES, Win, WinLine, winner};
