pub mod board;
pub mod capture;
pub mod error;
pub mod game_state;
pub mod notation;
pub mod types;

pub use board::*;
pub use capture::{apply_move, CaptureRule};
pub use error::{GameError, NotationError};
pub use game_state::*;
pub use notation::positions;
pub use types::*;
