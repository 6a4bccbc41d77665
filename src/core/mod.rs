pub mod board;
pub mod fen;
pub mod types;
pub mod zobrist;

pub use board::*;
pub use fen::START_FEN;
pub use types::*;
pub use zobrist::*;
