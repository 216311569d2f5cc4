mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board};
pub use bot_controller::calculate_random_move;
pub use game_state::TicTacToeGame;
pub use types::{GameStatus, Mark, MoveOutcome, MoveRejection, Position, Scores, WinningLine};
pub use win_detector::{LINES, find_winning_line, is_winner};
