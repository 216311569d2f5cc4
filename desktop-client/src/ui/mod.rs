mod controller;
mod game_ui;

pub use controller::GameController;
pub use game_ui::TicTacToeApp;
