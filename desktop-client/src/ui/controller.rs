use std::time::{Duration, Instant};
use tictactoe_common::games::tictactoe::{
    GameStatus, Mark, MoveOutcome, MoveRejection, Scores, TicTacToeGame,
};
use tictactoe_common::log;

pub const HUMAN_TURN_TEXT: &str = "Player X's Turn";
pub const OPPONENT_TURN_TEXT: &str = "AI's Turn";

pub fn outcome_text(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::XWon => Some("X wins! 🎉"),
        GameStatus::OWon => Some("O wins! 🎉"),
        GameStatus::Draw => Some("It's a tie! 🤝"),
        GameStatus::InProgress => None,
    }
}

pub fn score_text(scores: Scores) -> String {
    format!("X: {}  |  O: {}", scores.x, scores.o)
}

/// Drives one `TicTacToeGame` for the window: forwards clicks, delays the
/// opponent's reply, and remembers which outcome still needs a dialog.
pub struct GameController {
    game: TicTacToeGame,
    opponent_delay: Duration,
    opponent_due: Option<Instant>,
    pending_notice: Option<GameStatus>,
}

impl GameController {
    pub fn new(game: TicTacToeGame, opponent_delay: Duration) -> Self {
        Self {
            game,
            opponent_delay,
            opponent_due: None,
            pending_notice: None,
        }
    }

    pub fn game(&self) -> &TicTacToeGame {
        &self.game
    }

    pub fn click(&mut self, row: usize, col: usize, now: Instant) -> Result<MoveOutcome, MoveRejection> {
        let outcome = self.game.attempt_move(row, col, TicTacToeGame::HUMAN_MARK)?;
        if outcome.ended_game() {
            self.announce(outcome.status);
        } else {
            self.opponent_due = Some(now + self.opponent_delay);
        }
        Ok(outcome)
    }

    /// Runs the opponent once its delay has elapsed. Returns how long the
    /// caller should wait before ticking again, if a move is still pending.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        let due = self.opponent_due?;
        if now < due {
            return Some(due - now);
        }

        self.opponent_due = None;
        match self.game.choose_opponent_move() {
            Ok(outcome) if outcome.ended_game() => {
                self.announce(outcome.status);
            }
            Ok(_) => {}
            Err(rejection) => {
                log!("Opponent move skipped: {}", rejection);
            }
        }
        None
    }

    fn announce(&mut self, status: GameStatus) {
        if let Some(text) = outcome_text(status) {
            log!("{} ({})", text, self.score_text());
        }
        self.pending_notice = Some(status);
    }

    pub fn opponent_wait(&self, now: Instant) -> Option<Duration> {
        self.opponent_due
            .map(|due| due.saturating_duration_since(now))
    }

    pub fn restart(&mut self) {
        self.opponent_due = None;
        self.pending_notice = None;
        self.game.reset();
    }

    pub fn pending_notice(&self) -> Option<GameStatus> {
        self.pending_notice
    }

    pub fn dismiss_notice(&mut self) {
        self.pending_notice = None;
    }

    pub fn is_waiting_for_opponent(&self) -> bool {
        self.opponent_due.is_some()
    }

    pub fn accepts_clicks(&self) -> bool {
        !self.is_waiting_for_opponent()
            && self.game.status() == GameStatus::InProgress
            && self.game.turn() == TicTacToeGame::HUMAN_MARK
    }

    pub fn status_text(&self) -> &'static str {
        if let Some(text) = outcome_text(self.game.status()) {
            return text;
        }
        match self.game.turn() {
            Mark::O => OPPONENT_TURN_TEXT,
            _ => HUMAN_TURN_TEXT,
        }
    }

    pub fn score_text(&self) -> String {
        score_text(self.game.scores())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_controller(delay_ms: u64) -> GameController {
        GameController::new(TicTacToeGame::with_seed(42), Duration::from_millis(delay_ms))
    }

    #[test]
    fn test_opponent_waits_for_delay() {
        let mut controller = create_controller(500);
        let start = Instant::now();
        controller.click(1, 1, start).unwrap();

        assert_eq!(controller.status_text(), OPPONENT_TURN_TEXT);
        assert!(!controller.accepts_clicks());
        assert_eq!(controller.opponent_wait(start), Some(Duration::from_millis(500)));
        assert_eq!(controller.tick(start), Some(Duration::from_millis(500)));
        assert_eq!(controller.game().board().empty_count(), 8);

        assert_eq!(controller.tick(start + Duration::from_millis(500)), None);
        assert_eq!(controller.game().board().empty_count(), 7);
        assert_eq!(controller.opponent_wait(start), None);
        assert_eq!(controller.status_text(), HUMAN_TURN_TEXT);
        assert!(controller.accepts_clicks());
    }

    #[test]
    fn test_click_during_opponent_turn_is_rejected() {
        let mut controller = create_controller(500);
        let start = Instant::now();
        controller.click(0, 0, start).unwrap();
        assert_eq!(controller.click(2, 2, start), Err(MoveRejection::WrongTurn));
    }

    #[test]
    fn test_tick_without_pending_move_does_nothing() {
        let mut controller = create_controller(0);
        assert_eq!(controller.tick(Instant::now()), None);
        assert_eq!(controller.game().board().empty_count(), 9);
    }

    #[test]
    fn test_restart_cancels_pending_opponent_move() {
        let mut controller = create_controller(500);
        let start = Instant::now();
        controller.click(0, 0, start).unwrap();
        controller.restart();
        assert!(!controller.is_waiting_for_opponent());
        assert_eq!(controller.tick(start + Duration::from_secs(1)), None);
        assert_eq!(controller.game().board().empty_count(), 9);
        assert_eq!(controller.status_text(), HUMAN_TURN_TEXT);
    }

    #[test]
    fn test_game_end_raises_notice_until_dismissed() {
        let mut controller = create_controller(0);
        let now = Instant::now();
        while !controller.game().status().is_terminal() {
            let pos = controller.game().board().available_moves()[0];
            controller.click(pos.row, pos.col, now).unwrap();
            controller.tick(now);
        }

        let status = controller.game().status();
        assert_eq!(controller.pending_notice(), Some(status));
        assert_eq!(Some(controller.status_text()), outcome_text(status));
        assert!(!controller.accepts_clicks());

        controller.dismiss_notice();
        assert_eq!(controller.pending_notice(), None);
        assert_eq!(controller.game().status(), status);
    }

    #[test]
    fn test_opponent_win_raises_notice() {
        let mut controller = create_controller(0);
        let now = Instant::now();
        let mut seed = 0;
        while controller.game().status() != GameStatus::OWon {
            controller = GameController::new(TicTacToeGame::with_seed(seed), Duration::ZERO);
            seed += 1;
            // X keeps to the corners so O gets a chance to complete a line
            for (row, col) in [(0, 0), (0, 2), (2, 0), (2, 2), (1, 1)] {
                if !controller.accepts_clicks() {
                    break;
                }
                if controller.click(row, col, now).is_ok() {
                    controller.tick(now);
                }
            }
        }
        assert_eq!(controller.pending_notice(), Some(GameStatus::OWon));
        assert_eq!(controller.status_text(), "O wins! 🎉");
        assert_eq!(controller.score_text(), "X: 0  |  O: 1");
    }

    #[test]
    fn test_texts() {
        assert_eq!(score_text(Scores { x: 2, o: 1 }), "X: 2  |  O: 1");
        assert_eq!(outcome_text(GameStatus::Draw), Some("It's a tie! 🤝"));
        assert_eq!(outcome_text(GameStatus::InProgress), None);
    }
}
