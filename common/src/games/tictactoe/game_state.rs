use crate::games::SessionRng;
use crate::log;
use super::board::{BOARD_SIZE, Board};
use super::bot_controller::calculate_random_move;
use super::types::{GameStatus, Mark, MoveOutcome, MoveRejection, Position, Scores, WinningLine};
use super::win_detector::find_winning_line;

/// Human (X) versus random opponent (O). Board, turn and status are reset per
/// game; scores live as long as the instance.
#[derive(Debug)]
pub struct TicTacToeGame {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    scores: Scores,
    winning_line: Option<WinningLine>,
    last_move: Option<Position>,
    games_started: u32,
    rng: SessionRng,
}

impl TicTacToeGame {
    pub const HUMAN_MARK: Mark = Mark::X;
    pub const OPPONENT_MARK: Mark = Mark::O;

    pub fn new(rng: SessionRng) -> Self {
        let mut game = Self {
            board: Board::new(),
            current_mark: Self::HUMAN_MARK,
            status: GameStatus::InProgress,
            scores: Scores::default(),
            winning_line: None,
            last_move: None,
            games_started: 0,
            rng,
        };
        game.reset();
        game
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(SessionRng::new(seed))
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_mark = Self::HUMAN_MARK;
        self.status = GameStatus::InProgress;
        self.winning_line = None;
        self.last_move = None;
        self.games_started += 1;
        log!(
            "Game #{} started (X: {} | O: {})",
            self.games_started,
            self.scores.x,
            self.scores.o
        );
    }

    pub fn attempt_move(
        &mut self,
        row: usize,
        col: usize,
        mark: Mark,
    ) -> Result<MoveOutcome, MoveRejection> {
        if self.status.is_terminal() {
            return Err(MoveRejection::GameOver);
        }

        if mark != self.current_mark {
            return Err(MoveRejection::WrongTurn);
        }

        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(MoveRejection::OutOfRange);
        }

        if self.board.get(row, col) != Some(Mark::Empty) {
            return Err(MoveRejection::CellOccupied);
        }

        let position = Position::new(row, col);
        self.board.set(position, mark);
        self.last_move = Some(position);

        self.check_game_over(mark);

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(MoveOutcome {
            position,
            mark,
            status: self.status,
        })
    }

    pub fn choose_opponent_move(&mut self) -> Result<MoveOutcome, MoveRejection> {
        if self.status.is_terminal() {
            return Err(MoveRejection::GameOver);
        }

        if self.current_mark != Self::OPPONENT_MARK {
            return Err(MoveRejection::WrongTurn);
        }

        let position = calculate_random_move(&self.board, &mut self.rng)
            .ok_or(MoveRejection::GameOver)?;
        log!("Opponent picks {} in game #{}", position, self.games_started);
        self.attempt_move(position.row, position.col, Self::OPPONENT_MARK)
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    // Only the mover can have completed a line, and a win beats a full board.
    fn check_game_over(&mut self, mover: Mark) {
        if let Some(line) = find_winning_line(&self.board, mover) {
            self.status = GameStatus::won_by(mover);
            self.scores.record_win(mover);
            self.winning_line = Some(line);
            log!(
                "{} wins game #{} (X: {} | O: {})",
                mover.symbol(),
                self.games_started,
                self.scores.x,
                self.scores.o
            );
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
            log!("Game #{} ended in a draw", self.games_started);
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn rng_seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn is_opponent_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == Self::OPPONENT_MARK
    }

    #[cfg(test)]
    fn play(&mut self, moves: &[(usize, usize)]) -> Vec<Result<MoveOutcome, MoveRejection>> {
        moves
            .iter()
            .map(|&(row, col)| {
                let mark = self.current_mark;
                self.attempt_move(row, col, mark)
            })
            .collect()
    }
}
