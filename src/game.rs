//! Game session state: turn management, placement, and win/draw evaluation
//!
//! A [`Game`] is constructed per session and owned by whatever drives it;
//! two games never share state. All operations are synchronous and leave
//! the game untouched when they fail.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Level, Pos, Stone};
use crate::error::GameError;
use crate::rules;

/// One entry in the move history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub pos: Pos,
    pub stone: Stone,
}

/// Overall game status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game accepts placements
    InProgress,
    /// Terminal: the color completed five in a row
    Won(Stone),
    /// Terminal: board full with no five
    Draw,
}

/// Outcome of a successful placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceResult {
    /// Game continues; the turn passes to the other color
    Continue,
    /// The placed stone completed five in a row for its color
    Win(Stone),
    /// The placed stone filled the board with no five
    Draw,
}

/// A single game session.
///
/// Black always moves first. Placements alternate colors until a
/// placement completes a five-in-a-row (win) or fills the board (draw);
/// after that, only [`Game::undo`] and [`Game::reset`] change the state.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Stone,
    status: GameStatus,
    moves: Vec<Move>,
    winning_line: Option<[Pos; 5]>,
}

impl Game {
    /// Start a game on a preset board size
    pub fn new(level: Level) -> Self {
        Self::from_board(Board::new(level))
    }

    /// Start a game with an explicit board side length.
    ///
    /// Fails with [`GameError::InvalidBoardSize`] when the side length
    /// cannot fit a five-in-a-row or exceeds the supported maximum.
    pub fn with_size(size: usize) -> Result<Self, GameError> {
        Ok(Self::from_board(Board::with_size(size)?))
    }

    fn from_board(board: Board) -> Self {
        let cells = board.total_cells();
        Self {
            board,
            turn: Stone::Black,
            status: GameStatus::InProgress,
            moves: Vec::with_capacity(cells),
            winning_line: None,
        }
    }

    /// Check whether a stone may be placed at `pos`.
    ///
    /// False when the position is out of bounds or occupied. Pure query,
    /// no side effect; does not consider whether the game is over.
    #[inline]
    pub fn can_place(&self, pos: Pos) -> bool {
        self.board.in_bounds(pos) && self.board.is_empty(pos)
    }

    /// Place a stone for the side to move.
    ///
    /// Fails with [`GameError::IllegalMove`] when the game is already
    /// over or [`Game::can_place`] is false; the board, history, and
    /// turn are unchanged on failure.
    pub fn place(&mut self, pos: Pos) -> Result<PlaceResult, GameError> {
        if self.is_over() || !self.can_place(pos) {
            return Err(GameError::IllegalMove {
                row: pos.row,
                col: pos.col,
            });
        }

        let color = self.turn;
        self.board.place_stone(pos, color);
        self.moves.push(Move { pos, stone: color });
        debug!(row = pos.row, col = pos.col, color = ?color, "stone placed");

        if let Some(line) = rules::winning_line(&self.board, pos, color) {
            self.status = GameStatus::Won(color);
            self.winning_line = Some(line);
            debug!(winner = ?color, "five in a row");
            return Ok(PlaceResult::Win(color));
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
            debug!("board full, draw");
            return Ok(PlaceResult::Draw);
        }

        self.turn = color.opponent();
        Ok(PlaceResult::Continue)
    }

    /// Undo the most recent move.
    ///
    /// Restores the turn to the removed stone's color and the status to
    /// in-progress, so a finished game can be stepped back and resumed.
    /// Returns `None` on an empty board.
    pub fn undo(&mut self) -> Option<Move> {
        let last = self.moves.pop()?;
        self.board.remove_stone(last.pos);
        self.turn = last.stone;
        self.status = GameStatus::InProgress;
        self.winning_line = None;
        debug!(row = last.pos.row, col = last.pos.col, "move undone");
        Some(last)
    }

    /// Clear the board for a fresh game on the same size. Black moves
    /// first again.
    pub fn reset(&mut self) {
        self.board.clear();
        self.turn = Stone::Black;
        self.status = GameStatus::InProgress;
        self.moves.clear();
        self.winning_line = None;
        debug!("game reset");
    }

    /// Color whose turn it is next
    #[inline]
    pub fn turn(&self) -> Stone {
        self.turn
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game reached a win or draw
    #[inline]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Moves played so far, in order
    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    /// The five cells of the winning line, once the game is won
    #[inline]
    pub fn winning_line(&self) -> Option<[Pos; 5]> {
        self.winning_line
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Level::Basic)
    }
}
