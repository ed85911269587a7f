use rand::seq::SliceRandom;
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};
use rocket::*;

use crate::request_error::{RequestError, RequestResult};

pub const BOARD_CELLS: usize = 9;

/// One cell of a board: empty, or taken by one of the players.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '-' => Some(Cell::Empty),
            'X' => Some(Cell::X),
            'O' => Some(Cell::O),
            _ => None,
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// A board parsed from its 9-character wire form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    cells: [Cell; BOARD_CELLS],
}

impl BoardState {
    /// Indices of all cells that are still empty.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Marks one randomly chosen empty cell with an `O` and returns the
    /// resulting board. Exactly one cell differs from `self`; occupied cells
    /// are never touched. Fails when the board has no empty cell left.
    pub fn add_move(&self, rng: &mut impl rand::Rng) -> RequestResult<Self> {
        let free_indices = self.empty_indices();
        let index = free_indices
            .choose(rng)
            .copied()
            .ok_or_else(|| RequestError::BoardFull {
                state: self.to_string(),
            })?;

        let mut next = self.clone();
        next.cells[index] = Cell::O;
        Ok(next)
    }
}

impl std::str::FromStr for BoardState {
    type Err = RequestError;

    fn from_str(state: &str) -> Result<Self, Self::Err> {
        let invalid = || RequestError::InvalidBoard {
            state: state.to_owned(),
        };

        if state.chars().count() != BOARD_CELLS {
            return Err(invalid());
        }

        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (cell, symbol) in cells.iter_mut().zip(state.chars()) {
            *cell = Cell::from_symbol(symbol).ok_or_else(invalid)?;
        }
        Ok(Self { cells })
    }
}

impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.symbol())?;
        }
        Ok(())
    }
}

/// Wire form of a board, used for both requests and responses.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct BoardMessage {
    pub state: String,
}

/// Simulates the computer move: answers the posted board with the same board
/// plus a single `O` placed on a random empty cell. No identity is required.
#[post("/board", format = "json", data = "<board>")]
pub async fn board_get_move(board: Json<BoardMessage>) -> RequestResult<Json<BoardMessage>> {
    let state: BoardState = board.0.state.parse()?;
    let next = state.add_move(&mut rand::thread_rng())?;
    Ok(Json(BoardMessage {
        state: next.to_string(),
    }))
}
