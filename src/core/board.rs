//! Board state: one bitboard per mark, plus coordinate helpers.

use ::core::fmt;
use ::core::ops::{Deref, DerefMut};

use crate::core::bitboard::{BitBoard, SetBits};
use crate::core::common::GameError;
use crate::core::config::{validate_board_size, Configuration};

/// Every supported board (up to 10×10) fits into 128 bits.
type BB = BitBoard<u128>;

/// Player symbol occupying a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    X,
    O,
}

impl Mark {
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Empty,
    X,
    O,
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

impl Cell {
    /// The mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }
}

/// Position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Pos {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Square grid of cells. Cell values change only through explicit
/// placement and clearing.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    x: BB,
    o: BB,
}

impl Board {
    /// Create an empty `size×size` board. Sizes outside `3..=10` are
    /// rejected.
    pub fn new(size: usize) -> Result<Self, GameError> {
        validate_board_size(size)?;
        let x = BB::try_new(size)?;
        Ok(Board { x, o: x })
    }

    /// Create an empty board sized for a validated configuration.
    pub fn from_config(config: &Configuration) -> Self {
        let x = BB::new(config.board_size());
        Board { x, o: x }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.x.size()
    }

    /// Cell state at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        if self.x.get(row, col)? {
            Ok(Cell::X)
        } else if self.o.get(row, col)? {
            Ok(Cell::O)
        } else {
            Ok(Cell::Empty)
        }
    }

    /// Mark at `pos`, or `None` when the cell is empty or off the board.
    #[inline]
    pub fn mark_at(&self, pos: Pos) -> Option<Mark> {
        self.get(pos.row, pos.col).ok().and_then(Cell::mark)
    }

    /// Place `mark` at (row, col).
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), GameError> {
        if self.get(row, col)? != Cell::Empty {
            return Err(GameError::CellOccupied { row, col });
        }
        self.stones_mut(mark).set(row, col)?;
        Ok(())
    }

    /// Reset (row, col) to empty. Clearing an empty cell is a no-op.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        self.x.clear(row, col)?;
        self.o.clear(row, col)?;
        Ok(())
    }

    /// True iff no empty cell remains.
    pub fn is_full(&self) -> bool {
        (self.x | self.o).is_full()
    }

    /// True iff no stone has been placed.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() && self.o.is_empty()
    }

    pub fn stone_count(&self) -> usize {
        self.x.count_ones() + self.o.count_ones()
    }

    /// Empty cells in row-major order. Each call starts a fresh pass over a
    /// copy of the current occupancy.
    pub fn empty_cells(&self) -> EmptyCells {
        EmptyCells {
            inner: (!(self.x | self.o)).iter_set_bits(),
        }
    }

    /// Cells holding `mark`, in row-major order.
    pub fn stones(&self, mark: Mark) -> impl Iterator<Item = Pos> {
        let bits = match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        };
        bits.iter_set_bits().map(Pos::from)
    }

    /// The centre cell (`N/2`, `N/2`).
    pub fn center(&self) -> Pos {
        let c = self.size() / 2;
        Pos::new(c, c)
    }

    /// Neighbour of `pos` one step along `(dr, dc)`, if it is on the board.
    #[inline]
    pub fn step(&self, pos: Pos, dr: isize, dc: isize) -> Option<Pos> {
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        if row < self.size() && col < self.size() {
            Some(Pos::new(row, col))
        } else {
            None
        }
    }

    /// Temporarily place `mark` at `pos`; the stone is lifted again when the
    /// returned guard is dropped.
    pub fn probe(&mut self, pos: Pos, mark: Mark) -> Result<Probe<'_>, GameError> {
        self.place(pos.row, pos.col, mark)?;
        Ok(Probe { board: self, pos })
    }

    /// Like [`Board::probe`] for a cell the caller already knows is empty,
    /// e.g. one just produced by [`Board::empty_cells`].
    pub(crate) fn probe_empty(&mut self, pos: Pos, mark: Mark) -> Probe<'_> {
        debug_assert_eq!(self.get(pos.row, pos.col), Ok(Cell::Empty));
        let _ = self.stones_mut(mark).set(pos.row, pos.col);
        Probe { board: self, pos }
    }

    fn stones_mut(&mut self, mark: Mark) -> &mut BB {
        match mark {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{} {{", self.size(), self.size())?;
        write!(f, "{}", self)?;
        writeln!(f, "}}")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size() {
            for c in 0..self.size() {
                let ch = match self.mark_at(Pos::new(r, c)) {
                    Some(Mark::X) => 'X',
                    Some(Mark::O) => 'O',
                    None => '.',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Lazy row-major sequence of empty cells.
#[derive(Clone)]
pub struct EmptyCells {
    inner: SetBits<u128>,
}

impl Iterator for EmptyCells {
    type Item = Pos;

    #[inline]
    fn next(&mut self) -> Option<Pos> {
        self.inner.next().map(Pos::from)
    }
}

/// A speculative placement that is undone on every exit path.
///
/// Dereferences to the board, so a search can keep probing deeper while the
/// guard is alive; at most one stone per guard is ever in flight.
pub struct Probe<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl Probe<'_> {
    /// Cell holding the speculative stone.
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Probe<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        let _ = self.board.clear(self.pos.row, self.pos.col);
    }
}
