//! The board: a flat grid of squares, each carrying an optional tile, a
//! premium multiplier, and a pair of cross-sets.
//!
//! Represented as `Vec<Square>` rather than a row-encoded `State`/`Row`
//! (the style used by `lib/src/board.rs`), since each square needs two
//! independently addressable cross-sets (one per perpendicular direction)
//! that a row-at-a-time encoding doesn't expose naturally. Grounded
//! instead on `original_source/scrabbler/scrabbler.py::Board`/`Square`,
//! with `grid.rs`'s JSON-driven layout idea adapted to load premiums from
//! a `BoardLayout` file rather than a baked-in quarter-board literal.
mod cross_set;
mod generate;

pub use generate::Move;

use crate::error::Error;
use crate::letter::{Label, LetterSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// One of the two axes a word can run along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    fn perpendicular(self) -> Direction {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }
}

/// A square's scoring multiplier. Applied once, at the moment a tile is
/// newly placed there (for letter premiums) or once per word that covers
/// it (for word premiums) — never re-applied to tiles already on the
/// board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Premium {
    Plain,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

impl Premium {
    fn letter_multiplier(self) -> u32 {
        match self {
            Premium::DoubleLetter => 2,
            Premium::TripleLetter => 3,
            _ => 1,
        }
    }

    fn word_multiplier(self) -> u32 {
        match self {
            Premium::DoubleWord => 2,
            Premium::TripleWord => 3,
            _ => 1,
        }
    }
}

/// A single coordinate on the board, `(row, col)`, both zero-based.
pub type Coordinate = (i32, i32);

/// One square of the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Square {
    tile: Option<Label>,
    /// Whether the tile at this square, if any, came from a blank. Blanks
    /// always score zero regardless of which letter they represent.
    is_blank: bool,
    premium: Premium,
    /// `cross_set[Direction::Across]` is the set of letters that legally
    /// complete a *down*-running word crossing this square, and vice
    /// versa — named after the direction of the word the set is
    /// maintained *for*, not the direction it constrains.
    cross_set: [LetterSet; 2],
}

impl Square {
    fn new(premium: Premium) -> Square {
        Square {
            tile: None,
            is_blank: false,
            premium,
            cross_set: [LetterSet::full(), LetterSet::full()],
        }
    }

    pub fn tile(&self) -> Option<Label> {
        self.tile
    }

    pub fn is_blank(&self) -> bool {
        self.is_blank
    }

    pub fn premium(&self) -> Premium {
        self.premium
    }

    pub fn cross_set(&self, direction: Direction) -> LetterSet {
        self.cross_set[direction as usize]
    }

    fn set_cross_set(&mut self, direction: Direction, set: LetterSet) {
        self.cross_set[direction as usize] = set;
    }
}

/// The board layout read from a `board.json`-shaped file: size plus the
/// coordinates of each premium square. Mirrors
/// `original_source/scrabbler/scrabbler.py::Board.__init__`'s
/// `special_squares` dict, loaded via `serde_json` the way `grid.rs::Grid::from_str`
/// loads its quarter-board literal.
#[derive(Debug, Clone, Deserialize)]
pub struct Layout {
    pub size: usize,
    #[serde(default)]
    pub double_letter: Vec<(usize, usize)>,
    #[serde(default)]
    pub triple_letter: Vec<(usize, usize)>,
    #[serde(default)]
    pub double_word: Vec<(usize, usize)>,
    #[serde(default)]
    pub triple_word: Vec<(usize, usize)>,
}

impl Layout {
    /// Load a board layout from a JSON file.
    /// ## Errors
    /// If `path` cannot be read or does not contain valid layout JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Layout, Error> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| Error::ReadError {
            path: path.display().to_string(),
            source,
        })?;
        let layout: Layout = serde_json::from_str(&contents)?;
        Ok(layout)
    }
}

/// The 15x15 (or other size) crossword board: a flat array of squares,
/// indexed `row * size + col`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
    empty: bool,
}

impl Board {
    /// Build an empty board from a `Layout`.
    pub fn new(layout: &Layout) -> Board {
        let mut squares = Vec::with_capacity(layout.size * layout.size);
        squares.resize_with(layout.size * layout.size, || Square::new(Premium::Plain));
        let mut board = Board {
            size: layout.size,
            squares,
            empty: true,
        };
        for &(row, col) in &layout.double_letter {
            board.squares[row * layout.size + col].premium = Premium::DoubleLetter;
        }
        for &(row, col) in &layout.triple_letter {
            board.squares[row * layout.size + col].premium = Premium::TripleLetter;
        }
        for &(row, col) in &layout.double_word {
            board.squares[row * layout.size + col].premium = Premium::DoubleWord;
        }
        for &(row, col) in &layout.triple_word {
            board.squares[row * layout.size + col].premium = Premium::TripleWord;
        }
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    fn in_bounds(&self, (row, col): Coordinate) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    fn index(&self, (row, col): Coordinate) -> usize {
        row as usize * self.size + col as usize
    }

    pub fn square(&self, coordinate: Coordinate) -> Option<&Square> {
        if self.in_bounds(coordinate) {
            Some(&self.squares[self.index(coordinate)])
        } else {
            None
        }
    }

    fn square_mut(&mut self, coordinate: Coordinate) -> Option<&mut Square> {
        if self.in_bounds(coordinate) {
            let idx = self.index(coordinate);
            Some(&mut self.squares[idx])
        } else {
            None
        }
    }

    /// Step `step` squares from `coordinate` along `direction`.
    pub fn offset(coordinate: Coordinate, direction: Direction, step: i32) -> Coordinate {
        match direction {
            Direction::Across => (coordinate.0, coordinate.1 + step),
            Direction::Down => (coordinate.0 + step, coordinate.1),
        }
    }

    /// Starting at `coordinate` (inclusive), step along `direction` while
    /// the next square is tiled; return the last in-bounds tiled
    /// coordinate reached. If `coordinate` itself is untiled or out of
    /// bounds, returns `coordinate` unchanged.
    pub fn fast_forward(&self, coordinate: Coordinate, direction: Direction, step: i32) -> Coordinate {
        let mut current = coordinate;
        loop {
            let next = Board::offset(current, direction, step);
            match self.square(next) {
                Some(sq) if sq.tile().is_some() => current = next,
                _ => return current,
            }
        }
    }

    /// Place `word` starting at `start` running along `direction`.
    /// Existing tiles along the path must match the corresponding letter
    /// of `word`; a conflicting tile, an out-of-board placement, or a
    /// non-alphabetic character in `word` is an illegal move. Partial
    /// placement is rolled back entirely before the error is returned.
    /// Tiles marked blank via `blanks` (character positions within
    /// `word`) are recorded with `is_blank = true` and score zero.
    ///
    /// ## Errors
    /// [`Error::IllegalMove`] on any placement conflict.
    pub fn place_word(
        &mut self,
        start: Coordinate,
        word: &str,
        direction: Direction,
        blanks: &[usize],
    ) -> Result<(), Error> {
        let labels: Vec<Label> = word
            .chars()
            .map(crate::letter::label_of)
            .collect::<Result<_, _>>()
            .map_err(|_| Error::illegal_move(format!("\"{}\" is not an uppercase word", word)))?;
        let end = Board::offset(start, direction, labels.len() as i32 - 1);
        if !self.in_bounds(start) || !self.in_bounds(end) {
            return Err(Error::illegal_move(format!(
                "placing \"{}\" at {:?} running {:?} goes out of bounds",
                word, start, direction
            )));
        }

        let mut placed = Vec::new();
        for (i, &label) in labels.iter().enumerate() {
            let coordinate = Board::offset(start, direction, i as i32);
            let is_blank = blanks.contains(&i);
            let square = self.square_mut(coordinate).expect("bounds checked above");
            match square.tile {
                Some(existing) if existing != label => {
                    // Roll back every tile placed so far in this call.
                    for coordinate in placed {
                        self.square_mut(coordinate).unwrap().tile = None;
                    }
                    return Err(Error::illegal_move(format!(
                        "square {:?} holds {} but \"{}\" needs {}",
                        coordinate,
                        crate::letter::char_of(existing),
                        word,
                        crate::letter::char_of(label)
                    )));
                }
                Some(_) => {}
                None => {
                    square.tile = Some(label);
                    square.is_blank = is_blank;
                    placed.push(coordinate);
                }
            }
        }
        self.empty = false;
        log::debug!("placed \"{}\" at {:?} running {:?}", word, start, direction);
        Ok(())
    }

    /// Recompute the cross-set of every empty square adjacent to the word
    /// just placed at `start..end` (along `direction`), for the
    /// perpendicular direction. Must be called once per direction after
    /// every `place_word`.
    pub fn update_cross_set(&mut self, start: Coordinate, direction: Direction, lexicon: &crate::lexicon::Lexicon) {
        cross_set::update_cross_set(self, start, direction, lexicon)
    }

    /// Enumerate anchors along `direction` and generate every legal move
    /// the rack supports.
    pub fn find_best_moves(
        &self,
        rack: &crate::letter::Rack,
        direction: Direction,
        lexicon: &crate::lexicon::Lexicon,
        tile_scores: &crate::tileset::TileScores,
    ) -> Vec<Move> {
        generate::find_best_moves(self, rack, direction, lexicon, tile_scores)
    }

    /// Generate every legal move pivoting on a single anchor square, in
    /// the given direction. Used directly for the empty-board opening
    /// move (the only anchor is the center square), and internally by
    /// `find_best_moves` for every other anchor.
    pub fn generate_moves(
        &self,
        anchor: Coordinate,
        direction: Direction,
        rack: &crate::letter::Rack,
        lexicon: &crate::lexicon::Lexicon,
        tile_scores: &crate::tileset::TileScores,
    ) -> Vec<Move> {
        let mut anchors_used = std::collections::HashSet::new();
        generate::generate_moves(self, anchor, direction, rack, lexicon, tile_scores, &mut anchors_used)
    }

    fn letter_multiplier(&self, coordinate: Coordinate) -> u32 {
        self.square(coordinate).map_or(1, |sq| sq.premium.letter_multiplier())
    }

    fn word_multiplier(&self, coordinate: Coordinate) -> u32 {
        self.square(coordinate).map_or(1, |sq| sq.premium.word_multiplier())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let sq = &self.squares[row * self.size + col];
                match sq.tile {
                    Some(label) => write!(f, "{}", crate::letter::char_of(label))?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_layout() -> Layout {
        Layout {
            size: 5,
            double_letter: vec![(0, 1)],
            triple_letter: vec![],
            double_word: vec![(2, 2)],
            triple_word: vec![],
        }
    }

    #[test]
    fn test_place_word_across() {
        let mut board = Board::new(&small_layout());
        board.place_word((2, 0), "CAT", Direction::Across, &[]).unwrap();
        assert_eq!(board.square((2, 0)).unwrap().tile(), Some(crate::letter::label_of('C').unwrap()));
        assert_eq!(board.square((2, 2)).unwrap().tile(), Some(crate::letter::label_of('T').unwrap()));
        assert!(!board.is_empty());
    }

    #[test]
    fn test_place_word_out_of_bounds_rolls_back() {
        let mut board = Board::new(&small_layout());
        let err = board.place_word((2, 3), "CAT", Direction::Across, &[]);
        assert!(err.is_err());
        for col in 0..5 {
            assert!(board.square((2, col)).unwrap().tile().is_none());
        }
    }

    #[test]
    fn test_place_word_conflicting_tile_rolls_back() {
        let mut board = Board::new(&small_layout());
        board.place_word((0, 0), "CAT", Direction::Across, &[]).unwrap();
        let err = board.place_word((0, 0), "COG", Direction::Across, &[]);
        assert!(err.is_err());
        assert_eq!(board.square((0, 1)).unwrap().tile(), Some(crate::letter::label_of('A').unwrap()));
    }

    #[test]
    fn test_fast_forward() {
        let mut board = Board::new(&small_layout());
        board.place_word((1, 0), "CAT", Direction::Across, &[]).unwrap();
        assert_eq!(board.fast_forward((1, 0), Direction::Across, 1), (1, 2));
        assert_eq!(board.fast_forward((1, 2), Direction::Across, 1), (1, 2));
    }
}
