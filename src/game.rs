//! The `Game` façade: a board, its lexicon and tile scores, and a saved-game
//! round trip.
//!
//! Grounded on `original_source/scrabbler/scrabbler.py::Game` (`__init__`,
//! `save`, `play`, `find_best_moves`, `show`), with the tile-list/layout/
//! word-list file paths supplied by the caller instead of derived from a
//! `board_type` naming convention, since this crate is a library rather than
//! the original's self-contained script.
use crate::board::{Board, Direction, Layout, Move};
use crate::error::Error;
use crate::letter::Rack;
use crate::lexicon::Lexicon;
use crate::tileset::{Language, TileScores};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::Path;

#[derive(Serialize, Deserialize)]
struct SavedGame {
    board: Board,
}

/// A game in progress: a board plus the lexicon and tile scores it was
/// constructed with. The lexicon is immutable once built, so it's cheap to
/// share across any number of in-flight games.
pub struct Game {
    board: Board,
    lexicon: Lexicon,
    tile_scores: TileScores,
}

impl Game {
    /// Start a new game on an empty board.
    pub fn new(layout: &Layout, lexicon: Lexicon, tile_scores: TileScores) -> Game {
        log::info!("initializing new game...");
        let board = Board::new(layout);
        log::info!("game initialized");
        Game {
            board,
            lexicon,
            tile_scores,
        }
    }

    /// Resume a game previously written by [`Game::save`]. The lexicon and
    /// tile scores aren't part of the saved file (they're loaded once and
    /// reused across games), so the caller supplies them again here.
    /// ## Errors
    /// If `path` cannot be read or does not contain a valid saved game.
    pub fn load<P: AsRef<Path>>(path: P, lexicon: Lexicon, tile_scores: TileScores) -> Result<Game, Error> {
        let path = path.as_ref();
        log::info!("loading saved game from {:?}...", path);
        let file = File::open(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound(path.display().to_string())
            } else {
                Error::ReadError {
                    path: path.display().to_string(),
                    source,
                }
            }
        })?;
        let mut decoder = flate2::read::GzDecoder::new(BufReader::new(file));
        let mut bytes = Vec::new();
        decoder.read_to_end(&mut bytes).map_err(|source| Error::ReadError {
            path: path.display().to_string(),
            source,
        })?;
        let saved: SavedGame = bincode::deserialize(&bytes).map_err(|source| Error::SerializeError {
            path: path.display().to_string(),
            source,
        })?;
        log::info!("game loaded");
        Ok(Game {
            board: saved.board,
            lexicon,
            tile_scores,
        })
    }

    /// Save the current board state to `path` as gzip-compressed bincode.
    /// ## Errors
    /// If `path` cannot be written, or the board cannot be encoded.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        log::info!("saving game to {:?}...", path);
        let saved = SavedGame {
            board: self.board.clone(),
        };
        let file = File::create(path).map_err(|source| Error::ReadError {
            path: path.display().to_string(),
            source,
        })?;
        let encoder = flate2::write::GzEncoder::new(BufWriter::new(file), flate2::Compression::default());
        bincode::serialize_into(encoder, &saved).map_err(|source| Error::SerializeError {
            path: path.display().to_string(),
            source,
        })?;
        log::info!("game saved");
        Ok(())
    }

    /// Play `word` on the board starting at `start`, running `direction`,
    /// and update the cross-sets it affects.
    /// ## Errors
    /// [`Error::IllegalMove`] if the placement is illegal.
    pub fn play(
        &mut self,
        start: (i32, i32),
        word: &str,
        direction: Direction,
        blanks: &[usize],
    ) -> Result<(), Error> {
        self.board.place_word(start, word, direction, blanks)?;
        self.board.update_cross_set(start, direction, &self.lexicon);
        Ok(())
    }

    /// The best legal moves for `rack`, best score first. On an empty
    /// board only the center anchor is considered (the opening-move edge
    /// case); otherwise both directions are scanned.
    pub fn find_best_moves(&self, rack: &Rack) -> Vec<Move> {
        let mut moves = if self.board.is_empty() {
            let center = (self.board.size() as i32 - 1) / 2;
            self.board
                .generate_moves((center, center), Direction::Across, rack, &self.lexicon, &self.tile_scores)
        } else {
            #[cfg(feature = "rayon")]
            let (mut across, down) = rayon::join(
                || self.board.find_best_moves(rack, Direction::Across, &self.lexicon, &self.tile_scores),
                || self.board.find_best_moves(rack, Direction::Down, &self.lexicon, &self.tile_scores),
            );
            #[cfg(not(feature = "rayon"))]
            let (mut across, down) = (
                self.board.find_best_moves(rack, Direction::Across, &self.lexicon, &self.tile_scores),
                self.board.find_best_moves(rack, Direction::Down, &self.lexicon, &self.tile_scores),
            );
            across.extend(down);
            across
        };
        moves.sort_by(|a, b| b.score.cmp(&a.score));
        moves
    }

    /// Render the board as a grid of letters and dots.
    pub fn show(&self) -> String {
        self.board.to_string()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout {
            size: 9,
            double_letter: vec![],
            triple_letter: vec![],
            double_word: vec![],
            triple_word: vec![],
        }
    }

    fn tile_scores() -> TileScores {
        TileScores::new(
            Language::Scrabble,
            &[('C', 3), ('A', 1), ('T', 1), ('S', 1)],
        )
        .unwrap()
    }

    #[test]
    fn test_play_and_show() {
        let lexicon = Lexicon::from_words(&["CAT", "CATS"]).unwrap();
        let mut game = Game::new(&layout(), lexicon, tile_scores());
        let center = (layout().size as i32 - 1) / 2;
        game.play((center, center), "CAT", Direction::Across, &[]).unwrap();
        assert!(game.show().contains("CAT"));
    }

    #[test]
    fn test_save_load_roundtrip() {
        let lexicon = Lexicon::from_words(&["CAT"]).unwrap();
        let mut game = Game::new(&layout(), lexicon, tile_scores());
        let center = (layout().size as i32 - 1) / 2;
        game.play((center, center), "CAT", Direction::Across, &[]).unwrap();

        let path = std::env::temp_dir().join("crossword-gaddag-test-game.bin.gz");
        game.save(&path).unwrap();
        let loaded = Game::load(&path, Lexicon::from_words(&["CAT"]).unwrap(), tile_scores()).unwrap();
        assert_eq!(loaded.show(), game.show());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_find_best_moves_on_empty_board_uses_center_anchor() {
        let lexicon = Lexicon::from_words(&["CAT", "CATS"]).unwrap();
        let game = Game::new(&layout(), lexicon, tile_scores());
        let rack = Rack::parse("CAT").unwrap();
        let moves = game.find_best_moves(&rack);
        assert!(moves.iter().any(|m| m.word == "CAT"));
    }
}
