//! A GADDAG-based crossword move generator: build a lexicon from a word
//! list, place words on a board while it maintains per-square cross-sets,
//! and enumerate every legal, scored placement a rack supports.
//!
//! ```no_run
//! use crossword_gaddag::board::{Direction, Layout};
//! use crossword_gaddag::game::Game;
//! use crossword_gaddag::letter::Rack;
//! use crossword_gaddag::lexicon::Lexicon;
//! use crossword_gaddag::tileset::{Language, TileScores};
//!
//! # fn main() -> Result<(), crossword_gaddag::error::Error> {
//! let layout = Layout::from_file("board.json")?;
//! let lexicon = Lexicon::from_file("words.txt")?;
//! let tile_scores = TileScores::from_file("tile_list.txt", Language::Scrabble)?;
//! let mut game = Game::new(&layout, lexicon, tile_scores);
//!
//! game.play((7, 7), "CAT", Direction::Across, &[])?;
//! let rack = Rack::parse("SNOWED?")?;
//! for mv in game.find_best_moves(&rack).iter().take(5) {
//!     println!("{}", mv.word);
//! }
//! # Ok(())
//! # }
//! ```
pub mod board;
pub mod error;
pub mod game;
pub mod letter;
pub mod lexicon;
pub mod tileset;

pub use board::Move;
pub use error::Error;
pub use game::Game;
